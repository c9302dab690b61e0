//! Defines the route handler for the page that displays transactions.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::Response,
};

use crate::{
    AppState, Error, endpoints, ledger::Ledger, navigation::NavBar, shared_templates::render,
};

use super::view::transactions_view;

/// The state needed for the transactions page.
#[derive(Debug, Clone)]
pub struct TransactionsPageState {
    /// The shared in-memory ledger.
    pub ledger: Arc<Mutex<Ledger>>,
}

impl FromRef<AppState> for TransactionsPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
        }
    }
}

/// Render the page with the add-transaction form and the transaction list.
pub async fn get_transactions_page(
    State(state): State<TransactionsPageState>,
) -> Result<Response, Error> {
    let ledger = state
        .ledger
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire ledger lock: {error}"))
        .map_err(|_| Error::LedgerLockError)?;

    let nav_bar = NavBar::new(endpoints::TRANSACTIONS_VIEW);

    Ok(render(
        StatusCode::OK,
        transactions_view(nav_bar, ledger.transactions()),
    ))
}

#[cfg(test)]
mod view_tests {
    use std::sync::{Arc, Mutex};

    use axum::{body::Body, extract::State, http::StatusCode, response::Response};
    use scraper::{ElementRef, Html, Selector};
    use time::macros::date;

    use crate::{
        endpoints,
        ledger::{Ledger, TransactionKind},
        transaction::{get_transactions_page, transactions_page::TransactionsPageState},
    };

    #[tokio::test]
    async fn transactions_page_returns_form_and_empty_state() {
        let state = TransactionsPageState {
            ledger: Arc::new(Mutex::new(Ledger::new())),
        };

        let response = get_transactions_page(State(state)).await.unwrap();

        assert_status_ok(&response);
        let document = parse_html(response).await;
        assert_valid_html(&document);
        assert_correct_form(&document);
        assert_empty_state(&document);
    }

    #[tokio::test]
    async fn transactions_page_lists_recorded_transactions() {
        let mut ledger = Ledger::new();
        ledger
            .add(
                "Salary Payment",
                3500.0,
                TransactionKind::Income,
                "salary",
                date!(2025 - 07 - 01),
            )
            .unwrap();
        ledger
            .add(
                "Grocery Store",
                89.50,
                TransactionKind::Expense,
                "food",
                date!(2025 - 07 - 02),
            )
            .unwrap();
        let state = TransactionsPageState {
            ledger: Arc::new(Mutex::new(ledger)),
        };

        let response = get_transactions_page(State(state)).await.unwrap();

        assert_status_ok(&response);
        let document = parse_html(response).await;
        assert_valid_html(&document);
        assert_transaction_rows(&document, 2);
    }

    #[track_caller]
    fn assert_status_ok(response: &Response<Body>) {
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[track_caller]
    fn assert_valid_html(html: &Html) {
        assert!(
            html.errors.is_empty(),
            "Got HTML parsing errors: {:?}",
            html.errors
        );
    }

    #[track_caller]
    fn assert_correct_form(document: &Html) {
        let form_selector = Selector::parse("form").unwrap();
        let forms = document.select(&form_selector).collect::<Vec<_>>();
        assert_eq!(forms.len(), 1, "want 1 form, got {}", forms.len());

        let form = forms.first().unwrap();
        let hx_post = form.value().attr("hx-post");
        assert_eq!(
            hx_post,
            Some(endpoints::TRANSACTIONS_API),
            "want form with attribute hx-post=\"{}\", got {:?}",
            endpoints::TRANSACTIONS_API,
            hx_post
        );

        assert_correct_inputs(form);
        assert_correct_selects(form);
        assert_has_submit_button(form);
    }

    #[track_caller]
    fn assert_correct_inputs(form: &ElementRef) {
        let expected_input_types = vec![("description", "text"), ("amount", "number")];

        for (name, element_type) in expected_input_types {
            let selector_string = format!("input[type={element_type}]");
            let input_selector = Selector::parse(&selector_string).unwrap();
            let inputs = form.select(&input_selector).collect::<Vec<_>>();
            assert_eq!(
                inputs.len(),
                1,
                "want 1 {element_type} input, got {}",
                inputs.len()
            );

            let input = inputs.first().unwrap();

            let input_name = input.value().attr("name");
            assert_eq!(
                input_name,
                Some(name),
                "want {element_type} with name=\"{name}\", got {input_name:?}"
            );

            assert!(
                input.value().attr("required").is_some(),
                "want {name} input to be required"
            );

            if input_name == Some("amount") {
                assert_amount_min_and_step(input);
            }
        }
    }

    #[track_caller]
    fn assert_amount_min_and_step(input: &ElementRef) {
        let min_value = input
            .value()
            .attr("min")
            .expect("amount input should have the attribute 'min'");
        let min_value: f64 = min_value
            .parse()
            .expect("the attribute 'min' for the amount input should be a number");
        assert!(
            min_value > 0.0,
            "the amount for a new transaction should be limited to positive values, but got a minimum of {min_value}"
        );

        let step = input
            .value()
            .attr("step")
            .expect("amount input should have the attribute 'step'");
        let step: f64 = step
            .parse()
            .expect("the attribute 'step' for the amount input should be a float");
        assert_eq!(
            0.01, step,
            "the amount for a new transaction should increment in steps of 0.01, but got {step}"
        );
    }

    #[track_caller]
    fn assert_correct_selects(form: &ElementRef) {
        for (name, option_count) in [("type", 2), ("category", 7)] {
            let selector_string = format!("select[name={name}]");
            let select_selector = Selector::parse(&selector_string).unwrap();
            let selects = form.select(&select_selector).collect::<Vec<_>>();
            assert_eq!(selects.len(), 1, "want 1 {name} select");

            let option_selector = Selector::parse("option").unwrap();
            let options = selects[0].select(&option_selector).collect::<Vec<_>>();
            assert_eq!(
                options.len(),
                option_count,
                "want {option_count} options for {name}, got {}",
                options.len()
            );
        }
    }

    #[track_caller]
    fn assert_has_submit_button(form: &ElementRef) {
        let button_selector = Selector::parse("button[type=submit]").unwrap();
        let buttons = form.select(&button_selector).collect::<Vec<_>>();
        assert_eq!(
            buttons.len(),
            1,
            "want 1 submit button, got {}",
            buttons.len()
        );
    }

    #[track_caller]
    fn assert_empty_state(document: &Html) {
        let list_selector = Selector::parse("#transactions-list").unwrap();
        let list = document
            .select(&list_selector)
            .next()
            .expect("transactions list section should exist");

        assert!(
            list.text().any(|text| text.contains("No transactions yet")),
            "empty ledger should show the empty state"
        );
    }

    #[track_caller]
    fn assert_transaction_rows(document: &Html, expected_count: usize) {
        let row_selector = Selector::parse("li.transaction-item").unwrap();
        let rows = document.select(&row_selector).collect::<Vec<_>>();
        assert_eq!(
            rows.len(),
            expected_count,
            "want {expected_count} transaction rows, got {}",
            rows.len()
        );
    }

    async fn parse_html(response: Response) -> Html {
        let body = response.into_body();
        let body = axum::body::to_bytes(body, usize::MAX)
            .await
            .expect("Could not get response body");
        let text = String::from_utf8_lossy(&body).to_string();

        Html::parse_document(&text)
    }
}
