//! Defines the endpoint for creating a new transaction.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::IntoResponse,
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;
use serde::Deserialize;

use crate::{
    AppState, Error, endpoints,
    ledger::{Ledger, TransactionKind},
    timezone::current_local_date,
};

/// The state needed to create a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionState {
    /// The shared in-memory ledger.
    pub ledger: Arc<Mutex<Ledger>>,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for CreateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The form data for creating a transaction.
///
/// The date is not part of the form: new transactions are always stamped
/// with today's date in the configured timezone.
#[derive(Debug, Deserialize)]
pub struct TransactionForm {
    /// Text detailing the transaction.
    pub description: String,
    /// The value of the transaction in dollars, always positive.
    pub amount: f64,
    /// Whether this is income or an expense. Validated server-side so that
    /// unexpected values produce an alert rather than a silent default.
    #[serde(rename = "type")]
    pub kind: String,
    /// The raw category value, stored verbatim.
    pub category: String,
}

/// A route handler for creating a new transaction, redirects to the
/// transactions view on success.
///
/// Validation failures return a `400` alert fragment and leave the ledger
/// untouched.
pub async fn create_transaction_endpoint(
    State(state): State<CreateTransactionState>,
    Form(form): Form<TransactionForm>,
) -> impl IntoResponse {
    let kind = match TransactionKind::parse(&form.kind) {
        Ok(kind) => kind,
        Err(error) => return error.into_alert_response(),
    };

    let today = match current_local_date(&state.local_timezone) {
        Ok(date) => date,
        Err(error) => return error.into_alert_response(),
    };

    let mut ledger = match state.ledger.lock() {
        Ok(ledger) => ledger,
        Err(error) => {
            tracing::error!("could not acquire ledger lock: {error}");
            return Error::LedgerLockError.into_alert_response();
        }
    };

    match ledger.add(&form.description, form.amount, kind, &form.category, today) {
        Ok(transaction) => {
            tracing::debug!(
                "recorded {} transaction {} for {}",
                transaction.kind.as_str(),
                transaction.id,
                transaction.amount
            );
        }
        Err(error) => return error.into_alert_response(),
    }

    (
        HxRedirect(endpoints::TRANSACTIONS_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        body::Body,
        extract::State,
        http::{Response, StatusCode},
        response::IntoResponse,
    };
    use axum_extra::extract::Form;
    use axum_htmx::HX_REDIRECT;

    use crate::ledger::{Ledger, TransactionKind};

    use super::{CreateTransactionState, TransactionForm, create_transaction_endpoint};

    fn get_test_state() -> CreateTransactionState {
        CreateTransactionState {
            ledger: Arc::new(Mutex::new(Ledger::new())),
            local_timezone: "Etc/UTC".to_owned(),
        }
    }

    #[tokio::test]
    async fn can_create_transaction() {
        let state = get_test_state();

        let form = TransactionForm {
            description: "test transaction".to_string(),
            amount: 12.3,
            kind: "expense".to_string(),
            category: "food".to_string(),
        };

        let response = create_transaction_endpoint(State(state.clone()), Form(form))
            .await
            .into_response();

        assert_redirects_to_transactions_view(response);

        let ledger = state.ledger.lock().unwrap();
        assert_eq!(ledger.len(), 1);
        let transaction = &ledger.transactions()[0];
        assert_eq!(transaction.amount, 12.3);
        assert_eq!(transaction.description, "test transaction");
        assert_eq!(transaction.kind, TransactionKind::Expense);
        assert_eq!(transaction.category, "food");
    }

    #[tokio::test]
    async fn rejects_blank_description() {
        let state = get_test_state();

        let form = TransactionForm {
            description: "   ".to_string(),
            amount: 12.3,
            kind: "expense".to_string(),
            category: "food".to_string(),
        };

        let response = create_transaction_endpoint(State(state.clone()), Form(form))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(
            state.ledger.lock().unwrap().is_empty(),
            "failed add should not mutate the ledger"
        );
    }

    #[tokio::test]
    async fn rejects_non_positive_amount() {
        let state = get_test_state();

        let form = TransactionForm {
            description: "test transaction".to_string(),
            amount: -5.0,
            kind: "expense".to_string(),
            category: "food".to_string(),
        };

        let response = create_transaction_endpoint(State(state.clone()), Form(form))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(state.ledger.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn rejects_unknown_transaction_kind() {
        let state = get_test_state();

        let form = TransactionForm {
            description: "test transaction".to_string(),
            amount: 12.3,
            kind: "transfer".to_string(),
            category: "food".to_string(),
        };

        let response = create_transaction_endpoint(State(state.clone()), Form(form))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(state.ledger.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn stores_unrecognized_category_verbatim() {
        let state = get_test_state();

        let form = TransactionForm {
            description: "Vet visit".to_string(),
            amount: 120.0,
            kind: "expense".to_string(),
            category: "pets".to_string(),
        };

        create_transaction_endpoint(State(state.clone()), Form(form))
            .await
            .into_response();

        let ledger = state.ledger.lock().unwrap();
        assert_eq!(ledger.transactions()[0].category, "pets");
    }

    #[test]
    fn form_decodes_the_type_field() {
        let form_data = "description=Coffee&amount=4.50&type=expense&category=food";
        let form: TransactionForm = serde_html_form::from_str(form_data).unwrap();

        assert_eq!(form.description, "Coffee");
        assert_eq!(form.amount, 4.50);
        assert_eq!(form.kind, "expense");
        assert_eq!(form.category, "food");
    }

    #[track_caller]
    fn assert_redirects_to_transactions_view(response: Response<Body>) {
        let location = response
            .headers()
            .get(HX_REDIRECT)
            .expect("expected response to have the header hx-redirect");
        assert_eq!(
            location, "/transactions",
            "got redirect to {location:?}, want redirect to /transactions"
        );
    }
}
