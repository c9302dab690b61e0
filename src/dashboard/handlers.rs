//! Dashboard HTTP handlers and view rendering.
//!
//! This module contains:
//! - The route handler for displaying the dashboard
//! - The endpoint for setting the monthly income goal
//! - The HTML view functions that assemble the page from the card components

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::Response,
};
use axum_extra::extract::Form;
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    AppState, Error, endpoints,
    html::{PAGE_CONTAINER_STYLE, base},
    ledger::{
        Ledger, MonthKey, balance, balance_state, monthly_summary, total_expenses, total_income,
    },
    navigation::NavBar,
    shared_templates::render,
    timezone::current_local_date,
};

use super::cards::{DashboardTotals, goal_section, summary_cards_view};

/// The state needed for displaying the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The shared in-memory ledger.
    pub ledger: Arc<Mutex<Ledger>>,
    /// The monthly income goal. Zero means no goal has been set.
    pub income_goal: Arc<Mutex<f64>>,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
            income_goal: state.income_goal.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Display a page with an overview of the user's finances.
pub async fn get_dashboard_page(State(state): State<DashboardState>) -> Result<Response, Error> {
    let today = current_local_date(&state.local_timezone)?;
    let month = MonthKey::of(today);

    let ledger = state
        .ledger
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire ledger lock: {error}"))
        .map_err(|_| Error::LedgerLockError)?;

    let goal = *state
        .income_goal
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire goal lock: {error}"))
        .map_err(|_| Error::LedgerLockError)?;

    let monthly = monthly_summary(&ledger, month);
    let totals = DashboardTotals {
        balance: balance(&ledger),
        balance_state: balance_state(&ledger),
        total_income: total_income(&ledger),
        total_expenses: total_expenses(&ledger),
        monthly,
        month,
    };

    let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW);

    Ok(render(
        StatusCode::OK,
        dashboard_view(nav_bar, &totals, goal, monthly.income),
    ))
}

/// Form data for setting the monthly income goal.
#[derive(Debug, Deserialize)]
pub struct GoalForm {
    /// The goal amount in dollars. Zero unsets the goal.
    pub goal: f64,
}

/// API endpoint to set the monthly income goal and return the updated goal
/// section.
pub async fn update_income_goal(
    State(state): State<DashboardState>,
    Form(form): Form<GoalForm>,
) -> Response {
    if !form.goal.is_finite() || form.goal < 0.0 {
        return Error::InvalidGoal(form.goal).into_alert_response();
    }

    let today = match current_local_date(&state.local_timezone) {
        Ok(date) => date,
        Err(error) => return error.into_alert_response(),
    };

    match state.income_goal.lock() {
        Ok(mut goal) => *goal = form.goal,
        Err(error) => {
            tracing::error!("could not acquire goal lock: {error}");
            return Error::LedgerLockError.into_alert_response();
        }
    }

    let monthly_income = match state.ledger.lock() {
        Ok(ledger) => monthly_summary(&ledger, MonthKey::of(today)).income,
        Err(error) => {
            tracing::error!("could not acquire ledger lock: {error}");
            return Error::LedgerLockError.into_alert_response();
        }
    };

    tracing::debug!("income goal set to {}", form.goal);

    render(StatusCode::OK, goal_section(form.goal, monthly_income))
}

/// Renders the dashboard page with the summary cards and the goal section.
fn dashboard_view(
    nav_bar: NavBar,
    totals: &DashboardTotals,
    goal: f64,
    monthly_income: f64,
) -> Markup {
    let nav_bar = nav_bar.into_html();

    let content = html!(
        (nav_bar)

        div
            id="dashboard-content"
            class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-screen-xl"
            {
                (summary_cards_view(totals))

                (goal_section(goal, monthly_income))
            }
        }
    );

    base("Dashboard", &content)
}
