//! Defines the endpoint for clearing the whole ledger at once.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::Response,
};

use crate::{AppState, Error, ledger::Ledger, shared_templates::render};

use super::view::transaction_list;

/// The state needed to clear the ledger.
#[derive(Debug, Clone)]
pub struct ClearTransactionsState {
    /// The shared in-memory ledger.
    pub ledger: Arc<Mutex<Ledger>>,
}

impl FromRef<AppState> for ClearTransactionsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
        }
    }
}

/// A route handler that deletes every transaction.
///
/// The operation itself is unconditional and instantaneous; the "are you
/// sure?" prompt is handled client-side by the `hx-confirm` attribute on the
/// clear button. Responds with the refreshed (now empty) transaction list.
pub async fn clear_transactions_endpoint(
    State(state): State<ClearTransactionsState>,
) -> Response {
    let mut ledger = match state.ledger.lock() {
        Ok(ledger) => ledger,
        Err(error) => {
            tracing::error!("could not acquire ledger lock: {error}");
            return Error::LedgerLockError.into_alert_response();
        }
    };

    let count = ledger.len();
    ledger.clear();
    tracing::info!("cleared {count} transactions");

    render(StatusCode::OK, transaction_list(ledger.transactions()))
}
