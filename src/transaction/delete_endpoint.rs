//! Defines the endpoint for deleting a single transaction.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::Response,
};

use crate::{
    AppState, Error,
    ledger::{Ledger, TransactionId},
    shared_templates::render,
};

use super::view::transaction_list;

/// The state needed to delete a transaction.
#[derive(Debug, Clone)]
pub struct DeleteTransactionState {
    /// The shared in-memory ledger.
    pub ledger: Arc<Mutex<Ledger>>,
}

impl FromRef<AppState> for DeleteTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
        }
    }
}

/// A route handler for deleting a transaction.
///
/// Responds with the refreshed transaction list so htmx can swap the whole
/// section. Deleting an ID that no longer exists is treated as success: the
/// calling page only offers IDs it has rendered, so a missing ID just means
/// the row is already gone.
pub async fn delete_transaction_endpoint(
    State(state): State<DeleteTransactionState>,
    Path(transaction_id): Path<TransactionId>,
) -> Response {
    let mut ledger = match state.ledger.lock() {
        Ok(ledger) => ledger,
        Err(error) => {
            tracing::error!("could not acquire ledger lock: {error}");
            return Error::LedgerLockError.into_alert_response();
        }
    };

    if ledger.delete(transaction_id) {
        tracing::debug!("deleted transaction {transaction_id}");
    } else {
        tracing::debug!("transaction {transaction_id} was already deleted");
    }

    render(StatusCode::OK, transaction_list(ledger.transactions()))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Path, State},
        http::StatusCode,
    };
    use time::macros::date;

    use crate::ledger::{Ledger, TransactionKind};

    use super::{DeleteTransactionState, delete_transaction_endpoint};

    fn get_test_state() -> DeleteTransactionState {
        let mut ledger = Ledger::new();
        ledger
            .add(
                "Coffee",
                4.5,
                TransactionKind::Expense,
                "food",
                date!(2025 - 07 - 01),
            )
            .unwrap();

        DeleteTransactionState {
            ledger: Arc::new(Mutex::new(ledger)),
        }
    }

    #[tokio::test]
    async fn deletes_transaction() {
        let state = get_test_state();

        let response = delete_transaction_endpoint(State(state.clone()), Path(1)).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(state.ledger.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn deleting_missing_transaction_is_a_silent_noop() {
        let state = get_test_state();

        let response = delete_transaction_endpoint(State(state.clone()), Path(1337)).await;

        assert_eq!(
            response.status(),
            StatusCode::OK,
            "a missing ID should not be an error"
        );
        assert_eq!(state.ledger.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let state = get_test_state();

        delete_transaction_endpoint(State(state.clone()), Path(1)).await;
        let response = delete_transaction_endpoint(State(state.clone()), Path(1)).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(state.ledger.lock().unwrap().is_empty());
    }
}
