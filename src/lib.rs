//! [![github]](https://github.com/anthonydickson/tally-rs)&ensp;
//!
//! [github]: https://img.shields.io/badge/github-8da0cb?style=for-the-badge&labelColor=555555&logo=github
//!
//! <br>
//!
//! Tally is a small web app for tracking personal income and expenses.
//!
//! This library provides a REST API that directly serves HTML pages. All
//! state lives in memory for the lifetime of the server process: there is no
//! database, so restarting the server starts from an empty ledger.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod alert;
mod app_state;
mod dashboard;
mod endpoints;
mod html;
mod internal_server_error;
mod ledger;
mod logging;
mod navigation;
mod not_found;
mod routing;
mod shared_templates;
mod timezone;
mod transaction;

pub use app_state::AppState;
pub use logging::logging_middleware;
pub use routing::build_router;

use crate::{
    alert::AlertView,
    internal_server_error::{InternalServerErrorPage, render_internal_server_error},
    not_found::get_404_not_found_response,
    shared_templates::render,
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An empty (or all-whitespace) description was used to create a
    /// transaction.
    #[error("transaction description cannot be empty")]
    EmptyDescription,

    /// The amount used to create a transaction was zero, negative, or not a
    /// number. The stored amount is always positive; the sign comes from the
    /// transaction kind.
    #[error("{0} is not a valid amount, expected a finite number greater than zero")]
    InvalidAmount(f64),

    /// The transaction kind was something other than "income" or "expense".
    ///
    /// Unlike categories, which fall back to "other" for display, the kind
    /// decides the sign of the transaction so it must be valid.
    #[error("\"{0}\" is not a valid transaction kind, expected \"income\" or \"expense\"")]
    InvalidTransactionKind(String),

    /// A negative or non-finite number was used to set the income goal.
    #[error("{0} is not a valid income goal, expected a finite number of zero or more")]
    InvalidGoal(f64),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// Could not acquire the lock on the shared ledger state.
    #[error("could not acquire the ledger lock")]
    LedgerLockError,

    /// The requested resource was not found.
    #[error("the requested resource could not be found")]
    NotFound,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => get_404_not_found_response(),
            Error::InvalidTimezoneError(timezone) => {
                render_internal_server_error(InternalServerErrorPage {
                    description: "Invalid Timezone Settings",
                    fix: &format!(
                        "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to a valid, canonical timezone string"
                    ),
                })
            }
            Error::LedgerLockError => render_internal_server_error(Default::default()),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                render_internal_server_error(Default::default())
            }
        }
    }
}

impl Error {
    fn into_alert_response(self) -> Response {
        match self {
            Error::EmptyDescription => render(
                StatusCode::BAD_REQUEST,
                AlertView::error(
                    "Invalid description",
                    "The description cannot be empty. Describe what the transaction was for.",
                ),
            ),
            Error::InvalidAmount(amount) => render(
                StatusCode::BAD_REQUEST,
                AlertView::error(
                    "Invalid amount",
                    &format!(
                        "{amount} is not a valid amount. Enter a number greater than zero; \
                        pick \"Expense\" instead of entering a negative number."
                    ),
                ),
            ),
            Error::InvalidTransactionKind(kind) => render(
                StatusCode::BAD_REQUEST,
                AlertView::error(
                    "Invalid transaction type",
                    &format!("\"{kind}\" is not a valid transaction type. Choose income or expense."),
                ),
            ),
            Error::InvalidGoal(goal) => render(
                StatusCode::BAD_REQUEST,
                AlertView::error(
                    "Invalid income goal",
                    &format!("{goal} is not a valid goal. Enter zero to unset the goal, or a positive amount."),
                ),
            ),
            Error::InvalidTimezoneError(timezone) => render(
                StatusCode::INTERNAL_SERVER_ERROR,
                AlertView::error(
                    "Invalid Timezone Settings",
                    &format!(
                        "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to a valid, canonical timezone string"
                    ),
                ),
            ),
            _ => render(
                StatusCode::INTERNAL_SERVER_ERROR,
                AlertView::error(
                    "Something went wrong",
                    "An unexpected error occurred, check the server logs for more details.",
                ),
            ),
        }
    }
}
