//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use crate::ledger::Ledger;

/// The state of the REST server.
///
/// The ledger and the income goal live behind mutexes so each request is an
/// atomic read-modify-or-read operation against the shared state. There is no
/// persistence: a fresh `AppState` always starts with an empty ledger and no
/// goal.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The in-memory ledger of recorded transactions.
    pub ledger: Arc<Mutex<Ledger>>,

    /// The monthly income goal in dollars. Zero means no goal has been set.
    pub income_goal: Arc<Mutex<f64>>,

    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl AppState {
    /// Create a new [AppState] with an empty ledger and no income goal.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g.
    /// "Pacific/Auckland". It is used to decide what "today" means when
    /// stamping new transactions and filtering monthly aggregates.
    pub fn new(local_timezone: &str) -> Self {
        Self {
            ledger: Arc::new(Mutex::new(Ledger::new())),
            income_goal: Arc::new(Mutex::new(0.0)),
            local_timezone: local_timezone.to_owned(),
        }
    }
}
