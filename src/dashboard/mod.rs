//! Dashboard module
//!
//! Provides an overview page showing the financial summary cards and the
//! monthly income goal progress.

mod cards;
mod handlers;

pub use handlers::{get_dashboard_page, update_income_goal};
