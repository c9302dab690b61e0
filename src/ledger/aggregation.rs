//! Pure aggregation functions over a ledger snapshot.
//!
//! Everything here is recomputed from scratch on every call. With a ledger of
//! hundreds of transactions the scans are far cheaper than any incremental
//! bookkeeping would be worth.

use std::fmt::{self, Display, Formatter};

use time::{Date, Month};

use crate::ledger::{Ledger, TransactionKind};

/// A calendar year and month, used to restrict aggregates to a single month.
///
/// Monthly filtering matches on year and month only; a transaction dated
/// anywhere in the month counts. Handlers build the key for "now" from the
/// configured timezone, tests construct fixed keys directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthKey {
    /// The calendar year.
    pub year: i32,
    /// The calendar month.
    pub month: Month,
}

impl MonthKey {
    /// The month that `date` falls in.
    pub fn of(date: Date) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Whether `date` falls within this month.
    pub fn contains(self, date: Date) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl Display for MonthKey {
    /// Formats as a sortable "YYYY-MM" string, e.g. "2025-07".
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, u8::from(self.month))
    }
}

/// Sum of amounts over all income transactions.
pub fn total_income(ledger: &Ledger) -> f64 {
    sum_amounts(ledger, TransactionKind::Income)
}

/// Sum of amounts over all expense transactions.
pub fn total_expenses(ledger: &Ledger) -> f64 {
    sum_amounts(ledger, TransactionKind::Expense)
}

/// Total income minus total expenses. May be negative.
pub fn balance(ledger: &Ledger) -> f64 {
    total_income(ledger) - total_expenses(ledger)
}

fn sum_amounts(ledger: &Ledger, kind: TransactionKind) -> f64 {
    ledger
        .transactions()
        .iter()
        .filter(|transaction| transaction.kind == kind)
        .map(|transaction| transaction.amount)
        .sum()
}

/// Income, expenses and net for a single calendar month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlySummary {
    /// Income recorded in the month.
    pub income: f64,
    /// Expenses recorded in the month.
    pub expenses: f64,
    /// Income minus expenses for the month.
    pub net: f64,
}

/// Compute the totals restricted to transactions dated in `month`.
pub fn monthly_summary(ledger: &Ledger, month: MonthKey) -> MonthlySummary {
    let mut income = 0.0;
    let mut expenses = 0.0;

    for transaction in ledger.transactions() {
        if !month.contains(transaction.date) {
            continue;
        }

        match transaction.kind {
            TransactionKind::Income => income += transaction.amount,
            TransactionKind::Expense => expenses += transaction.amount,
        }
    }

    MonthlySummary {
        income,
        expenses,
        net: income - expenses,
    }
}

/// Progress towards the monthly income goal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalProgress {
    /// How much of the goal has been reached, as a percentage capped at 100.
    pub percent: f64,
    /// How much income is still missing, never negative.
    pub remaining: f64,
}

/// Compute progress towards a monthly income goal.
///
/// Returns `None` when `goal` is zero or less, in which case the UI should
/// show its "set a goal" state instead of a percentage.
pub fn goal_progress(monthly_income: f64, goal: f64) -> Option<GoalProgress> {
    if goal <= 0.0 {
        return None;
    }

    Some(GoalProgress {
        percent: (monthly_income / goal * 100.0).min(100.0),
        remaining: (goal - monthly_income).max(0.0),
    })
}

/// The qualitative state of the balance, shown on the dashboard card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceState {
    /// The ledger has no transactions at all.
    Empty,
    /// More income than expenses.
    Positive,
    /// More expenses than income.
    Negative,
    /// Income and expenses cancel out exactly.
    BreakEven,
}

/// Classify the ledger's balance.
///
/// An empty ledger reports [BalanceState::Empty] rather than
/// [BalanceState::BreakEven] so the UI can prompt the user to get started.
pub fn balance_state(ledger: &Ledger) -> BalanceState {
    if ledger.is_empty() {
        return BalanceState::Empty;
    }

    let balance = balance(ledger);

    if balance > 0.0 {
        BalanceState::Positive
    } else if balance < 0.0 {
        BalanceState::Negative
    } else {
        BalanceState::BreakEven
    }
}
