//! Defines the core data model for transactions and the ledger that owns them.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::Error;

/// Alias for the integer type used for transaction IDs.
pub type TransactionId = i64;

/// Whether a transaction brings money in or takes money out.
///
/// The sign of a transaction is carried here, not by the stored amount:
/// amounts are always positive and the kind decides how they count towards
/// the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money earned, e.g. salary or a freelance invoice.
    Income,
    /// Money spent, e.g. groceries or rent.
    Expense,
}

impl TransactionKind {
    /// Parse the value submitted by the transaction form.
    ///
    /// # Errors
    /// Returns [Error::InvalidTransactionKind] for anything other than
    /// "income" or "expense" (case-insensitive). Unlike categories, an
    /// unrecognized kind is a caller error since the balance cannot be
    /// computed without knowing the sign.
    pub fn parse(value: &str) -> Result<Self, Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(Error::InvalidTransactionKind(value.to_owned())),
        }
    }

    /// The lowercase form value for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

/// The fixed set of categories the UI knows how to display.
///
/// A transaction stores the raw category string exactly as it was submitted;
/// this enum only exists for display purposes. Parsing never fails, so a
/// value outside the known set is shown as [Category::Other] while the
/// stored string is preserved untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Groceries and eating out.
    Food,
    /// Fuel, fares and vehicle costs.
    Transport,
    /// Streaming, movies, hobbies.
    Entertainment,
    /// Power, water, internet.
    Utilities,
    /// Regular employment income.
    Salary,
    /// Contract and side-project income.
    Freelance,
    /// Everything else, including unrecognized categories.
    Other,
}

impl Category {
    /// Every category in display order.
    pub const ALL: [Category; 7] = [
        Category::Food,
        Category::Transport,
        Category::Entertainment,
        Category::Utilities,
        Category::Salary,
        Category::Freelance,
        Category::Other,
    ];

    /// Map a raw category string to its display category.
    ///
    /// Unrecognized values fall back to [Category::Other] rather than
    /// failing, since the ledger stores categories verbatim.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "food" => Self::Food,
            "transport" => Self::Transport,
            "entertainment" => Self::Entertainment,
            "utilities" => Self::Utilities,
            "salary" => Self::Salary,
            "freelance" => Self::Freelance,
            _ => Self::Other,
        }
    }

    /// The lowercase form value for this category.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Transport => "transport",
            Self::Entertainment => "entertainment",
            Self::Utilities => "utilities",
            Self::Salary => "salary",
            Self::Freelance => "freelance",
            Self::Other => "other",
        }
    }

    /// The capitalized label shown in the category select and badges.
    pub fn label(self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Entertainment => "Entertainment",
            Self::Utilities => "Utilities",
            Self::Salary => "Salary",
            Self::Freelance => "Freelance",
            Self::Other => "Other",
        }
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// Transactions are created only through [Ledger::add] and are never mutated
/// afterwards; they go away through [Ledger::delete] or [Ledger::clear].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction, unique within its ledger.
    pub id: TransactionId,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The amount of money spent or earned, always greater than zero.
    pub amount: f64,
    /// Whether this transaction is income or an expense.
    pub kind: TransactionKind,
    /// The raw category string as submitted, e.g. "food".
    pub category: String,
    /// The calendar date the transaction was recorded on.
    pub date: Date,
}

/// The in-memory collection of all recorded transactions for the current
/// session.
///
/// Transactions are kept newest-first by insertion order, which is also the
/// display order. The ledger starts empty every session; there is no
/// persistence, so a process restart is equivalent to [Ledger::clear].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    next_id: TransactionId,
}

impl Ledger {
    /// Create an empty ledger. IDs start counting from 1.
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            next_id: 1,
        }
    }

    /// Record a new transaction at the front of the ledger.
    ///
    /// `date` is supplied by the caller: route handlers pass today's date in
    /// the configured timezone, tests pass fixed dates. The category string
    /// is stored verbatim; see [Category] for how unknown values display.
    ///
    /// # Errors
    /// Returns [Error::EmptyDescription] if `description` is empty after
    /// trimming surrounding whitespace, or [Error::InvalidAmount] if `amount`
    /// is not a finite number greater than zero. The ledger is left untouched
    /// in both cases.
    pub fn add(
        &mut self,
        description: &str,
        amount: f64,
        kind: TransactionKind,
        category: &str,
        date: Date,
    ) -> Result<&Transaction, Error> {
        let description = description.trim();

        if description.is_empty() {
            return Err(Error::EmptyDescription);
        }

        if !amount.is_finite() || amount <= 0.0 {
            return Err(Error::InvalidAmount(amount));
        }

        let transaction = Transaction {
            id: self.next_id,
            description: description.to_owned(),
            amount,
            kind,
            category: category.to_owned(),
            date,
        };

        self.next_id += 1;
        self.transactions.insert(0, transaction);

        Ok(&self.transactions[0])
    }

    /// Remove the transaction with the matching ID, if present.
    ///
    /// Returns whether a transaction was removed. A missing ID is a no-op
    /// rather than an error, so repeated deletes with the same ID are safe.
    pub fn delete(&mut self, id: TransactionId) -> bool {
        let count_before = self.transactions.len();
        self.transactions.retain(|transaction| transaction.id != id);

        self.transactions.len() != count_before
    }

    /// Empty the ledger unconditionally.
    ///
    /// Asking the user "are you sure?" is the UI's job, not this function's.
    pub fn clear(&mut self) {
        self.transactions.clear();
    }

    /// The recorded transactions, newest-first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The number of recorded transactions.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether the ledger has no transactions.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
