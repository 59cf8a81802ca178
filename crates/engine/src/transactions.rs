//! Transaction primitives.
//!
//! A [`Transaction`] is one recorded income or expense event. There is no
//! update operation: corrections are modeled as delete + re-add by the
//! caller.

use core::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Category, LedgerError, Money};

/// Two-way classification of a transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl TryFrom<&str> for TransactionKind {
    type Error = LedgerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(LedgerError::InvalidAmount(format!(
                "invalid transaction kind: {other}"
            ))),
        }
    }
}

/// Identifier assigned by the store: monotonically increasing, unique across
/// the store's lifetime and never reused after deletion.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(transparent)]
pub struct TransactionId(u64);

impl TransactionId {
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for TransactionId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One recorded income or expense event.
///
/// Invariants, upheld by [`Ledger::add`](crate::Ledger::add):
/// - `description` is non-empty (trimmed before storage)
/// - `amount` is strictly positive
/// - `category` is never empty
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub description: String,
    pub amount: Money,
    pub kind: TransactionKind,
    pub category: Category,
    /// Calendar date, no time-of-day; drives all month/day bucketing.
    pub date: NaiveDate,
}

/// Candidate for the validated "add" operation.
///
/// `amount` is the raw user text; the store parses it with
/// [`Money::from_str`](std::str::FromStr). `custom_name` is consulted only
/// when the selected category is the "Other" sentinel.
#[derive(Clone, Debug)]
pub struct TransactionDraft {
    pub description: String,
    pub amount: String,
    pub kind: TransactionKind,
    pub category: Category,
    pub custom_name: Option<String>,
    pub date: NaiveDate,
}
