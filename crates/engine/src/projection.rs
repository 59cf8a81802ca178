//! The query/projection layer: the filtered, searched, sorted list shown to
//! the user.
//!
//! A projection never mutates the store; it is recomputed from the snapshot
//! on every change to the store, the filter or the search text.

use serde::{Deserialize, Serialize};

use crate::{LedgerError, MonthKey, Transaction, TransactionKind};

/// Kind filter over the transaction list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl TypeFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    fn keeps(self, kind: TransactionKind) -> bool {
        match self {
            Self::All => true,
            Self::Income => kind == TransactionKind::Income,
            Self::Expense => kind == TransactionKind::Expense,
        }
    }
}

impl TryFrom<&str> for TypeFilter {
    type Error = LedgerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "all" => Ok(Self::All),
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(LedgerError::InvalidAmount(format!(
                "invalid type filter: {other}"
            ))),
        }
    }
}

/// Parameters of a projection.
///
/// The default query is the identity: every transaction, newest first.
/// `month` optionally scopes the list to one calendar month (the monthly
/// transactions view).
#[derive(Clone, Debug, Default)]
pub struct ProjectionQuery {
    pub filter: TypeFilter,
    pub search: String,
    pub month: Option<MonthKey>,
}

/// Filters, searches and sorts a snapshot.
///
/// The search is a case-insensitive substring match against the description
/// or the category's display name; empty search text matches everything.
/// The result is sorted by date descending with a stable sort, so entries
/// sharing a date keep their insertion order between recomputations.
pub fn project(transactions: &[Transaction], query: &ProjectionQuery) -> Vec<Transaction> {
    let needle = query.search.to_lowercase();

    let mut rows: Vec<Transaction> = transactions
        .iter()
        .filter(|tx| query.filter.keeps(tx.kind))
        .filter(|tx| query.month.is_none_or(|month| month.matches(tx.date)))
        .filter(|tx| {
            needle.is_empty()
                || tx.description.to_lowercase().contains(&needle)
                || tx.category.name().to_lowercase().contains(&needle)
        })
        .cloned()
        .collect();

    rows.sort_by(|a, b| b.date.cmp(&a.date));
    rows
}
