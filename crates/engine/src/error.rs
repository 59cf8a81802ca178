//! The module contains the errors the ledger can return.
//!
//! Everything here is non-fatal and locally recoverable: a draft is either
//! accepted or rejected with a discriminated reason. Deleting an unknown id
//! is deliberately **not** an error (see [`Ledger::remove`]), and the
//! division-by-zero guards in the aggregation layer yield `0` rather than
//! failing.
//!
//! [`Ledger::remove`]: crate::Ledger::remove
use thiserror::Error;

/// Ledger custom errors.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum LedgerError {
    /// Draft rejected: description blank after trimming, or amount
    /// missing/non-numeric/non-positive.
    #[error("enter a valid description and amount")]
    EmptyDescriptionOrAmount,
    /// Draft rejected: the "Other" category selected without a custom name.
    #[error("custom category name required")]
    MissingCustomCategory,
    /// An amount string failed to parse into [`Money`](crate::Money).
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
}
