//! Core ledger engine: an in-memory transaction store plus pure derivations
//! over its snapshot.
//!
//! The [`Ledger`] owns the authoritative, insertion-ordered collection of
//! [`Transaction`]s and exposes exactly two mutations, [`Ledger::add`] and
//! [`Ledger::remove`]. Everything else — totals, month rollups, the
//! six-month trend, category breakdowns, the daily heatmap ([`stats`]) and
//! the filtered/searched/sorted list ([`project`]) — is a pure function of
//! the [`Ledger::transactions`] snapshot, recomputed on demand.
//!
//! Data flows one direction: store → aggregation/projection → presentation.
//! The engine returns plain [`api_types`] records and applies no formatting;
//! rendering, persistence and user input are the embedding application's
//! concern.
//!
//! The core is single-threaded and synchronous. `Ledger` is plain owned
//! data; an embedding that shares one across threads must serialize writers
//! and hand aggregation a consistent snapshot.

pub use categories::{Category, DEFAULT_ICON, categories_for};
pub use error::LedgerError;
pub use money::Money;
pub use month::MonthKey;
pub use projection::{ProjectionQuery, TypeFilter, project};
pub use transactions::{Transaction, TransactionDraft, TransactionId, TransactionKind};

mod categories;
mod error;
mod money;
mod month;
mod projection;
pub mod stats;
mod transactions;

type ResultLedger<T> = Result<T, LedgerError>;

/// The authoritative in-memory transaction store.
///
/// Ordering is insertion order; display ordering is computed separately by
/// [`project`] and never touches the store. Ids are assigned from a
/// monotonic counter and never reused, even after deletion.
#[derive(Debug, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    next_id: u64,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            next_id: 1,
        }
    }

    /// Validates a draft and appends the resulting transaction.
    ///
    /// Rejects with [`LedgerError::EmptyDescriptionOrAmount`] when the
    /// description is blank after trimming or the amount does not parse to a
    /// positive number, and with [`LedgerError::MissingCustomCategory`] when
    /// the "Other" sentinel is selected without a custom name. On rejection
    /// the store is unchanged.
    pub fn add(&mut self, draft: TransactionDraft) -> ResultLedger<&Transaction> {
        let description = draft.description.trim().to_string();
        if description.is_empty() {
            return Err(LedgerError::EmptyDescriptionOrAmount);
        }

        let amount = draft
            .amount
            .parse::<Money>()
            .ok()
            .filter(|amount| amount.is_positive())
            .ok_or(LedgerError::EmptyDescriptionOrAmount)?;

        let category = if draft.category.is_other() {
            match draft.custom_name.as_deref().map(str::trim) {
                Some(name) if !name.is_empty() => Category::custom(name),
                _ => return Err(LedgerError::MissingCustomCategory),
            }
        } else {
            draft.category
        };

        let id = TransactionId::from(self.next_id);
        self.next_id += 1;

        tracing::debug!(%id, kind = draft.kind.as_str(), %amount, "transaction added");
        self.transactions.push(Transaction {
            id,
            description,
            amount,
            kind: draft.kind,
            category,
            date: draft.date,
        });

        Ok(&self.transactions[self.transactions.len() - 1])
    }

    /// Removes the transaction with that id, if present.
    ///
    /// Idempotent: removing an unknown id is a successful no-op that
    /// returns `false`.
    pub fn remove(&mut self, id: TransactionId) -> bool {
        match self.transactions.iter().position(|tx| tx.id == id) {
            Some(index) => {
                self.transactions.remove(index);
                tracing::debug!(%id, "transaction removed");
                true
            }
            None => false,
        }
    }

    /// Insertion-ordered read-only snapshot.
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn draft(
        description: &str,
        amount: &str,
        kind: TransactionKind,
        category: &str,
        date: NaiveDate,
    ) -> TransactionDraft {
        TransactionDraft {
            description: description.to_string(),
            amount: amount.to_string(),
            kind,
            category: Category::parse_tag(category),
            custom_name: None,
            date,
        }
    }

    #[test]
    fn add_assigns_monotonic_ids() {
        let mut ledger = Ledger::new();
        let first = ledger
            .add(draft("Salary", "90000", TransactionKind::Income, "Salary 💼", date(2024, 5, 1)))
            .unwrap()
            .id;
        let second = ledger
            .add(draft("Rent", "15000", TransactionKind::Expense, "Bills ⚡", date(2024, 5, 2)))
            .unwrap()
            .id;

        assert!(first < second);
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn add_trims_description() {
        let mut ledger = Ledger::new();
        let tx = ledger
            .add(draft("  Groceries  ", "42", TransactionKind::Expense, "Food 🍜", date(2024, 5, 3)))
            .unwrap();

        assert_eq!(tx.description, "Groceries");
        assert_eq!(tx.amount, Money::new(4200));
    }

    #[test]
    fn add_rejects_blank_description() {
        let mut ledger = Ledger::new();
        let err = ledger
            .add(draft("   ", "100", TransactionKind::Income, "Salary 💼", date(2024, 5, 1)))
            .unwrap_err();

        assert_eq!(err, LedgerError::EmptyDescriptionOrAmount);
        assert!(ledger.is_empty());
    }

    #[test]
    fn add_rejects_non_positive_amounts() {
        let mut ledger = Ledger::new();
        for amount in ["-5", "0", "0.00", "", "abc"] {
            let err = ledger
                .add(draft("Rent", amount, TransactionKind::Expense, "Bills ⚡", date(2024, 5, 1)))
                .unwrap_err();
            assert_eq!(err, LedgerError::EmptyDescriptionOrAmount);
        }
        assert!(ledger.is_empty());
    }

    #[test]
    fn add_requires_custom_name_for_other() {
        let mut ledger = Ledger::new();
        let mut other = draft("Vet visit", "80", TransactionKind::Expense, "Other 📌", date(2024, 5, 4));

        assert_eq!(
            ledger.add(other.clone()).unwrap_err(),
            LedgerError::MissingCustomCategory
        );
        other.custom_name = Some("   ".to_string());
        assert_eq!(
            ledger.add(other.clone()).unwrap_err(),
            LedgerError::MissingCustomCategory
        );
        assert!(ledger.is_empty());

        other.custom_name = Some("  Pets  ".to_string());
        let tx = ledger.add(other).unwrap();
        assert_eq!(tx.category.name(), "Pets");
        assert_eq!(tx.category.icon(), DEFAULT_ICON);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut ledger = Ledger::new();
        let id = ledger
            .add(draft("Salary", "90000", TransactionKind::Income, "Salary 💼", date(2024, 5, 1)))
            .unwrap()
            .id;

        assert!(ledger.remove(id));
        assert!(!ledger.remove(id));
        assert!(ledger.is_empty());
    }

    #[test]
    fn ids_are_never_reused_after_deletion() {
        let mut ledger = Ledger::new();
        let first = ledger
            .add(draft("One", "10", TransactionKind::Income, "Gift 🎁", date(2024, 5, 1)))
            .unwrap()
            .id;
        ledger.remove(first);
        let second = ledger
            .add(draft("Two", "20", TransactionKind::Income, "Gift 🎁", date(2024, 5, 2)))
            .unwrap()
            .id;

        assert!(second > first);
    }

    #[test]
    fn store_keeps_insertion_order() {
        let mut ledger = Ledger::new();
        ledger
            .add(draft("Later date", "10", TransactionKind::Expense, "Food 🍜", date(2024, 5, 20)))
            .unwrap();
        ledger
            .add(draft("Earlier date", "10", TransactionKind::Expense, "Food 🍜", date(2024, 5, 1)))
            .unwrap();

        let descriptions: Vec<&str> = ledger
            .transactions()
            .iter()
            .map(|tx| tx.description.as_str())
            .collect();
        assert_eq!(descriptions, vec!["Later date", "Earlier date"]);
    }

    #[test]
    fn end_to_end_month_equals_all_time() {
        let mut ledger = Ledger::new();
        ledger
            .add(draft("Salary", "90000", TransactionKind::Income, "Salary 💼", date(2024, 5, 1)))
            .unwrap();
        ledger
            .add(draft("Groceries", "4200", TransactionKind::Expense, "Food 🍜", date(2024, 5, 3)))
            .unwrap();

        let all = stats::totals(ledger.transactions());
        assert_eq!(all.income_minor, 9_000_000);
        assert_eq!(all.expense_minor, 420_000);
        assert_eq!(all.balance_minor, 8_580_000);
        assert!((all.savings_rate - 95.333).abs() < 0.01);

        let may = MonthKey::new(2024, 5).unwrap();
        let rollup = stats::month_rollup(ledger.transactions(), may);
        assert_eq!(rollup.totals, all);

        assert_eq!(rollup.top_categories.len(), 1);
        let top = &rollup.top_categories[0];
        assert_eq!(format!("{} {}", top.name, top.icon), "Food 🍜");
        assert_eq!(top.amount_minor, 420_000);
    }
}
