//! Classification helpers: category tags and the fixed per-kind sets.
//!
//! A [`Category`] is a structured pair of display name and icon glyph,
//! replacing the legacy `"Name icon"` string convention that broke down for
//! names containing spaces. [`Category::parse_tag`] keeps the legacy form
//! readable for callers that still produce it.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::transactions::TransactionKind;

/// Icon used for custom categories and for legacy tags without a glyph.
pub const DEFAULT_ICON: &str = "📌";

/// Name of the sentinel category closing every per-kind set.
const OTHER_NAME: &str = "Other";

const INCOME_CATEGORIES: &[(&str, &str)] = &[
    ("Salary", "💼"),
    ("Freelance", "💻"),
    ("Business", "🏪"),
    ("Investment", "📈"),
    ("Gift", "🎁"),
    (OTHER_NAME, "✨"),
];

const EXPENSE_CATEGORIES: &[(&str, &str)] = &[
    ("Food", "🍜"),
    ("Transport", "🚌"),
    ("Shopping", "🛍️"),
    ("Health", "💊"),
    ("Entertainment", "🎬"),
    ("Bills", "⚡"),
    ("Education", "📚"),
    ("Travel", "✈️"),
    (OTHER_NAME, DEFAULT_ICON),
];

/// A category tag: display name plus icon glyph.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    name: String,
    icon: String,
}

impl Category {
    pub fn new(name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
        }
    }

    /// A user-supplied category, paired with the default icon.
    pub fn custom(name: impl Into<String>) -> Self {
        Self::new(name, DEFAULT_ICON)
    }

    /// Parses a legacy `"Name icon"` tag.
    ///
    /// The token after the last space is taken as the icon; a tag without a
    /// separator is all name and gets the default icon.
    pub fn parse_tag(tag: &str) -> Self {
        match tag.trim().rsplit_once(' ') {
            Some((name, icon)) => Self::new(name, icon),
            None => Self::new(tag.trim(), DEFAULT_ICON),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// Returns `true` for the "Other" sentinel, whichever kind it came from.
    #[must_use]
    pub fn is_other(&self) -> bool {
        self.name == OTHER_NAME
    }

    /// The legacy `"Name icon"` form.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} {}", self.name, self.icon)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.icon)
    }
}

/// The fixed category set for a transaction kind.
///
/// Each set is non-empty and ends with the "Other" sentinel.
pub fn categories_for(kind: TransactionKind) -> Vec<Category> {
    let table = match kind {
        TransactionKind::Income => INCOME_CATEGORIES,
        TransactionKind::Expense => EXPENSE_CATEGORIES,
    };
    table
        .iter()
        .map(|&(name, icon)| Category::new(name, icon))
        .collect()
}
