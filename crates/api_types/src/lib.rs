//! Plain records crossing the boundary between the ledger engine and the
//! presentation layer.
//!
//! Everything here is data: amounts are `i64` **minor units** (no currency
//! symbol, no locale), rates and intensities are raw `f64`, dates are
//! calendar dates. Formatting of any kind is the consumer's job.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod stats {
    use super::*;

    /// Income/expense/balance rollup over a scope (all-time or one month).
    ///
    /// `savings_rate` and `spend_ratio` are percentages in `[0, 100]`-ish
    /// range (`savings_rate` can go negative when overspent); both are `0`
    /// when there is no income.
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    pub struct Totals {
        pub income_minor: i64,
        pub expense_minor: i64,
        pub balance_minor: i64,
        pub savings_rate: f64,
        pub spend_ratio: f64,
        pub income_entries: usize,
        pub expense_entries: usize,
    }

    /// One category's expense total.
    ///
    /// `icon` is the category glyph, passed through untouched.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct CategoryTotal {
        pub name: String,
        pub icon: String,
        pub amount_minor: i64,
    }

    /// A single day's expense sum.
    #[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
    pub struct DailySpend {
        pub date: NaiveDate,
        pub amount_minor: i64,
    }

    /// Aggregates for one calendar month.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct MonthRollup {
        pub year: i32,
        pub month: u32,
        pub totals: Totals,
        /// Distinct dates in the month with at least one expense.
        pub active_days: usize,
        /// Expense total divided by `active_days`, rounded half up.
        /// `0` when the month has no expenses.
        pub daily_average_minor: i64,
        /// Day with the largest expense sum; earliest date wins ties.
        pub highest_spend_day: Option<DailySpend>,
        /// Expense sums by category, descending, at most 5 entries.
        pub top_categories: Vec<CategoryTotal>,
    }

    /// One bar pair of the six-month trend.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct TrendMonth {
        /// Abbreviated month name, e.g. `"May"`.
        pub label: String,
        pub year: i32,
        pub month: u32,
        pub income_minor: i64,
        pub expense_minor: i64,
    }

    /// Six calendar months ending at the reference month, oldest first.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct TrendSeries {
        pub months: Vec<TrendMonth>,
        /// Largest single bar across all months, floored at 1 so the
        /// consumer can normalize without a zero check.
        pub max_bar_minor: i64,
    }

    /// One calendar day of the spending heatmap.
    #[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
    pub struct HeatmapDay {
        pub day: u32,
        pub date: NaiveDate,
        pub spend_minor: i64,
        /// `0.0` for a day without spend, otherwise
        /// `0.2 + 0.8 * spend / max_daily_spend`, so always in `[0, 1]`.
        pub intensity: f64,
    }
}
