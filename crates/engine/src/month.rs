//! Calendar month keys.
//!
//! All month bucketing in the engine goes through [`MonthKey`]: a date
//! belongs to a month iff its zero-padded `"YYYY-MM"` key equals the
//! month's key. Comparing normalized keys instead of doing day arithmetic
//! avoids month-boundary drift.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// One calendar month of one year.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Creates a key for `(year, month)`; `None` unless `month` is 1–12.
    #[must_use]
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// The month a date falls in.
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    #[must_use]
    pub const fn month(self) -> u32 {
        self.month
    }

    /// The zero-padded `"YYYY-MM"` key.
    #[must_use]
    pub fn key(self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    /// The `"YYYY-MM"` key of an arbitrary date.
    #[must_use]
    pub fn date_key(date: NaiveDate) -> String {
        Self::of(date).key()
    }

    /// Whether `date` falls in this month.
    ///
    /// Defined as equality of normalized keys, never day arithmetic.
    #[must_use]
    pub fn matches(self, date: NaiveDate) -> bool {
        Self::date_key(date) == self.key()
    }

    /// First day of the month.
    #[must_use]
    pub fn first_day(self) -> NaiveDate {
        // month is 1..=12 by construction
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// The given day of the month, if it exists.
    #[must_use]
    pub fn day(self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    /// The previous calendar month, crossing year boundaries.
    #[must_use]
    pub fn prev(self) -> Self {
        Self::of(self.first_day() - Months::new(1))
    }

    /// The next calendar month, crossing year boundaries.
    #[must_use]
    pub fn next(self) -> Self {
        Self::of(self.first_day() + Months::new(1))
    }

    /// The month `n` months before this one.
    #[must_use]
    pub fn months_back(self, n: u32) -> Self {
        Self::of(self.first_day() - Months::new(n))
    }

    /// Number of days in the month (28–31, leap-year aware).
    #[must_use]
    pub fn days_in_month(self) -> u32 {
        let first = self.first_day();
        (self.next().first_day() - first).num_days() as u32
    }

    /// Full month name, e.g. `"May"`.
    #[must_use]
    pub fn name(self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }

    /// Abbreviated month name, e.g. `"Jan"`.
    #[must_use]
    pub fn label(self) -> &'static str {
        &self.name()[..3]
    }
}
