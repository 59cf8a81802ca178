//! The aggregation engine: pure derivations over a transaction snapshot.
//!
//! Every function here takes the current snapshot (plus a month key where a
//! scope is needed) and returns a plain [`api_types::stats`] record. Nothing
//! is cached and nothing is mutated; callers recompute on every change,
//! which is cheap at personal-ledger scale and keeps correctness trivially
//! re-derivable.
//!
//! Numeric policy: sums are exact integer minor units ([`Money`]); the only
//! rounding step is the daily average, which rounds **half up**. Rates are
//! `f64` percentages with an explicit `0` when there is no income, and the
//! heatmap/trend maxima are floored at 1 so consumers can normalize without
//! a zero check.

use std::collections::BTreeMap;

use api_types::stats::{
    CategoryTotal, DailySpend, HeatmapDay, MonthRollup, Totals, TrendMonth, TrendSeries,
};
use chrono::{Datelike, NaiveDate};

use crate::{Money, MonthKey, Transaction, TransactionKind};

/// All-time totals over the whole snapshot.
pub fn totals(transactions: &[Transaction]) -> Totals {
    scope_totals(transactions.iter())
}

/// Aggregates for one calendar month: scoped totals, active days, daily
/// average, highest-spend day and the top 5 expense categories.
pub fn month_rollup(transactions: &[Transaction], month: MonthKey) -> MonthRollup {
    let in_month: Vec<&Transaction> = transactions
        .iter()
        .filter(|tx| month.matches(tx.date))
        .collect();
    let totals = scope_totals(in_month.iter().copied());

    let daily = daily_expense_map(transactions, month);
    let active_days = daily.len();
    let daily_average_minor = if totals.expense_minor > 0 && active_days > 0 {
        div_round_half_up(totals.expense_minor, active_days as i64)
    } else {
        0
    };

    // BTreeMap iterates dates ascending and the comparison is strict, so the
    // earliest date wins ties.
    let highest_spend_day = daily
        .iter()
        .fold(None::<DailySpend>, |best, (&date, &amount)| match best {
            Some(prev) if amount.minor() <= prev.amount_minor => Some(prev),
            _ => Some(DailySpend {
                date,
                amount_minor: amount.minor(),
            }),
        });

    let mut top_categories = expense_by_category(in_month.iter().copied());
    top_categories.truncate(5);

    MonthRollup {
        year: month.year(),
        month: month.month(),
        totals,
        active_days,
        daily_average_minor,
        highest_spend_day,
        top_categories,
    }
}

/// Income/expense sums for the 6 calendar months ending at `reference`,
/// oldest first, plus the largest single bar for normalization.
pub fn trend(transactions: &[Transaction], reference: MonthKey) -> TrendSeries {
    let months: Vec<TrendMonth> = (0..6u32)
        .rev()
        .map(|back| {
            let key = reference.months_back(back);
            let (income, expense) = transactions
                .iter()
                .filter(|tx| key.matches(tx.date))
                .fold((Money::ZERO, Money::ZERO), |(inc, exp), tx| match tx.kind {
                    TransactionKind::Income => (inc + tx.amount, exp),
                    TransactionKind::Expense => (inc, exp + tx.amount),
                });
            TrendMonth {
                label: key.label().to_string(),
                year: key.year(),
                month: key.month(),
                income_minor: income.minor(),
                expense_minor: expense.minor(),
            }
        })
        .collect();

    let max_bar_minor = months
        .iter()
        .map(|m| m.income_minor.max(m.expense_minor))
        .max()
        .unwrap_or(0)
        .max(1);

    TrendSeries {
        months,
        max_bar_minor,
    }
}

/// All-time top 4 expense categories, descending.
pub fn top_categories(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut groups = expense_by_category(transactions.iter());
    groups.truncate(4);
    groups
}

/// Per-day expense and intensity for one month, one record per calendar day.
///
/// Intensity is `0` for a day without spend, otherwise
/// `0.2 + 0.8 * spend / max_daily_spend`, always within `[0, 1]`.
pub fn heatmap(transactions: &[Transaction], month: MonthKey) -> Vec<HeatmapDay> {
    let daily = daily_expense_map(transactions, month);
    let max_spend = daily
        .values()
        .map(|amount| amount.minor())
        .max()
        .unwrap_or(0)
        .max(1);

    (1..=month.days_in_month())
        .filter_map(|day| month.day(day))
        .map(|date| {
            let spend = daily.get(&date).copied().unwrap_or(Money::ZERO).minor();
            let intensity = if spend > 0 {
                0.2 + 0.8 * (spend as f64 / max_spend as f64)
            } else {
                0.0
            };
            HeatmapDay {
                day: date.day(),
                date,
                spend_minor: spend,
                intensity,
            }
        })
        .collect()
}

fn scope_totals<'a>(transactions: impl Iterator<Item = &'a Transaction>) -> Totals {
    let mut income = Money::ZERO;
    let mut expense = Money::ZERO;
    let mut income_entries = 0;
    let mut expense_entries = 0;

    for tx in transactions {
        match tx.kind {
            TransactionKind::Income => {
                income += tx.amount;
                income_entries += 1;
            }
            TransactionKind::Expense => {
                expense += tx.amount;
                expense_entries += 1;
            }
        }
    }

    let balance = income - expense;
    let percent_of_income = |part: Money| {
        if income.is_positive() {
            part.minor() as f64 / income.minor() as f64 * 100.0
        } else {
            0.0
        }
    };

    Totals {
        income_minor: income.minor(),
        expense_minor: expense.minor(),
        balance_minor: balance.minor(),
        savings_rate: percent_of_income(balance),
        spend_ratio: percent_of_income(expense),
        income_entries,
        expense_entries,
    }
}

/// Expense sums grouped by category tag, sorted descending.
///
/// Grouping keeps first-encounter order and the sort is stable, so equal
/// totals stay in insertion order.
fn expense_by_category<'a>(
    transactions: impl Iterator<Item = &'a Transaction>,
) -> Vec<CategoryTotal> {
    let mut groups: Vec<(&'a crate::Category, Money)> = Vec::new();
    for tx in transactions {
        if tx.kind != TransactionKind::Expense {
            continue;
        }
        match groups.iter_mut().find(|(cat, _)| **cat == tx.category) {
            Some((_, sum)) => *sum += tx.amount,
            None => groups.push((&tx.category, tx.amount)),
        }
    }

    groups.sort_by(|a, b| b.1.cmp(&a.1));
    groups
        .into_iter()
        .map(|(category, sum)| CategoryTotal {
            name: category.name().to_string(),
            icon: category.icon().to_string(),
            amount_minor: sum.minor(),
        })
        .collect()
}

/// Sum of expenses per distinct date within `month`.
fn daily_expense_map(transactions: &[Transaction], month: MonthKey) -> BTreeMap<NaiveDate, Money> {
    let mut map = BTreeMap::new();
    for tx in transactions {
        if tx.kind == TransactionKind::Expense && month.matches(tx.date) {
            *map.entry(tx.date).or_insert(Money::ZERO) += tx.amount;
        }
    }
    map
}

/// Round half up, both operands positive.
fn div_round_half_up(numerator: i64, denominator: i64) -> i64 {
    (numerator + denominator / 2) / denominator
}
