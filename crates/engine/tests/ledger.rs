//! End-to-end exercises of the public API: store mutations followed by
//! aggregation and projection over the resulting snapshot.

use chrono::NaiveDate;

use engine::{
    Category, Ledger, LedgerError, MonthKey, ProjectionQuery, TransactionDraft, TransactionKind,
    TypeFilter, categories_for, project, stats,
};

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

fn seeded_ledger() -> Ledger {
    let mut ledger = Ledger::new();
    let rows = [
        ("Monthly Salary", "90000", TransactionKind::Income, "Salary 💼", date(2024, 5, 1)),
        ("Grocery Run", "4200", TransactionKind::Expense, "Food 🍜", date(2024, 5, 3)),
        ("Netflix + Hotstar", "999", TransactionKind::Expense, "Entertainment 🎬", date(2024, 5, 7)),
        ("Freelance Project", "22000", TransactionKind::Income, "Freelance 💻", date(2024, 4, 28)),
        ("Metro Card Recharge", "500", TransactionKind::Expense, "Transport 🚌", date(2024, 5, 3)),
    ];
    for (description, amount, kind, category, day) in rows {
        ledger
            .add(draft(description, amount, kind, category, day))
            .unwrap();
    }
    ledger
}

#[test]
fn balance_identity_holds_in_every_scope() {
    let ledger = seeded_ledger();

    let all = stats::totals(ledger.transactions());
    assert_eq!(all.balance_minor, all.income_minor - all.expense_minor);

    for month in [MonthKey::new(2024, 4).unwrap(), MonthKey::new(2024, 5).unwrap()] {
        let rollup = stats::month_rollup(ledger.transactions(), month);
        assert_eq!(
            rollup.totals.balance_minor,
            rollup.totals.income_minor - rollup.totals.expense_minor
        );
    }
}

#[test]
fn all_filter_with_empty_search_conserves_contents() {
    let ledger = seeded_ledger();
    let projected = project(ledger.transactions(), &ProjectionQuery::default());

    assert_eq!(projected.len(), ledger.len());
    for tx in ledger.transactions() {
        assert!(projected.contains(tx));
    }
    // reordered only by date descending; the two 2024-05-03 entries keep
    // their insertion order
    let dates: Vec<NaiveDate> = projected.iter().map(|tx| tx.date).collect();
    let mut sorted = dates.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(dates, sorted);
    assert_eq!(projected[1].description, "Grocery Run");
    assert_eq!(projected[2].description, "Metro Card Recharge");
}

#[test]
fn delete_then_recompute_drops_the_entry_everywhere() {
    let mut ledger = seeded_ledger();
    let groceries = ledger.transactions()[1].id;

    assert!(ledger.remove(groceries));
    assert!(!ledger.remove(groceries));

    let may = MonthKey::new(2024, 5).unwrap();
    let rollup = stats::month_rollup(ledger.transactions(), may);
    assert_eq!(rollup.totals.expense_minor, 149_900);
    assert!(rollup.top_categories.iter().all(|c| c.name != "Food"));

    let query = ProjectionQuery {
        search: "grocery".to_string(),
        ..Default::default()
    };
    assert!(project(ledger.transactions(), &query).is_empty());
}

#[test]
fn custom_category_flows_through_to_breakdowns() {
    let mut ledger = Ledger::new();
    let other = categories_for(TransactionKind::Expense)
        .last()
        .cloned()
        .unwrap();

    let mut candidate = TransactionDraft {
        description: "Car insurance".to_string(),
        amount: "1200".to_string(),
        kind: TransactionKind::Expense,
        category: other,
        custom_name: None,
        date: date(2024, 5, 15),
    };
    assert_eq!(
        ledger.add(candidate.clone()).unwrap_err(),
        LedgerError::MissingCustomCategory
    );

    candidate.custom_name = Some("Insurance".to_string());
    ledger.add(candidate).unwrap();

    let top = stats::top_categories(ledger.transactions());
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].name, "Insurance");
    assert_eq!(top[0].amount_minor, 120_000);

    let query = ProjectionQuery {
        filter: TypeFilter::Expense,
        search: "insur".to_string(),
        ..Default::default()
    };
    assert_eq!(project(ledger.transactions(), &query).len(), 1);
}

#[test]
fn heatmap_and_trend_follow_the_store() {
    let ledger = seeded_ledger();
    let may = MonthKey::new(2024, 5).unwrap();

    let days = stats::heatmap(ledger.transactions(), may);
    assert_eq!(days.len(), 31);
    // 4200 + 500 on the 3rd is the month's maximum
    assert_eq!(days[2].spend_minor, 470_000);
    assert!((days[2].intensity - 1.0).abs() < 1e-9);
    assert_eq!(days[0].spend_minor, 0);
    assert_eq!(days[0].intensity, 0.0);

    let series = stats::trend(ledger.transactions(), may);
    assert_eq!(series.months.len(), 6);
    let april = &series.months[4];
    assert_eq!(april.label, "Apr");
    assert_eq!(april.income_minor, 2_200_000);
    assert_eq!(series.max_bar_minor, 9_000_000);
}
