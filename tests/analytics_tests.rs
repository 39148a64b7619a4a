use chrono::NaiveDate;
use finance_core::core::analytics::{
    balance, category_breakdown, expense_series, SeriesPoint, SpendWindow,
};
use finance_core::currency::Currency;
use finance_core::domain::{Category, Transaction, TransactionKind};

fn txn(id: u64, amount: f64, category: &str, date: &str, kind: TransactionKind) -> Transaction {
    Transaction {
        id,
        title: format!("txn {id}"),
        amount,
        category: category.into(),
        timestamp: format!("{date} 12:00:00"),
        kind,
    }
}

fn expense(id: u64, amount: f64, date: &str) -> Transaction {
    txn(id, amount, "Food", date, TransactionKind::Expense)
}

#[test]
fn balance_matches_income_minus_expense() {
    let ledger = vec![
        txn(0, 100.0, "Others", "2024-03-01", TransactionKind::Income),
        txn(1, 30.0, "Food", "2024-03-02", TransactionKind::Expense),
        txn(2, 20.0, "Bills", "2024-03-03", TransactionKind::Expense),
    ];
    assert!((balance(&ledger) - 50.0).abs() < f64::EPSILON);
}

#[test]
fn breakdown_percentages_sum_to_one_hundred() {
    let ledger = vec![
        txn(0, 60.0, "Food", "2024-03-01", TransactionKind::Expense),
        txn(1, 30.0, "Transport", "2024-03-02", TransactionKind::Expense),
        txn(2, 10.0, "Food", "2024-03-03", TransactionKind::Expense),
        txn(3, 500.0, "Others", "2024-03-04", TransactionKind::Income),
    ];
    let shares = category_breakdown(&ledger, TransactionKind::Expense, Currency::USD);
    assert_eq!(shares.len(), 2);
    assert_eq!(shares[0].category, "Food");
    assert!((shares[0].amount - 70.0).abs() < f64::EPSILON);
    assert!((shares[0].percentage - 70.0).abs() < 1e-9);
    assert_eq!(shares[1].category, "Transport");

    let total: f64 = shares.iter().map(|share| share.percentage).sum();
    assert!((total - 100.0).abs() < 1e-9);
}

#[test]
fn breakdown_with_no_matching_type_is_empty() {
    let ledger = vec![txn(0, 500.0, "Others", "2024-03-04", TransactionKind::Income)];
    let shares = category_breakdown(&ledger, TransactionKind::Expense, Currency::USD);
    assert!(shares.is_empty());
}

#[test]
fn breakdown_ties_keep_first_seen_order() {
    let ledger = vec![
        txn(0, 25.0, "Bills", "2024-03-01", TransactionKind::Expense),
        txn(1, 25.0, "Shopping", "2024-03-02", TransactionKind::Expense),
    ];
    let shares = category_breakdown(&ledger, TransactionKind::Expense, Currency::EUR);
    assert_eq!(shares[0].category, "Bills");
    assert_eq!(shares[1].category, "Shopping");
}

#[test]
fn breakdown_groups_by_the_stored_label_with_display_fallback() {
    // An imported label outside the fixed set keeps its own group; only the
    // legend lookup collapses it to Others.
    let ledger = vec![
        txn(0, 15.0, "Groceries", "2024-03-01", TransactionKind::Expense),
        txn(1, 5.0, "Others", "2024-03-02", TransactionKind::Expense),
    ];
    let shares = category_breakdown(&ledger, TransactionKind::Expense, Currency::USD);
    assert_eq!(shares.len(), 2);
    assert_eq!(shares[0].category, "Groceries");
    assert_eq!(Category::from_label(&shares[0].category), Category::Others);
}

#[test]
fn week_window_always_has_seven_points() {
    let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    let points = expense_series(&[], SpendWindow::Week, today);
    assert_eq!(points.len(), 7);
    for (index, point) in points.iter().enumerate() {
        assert_eq!(point.offset, index as u32);
        assert_eq!(point.amount, 0.0);
    }
}

#[test]
fn week_window_orders_days_oldest_first() {
    let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    let ledger = vec![
        expense(0, 10.0, "2024-03-15"),
        expense(1, 5.0, "2024-03-14"),
        expense(2, 2.5, "2024-03-09"),
        expense(3, 99.0, "2024-03-08"),
        txn(4, 40.0, "Others", "2024-03-15", TransactionKind::Income),
    ];
    let points = expense_series(&ledger, SpendWindow::Week, today);
    assert_eq!(points[0], SeriesPoint { offset: 0, amount: 2.5 });
    assert_eq!(points[5], SeriesPoint { offset: 5, amount: 5.0 });
    assert_eq!(points[6], SeriesPoint { offset: 6, amount: 10.0 });
    assert_eq!(points[1].amount, 0.0);
}

#[test]
fn month_window_merges_buckets_sharing_a_day_of_month() {
    // Buckets key on the day-of-month number, so 2024-02-15 and 2024-03-15
    // both land in bucket 15 once both sit inside the trailing 30 days.
    // The merged value is the expected output, not an error.
    let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    let ledger = vec![expense(0, 40.0, "2024-02-15"), expense(1, 60.0, "2024-03-15")];
    let points = expense_series(&ledger, SpendWindow::Month, today);
    assert_eq!(points.len(), 30);
    assert_eq!(points[0], SeriesPoint { offset: 0, amount: 100.0 });
    assert_eq!(
        points[29],
        SeriesPoint {
            offset: 29,
            amount: 100.0
        }
    );
    assert!(points[1..29].iter().all(|point| point.amount == 0.0));
}

#[test]
fn month_window_excludes_dates_before_the_trailing_window() {
    let today = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
    // Window starts 2024-02-20; both records predate it.
    let ledger = vec![expense(0, 40.0, "2024-02-15"), expense(1, 60.0, "2024-01-20")];
    let points = expense_series(&ledger, SpendWindow::Month, today);
    assert!(points.iter().all(|point| point.amount == 0.0));
}

#[test]
fn year_window_buckets_by_year_and_month() {
    let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    let ledger = vec![
        expense(0, 100.0, "2023-04-20"),
        expense(1, 25.0, "2024-03-01"),
        expense(2, 999.0, "2023-03-10"),
    ];
    let points = expense_series(&ledger, SpendWindow::Year, today);
    assert_eq!(points.len(), 12);
    assert_eq!(
        points[0],
        SeriesPoint {
            offset: 0,
            amount: 100.0
        }
    );
    assert_eq!(
        points[11],
        SeriesPoint {
            offset: 11,
            amount: 25.0
        }
    );
    assert!(points[1..11].iter().all(|point| point.amount == 0.0));
}

#[test]
fn today_window_is_two_identical_points() {
    let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    let ledger = vec![
        expense(0, 4.5, "2024-03-15"),
        expense(1, 3.0, "2024-03-15"),
        expense(2, 10.0, "2024-03-14"),
    ];
    let points = expense_series(&ledger, SpendWindow::Today, today);
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].amount, 7.5);
    assert_eq!(points[1].amount, 7.5);
    assert_eq!((points[0].offset, points[1].offset), (0, 6));
}
