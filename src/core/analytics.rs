//! Pure aggregate computations over a ledger snapshot.
//!
//! Nothing here holds state or touches persistence; every function is a
//! plain fold over the transactions it is handed.

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate};

use crate::currency::Currency;
use crate::domain::{Transaction, TransactionKind};

/// Time windows the spend-frequency chart can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpendWindow {
    Today,
    Week,
    Month,
    Year,
}

/// One bucket of the expense series. Offsets run oldest-first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub offset: u32,
    pub amount: f64,
}

/// One category's share of a type's total.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: String,
    pub amount: f64,
    pub percentage: f64,
    pub currency: Currency,
}

/// Total income minus total expenses.
pub fn balance(transactions: &[Transaction]) -> f64 {
    let (income, expense) = income_expense_totals(transactions);
    income - expense
}

/// The (income, expense) sums behind the balance headline.
pub fn income_expense_totals(transactions: &[Transaction]) -> (f64, f64) {
    let mut income = 0.0;
    let mut expense = 0.0;
    for txn in transactions {
        match txn.kind {
            TransactionKind::Income => income += txn.amount,
            TransactionKind::Expense => expense += txn.amount,
        }
    }
    (income, expense)
}

/// Per-category sums for one transaction type, sorted by descending amount.
///
/// Grouping is by the stored category label, in first-seen order, which
/// keeps the descending sort stable and deterministic for identical input
/// ordering. Percentages are of the type's total and all zero when that
/// total is zero.
pub fn category_breakdown(
    transactions: &[Transaction],
    kind: TransactionKind,
    currency: Currency,
) -> Vec<CategoryShare> {
    let mut groups: Vec<(String, f64)> = Vec::new();
    let mut total = 0.0;
    for txn in transactions.iter().filter(|txn| txn.kind == kind) {
        total += txn.amount;
        match groups.iter_mut().find(|(label, _)| *label == txn.category) {
            Some((_, amount)) => *amount += txn.amount,
            None => groups.push((txn.category.clone(), txn.amount)),
        }
    }

    let mut shares: Vec<CategoryShare> = groups
        .into_iter()
        .map(|(category, amount)| {
            let percentage = if total > 0.0 {
                amount / total * 100.0
            } else {
                0.0
            };
            CategoryShare {
                category,
                amount,
                percentage,
                currency,
            }
        })
        .collect();
    shares.sort_by(|a, b| b.amount.partial_cmp(&a.amount).unwrap_or(Ordering::Equal));
    shares
}

/// Expense totals bucketed by calendar unit, anchored at `today`.
///
/// Records whose date does not parse are skipped. Only a lower date bound is
/// applied; bucket keys decide the rest:
/// - `Week` buckets by day-of-year number over the trailing 7 days.
/// - `Month` buckets by day-of-month number over the trailing 30 days, so
///   two dates sharing a day-of-month inside the window land in one bucket.
/// - `Year` buckets by (year, month) over the trailing 12 months.
/// - `Today` returns two identical points; the chart draws them as a flat
///   line across its minimum visible range.
pub fn expense_series(
    transactions: &[Transaction],
    window: SpendWindow,
    today: NaiveDate,
) -> Vec<SeriesPoint> {
    match window {
        SpendWindow::Today => today_series(transactions, today),
        SpendWindow::Week => daily_series(transactions, today, 7, |date| date.ordinal()),
        SpendWindow::Month => daily_series(transactions, today, 30, |date| date.day()),
        SpendWindow::Year => monthly_series(transactions, today),
    }
}

fn expenses(transactions: &[Transaction]) -> impl Iterator<Item = &Transaction> {
    transactions
        .iter()
        .filter(|txn| txn.kind == TransactionKind::Expense)
}

fn today_series(transactions: &[Transaction], today: NaiveDate) -> Vec<SeriesPoint> {
    let key = today.format("%Y-%m-%d").to_string();
    let amount = expenses(transactions)
        .filter(|txn| txn.date_str() == key)
        .map(|txn| txn.amount)
        .sum();
    vec![
        SeriesPoint { offset: 0, amount },
        SeriesPoint { offset: 6, amount },
    ]
}

fn daily_series(
    transactions: &[Transaction],
    today: NaiveDate,
    points: u32,
    key: impl Fn(NaiveDate) -> u32,
) -> Vec<SeriesPoint> {
    let start = today - Duration::days(points as i64 - 1);
    let mut buckets: HashMap<u32, f64> = HashMap::new();
    for txn in expenses(transactions) {
        if let Some(date) = txn.date() {
            if date >= start {
                *buckets.entry(key(date)).or_insert(0.0) += txn.amount;
            }
        }
    }

    (0..points)
        .map(|offset| {
            let date = today - Duration::days((points - 1 - offset) as i64);
            SeriesPoint {
                offset,
                amount: buckets.get(&key(date)).copied().unwrap_or(0.0),
            }
        })
        .collect()
}

fn monthly_series(transactions: &[Transaction], today: NaiveDate) -> Vec<SeriesPoint> {
    let start = shift_month(today, -11);
    let mut buckets: HashMap<(i32, u32), f64> = HashMap::new();
    for txn in expenses(transactions) {
        if let Some(date) = txn.date() {
            if date >= start {
                *buckets.entry((date.year(), date.month())).or_insert(0.0) += txn.amount;
            }
        }
    }

    (0..12)
        .map(|offset| {
            let month = shift_month(today, offset as i32 - 11);
            SeriesPoint {
                offset,
                amount: buckets
                    .get(&(month.year(), month.month()))
                    .copied()
                    .unwrap_or(0.0),
            }
        })
        .collect()
}

fn shift_month(date: NaiveDate, months: i32) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month() as i32 + months;
    let mut day = date.day();
    while month > 12 {
        month -= 12;
        year += 1;
    }
    while month < 1 {
        month += 12;
        year -= 1;
    }
    day = day.min(days_in_month(year, month as u32));
    NaiveDate::from_ymd_opt(year, month as u32, day).unwrap()
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap());
    let last_current = first_next - Duration::days(1);
    last_current.day()
}
