//! Transaction data aggregation for the dashboard cards and charts.
//!
//! Provides pure functions that turn a transaction snapshot into summary
//! totals, per-category expense breakdowns and fixed-length daily series.
//! Every function takes the timezone offset as an explicit parameter so that
//! bucketing never depends on the local clock of the machine running it, and
//! each is a pure function of its inputs that is simply re-run whenever the
//! data-fetching collaborator delivers a fresh snapshot.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use time::{Date, Duration, Month, UtcOffset};

use crate::{
    Error, format,
    model::{Transaction, TransactionKind},
    timezone::local_date,
};

/// The scalar summary figures shown on the dashboard cards.
///
/// All sums are over non-negative transaction amounts, signed only by which
/// field they land in.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Totals {
    /// All-time income minus all-time expenses.
    pub balance: f64,
    /// Income in the calendar month of the reference date.
    pub month_income: f64,
    /// Expenses in the calendar month of the reference date.
    pub month_expense: f64,
    /// Expenses on the calendar day of the reference date.
    pub today_spent: f64,
    /// Income on the calendar day of the reference date.
    pub today_income: f64,
    /// Number of transactions on the calendar day of the reference date.
    pub today_transaction_count: usize,
}

/// How many days of history the daily chart series covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartWindow {
    /// The last seven calendar days.
    Week,
    /// The last thirty calendar days.
    Month,
}

impl ChartWindow {
    /// The number of calendar-day buckets in this window.
    pub fn days(self) -> u16 {
        match self {
            ChartWindow::Week => 7,
            ChartWindow::Month => 30,
        }
    }

    /// Parse a window length in days.
    ///
    /// # Errors
    /// Returns [Error::InvalidChartWindow] for anything other than 7 or 30.
    pub fn from_days(days: u16) -> Result<Self, Error> {
        match days {
            7 => Ok(ChartWindow::Week),
            30 => Ok(ChartWindow::Month),
            other => Err(Error::InvalidChartWindow(other)),
        }
    }
}

/// One calendar-day bucket of the daily chart series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyEntry {
    /// The calendar day this bucket covers.
    pub date: Date,
    /// The `dd/MM` axis label for this day.
    pub label: String,
    /// Total income on this day.
    pub income: f64,
    /// Total expenses on this day.
    pub expense: f64,
}

/// Per-category expense totals for the reference month and the month before.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryComparison {
    /// The category label.
    pub category: String,
    /// Expense total in the calendar month of the reference date.
    pub current: f64,
    /// Expense total in the previous calendar month.
    pub previous: f64,
}

/// Computes the dashboard summary figures in a single pass.
///
/// The balance sums every transaction unconditionally; the month and today
/// figures are restricted to transactions whose local calendar month or day
/// matches `reference_date`.
pub fn compute_totals(
    transactions: &[Transaction],
    reference_date: Date,
    offset: UtcOffset,
) -> Totals {
    let mut totals = Totals::default();

    for transaction in transactions {
        let amount = transaction.amount();
        let day = local_date(transaction.date(), offset);

        match transaction.kind() {
            TransactionKind::Income => totals.balance += amount,
            TransactionKind::Expense => totals.balance -= amount,
        }

        if same_month(day, reference_date) {
            match transaction.kind() {
                TransactionKind::Income => totals.month_income += amount,
                TransactionKind::Expense => totals.month_expense += amount,
            }
        }

        if day == reference_date {
            totals.today_transaction_count += 1;
            match transaction.kind() {
                TransactionKind::Income => totals.today_income += amount,
                TransactionKind::Expense => totals.today_spent += amount,
            }
        }
    }

    totals
}

/// Sums expenses per category for the calendar month of `reference_date`.
///
/// Income transactions and other months are ignored. The returned map has no
/// particular iteration order; consumers sort as needed for display.
pub fn compute_category_totals(
    transactions: &[Transaction],
    reference_date: Date,
    offset: UtcOffset,
) -> HashMap<String, f64> {
    let mut totals = HashMap::new();

    for transaction in transactions {
        if transaction.kind() != TransactionKind::Expense {
            continue;
        }

        let day = local_date(transaction.date(), offset);
        if !same_month(day, reference_date) {
            continue;
        }

        *totals
            .entry(transaction.category().to_owned())
            .or_insert(0.0) += transaction.amount();
    }

    totals
}

/// Compares per-category expenses between the reference month and the month
/// before it.
///
/// Covers the union of categories seen in either month, sorted
/// alphabetically; a category absent from one month reports zero there.
pub fn compute_category_comparison(
    transactions: &[Transaction],
    reference_date: Date,
    offset: UtcOffset,
) -> Vec<CategoryComparison> {
    let current = compute_category_totals(transactions, reference_date, offset);

    let (previous_year, previous_month) = previous_month(reference_date);
    let mut previous = HashMap::new();

    for transaction in transactions {
        if transaction.kind() != TransactionKind::Expense {
            continue;
        }

        let day = local_date(transaction.date(), offset);
        if day.year() != previous_year || day.month() != previous_month {
            continue;
        }

        *previous
            .entry(transaction.category().to_owned())
            .or_insert(0.0) += transaction.amount();
    }

    let mut categories: Vec<&String> = current.keys().chain(previous.keys()).collect();
    categories.sort();
    categories.dedup();

    categories
        .into_iter()
        .map(|category| CategoryComparison {
            category: category.clone(),
            current: current.get(category).copied().unwrap_or_default(),
            previous: previous.get(category).copied().unwrap_or_default(),
        })
        .collect()
}

/// Builds the daily income/expense series for the line chart.
///
/// Returns exactly `window.days()` entries, one per calendar day ending at
/// `reference_date` inclusive, oldest first. Bucketing is by exact
/// calendar-date equality in the given timezone, never a rolling 24-hour
/// window: a transaction at 23:59 on a day belongs to that day's bucket
/// regardless of the time of day of the reference date. Days without
/// transactions report zero for both fields, and transactions outside the
/// window are dropped.
pub fn compute_daily_series(
    transactions: &[Transaction],
    reference_date: Date,
    window: ChartWindow,
    offset: UtcOffset,
) -> Vec<DailyEntry> {
    let start = reference_date - Duration::days(i64::from(window.days()) - 1);

    let mut totals_by_day: HashMap<Date, (f64, f64)> = HashMap::new();

    for transaction in transactions {
        let day = local_date(transaction.date(), offset);
        if day < start || day > reference_date {
            continue;
        }

        let entry = totals_by_day.entry(day).or_default();
        match transaction.kind() {
            TransactionKind::Income => entry.0 += transaction.amount(),
            TransactionKind::Expense => entry.1 += transaction.amount(),
        }
    }

    (0..i64::from(window.days()))
        .map(|day_index| {
            let date = start + Duration::days(day_index);
            let (income, expense) = totals_by_day.get(&date).copied().unwrap_or_default();

            DailyEntry {
                date,
                label: format::day_month_label(date),
                income,
                expense,
            }
        })
        .collect()
}

fn same_month(a: Date, b: Date) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

fn previous_month(reference_date: Date) -> (i32, Month) {
    match reference_date.month() {
        Month::January => (reference_date.year() - 1, Month::December),
        month => (reference_date.year(), month.previous()),
    }
}
