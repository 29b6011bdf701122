//! This file defines the type `Transaction`, the core type of the financial
//! part of the dashboard, and the wire record it is parsed from.

use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::Error;

/// The category label assigned to transactions without one.
pub const FALLBACK_CATEGORY: &str = "Outros";

/// Whether a transaction added money to the account or took money out of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    /// Money coming in, e.g. salary.
    Income,
    /// Money going out, e.g. groceries.
    Expense,
}

/// An income or expense, i.e. an event where money was either earned or
/// spent.
///
/// To create a new `Transaction`, use [Transaction::build]. Snapshots fetched
/// from the backend are parsed from [TransactionRecord] via [parse_records].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    id: String,
    description: String,
    amount: f64,
    #[serde(rename = "type")]
    kind: TransactionKind,
    category: String,
    #[serde(with = "time::serde::rfc3339")]
    date: OffsetDateTime,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder::new] for discoverability.
    pub fn build(amount: f64, kind: TransactionKind) -> TransactionBuilder {
        TransactionBuilder::new(amount, kind)
    }

    /// The ID of the transaction.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// A text description of what the transaction was for.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The amount of money earned or spent in this transaction.
    ///
    /// Always non-negative; the sign is carried by [Transaction::kind].
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Whether this transaction is an income or an expense.
    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    /// The user-defined category label, [FALLBACK_CATEGORY] if none was given.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// When the transaction happened.
    pub fn date(&self) -> OffsetDateTime {
        self.date
    }
}

/// Builds a [Transaction] while enforcing the domain invariants.
///
/// The description must be set and non-empty, the amount must not be
/// negative, and an empty category is replaced with [FALLBACK_CATEGORY].
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionBuilder {
    amount: f64,
    kind: TransactionKind,
    description: String,
    category: String,
    date: OffsetDateTime,
}

impl TransactionBuilder {
    /// Create a new transaction builder with the date defaulting to now.
    pub fn new(amount: f64, kind: TransactionKind) -> Self {
        Self {
            amount,
            kind,
            description: String::new(),
            category: String::new(),
            date: OffsetDateTime::now_utc(),
        }
    }

    /// Set the transaction description.
    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_owned();
        self
    }

    /// Set the transaction category.
    pub fn category(mut self, category: &str) -> Self {
        self.category = category.to_owned();
        self
    }

    /// Set when the transaction happened.
    pub fn date(mut self, date: OffsetDateTime) -> Self {
        self.date = date;
        self
    }

    /// Build the transaction, assigning it `id`.
    ///
    /// # Errors
    /// Returns [Error::NegativeAmount] if the amount is negative, or
    /// [Error::EmptyDescription] if no description was set.
    pub fn finalise(self, id: &str) -> Result<Transaction, Error> {
        if self.amount < 0.0 {
            return Err(Error::NegativeAmount(self.amount));
        }

        if self.description.trim().is_empty() {
            return Err(Error::EmptyDescription);
        }

        let category = if self.category.trim().is_empty() {
            FALLBACK_CATEGORY.to_owned()
        } else {
            self.category
        };

        Ok(Transaction {
            id: id.to_owned(),
            description: self.description,
            amount: self.amount,
            kind: self.kind,
            category,
            date: self.date,
        })
    }
}

/// The loosely-typed form in which the backend sends transactions.
///
/// The date arrives as a raw string and the amount may be missing entirely.
/// Use [parse_records] to turn a fetched snapshot into [Transaction]s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// The ID assigned by the backend.
    pub id: String,
    /// A text description of what the transaction was for.
    #[serde(default)]
    pub description: String,
    /// The transaction amount, missing values are treated as zero.
    #[serde(default)]
    pub amount: Option<f64>,
    /// Whether this transaction is an income or an expense.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// The category label, may be missing or empty.
    #[serde(default)]
    pub category: Option<String>,
    /// When the transaction happened, as an RFC 3339 string.
    pub date: String,
}

impl TryFrom<TransactionRecord> for Transaction {
    type Error = Error;

    fn try_from(record: TransactionRecord) -> Result<Self, Self::Error> {
        let date = OffsetDateTime::parse(&record.date, &Rfc3339)
            .map_err(|error| Error::InvalidDateFormat(error.to_string(), record.date.clone()))?;

        let category = match record.category {
            Some(category) if !category.trim().is_empty() => category,
            _ => FALLBACK_CATEGORY.to_owned(),
        };

        Ok(Transaction {
            id: record.id,
            description: record.description,
            amount: record.amount.unwrap_or(0.0),
            kind: record.kind,
            category,
            date,
        })
    }
}

/// Parses a fetched snapshot of [TransactionRecord]s into [Transaction]s.
///
/// Records whose date cannot be parsed are skipped with a warning rather than
/// failing the whole snapshot, so a single malformed row never takes down the
/// dashboard. Skipped records consequently appear in no aggregation bucket.
pub fn parse_records(records: Vec<TransactionRecord>) -> Vec<Transaction> {
    records
        .into_iter()
        .filter_map(|record| {
            let id = record.id.clone();
            Transaction::try_from(record)
                .inspect_err(|error| {
                    tracing::warn!("skipping transaction {id}: {error}");
                })
                .ok()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::{
        FALLBACK_CATEGORY, Transaction, TransactionKind, TransactionRecord, parse_records,
    };
    use crate::Error;

    fn record(id: &str, date: &str) -> TransactionRecord {
        TransactionRecord {
            id: id.to_owned(),
            description: "Mercado da esquina".to_owned(),
            amount: Some(45.0),
            kind: TransactionKind::Expense,
            category: Some("Mercado".to_owned()),
            date: date.to_owned(),
        }
    }

    #[test]
    fn builder_creates_valid_transaction() {
        let transaction = Transaction::build(3000.0, TransactionKind::Income)
            .description("Salário")
            .category("Salário")
            .date(datetime!(2024-11-05 09:00 UTC))
            .finalise("txn-1")
            .unwrap();

        assert_eq!(transaction.amount(), 3000.0);
        assert_eq!(transaction.kind(), TransactionKind::Income);
        assert_eq!(transaction.category(), "Salário");
    }

    #[test]
    fn builder_rejects_negative_amount() {
        let result = Transaction::build(-1.0, TransactionKind::Expense)
            .description("Mercado")
            .finalise("txn-1");

        assert_eq!(result, Err(Error::NegativeAmount(-1.0)));
    }

    #[test]
    fn builder_rejects_empty_description() {
        let result = Transaction::build(10.0, TransactionKind::Expense)
            .description("   ")
            .finalise("txn-1");

        assert_eq!(result, Err(Error::EmptyDescription));
    }

    #[test]
    fn builder_falls_back_to_default_category() {
        let transaction = Transaction::build(10.0, TransactionKind::Expense)
            .description("Padaria")
            .finalise("txn-1")
            .unwrap();

        assert_eq!(transaction.category(), FALLBACK_CATEGORY);
    }

    #[test]
    fn parse_records_parses_rfc3339_dates() {
        let transactions = parse_records(vec![record("txn-1", "2024-11-05T12:30:00-03:00")]);

        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].date(), datetime!(2024-11-05 12:30 -3));
    }

    #[test]
    fn parse_records_skips_unparseable_dates() {
        let records = vec![
            record("txn-1", "2024-11-05T12:30:00Z"),
            record("txn-2", "not a date"),
        ];

        let transactions = parse_records(records);

        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].id(), "txn-1");
    }

    #[test]
    fn parse_records_treats_missing_amount_as_zero() {
        let mut missing_amount = record("txn-1", "2024-11-05T12:30:00Z");
        missing_amount.amount = None;

        let transactions = parse_records(vec![missing_amount]);

        assert_eq!(transactions[0].amount(), 0.0);
    }

    #[test]
    fn transaction_round_trips_through_wire_format() {
        let json = r#"{
            "id": "txn-9",
            "description": "Conta de luz",
            "amount": 120.5,
            "type": "EXPENSE",
            "category": "Contas",
            "date": "2024-11-01T08:00:00Z"
        }"#;

        let transaction: Transaction = serde_json::from_str(json).unwrap();

        assert_eq!(transaction.kind(), TransactionKind::Expense);
        assert_eq!(transaction.amount(), 120.5);
        assert_eq!(transaction.date(), datetime!(2024-11-01 08:00 UTC));
    }
}
