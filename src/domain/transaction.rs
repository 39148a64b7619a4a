//! Domain types representing ledger transactions.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::errors::{LedgerError, Result};

/// Combined date+time layout every materialized timestamp uses.
///
/// The format is lexicographically sortable, so string comparison on the
/// date prefix is equivalent to date comparison.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Whether a transaction adds to or subtracts from the balance.
///
/// The amount itself is always a positive magnitude; the sign lives here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        };
        f.write_str(label)
    }
}

/// A recorded income or expense entry.
///
/// Ids are assigned by the ledger store, unique within a ledger, and never
/// reused. The timestamp is kept as a string: records imported from older
/// data can carry values the current format would reject, and analytics is
/// required to skip those silently rather than fail the whole collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: u64,
    pub title: String,
    pub amount: f64,
    pub category: String,
    pub timestamp: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

impl Transaction {
    /// Builds a transaction from a wire record, substituting `default_timestamp`
    /// when the record has none.
    pub fn from_record(record: TransactionRecord, default_timestamp: &str) -> Self {
        Self {
            id: record.id,
            title: record.title,
            amount: record.amount,
            category: record.category,
            timestamp: record
                .timestamp
                .unwrap_or_else(|| default_timestamp.to_string()),
            kind: record.kind,
        }
    }

    /// The date portion of the timestamp, as stored.
    pub fn date_str(&self) -> &str {
        self.timestamp.split(' ').next().unwrap_or("")
    }

    /// The parsed date, or `None` when the stored value does not parse.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date_str(), DATE_FORMAT).ok()
    }
}

/// Wire shape of a transaction as persisted and as accepted on import.
///
/// Identical to [`Transaction`] except that the timestamp may be absent on
/// records written before timestamps existed; loading and importing backfill
/// it exactly once.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionRecord {
    pub id: u64,
    pub title: String,
    pub amount: f64,
    pub category: String,
    pub timestamp: Option<String>,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

/// An id-less draft handed to the ledger store, which assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub title: String,
    pub amount: f64,
    pub category: String,
    pub timestamp: String,
    pub kind: TransactionKind,
}

impl NewTransaction {
    pub fn new(
        title: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        timestamp: impl Into<String>,
        kind: TransactionKind,
    ) -> Self {
        Self {
            title: title.into(),
            amount,
            category: category.into(),
            timestamp: timestamp.into(),
            kind,
        }
    }

    /// Entry-boundary validation: the store itself accepts any draft, so
    /// callers run this before handing one over.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(LedgerError::Validation {
                field: "title",
                reason: "must not be empty".into(),
            });
        }
        if self.amount <= 0.0 {
            return Err(LedgerError::Validation {
                field: "amount",
                reason: format!("must be positive, got {}", self.amount),
            });
        }
        Ok(())
    }

    pub(crate) fn into_transaction(self, id: u64) -> Transaction {
        Transaction {
            id,
            title: self.title,
            amount: self.amount,
            category: self.category,
            timestamp: self.timestamp,
            kind: self.kind,
        }
    }
}

/// Renders a timestamp in the ledger's fixed format.
pub fn format_timestamp(value: NaiveDateTime) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}
