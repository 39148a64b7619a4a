//! JSON import and export of the transaction array.
//!
//! The payload schema is identical to the persisted `transactions` value:
//! an array of `{id, title, amount, category, timestamp, type}` records.
//! Import only validates that the payload is a non-empty parseable array of
//! that shape; semantically odd but well-formed data (duplicate ids, stale
//! counters) is accepted as-is and handed to `LedgerStore::replace_all`.

use std::{fs, path::Path};

use chrono::NaiveDateTime;

use crate::domain::{Transaction, TransactionRecord};
use crate::errors::{LedgerError, Result};

const EXPORT_STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Parses an import payload, rejecting empty or unparseable input.
pub fn import_from_str(data: &str) -> Result<Vec<TransactionRecord>> {
    if data.trim().is_empty() {
        return Err(LedgerError::ImportFormat("empty import payload".into()));
    }
    serde_json::from_str(data).map_err(|err| LedgerError::ImportFormat(err.to_string()))
}

/// Reads and parses an import file.
pub fn import_from_path(path: &Path) -> Result<Vec<TransactionRecord>> {
    let data = fs::read_to_string(path)?;
    let records = import_from_str(&data)?;
    tracing::info!(count = records.len(), path = %path.display(), "import parsed");
    Ok(records)
}

/// Serializes a snapshot for export.
pub fn export_to_string(transactions: &[Transaction]) -> Result<String> {
    Ok(serde_json::to_string_pretty(transactions)?)
}

/// Writes an export file atomically by staging to a temporary file.
pub fn export_to_path(transactions: &[Transaction], path: &Path) -> Result<()> {
    let json = export_to_string(transactions)?;
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, json)?;
    fs::rename(tmp, path)?;
    Ok(())
}

/// Timestamped export file name, e.g. `transactions_20240315_083000.json`.
pub fn export_file_name(now: NaiveDateTime) -> String {
    format!("transactions_{}.json", now.format(EXPORT_STAMP_FORMAT))
}
