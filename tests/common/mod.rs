use std::sync::Mutex;

use chrono::{NaiveDate, NaiveDateTime};
use finance_core::domain::{NewTransaction, TransactionKind};
use finance_core::errors::{LedgerError, Result};
use finance_core::storage::{JsonStorage, KeyValueBackend};
use finance_core::time::Clock;
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a file-backed key-value store rooted in a unique directory.
///
/// The returned storage is `Clone`, so tests can hand one copy to a store
/// and keep another to reopen or inspect the file.
pub fn temp_json_backend() -> JsonStorage {
    let temp = TempDir::new().expect("create temp dir");
    let storage = JsonStorage::new(temp.path().join("finance.json")).expect("create json storage");
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    storage
}

/// Test clock pinned to a fixed instant.
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

pub fn clock_at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> Box<FixedClock> {
    let now = NaiveDate::from_ymd_opt(y, m, d)
        .expect("valid date")
        .and_hms_opt(h, min, s)
        .expect("valid time");
    Box::new(FixedClock(now))
}

/// Backend whose writes always fail, for persistence-failure behaviour.
pub struct FailingBackend;

impl KeyValueBackend for FailingBackend {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn put(&self, _key: &str, _value: &str) -> Result<()> {
        Err(LedgerError::Storage("write rejected".into()))
    }
}

pub fn draft(
    title: &str,
    amount: f64,
    category: &str,
    timestamp: &str,
    kind: TransactionKind,
) -> NewTransaction {
    NewTransaction::new(title, amount, category, timestamp, kind)
}
