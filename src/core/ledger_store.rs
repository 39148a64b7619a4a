//! Single source of truth for the transaction collection.

use std::sync::Arc;

use crate::domain::{
    format_timestamp, NewTransaction, Transaction, TransactionKind, TransactionRecord,
};
use crate::errors::Result;
use crate::storage::KeyValueBackend;
use crate::time::Clock;

/// Key holding the serialized transaction array.
pub const TRANSACTIONS_KEY: &str = "transactions";
/// Key holding the id counter.
pub const NEXT_ID_KEY: &str = "nextId";

const MONTH_PREFIX_FORMAT: &str = "%Y-%m";

/// Immutable point-in-time copy of the ledger handed to consumers.
pub type LedgerSnapshot = Arc<[Transaction]>;

/// Callback invoked with the latest snapshot after every mutation.
pub type SnapshotListener = Box<dyn FnMut(&LedgerSnapshot)>;

/// Owns the ordered transaction collection, assigns ids, and keeps the
/// persisted copy in sync.
///
/// All mutation goes through this store; consumers only ever see snapshots.
/// Mutations apply in memory first and then persist, so a persistence
/// failure surfaces as an error while the in-memory state keeps the change.
pub struct LedgerStore {
    backend: Box<dyn KeyValueBackend>,
    clock: Box<dyn Clock>,
    transactions: Vec<Transaction>,
    next_id: u64,
    snapshot: LedgerSnapshot,
    listeners: Vec<SnapshotListener>,
}

impl LedgerStore {
    /// Loads the persisted collection (empty if none exists) and
    /// reconstructs the id counter.
    ///
    /// Records missing a timestamp all receive the same load-time default,
    /// which is then persisted so later loads see the materialized value.
    pub fn open(backend: Box<dyn KeyValueBackend>, clock: Box<dyn Clock>) -> Result<Self> {
        let records: Vec<TransactionRecord> = match backend.get(TRANSACTIONS_KEY)? {
            Some(data) => serde_json::from_str(&data)?,
            None => Vec::new(),
        };
        let default_timestamp = format_timestamp(clock.now());
        let backfilled = records.iter().any(|record| record.timestamp.is_none());
        let transactions: Vec<Transaction> = records
            .into_iter()
            .map(|record| Transaction::from_record(record, &default_timestamp))
            .collect();

        let next_id = match backend
            .get(NEXT_ID_KEY)?
            .and_then(|raw| raw.trim().parse().ok())
        {
            Some(counter) => counter,
            None => derived_next_id(&transactions),
        };

        let snapshot: LedgerSnapshot = transactions.clone().into();
        let store = Self {
            backend,
            clock,
            transactions,
            next_id,
            snapshot,
            listeners: Vec::new(),
        };
        if backfilled {
            store.persist()?;
        }
        tracing::info!(count = store.transactions.len(), "ledger loaded");
        Ok(store)
    }

    /// Appends a draft under the next sequential id and returns that id.
    ///
    /// Field validation is the caller's job (`NewTransaction::validate`);
    /// the store accepts any draft.
    pub fn add(&mut self, draft: NewTransaction) -> Result<u64> {
        let id = self.next_id;
        self.next_id += 1;
        self.transactions.push(draft.into_transaction(id));
        let persisted = self.persist();
        self.publish();
        persisted.map(|_| id)
    }

    /// Replaces the record whose id matches. A missing id leaves the
    /// collection unchanged; the operation is total, not partial.
    pub fn edit(&mut self, updated: Transaction) -> Result<()> {
        if let Some(existing) = self
            .transactions
            .iter_mut()
            .find(|txn| txn.id == updated.id)
        {
            *existing = updated;
        }
        let persisted = self.persist();
        self.publish();
        persisted
    }

    /// Removes the record with the matching id, if present.
    pub fn delete(&mut self, id: u64) -> Result<()> {
        self.transactions.retain(|txn| txn.id != id);
        let persisted = self.persist();
        self.publish();
        persisted
    }

    /// Bulk overwrite used for import. Records missing a timestamp receive
    /// one shared "now" value; imported ids are trusted as-is and the
    /// counter restarts at max(id)+1 (0 when the set is empty).
    pub fn replace_all(&mut self, records: Vec<TransactionRecord>) -> Result<()> {
        let default_timestamp = format_timestamp(self.clock.now());
        self.transactions = records
            .into_iter()
            .map(|record| Transaction::from_record(record, &default_timestamp))
            .collect();
        self.next_id = derived_next_id(&self.transactions);
        tracing::info!(count = self.transactions.len(), "ledger replaced");
        let persisted = self.persist();
        self.publish();
        persisted
    }

    /// Sum of expense amounts whose date falls in the current calendar
    /// month, as of the call time.
    pub fn monthly_expense_total(&self) -> f64 {
        let month_prefix = self.clock.today().format(MONTH_PREFIX_FORMAT).to_string();
        self.transactions
            .iter()
            .filter(|txn| {
                txn.kind == TransactionKind::Expense && txn.date_str().starts_with(&month_prefix)
            })
            .map(|txn| txn.amount)
            .sum()
    }

    /// Registers a listener and immediately delivers the current snapshot.
    pub fn subscribe(&mut self, mut listener: impl FnMut(&LedgerSnapshot) + 'static) {
        listener(&self.snapshot);
        self.listeners.push(Box::new(listener));
    }

    /// The latest published snapshot.
    pub fn snapshot(&self) -> LedgerSnapshot {
        self.snapshot.clone()
    }

    /// Read-only view of the live collection, in insertion order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn find(&self, id: u64) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    /// The id the next `add` will assign.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    fn persist(&self) -> Result<()> {
        let json = serde_json::to_string(&self.transactions)?;
        self.backend.put(TRANSACTIONS_KEY, &json)?;
        self.backend.put(NEXT_ID_KEY, &self.next_id.to_string())?;
        Ok(())
    }

    fn publish(&mut self) {
        self.snapshot = self.transactions.clone().into();
        let snapshot = self.snapshot.clone();
        for listener in &mut self.listeners {
            listener(&snapshot);
        }
    }
}

fn derived_next_id(transactions: &[Transaction]) -> u64 {
    transactions
        .iter()
        .map(|txn| txn.id)
        .max()
        .map(|max| max + 1)
        .unwrap_or(0)
}
