use std::{collections::HashMap, sync::Mutex};

use crate::errors::LedgerError;

use super::{KeyValueBackend, Result};

/// In-memory key-value store for tests and embedders that bring their own
/// persistence.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with pre-existing entries, as if written by an
    /// earlier session.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            entries: Mutex::new(map),
        }
    }
}

impl KeyValueBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| LedgerError::Storage("memory store lock poisoned".into()))?;
        Ok(entries.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| LedgerError::Storage("memory store lock poisoned".into()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_entries_are_visible() {
        let backend = MemoryBackend::with_entries([("currency", "USD")]);
        assert_eq!(
            backend.get("currency").expect("get").as_deref(),
            Some("USD")
        );
        assert!(backend.get("budget").expect("get").is_none());
    }

    #[test]
    fn put_overwrites_previous_value() {
        let backend = MemoryBackend::new();
        backend.put("budget", "100").expect("put");
        backend.put("budget", "250").expect("put");
        assert_eq!(backend.get("budget").expect("get").as_deref(), Some("250"));
    }
}
