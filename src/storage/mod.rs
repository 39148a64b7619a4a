pub mod json_backend;
pub mod memory;

pub use crate::errors::Result;

/// Abstraction over the key-value stores the ledger and settings persist to.
///
/// Values are opaque strings; the stores own their encoding. Every `put`
/// rewrites the key's whole value, there is no partial update.
pub trait KeyValueBackend: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn put(&self, key: &str, value: &str) -> Result<()>;
}

pub use json_backend::JsonStorage;
pub use memory::MemoryBackend;
