//! Port for the browser-style key-value fallback store.

use std::sync::Arc;

use thiserror::Error;

/// Errors raised by a key-value store.
#[derive(Debug, Clone, Error)]
pub enum LocalStoreError {
    /// Reading or writing the underlying medium failed.
    #[error("local store I/O failed: {0}")]
    Io(Arc<std::io::Error>),
    /// A stored value could not be encoded or decoded.
    #[error("local store value is malformed: {0}")]
    Malformed(String),
    /// The store's lock was poisoned.
    #[error("local store lock poisoned")]
    Poisoned,
}

impl From<std::io::Error> for LocalStoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(Arc::new(err))
    }
}

impl From<serde_json::Error> for LocalStoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}

/// String key-value storage.
pub trait KeyValueStore: Send + Sync {
    /// Reads `key`, returning `None` when it was never written.
    ///
    /// # Errors
    ///
    /// Returns [`LocalStoreError`] when the store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, LocalStoreError>;

    /// Writes `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`LocalStoreError`] when the store cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), LocalStoreError>;
}
