//! Task records kept in the key-value fallback store.

use crate::board::{
    domain::CardRecord,
    ports::{KeyValueStore, LocalStoreError},
};
use crate::task::domain::Column;
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Key holding the JSON array of task records.
pub const LOCAL_TASKS_KEY: &str = "kanban_tasks";

/// Reads and writes the task list under [`LOCAL_TASKS_KEY`].
#[derive(Debug, Clone)]
pub struct LocalTaskStore<K> {
    store: K,
}

impl<K: KeyValueStore> LocalTaskStore<K> {
    /// Wraps a key-value store.
    pub const fn new(store: K) -> Self {
        Self { store }
    }

    /// Returns the underlying key-value store.
    pub const fn inner(&self) -> &K {
        &self.store
    }

    /// Loads every stored record.
    ///
    /// A missing, unreadable, or malformed value yields an empty list.
    /// Entries that do not decode as a record are skipped but stay stored.
    pub fn load(&self) -> Vec<CardRecord> {
        let entries = match self.load_entries() {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(error = %err, "ignoring unreadable local tasks");
                return Vec::new();
            }
        };
        entries
            .into_iter()
            .filter_map(|entry| match serde_json::from_value(entry) {
                Ok(record) => Some(record),
                Err(err) => {
                    tracing::warn!(error = %err, "skipping malformed local task");
                    None
                }
            })
            .collect()
    }

    /// Reads the stored array without decoding its entries.
    fn load_entries(&self) -> Result<Vec<Value>, LocalStoreError> {
        let Some(raw) = self.store.get(LOCAL_TASKS_KEY)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw)? {
            Value::Array(entries) => Ok(entries),
            _ => Err(LocalStoreError::Malformed(format!(
                "{LOCAL_TASKS_KEY} does not hold a JSON array"
            ))),
        }
    }

    fn write_entries(&self, entries: &[Value]) -> Result<(), LocalStoreError> {
        let raw = serde_json::to_string(entries)?;
        self.store.set(LOCAL_TASKS_KEY, &raw)
    }

    /// Replaces the stored list with `records`.
    ///
    /// # Errors
    ///
    /// Returns [`LocalStoreError`] when the list cannot be written.
    pub fn save(&self, records: &[CardRecord]) -> Result<(), LocalStoreError> {
        let raw = serde_json::to_string(records)?;
        self.store.set(LOCAL_TASKS_KEY, &raw)
    }

    /// Appends `record` to the stored list.
    ///
    /// # Errors
    ///
    /// Returns [`LocalStoreError::Malformed`] without writing when the stored
    /// value is not a JSON array, or another [`LocalStoreError`] when the
    /// list cannot be read or written.
    pub fn append(&self, record: &CardRecord) -> Result<(), LocalStoreError> {
        let mut entries = self.load_entries()?;
        entries.push(serde_json::to_value(record)?);
        self.write_entries(&entries)
    }

    /// Drops the record `id`. Removing an absent record is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`LocalStoreError::Malformed`] without writing when the stored
    /// value is not a JSON array, or another [`LocalStoreError`] when the
    /// list cannot be read or written.
    pub fn remove(&self, id: &str) -> Result<(), LocalStoreError> {
        let mut entries = self.load_entries()?;
        entries.retain(|entry| entry_id(entry) != Some(id));
        self.write_entries(&entries)
    }

    /// Moves the record `id` to `column` and stamps `updatedAt`.
    ///
    /// Returns `Ok(false)` without writing when no record has that id.
    ///
    /// # Errors
    ///
    /// Returns [`LocalStoreError::Malformed`] without writing when the stored
    /// value is not a JSON array, or another [`LocalStoreError`] when the
    /// list cannot be read or written.
    pub fn move_to(
        &self,
        id: &str,
        column: Column,
        now: DateTime<Utc>,
    ) -> Result<bool, LocalStoreError> {
        let mut entries = self.load_entries()?;
        let Some(fields) = entries
            .iter_mut()
            .filter(|entry| entry_id(entry) == Some(id))
            .find_map(Value::as_object_mut)
        else {
            return Ok(false);
        };
        fields.insert("column".to_owned(), Value::from(column.as_str()));
        fields.insert("updatedAt".to_owned(), serde_json::to_value(now)?);
        self.write_entries(&entries)?;
        Ok(true)
    }
}

fn entry_id(entry: &Value) -> Option<&str> {
    entry.get("id").and_then(Value::as_str)
}
