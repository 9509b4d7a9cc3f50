//! # FX History
//!
//! Bounded, locally persisted list of past conversions.
//!
//! The history lives under a single fixed key of a `KeyValueStorage` as a
//! JSON array, newest first, never longer than [`HISTORY_CAPACITY`].
//! Storage failures never reach the caller: they are logged and the history
//! degrades to empty (on load) or unchanged (on save).

use fx_types::{ConversionRecord, KeyValueStorage, PersistenceError};
use tracing::warn;

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Storage key holding the serialized history.
pub const HISTORY_KEY: &str = "conversionHistory";

/// Maximum number of records kept.
pub const HISTORY_CAPACITY: usize = 20;

/// Prepends `record` and drops everything past [`HISTORY_CAPACITY`].
pub fn push_bounded(records: &mut Vec<ConversionRecord>, record: ConversionRecord) {
    records.insert(0, record);
    records.truncate(HISTORY_CAPACITY);
}

/// Conversion history backed by a key-value storage adapter.
pub struct HistoryStore<S: KeyValueStorage> {
    storage: S,
}

impl<S: KeyValueStorage> HistoryStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Returns a reference to the underlying storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Reads the persisted history, surfacing storage and parse failures.
    pub fn try_load(&self) -> Result<Vec<ConversionRecord>, PersistenceError> {
        let Some(raw) = self.storage.get_item(HISTORY_KEY)? else {
            return Ok(Vec::new());
        };
        let mut records: Vec<ConversionRecord> = serde_json::from_str(&raw)?;
        records.truncate(HISTORY_CAPACITY);
        Ok(records)
    }

    /// Replaces the persisted history.
    pub fn try_save(&self, records: &[ConversionRecord]) -> Result<(), PersistenceError> {
        let raw = serde_json::to_string(records)?;
        self.storage.set_item(HISTORY_KEY, &raw)
    }

    /// Reads the persisted history, newest first.
    ///
    /// Missing or unreadable history yields an empty list.
    pub fn load(&self) -> Vec<ConversionRecord> {
        self.try_load().unwrap_or_else(|e| {
            warn!(error = %e, "Discarding unreadable conversion history");
            Vec::new()
        })
    }

    /// Prepends `record`, truncates to capacity and persists the result.
    ///
    /// Returns the new sequence. If persisting fails the stored history is
    /// left as it was.
    pub fn append(&self, record: ConversionRecord) -> Vec<ConversionRecord> {
        let mut records = self.load();
        push_bounded(&mut records, record);
        if let Err(e) = self.try_save(&records) {
            warn!(error = %e, "Failed to persist conversion history");
        }
        records
    }
}
