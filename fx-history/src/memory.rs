//! In-memory storage adapter for tests and ephemeral sessions.

use std::collections::HashMap;
use std::sync::Mutex;

use fx_types::{KeyValueStorage, PersistenceError};

#[derive(Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        let items = self
            .items
            .lock()
            .map_err(|_| PersistenceError::Io("storage lock poisoned".into()))?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        let mut items = self
            .items
            .lock()
            .map_err(|_| PersistenceError::Io("storage lock poisoned".into()))?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
