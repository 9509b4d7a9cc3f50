//! Local key-value storage port.

use crate::error::PersistenceError;

/// Durable string storage scoped to one device, addressed by a fixed key.
///
/// Calls are synchronous and local.
pub trait KeyValueStorage: Send + Sync {
    /// Returns the stored value, or `None` if the key was never written.
    fn get_item(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    /// Replaces the stored value.
    fn set_item(&self, key: &str, value: &str) -> Result<(), PersistenceError>;
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for &T {
    fn get_item(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        (**self).set_item(key, value)
    }
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for std::sync::Arc<T> {
    fn get_item(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        (**self).set_item(key, value)
    }
}
