//! File-backed storage adapter.
//!
//! Each key is stored as `<dir>/<key>.json`. Writes go to a uniquely named
//! temp file in the same directory and are renamed into place, so readers
//! never see a partial entry, even with several writers.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use fx_types::{KeyValueStorage, PersistenceError};
use tempfile::NamedTempFile;
use tracing::debug;

pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Creates a storage rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, PersistenceError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(PersistenceError::Io(format!("invalid storage key: {:?}", key)));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;

        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(value.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&path).map_err(|e| e.error)?;
        debug!(path = %path.display(), bytes = value.len(), "Persisted storage entry");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HISTORY_KEY, HistoryStore};
    use fx_types::{ConversionRecord, ConversionResult};
    use tempfile::tempdir;

    #[test]
    fn test_missing_key_reads_none() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        assert_eq!(storage.get_item(HISTORY_KEY).unwrap(), None);
    }

    #[test]
    fn test_write_then_read_creates_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("data").join("fx");
        let storage = FileStorage::new(&nested);

        storage.set_item(HISTORY_KEY, "[]").unwrap();

        let entries: Vec<_> = fs::read_dir(&nested)
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec!["conversionHistory.json"]);
        assert_eq!(storage.get_item(HISTORY_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        assert!(storage.set_item("../escape", "x").is_err());
        assert!(storage.get_item("").is_err());
    }

    #[test]
    fn test_history_survives_reopen() {
        let dir = tempdir().unwrap();
        let res =
            ConversionResult::compute("GBP".parse().unwrap(), "USD".parse().unwrap(), 10.0, 1.25);
        let rec = ConversionRecord::from_result(&res);

        HistoryStore::new(FileStorage::new(dir.path())).append(rec.clone());
        let reopened = HistoryStore::new(FileStorage::new(dir.path()));

        assert_eq!(reopened.load(), vec![rec]);
    }

    #[test]
    fn test_concurrent_writers_never_leave_partial_entry() {
        let dir = tempdir().unwrap();
        let payloads: Vec<String> = (0..4)
            .map(|n| serde_json::to_string(&vec![n.to_string().repeat(4096); 8]).unwrap())
            .collect();

        std::thread::scope(|scope| {
            for payload in &payloads {
                let storage = FileStorage::new(dir.path());
                scope.spawn(move || {
                    for _ in 0..25 {
                        storage.set_item(HISTORY_KEY, payload).unwrap();
                    }
                });
            }
        });

        let stored = FileStorage::new(dir.path())
            .get_item(HISTORY_KEY)
            .unwrap()
            .unwrap();
        assert!(payloads.contains(&stored));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("conversionHistory.json"), "garbage").unwrap();

        let store = HistoryStore::new(FileStorage::new(dir.path()));

        assert!(store.load().is_empty());
    }
}
