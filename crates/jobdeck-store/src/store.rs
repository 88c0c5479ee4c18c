//! Key-addressed JSON document store.

use crate::error::StoreError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// A durable store of JSON values addressed by string keys.
///
/// The whole document lives in one file. Every mutation rewrites the
/// file synchronously, so the on-disk state always matches the last
/// completed operation.
#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    doc: BTreeMap<String, serde_json::Value>,
}

impl Store {
    /// Open a store backed by the given file, loading any existing document.
    ///
    /// A missing file is treated as an empty store; it is created on the
    /// first write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let doc = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, doc })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and deserialize the value stored under `key`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.doc.get(key) {
            Some(value) => Ok(Some(serde_json::from_value(value.clone())?)),
            None => Ok(None),
        }
    }

    /// Serialize `value` under `key` and flush the document to disk.
    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        let value = serde_json::to_value(value)?;
        self.doc.insert(key.to_string(), value);
        self.flush()
    }

    /// Remove the value stored under `key`, if any.
    ///
    /// Returns `true` if a value was removed.
    pub fn remove(&mut self, key: &str) -> Result<bool, StoreError> {
        let removed = self.doc.remove(key).is_some();
        if removed {
            self.flush()?;
        }
        Ok(removed)
    }

    /// Check whether a value exists under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.doc.contains_key(key)
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.doc.len()
    }

    /// Check if the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.doc.is_empty()
    }

    fn flush(&self) -> Result<(), StoreError> {
        let contents = serde_json::to_string_pretty(&self.doc)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Snapshot {
        name: String,
        count: u32,
    }

    fn temp_store() -> (tempfile::TempDir, Store) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path().join("state.json")).unwrap();
        (dir, store)
    }

    #[test]
    fn test_missing_file_is_empty_store() {
        let (_dir, store) = temp_store();
        assert!(store.is_empty());
        let value: Option<Snapshot> = store.get("cart").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_set_and_get_round_trip() {
        let (_dir, mut store) = temp_store();
        let snapshot = Snapshot {
            name: "cart".to_string(),
            count: 3,
        };
        store.set("cart", &snapshot).unwrap();

        let loaded: Option<Snapshot> = store.get("cart").unwrap();
        assert_eq!(loaded, Some(snapshot));
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        let mut store = Store::open(&path).unwrap();
        store
            .set(
                "cart",
                &Snapshot {
                    name: "cart".to_string(),
                    count: 1,
                },
            )
            .unwrap();
        drop(store);

        let store = Store::open(&path).unwrap();
        let loaded: Option<Snapshot> = store.get("cart").unwrap();
        assert_eq!(loaded.map(|s| s.count), Some(1));
    }

    #[test]
    fn test_remove() {
        let (_dir, mut store) = temp_store();
        store
            .set(
                "cart",
                &Snapshot {
                    name: "cart".to_string(),
                    count: 1,
                },
            )
            .unwrap();

        assert!(store.remove("cart").unwrap());
        assert!(!store.remove("cart").unwrap());
        assert!(!store.contains("cart"));
    }
}
