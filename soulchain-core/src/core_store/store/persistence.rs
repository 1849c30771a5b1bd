/*
    persistence.rs - Durable local storage for the store projection

    The store persists a fixed projection of its state (user, entries,
    circles, saved posts) as JSON under a single namespace key.
    Transient UI flags are never part of the projection.

    Backends implement an opaque get/set byte-string interface. The
    file backend writes atomically (temp file, then rename).
*/

use crate::core_store::model::{SoulCircle, SoulEntry, User};
use crate::core_store::store::errors::StoreResult;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::{create_dir_all, File};
use std::io::{Read, Write};
use std::path::PathBuf;
use std::sync::RwLock;

/// Fixed namespace key the projection is stored under
pub const STORE_NAMESPACE: &str = "soulchain-store";

/// The durable projection of store state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    pub user: Option<User>,
    pub entries: Vec<SoulEntry>,
    pub circles: Vec<SoulCircle>,
    pub saved_posts: Vec<SoulEntry>,
}

/// Opaque durable key-value storage
pub trait StorageBackend: Send + Sync {
    /// Read the value stored under the key, if any
    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>>;

    /// Write the value under the key, replacing any prior value
    fn set(&self, key: &str, value: &[u8]) -> StoreResult<()>;

    /// Remove the value stored under the key, if any
    fn remove(&self, key: &str) -> StoreResult<()>;
}

/// File-per-key backend rooted at a data directory
pub struct FileBackend {
    data_dir: PathBuf,
}

impl FileBackend {
    pub fn new(data_dir: PathBuf) -> StoreResult<Self> {
        create_dir_all(&data_dir)?;
        Ok(FileBackend { data_dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }
}

impl StorageBackend for FileBackend {
    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }

        let mut file = File::open(path)?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)?;
        Ok(Some(data))
    }

    fn set(&self, key: &str, value: &[u8]) -> StoreResult<()> {
        // Write to a temporary file first, then rename atomically
        let temp_path = self.data_dir.join(format!("{}.tmp", key));
        let mut file = File::create(&temp_path)?;
        file.write_all(value)?;
        file.sync_all()?;
        drop(file);

        std::fs::rename(temp_path, self.path_for(key))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let path = self.path_for(key);
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }
}

/// In-memory backend for tests and ephemeral sessions
#[derive(Default)]
pub struct MemoryBackend {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        MemoryBackend::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        let entries = self
            .entries
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> StoreResult<()> {
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_memory_backend_roundtrip() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.get(STORE_NAMESPACE).unwrap(), None);

        backend.set(STORE_NAMESPACE, b"{}").unwrap();
        assert_eq!(backend.get(STORE_NAMESPACE).unwrap(), Some(b"{}".to_vec()));

        backend.remove(STORE_NAMESPACE).unwrap();
        assert_eq!(backend.get(STORE_NAMESPACE).unwrap(), None);
    }

    #[test]
    fn test_file_backend_roundtrip() {
        let dir = tempdir().unwrap();
        let backend = FileBackend::new(dir.path().to_path_buf()).unwrap();

        assert_eq!(backend.get(STORE_NAMESPACE).unwrap(), None);

        backend.set(STORE_NAMESPACE, b"payload").unwrap();
        assert_eq!(
            backend.get(STORE_NAMESPACE).unwrap(),
            Some(b"payload".to_vec())
        );

        backend.set(STORE_NAMESPACE, b"replaced").unwrap();
        assert_eq!(
            backend.get(STORE_NAMESPACE).unwrap(),
            Some(b"replaced".to_vec())
        );

        backend.remove(STORE_NAMESPACE).unwrap();
        assert_eq!(backend.get(STORE_NAMESPACE).unwrap(), None);
    }

    #[test]
    fn test_file_backend_leaves_no_temp_files() {
        let dir = tempdir().unwrap();
        let backend = FileBackend::new(dir.path().to_path_buf()).unwrap();
        backend.set(STORE_NAMESPACE, b"payload").unwrap();

        let names: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec![format!("{}.json", STORE_NAMESPACE)]);
    }

    #[test]
    fn test_persisted_state_default_is_empty() {
        let state = PersistedState::default();
        assert!(state.user.is_none());
        assert!(state.entries.is_empty());
        assert!(state.circles.is_empty());
        assert!(state.saved_posts.is_empty());
    }
}
