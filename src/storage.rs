//! Persistent key-value storage for accounts and theme preferences.
//!
//! All durable state in the application flows through the [`KeyValueStore`]
//! trait: the repositories serialize their records to JSON strings and store
//! them under fixed keys. Two implementations are provided:
//! - [`DiskStore`] - backed by a single JSON file in the platform config dir
//! - [`MemoryStore`] - in-memory fake for tests and ephemeral runs

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Synchronous string-keyed storage used by all repositories.
///
/// Keys are namespaced by purpose and, where user-scoped, by username
/// (see `repo` for the key layout). There is no transactional multi-key
/// write: the last `set` to a given key wins.
pub trait KeyValueStore {
    /// Returns the stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: String);

    /// Removes `key` and its value. Removing an absent key is a no-op.
    fn remove(&mut self, key: &str);

    /// Writes pending changes to the backing medium.
    fn flush(&mut self);
}

/// Disk-backed store holding the whole key space as one JSON object.
///
/// Every `set`/`remove` writes through to disk, so a crash loses at most
/// the mutation in progress. Write errors are logged and the in-memory
/// copy is kept, so the process keeps working with stale persistence.
pub struct DiskStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl DiskStore {
    /// Opens the store at the default location
    /// (`<config_dir>/rquiz/store.json`), creating parent directories.
    pub fn open_default() -> Result<Self> {
        let dir = dirs::config_dir()
            .context("no platform config directory available")?
            .join("rquiz");
        Self::open(dir.join("store.json"))
    }

    /// Opens a store backed by the given file, loading existing entries.
    ///
    /// A missing file is treated as an empty store; a corrupt file is an
    /// error rather than silent data loss.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = if path.exists() {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read store file {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("store file {} is not valid JSON", path.display()))?
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, entries })
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_to_disk(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let raw = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.path, raw)
            .with_context(|| format!("failed to write store file {}", self.path.display()))?;
        Ok(())
    }
}

impl KeyValueStore for DiskStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
        if let Err(e) = self.write_to_disk() {
            log::error!("persisting key {:?} failed: {:#}", key, e);
        }
    }

    fn remove(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            if let Err(e) = self.write_to_disk() {
                log::error!("removing key {:?} failed: {:#}", key, e);
            }
        }
    }

    fn flush(&mut self) {
        if let Err(e) = self.write_to_disk() {
            log::error!("flushing store failed: {:#}", e);
        }
    }
}

/// In-memory store used by tests and as a fallback when no config
/// directory exists.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }

    fn flush(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_set_get_remove() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("missing"), None);

        store.set("a", "1".to_string());
        assert_eq!(store.get("a"), Some("1".to_string()));

        store.set("a", "2".to_string());
        assert_eq!(store.get("a"), Some("2".to_string()));

        store.remove("a");
        assert_eq!(store.get("a"), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_absent_key_is_noop() {
        let mut store = MemoryStore::new();
        store.remove("never-set");
        assert!(store.is_empty());
    }

    #[test]
    fn test_disk_store_round_trip() {
        let dir = std::env::temp_dir().join(format!("rquiz-test-{}", std::process::id()));
        let path = dir.join("store.json");
        let _ = std::fs::remove_file(&path);

        {
            let mut store = DiskStore::open(&path).unwrap();
            store.set("quiz-users", "[]".to_string());
            store.set("theme", "pink".to_string());
            store.remove("theme");
        }

        // Reopen and verify the surviving entries
        let store = DiskStore::open(&path).unwrap();
        assert_eq!(store.get("quiz-users"), Some("[]".to_string()));
        assert_eq!(store.get("theme"), None);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_disk_store_missing_file_is_empty() {
        let path = std::env::temp_dir().join("rquiz-test-does-not-exist.json");
        let _ = std::fs::remove_file(&path);
        let store = DiskStore::open(&path).unwrap();
        assert_eq!(store.get("anything"), None);
    }
}
