//! Durable per-user storage for the theme preference

use log::debug;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Error type for preference storage failures
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Preference storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed preference file: {0}")]
    Format(#[from] serde_yaml::Error),
}

/// String key/value storage that survives restarts.
pub trait PreferenceStore {
    /// Returns the stored value for `key`, if any.
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Process-local storage, lost on exit.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore(HashMap<String, String>);

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store already holding `value` under `key`.
    pub fn with_item(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.0.insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.0.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.0.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage backed by a YAML map in a single file.
///
/// The file is read on every access so that several sessions sharing
/// the same file see each other's writes.
#[derive(Debug, Clone)]
pub struct YamlFileStore {
    path: PathBuf,
}

impl YamlFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_yaml::from_str(&content)?)
    }
}

impl PreferenceStore for YamlFileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut map = self.read_map()?;
        Ok(map.remove(key))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_yaml::to_string(&map)?)?;
        debug!("Stored {key}={value} in {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get_item("theme").unwrap(), None);
        store.set_item("theme", "light").unwrap();
        assert_eq!(store.get_item("theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_yaml_store_missing_file_reads_as_empty() {
        let dir = tempdir().unwrap();
        let store = YamlFileStore::new(dir.path().join("preferences.yml"));
        assert_eq!(store.get_item("theme").unwrap(), None);
    }

    #[test]
    fn test_yaml_store_keeps_other_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("preferences.yml");
        fs::write(&path, "other: value\n").unwrap();

        let mut store = YamlFileStore::new(&path);
        store.set_item("theme", "light").unwrap();

        let reopened = YamlFileStore::new(&path);
        assert_eq!(reopened.get_item("theme").unwrap().as_deref(), Some("light"));
        assert_eq!(reopened.get_item("other").unwrap().as_deref(), Some("value"));
    }

    #[test]
    fn test_yaml_store_creates_missing_parent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.yml");
        let mut store = YamlFileStore::new(&path);
        store.set_item("theme", "dark").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_yaml_store_malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("preferences.yml");
        fs::write(&path, "- not\n- a map\n").unwrap();
        let store = YamlFileStore::new(&path);
        assert!(matches!(store.get_item("theme"), Err(StoreError::Format(_))));
    }
}
