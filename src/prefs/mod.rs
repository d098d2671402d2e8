//! Key/value preference persistence.
//!
//! Preferences are stored as small JSON documents under string keys. The
//! store is injected into the services that consume it, so tests can supply
//! an in-memory implementation and assert snapshots deterministically.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// Storage key for the active language code.
pub const LANGUAGE_KEY: &str = "language";

/// Storage key for the accessibility settings snapshot.
pub const ACCESSIBILITY_KEY: &str = "accessibility-settings";

/// String-keyed preference storage with JSON-encoded values.
pub trait PreferenceStore: Send + Sync {
    /// Read the raw value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Preference storage errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "nadlan", "Nadlan")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// File-backed store keeping one `<key>.json` file per preference key.
pub struct FilePreferenceStore {
    dir: PathBuf,
}

impl FilePreferenceStore {
    /// Create a store rooted at the platform data directory.
    pub fn new() -> Self {
        Self::at(get_data_dir())
    }

    /// Create a store rooted at an explicit directory.
    pub fn at(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Default for FilePreferenceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::IoError(e.to_string())),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::IoError(e.to_string()))?;
        }
        std::fs::write(&path, value).map_err(|e| StoreError::IoError(e.to_string()))
    }
}

/// In-memory store for tests and ephemeral sessions.
///
/// The failing mode makes every operation report [`StoreError::Unavailable`],
/// which lets tests exercise the degraded-persistence path.
#[derive(Default)]
pub struct MemoryPreferenceStore {
    values: Mutex<HashMap<String, String>>,
    failing: AtomicBool,
}

impl MemoryPreferenceStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a single key.
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        store
    }

    /// Switch the store into or out of failing mode.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Copy of the current contents, for assertions.
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.values.lock().unwrap().clone()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("memory store failing".to_string()));
        }
        Ok(self.values.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("memory store failing".to_string()));
        }
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryPreferenceStore::new();
        assert!(store.get("missing").unwrap().is_none());

        store.set("language", "\"he\"").unwrap();
        assert_eq!(store.get("language").unwrap().as_deref(), Some("\"he\""));
    }

    #[test]
    fn test_memory_store_failing_mode() {
        let store = MemoryPreferenceStore::new();
        store.set_failing(true);
        assert!(store.get("language").is_err());
        assert!(store.set("language", "\"en\"").is_err());

        store.set_failing(false);
        assert!(store.set("language", "\"en\"").is_ok());
    }
}
