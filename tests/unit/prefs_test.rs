//! Unit tests for preference storage.

use nadlan::prefs::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};

#[test]
fn test_file_store_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let store = FilePreferenceStore::at(dir.path().to_path_buf());

    assert!(store.get("language").unwrap().is_none());

    store.set("language", "\"en\"").unwrap();
    assert_eq!(store.get("language").unwrap().as_deref(), Some("\"en\""));

    // Overwrite replaces
    store.set("language", "\"he\"").unwrap();
    assert_eq!(store.get("language").unwrap().as_deref(), Some("\"he\""));
}

#[test]
fn test_file_store_creates_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("deep").join("prefs");
    let store = FilePreferenceStore::at(nested.clone());

    store.set("accessibility-settings", "{}").unwrap();
    assert!(nested.join("accessibility-settings.json").exists());
}

#[test]
fn test_file_store_keys_are_independent() {
    let dir = tempfile::tempdir().unwrap();
    let store = FilePreferenceStore::at(dir.path().to_path_buf());

    store.set("language", "\"he\"").unwrap();
    store.set("accessibility-settings", r#"{"fontSize":18}"#).unwrap();

    assert_eq!(store.get("language").unwrap().as_deref(), Some("\"he\""));
    assert_eq!(
        store.get("accessibility-settings").unwrap().as_deref(),
        Some(r#"{"fontSize":18}"#)
    );
}

#[test]
fn test_memory_store_snapshot() {
    let store = MemoryPreferenceStore::new();
    store.set("language", "\"en\"").unwrap();

    let snapshot = store.snapshot();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot.get("language").map(String::as_str), Some("\"en\""));
}
