//! Session-to-session preference behavior: language and accessibility
//! settings survive a simulated reload through the shared store, including
//! the deliberately narrow reset defaults.

use std::sync::Arc;

use nadlan::accessibility::{AccessibilityEngine, AccessibilitySettings, ContrastMode};
use nadlan::document::DocumentState;
use nadlan::i18n::{Direction, Language, Localizer};
use nadlan::prefs::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};

#[test]
fn test_language_survives_reload() {
    let store = Arc::new(MemoryPreferenceStore::new());
    let mut document = DocumentState::new();

    let mut localizer = Localizer::initialize(store.clone());
    localizer.set_language(Language::English, &mut document);

    // Simulated reload: fresh services over the same store
    let reloaded = Localizer::initialize(store);
    assert_eq!(reloaded.language(), Language::English);

    let mut fresh_document = DocumentState::new();
    reloaded.apply_to_document(&mut fresh_document);
    assert_eq!(fresh_document.direction(), Direction::Ltr);
    assert_eq!(fresh_document.lang(), "en");
}

#[test]
fn test_settings_survive_reload() {
    let store = Arc::new(MemoryPreferenceStore::new());
    let mut document = DocumentState::new();

    let mut engine = AccessibilityEngine::initialize(store.clone(), Language::Hebrew);
    engine.set_dark_mode(true, &mut document);
    engine.set_contrast(ContrastMode::High, &mut document);
    engine.increase_font_size(&mut document);
    engine.increase_font_size(&mut document);

    let reloaded = AccessibilityEngine::initialize(store, Language::Hebrew);
    let settings = reloaded.settings();
    assert!(settings.dark_mode);
    assert_eq!(settings.contrast, ContrastMode::High);
    assert_eq!(settings.font_size, 20);
    // Speech fields came from the first-load defaults and were persisted
    assert_eq!(settings.text_to_speech_rate, Some(1.0));
    assert_eq!(settings.text_to_speech_language.as_deref(), Some("he-IL"));
}

#[test]
fn test_reset_then_reload_keeps_speech_fields_absent() {
    let store = Arc::new(MemoryPreferenceStore::new());
    let mut document = DocumentState::new();

    let mut engine = AccessibilityEngine::initialize(store.clone(), Language::Hebrew);
    engine.set_highlight_links(true, &mut document);
    engine.reset(&mut document);

    let reloaded = AccessibilityEngine::initialize(store, Language::Hebrew);
    let settings = reloaded.settings();

    // Every field present in the reset default matches it
    assert_eq!(settings, &AccessibilitySettings::reset_defaults());
    // The speech fields stay absent after the reload; they are not
    // re-derived from the first-load defaults
    assert!(settings.text_to_speech.is_none());
    assert!(settings.text_to_speech_language.is_none());
    assert!(settings.text_to_speech_enabled.is_none());
}

#[test]
fn test_speech_language_not_rederived_on_language_change() {
    let store = Arc::new(MemoryPreferenceStore::new());
    let mut document = DocumentState::new();

    // First load under Hebrew pins the speech locale
    let mut engine = AccessibilityEngine::initialize(store.clone(), Language::Hebrew);
    engine.set_screen_reader(true, &mut document);

    // The user switches the UI language; the persisted speech locale stays
    let mut localizer = Localizer::initialize(store.clone());
    localizer.set_language(Language::English, &mut document);

    let reloaded = AccessibilityEngine::initialize(store, localizer.language());
    assert_eq!(
        reloaded.settings().text_to_speech_language.as_deref(),
        Some("he-IL")
    );
}

#[test]
fn test_full_stack_over_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let store: Arc<dyn PreferenceStore> =
        Arc::new(FilePreferenceStore::at(dir.path().to_path_buf()));
    let mut document = DocumentState::new();

    let mut localizer = Localizer::initialize(store.clone());
    let mut engine = AccessibilityEngine::initialize(store.clone(), localizer.language());
    localizer.set_language(Language::English, &mut document);
    engine.set_big_cursor(true, &mut document);

    assert!(dir.path().join("language.json").exists());
    assert!(dir.path().join("accessibility-settings.json").exists());

    let reloaded_localizer = Localizer::initialize(store.clone());
    let reloaded_engine = AccessibilityEngine::initialize(store, reloaded_localizer.language());
    assert_eq!(reloaded_localizer.language(), Language::English);
    assert!(reloaded_engine.settings().big_cursor);
}
