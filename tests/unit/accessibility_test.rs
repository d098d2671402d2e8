//! Unit tests for the accessibility preference engine.

use std::sync::Arc;

use nadlan::accessibility::effects::classes;
use nadlan::accessibility::settings::{FONT_SIZE_MAX, FONT_SIZE_MIN};
use nadlan::accessibility::{
    AccessibilityEngine, AccessibilitySettings, ContrastMode, DocumentEffects,
};
use nadlan::document::DocumentState;
use nadlan::i18n::Language;
use nadlan::prefs::{MemoryPreferenceStore, PreferenceStore, ACCESSIBILITY_KEY};

fn engine_with(store: MemoryPreferenceStore) -> (AccessibilityEngine, Arc<MemoryPreferenceStore>) {
    let store = Arc::new(store);
    (
        AccessibilityEngine::initialize(store.clone(), Language::Hebrew),
        store,
    )
}

#[test]
fn test_font_size_stays_within_bounds() {
    let (mut engine, _) = engine_with(MemoryPreferenceStore::new());
    let mut document = DocumentState::new();

    for _ in 0..40 {
        engine.increase_font_size(&mut document);
    }
    assert_eq!(engine.settings().font_size, FONT_SIZE_MAX);

    // No-op at the top bound
    engine.increase_font_size(&mut document);
    assert_eq!(engine.settings().font_size, FONT_SIZE_MAX);

    for _ in 0..40 {
        engine.decrease_font_size(&mut document);
    }
    assert_eq!(engine.settings().font_size, FONT_SIZE_MIN);

    // No-op at the bottom bound
    engine.decrease_font_size(&mut document);
    assert_eq!(engine.settings().font_size, FONT_SIZE_MIN);
}

#[test]
fn test_font_steps_are_two_pixels() {
    let (mut engine, _) = engine_with(MemoryPreferenceStore::new());
    let mut document = DocumentState::new();

    assert_eq!(engine.settings().font_size, 16);
    engine.increase_font_size(&mut document);
    assert_eq!(engine.settings().font_size, 18);
    engine.decrease_font_size(&mut document);
    engine.decrease_font_size(&mut document);
    assert_eq!(engine.settings().font_size, 14);
}

#[test]
fn test_default_font_size_injects_no_override() {
    let (mut engine, _) = engine_with(MemoryPreferenceStore::new());
    let mut document = DocumentState::new();

    engine.apply_to_document(&mut document);
    assert_eq!(document.font_size_override(), None);
    assert!(!document.has_class(classes::FONT_RESIZE));

    engine.increase_font_size(&mut document);
    assert_eq!(document.font_size_override(), Some(18));
    assert!(document.has_class(classes::FONT_RESIZE));

    // Back at exactly the default: the override disappears entirely
    engine.decrease_font_size(&mut document);
    assert_eq!(document.font_size_override(), None);
    assert!(!document.has_class(classes::FONT_RESIZE));
}

#[test]
fn test_dark_mode_toggle_round_trips_document_state() {
    let (mut engine, _) = engine_with(MemoryPreferenceStore::new());
    let mut document = DocumentState::new();
    engine.apply_to_document(&mut document);

    let before = document.clone();
    let effects_before = engine.effects();

    engine.set_dark_mode(true, &mut document);
    assert!(document.has_class(classes::DARK_MODE));
    assert!(engine.effects().viewport_filter.is_some());
    assert!(engine.effects().media_counter_filter.is_some());

    engine.set_dark_mode(false, &mut document);
    assert_eq!(document, before);
    assert_eq!(engine.effects(), effects_before);
}

#[test]
fn test_class_toggles_follow_fields() {
    let (mut engine, _) = engine_with(MemoryPreferenceStore::new());
    let mut document = DocumentState::new();

    engine.set_contrast(ContrastMode::High, &mut document);
    engine.set_highlight_links(true, &mut document);
    engine.set_big_cursor(true, &mut document);
    engine.set_pause_animations(true, &mut document);

    assert!(document.has_class(classes::HIGH_CONTRAST));
    assert!(document.has_class(classes::HIGHLIGHT_LINKS));
    assert!(document.has_class(classes::BIG_CURSOR));
    assert!(document.has_class(classes::PAUSE_ANIMATIONS));
    assert!(!document.has_class(classes::DARK_MODE));

    engine.set_contrast(ContrastMode::Normal, &mut document);
    assert!(!document.has_class(classes::HIGH_CONTRAST));
}

#[test]
fn test_every_change_persists_full_snapshot() {
    let (mut engine, store) = engine_with(MemoryPreferenceStore::new());
    let mut document = DocumentState::new();

    engine.set_screen_reader(true, &mut document);

    let raw = store.get(ACCESSIBILITY_KEY).unwrap().unwrap();
    let persisted: AccessibilitySettings = serde_json::from_str(&raw).unwrap();
    assert!(persisted.screen_reader);
    assert_eq!(persisted.font_size, 16);
    // First-load defaults carried the speech fields along
    assert_eq!(persisted.text_to_speech_enabled, Some(false));
}

#[test]
fn test_persistence_failure_degrades_silently() {
    let (mut engine, store) = engine_with(MemoryPreferenceStore::new());
    let mut document = DocumentState::new();

    store.set_failing(true);
    engine.set_dark_mode(true, &mut document);

    // The applied state moved even though the write was lost
    assert!(engine.settings().dark_mode);
    assert!(document.has_class(classes::DARK_MODE));

    store.set_failing(false);
    assert!(store.get(ACCESSIBILITY_KEY).unwrap().is_none());
}

#[test]
fn test_partial_blob_loads_with_core_defaults() {
    let store = MemoryPreferenceStore::with_value(
        ACCESSIBILITY_KEY,
        r#"{"fontSize": 20, "contrast": "high"}"#,
    );
    let (engine, _) = engine_with(store);

    let settings = engine.settings();
    assert_eq!(settings.font_size, 20);
    assert_eq!(settings.contrast, ContrastMode::High);
    assert!(!settings.dark_mode);
    assert!(!settings.highlight_links);
    assert!(!settings.big_cursor);
    assert!(!settings.pause_animations);
    assert!(!settings.screen_reader);
}

#[test]
fn test_corrupted_blob_yields_first_load_defaults() {
    let store = MemoryPreferenceStore::with_value(ACCESSIBILITY_KEY, "not json at all");
    let (engine, _) = engine_with(store);

    assert_eq!(
        engine.settings(),
        &AccessibilitySettings::first_load_defaults(Language::Hebrew)
    );
}

#[test]
fn test_out_of_range_persisted_font_size_is_clamped() {
    let store = MemoryPreferenceStore::with_value(ACCESSIBILITY_KEY, r#"{"fontSize": 99}"#);
    let (engine, _) = engine_with(store);
    assert_eq!(engine.settings().font_size, FONT_SIZE_MAX);

    let store = MemoryPreferenceStore::with_value(ACCESSIBILITY_KEY, r#"{"fontSize": 4}"#);
    let (engine, _) = engine_with(store);
    assert_eq!(engine.settings().font_size, FONT_SIZE_MIN);
}

#[test]
fn test_reset_installs_narrow_defaults() {
    let (mut engine, store) = engine_with(MemoryPreferenceStore::new());
    let mut document = DocumentState::new();

    engine.set_dark_mode(true, &mut document);
    engine.increase_font_size(&mut document);
    engine.reset(&mut document);

    assert_eq!(engine.settings(), &AccessibilitySettings::reset_defaults());
    assert_eq!(document.font_size_override(), None);
    assert!(!document.has_class(classes::DARK_MODE));

    // The persisted reset blob omits the speech keys
    let raw = store.get(ACCESSIBILITY_KEY).unwrap().unwrap();
    assert!(!raw.contains("textToSpeech"));
}

#[test]
fn test_effects_are_pure_per_snapshot() {
    let mut settings = AccessibilitySettings::reset_defaults();
    settings.dark_mode = true;
    settings.font_size = 24;

    let a = DocumentEffects::compute(&settings);
    let b = DocumentEffects::compute(&settings);
    assert_eq!(a, b);
    assert_eq!(a.font_size_override, Some(24));
}
