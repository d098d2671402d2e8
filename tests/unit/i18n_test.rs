//! Unit tests for the localization resolver.

use std::sync::Arc;

use nadlan::document::DocumentState;
use nadlan::i18n::{Direction, Language, Localizer};
use nadlan::prefs::{MemoryPreferenceStore, PreferenceStore, LANGUAGE_KEY};

fn localizer_with(store: MemoryPreferenceStore) -> (Localizer, Arc<MemoryPreferenceStore>) {
    let store = Arc::new(store);
    (Localizer::initialize(store.clone()), store)
}

#[test]
fn test_known_keys_resolve_per_language() {
    let (mut localizer, _) = localizer_with(MemoryPreferenceStore::new());
    let mut document = DocumentState::new();

    assert_eq!(localizer.language(), Language::Hebrew);
    assert_eq!(localizer.translate("nav.home"), "בית");

    localizer.set_language(Language::English, &mut document);
    assert_eq!(localizer.translate("nav.home"), "Home");

    // Switching back re-resolves the same key without other state changes
    localizer.set_language(Language::Hebrew, &mut document);
    assert_eq!(localizer.translate("nav.home"), "בית");
}

#[test]
fn test_missing_key_comes_back_verbatim() {
    let (localizer, _) = localizer_with(MemoryPreferenceStore::new());

    assert_eq!(localizer.translate("nav.signin"), "nav.signin");
    assert_eq!(localizer.translate(""), "");
    assert_eq!(
        localizer.translate("definitely.not.a.key"),
        "definitely.not.a.key"
    );
}

#[test]
fn test_initialize_defaults_to_hebrew() {
    // Empty storage
    let (localizer, _) = localizer_with(MemoryPreferenceStore::new());
    assert_eq!(localizer.language(), Language::Hebrew);

    // Unrecognized value
    let (localizer, _) =
        localizer_with(MemoryPreferenceStore::with_value(LANGUAGE_KEY, "\"fr\""));
    assert_eq!(localizer.language(), Language::Hebrew);

    // Corrupted value (not a JSON string at all)
    let (localizer, _) =
        localizer_with(MemoryPreferenceStore::with_value(LANGUAGE_KEY, "{oops"));
    assert_eq!(localizer.language(), Language::Hebrew);

    // Unreadable storage
    let store = MemoryPreferenceStore::new();
    store.set_failing(true);
    let (localizer, _) = localizer_with(store);
    assert_eq!(localizer.language(), Language::Hebrew);
}

#[test]
fn test_initialize_restores_persisted_language() {
    let (localizer, _) =
        localizer_with(MemoryPreferenceStore::with_value(LANGUAGE_KEY, "\"en\""));
    assert_eq!(localizer.language(), Language::English);
}

#[test]
fn test_set_language_drives_document_direction() {
    let (mut localizer, _) = localizer_with(MemoryPreferenceStore::new());
    let mut document = DocumentState::new();

    localizer.set_language(Language::Hebrew, &mut document);
    assert_eq!(document.direction(), Direction::Rtl);
    assert_eq!(document.direction().attr(), "rtl");
    assert_eq!(document.lang(), "he");

    localizer.set_language(Language::English, &mut document);
    assert_eq!(document.direction(), Direction::Ltr);
    assert_eq!(document.direction().attr(), "ltr");
    assert_eq!(document.lang(), "en");

    // Repeated alternating switches stay consistent with the final state
    for _ in 0..3 {
        localizer.set_language(Language::Hebrew, &mut document);
        localizer.set_language(Language::English, &mut document);
    }
    assert_eq!(document.direction(), Direction::Ltr);
    assert_eq!(document.lang(), "en");
}

#[test]
fn test_set_language_persists_code_as_json() {
    let (mut localizer, store) = localizer_with(MemoryPreferenceStore::new());
    let mut document = DocumentState::new();

    localizer.set_language(Language::English, &mut document);
    assert_eq!(
        store.get(LANGUAGE_KEY).unwrap().as_deref(),
        Some("\"en\"")
    );
}

#[test]
fn test_persistence_failure_is_swallowed() {
    let (mut localizer, store) = localizer_with(MemoryPreferenceStore::new());
    let mut document = DocumentState::new();

    store.set_failing(true);
    localizer.set_language(Language::English, &mut document);

    // In-memory and document state still moved; only durability was lost
    assert_eq!(localizer.language(), Language::English);
    assert_eq!(document.direction(), Direction::Ltr);
    store.set_failing(false);
    assert!(store.get(LANGUAGE_KEY).unwrap().is_none());
}

#[test]
fn test_translate_with_args_substitutes() {
    let (localizer, _) = localizer_with(MemoryPreferenceStore::new());
    // Unknown key echoes, then substitution applies to the echoed text
    assert_eq!(
        localizer.translate_with_args("hello { $name }", &[("name", "world")]),
        "hello world"
    );
}
