//! Internationalization module for the bilingual interface.
//!
//! Provides key/value translation lookup with runtime language switching and
//! keeps the document reading direction in line with the active language.

use std::collections::HashMap;
use std::sync::Arc;

use crate::document::DocumentState;
use crate::prefs::{PreferenceStore, LANGUAGE_KEY};

/// Supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// Hebrew, right-to-left
    #[default]
    Hebrew,
    /// English, left-to-right
    English,
}

impl Language {
    /// Get the language code used for persistence and the document tag.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Hebrew => "he",
            Language::English => "en",
        }
    }

    /// Parse a persisted language code. Accepts exactly `he` or `en`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "he" => Some(Language::Hebrew),
            "en" => Some(Language::English),
            _ => None,
        }
    }

    /// Reading direction implied by the language.
    pub fn direction(&self) -> Direction {
        match self {
            Language::Hebrew => Direction::Rtl,
            Language::English => Direction::Ltr,
        }
    }

    /// Native display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Hebrew => "עברית",
            Language::English => "English",
        }
    }

    /// Speech synthesis locale associated with the language.
    pub fn speech_locale(&self) -> &'static str {
        match self {
            Language::Hebrew => "he-IL",
            Language::English => "en-US",
        }
    }

    /// All supported languages.
    pub fn all() -> &'static [Language] {
        &[Language::Hebrew, Language::English]
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Text flow orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Right-to-left
    #[default]
    Rtl,
    /// Left-to-right
    Ltr,
}

impl Direction {
    /// The document attribute value (`rtl` / `ltr`).
    pub fn attr(&self) -> &'static str {
        match self {
            Direction::Rtl => "rtl",
            Direction::Ltr => "ltr",
        }
    }

    /// Whether this is right-to-left flow.
    pub fn is_rtl(&self) -> bool {
        matches!(self, Direction::Rtl)
    }
}

fn ftl_content(lang: Language) -> &'static str {
    match lang {
        Language::Hebrew => include_str!("locales/he.ftl"),
        Language::English => include_str!("locales/en.ftl"),
    }
}

fn parse_ftl(content: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for line in content.lines() {
        let line = line.trim();
        // Skip comments and empty lines
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        // Parse key = value
        if let Some((key, value)) = line.split_once('=') {
            map.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    map
}

/// Translation service owning the active language and the loaded tables.
///
/// The store is injected; persistence failures are logged and swallowed, so
/// every operation on this service is infallible.
pub struct Localizer {
    language: Language,
    translations: HashMap<Language, HashMap<String, String>>,
    store: Arc<dyn PreferenceStore>,
}

impl Localizer {
    /// Create the service, restoring the persisted language selection.
    ///
    /// A missing, unreadable, or unrecognized persisted value yields Hebrew.
    pub fn initialize(store: Arc<dyn PreferenceStore>) -> Self {
        let language = load_language(store.as_ref());
        let mut translations = HashMap::new();
        for lang in Language::all() {
            translations.insert(*lang, parse_ftl(ftl_content(*lang)));
        }
        Self {
            language,
            translations,
            store,
        }
    }

    /// The active language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Reading direction of the active language.
    pub fn direction(&self) -> Direction {
        self.language.direction()
    }

    /// Translate a message by key for the active language.
    ///
    /// A key missing from the active table (or mapped to an empty string)
    /// comes back verbatim, so untranslated text stays visible instead of
    /// raising an error or rendering blank.
    pub fn translate(&self, key: &str) -> String {
        if let Some(table) = self.translations.get(&self.language) {
            if let Some(value) = table.get(key) {
                if !value.is_empty() {
                    return value.clone();
                }
            }
        }
        key.to_string()
    }

    /// Translate a message with `{ $name }` argument substitution.
    pub fn translate_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut result = self.translate(key);
        for (arg_key, arg_value) in args {
            let pattern = format!("{{ ${} }}", arg_key);
            result = result.replace(&pattern, arg_value);
            let pattern_no_space = format!("{{${}}}", arg_key);
            result = result.replace(&pattern_no_space, arg_value);
        }
        result
    }

    /// Switch the active language, persist the choice, and update the
    /// document direction and language tag.
    pub fn set_language(&mut self, language: Language, document: &mut DocumentState) {
        self.language = language;
        match serde_json::to_string(language.code()) {
            Ok(encoded) => {
                if let Err(e) = self.store.set(LANGUAGE_KEY, &encoded) {
                    tracing::warn!("could not persist language preference: {e}");
                }
            }
            Err(e) => tracing::warn!("could not encode language preference: {e}"),
        }
        self.apply_to_document(document);
    }

    /// Re-apply the direction and language attributes for the active
    /// language. Idempotent; used at startup and after a language switch.
    pub fn apply_to_document(&self, document: &mut DocumentState) {
        document.set_direction(self.language.direction());
        document.set_lang(self.language.code());
    }
}

fn load_language(store: &dyn PreferenceStore) -> Language {
    match store.get(LANGUAGE_KEY) {
        Ok(Some(raw)) => serde_json::from_str::<String>(&raw)
            .ok()
            .and_then(|code| Language::from_code(&code))
            .unwrap_or_default(),
        Ok(None) => Language::default(),
        Err(e) => {
            tracing::debug!("language preference unavailable: {e}");
            Language::default()
        }
    }
}
