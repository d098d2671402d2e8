//! Accessibility preference engine: snapshot, document effects, persistence.

use std::sync::Arc;

use crate::document::DocumentState;
use crate::i18n::Language;
use crate::prefs::{PreferenceStore, ACCESSIBILITY_KEY};

use super::effects::DocumentEffects;
use super::settings::{
    AccessibilitySettings, ContrastMode, FONT_SIZE_MAX, FONT_SIZE_MIN, FONT_SIZE_STEP,
};

/// Preference engine owning the current settings snapshot.
///
/// Every mutation replaces the snapshot, re-applies the document effects, and
/// persists the full snapshot. Persistence failures degrade to "preference
/// not saved across reloads"; no operation fails upward.
pub struct AccessibilityEngine {
    settings: AccessibilitySettings,
    store: Arc<dyn PreferenceStore>,
}

impl AccessibilityEngine {
    /// Create the engine, restoring the persisted snapshot.
    ///
    /// A missing or unparseable blob yields the full first-load defaults;
    /// the speech language inside them derives from `language` now and is
    /// not re-derived on later language switches.
    pub fn initialize(store: Arc<dyn PreferenceStore>, language: Language) -> Self {
        let settings = load_settings(store.as_ref(), language);
        Self { settings, store }
    }

    /// The current snapshot.
    pub fn settings(&self) -> &AccessibilitySettings {
        &self.settings
    }

    /// The document effects implied by the current snapshot.
    pub fn effects(&self) -> DocumentEffects {
        DocumentEffects::compute(&self.settings)
    }

    /// Re-apply the current effects to a document. Idempotent.
    pub fn apply_to_document(&self, document: &mut DocumentState) {
        document.apply_effects(&self.effects());
    }

    fn commit(&mut self, settings: AccessibilitySettings, document: &mut DocumentState) {
        self.settings = settings;
        self.apply_to_document(document);
        match serde_json::to_string(&self.settings) {
            Ok(encoded) => {
                if let Err(e) = self.store.set(ACCESSIBILITY_KEY, &encoded) {
                    tracing::warn!("could not persist accessibility settings: {e}");
                }
            }
            Err(e) => tracing::warn!("could not encode accessibility settings: {e}"),
        }
    }

    /// Set the text size in pixels, clamped to the documented bounds.
    pub fn set_font_size(&mut self, px: u32, document: &mut DocumentState) {
        let mut settings = self.settings.clone();
        settings.font_size = px.clamp(FONT_SIZE_MIN, FONT_SIZE_MAX);
        self.commit(settings, document);
    }

    /// Step the text size up. No-op at the upper bound.
    pub fn increase_font_size(&mut self, document: &mut DocumentState) {
        if self.settings.font_size < FONT_SIZE_MAX {
            self.set_font_size(self.settings.font_size + FONT_SIZE_STEP, document);
        }
    }

    /// Step the text size down. No-op at the lower bound.
    pub fn decrease_font_size(&mut self, document: &mut DocumentState) {
        if self.settings.font_size > FONT_SIZE_MIN {
            self.set_font_size(self.settings.font_size - FONT_SIZE_STEP, document);
        }
    }

    pub fn set_contrast(&mut self, mode: ContrastMode, document: &mut DocumentState) {
        let mut settings = self.settings.clone();
        settings.contrast = mode;
        self.commit(settings, document);
    }

    pub fn set_dark_mode(&mut self, enabled: bool, document: &mut DocumentState) {
        let mut settings = self.settings.clone();
        settings.dark_mode = enabled;
        self.commit(settings, document);
    }

    pub fn set_highlight_links(&mut self, enabled: bool, document: &mut DocumentState) {
        let mut settings = self.settings.clone();
        settings.highlight_links = enabled;
        self.commit(settings, document);
    }

    pub fn set_big_cursor(&mut self, enabled: bool, document: &mut DocumentState) {
        let mut settings = self.settings.clone();
        settings.big_cursor = enabled;
        self.commit(settings, document);
    }

    pub fn set_pause_animations(&mut self, enabled: bool, document: &mut DocumentState) {
        let mut settings = self.settings.clone();
        settings.pause_animations = enabled;
        self.commit(settings, document);
    }

    pub fn set_screen_reader(&mut self, enabled: bool, document: &mut DocumentState) {
        let mut settings = self.settings.clone();
        settings.screen_reader = enabled;
        self.commit(settings, document);
    }

    /// Toggle the text-to-speech preference. Narration itself is performed
    /// by platform assistive technology; only the flag is kept here.
    pub fn set_speech_enabled(&mut self, enabled: bool, document: &mut DocumentState) {
        let mut settings = self.settings.clone();
        settings.text_to_speech_enabled = Some(enabled);
        self.commit(settings, document);
    }

    /// Restore the reset defaults (which omit the speech fields) and persist
    /// them.
    pub fn reset(&mut self, document: &mut DocumentState) {
        self.commit(AccessibilitySettings::reset_defaults(), document);
    }
}

fn load_settings(store: &dyn PreferenceStore, language: Language) -> AccessibilitySettings {
    match store.get(ACCESSIBILITY_KEY) {
        Ok(Some(raw)) => match serde_json::from_str::<AccessibilitySettings>(&raw) {
            Ok(settings) => settings.clamped(),
            Err(e) => {
                tracing::warn!("could not parse accessibility settings: {e}");
                AccessibilitySettings::first_load_defaults(language)
            }
        },
        Ok(None) => AccessibilitySettings::first_load_defaults(language),
        Err(e) => {
            tracing::debug!("accessibility settings unavailable: {e}");
            AccessibilitySettings::first_load_defaults(language)
        }
    }
}
