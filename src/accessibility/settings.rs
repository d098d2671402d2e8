//! Accessibility settings snapshot and defaults.

use serde::{Deserialize, Serialize};

use crate::i18n::Language;

/// Smallest selectable text size in pixels.
pub const FONT_SIZE_MIN: u32 = 12;
/// Largest selectable text size in pixels.
pub const FONT_SIZE_MAX: u32 = 42;
/// Default text size; at exactly this value no override is injected.
pub const FONT_SIZE_DEFAULT: u32 = 16;
/// Step applied by the font-size increase/decrease operations.
pub const FONT_SIZE_STEP: u32 = 2;

/// Viewport contrast mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContrastMode {
    #[default]
    Normal,
    High,
}

/// The complete accessibility preference snapshot.
///
/// Serialized with the persisted wire names (camelCase keys under the
/// `accessibility-settings` storage key). Core fields default individually,
/// so a partial blob still loads into a fully defined snapshot. The speech
/// fields are optional on the wire: the first-load defaults populate them,
/// a reset omits them, and a blob without them keeps them absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilitySettings {
    /// Text size in pixels, kept within [`FONT_SIZE_MIN`], [`FONT_SIZE_MAX`].
    #[serde(default = "default_font_size")]
    pub font_size: u32,
    #[serde(default)]
    pub contrast: ContrastMode,
    #[serde(default)]
    pub dark_mode: bool,
    #[serde(default)]
    pub highlight_links: bool,
    #[serde(default)]
    pub big_cursor: bool,
    #[serde(default)]
    pub pause_animations: bool,
    #[serde(default)]
    pub screen_reader: bool,

    // Text-to-speech sub-preferences
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_to_speech: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_to_speech_voice: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_to_speech_rate: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_to_speech_pitch: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_to_speech_volume: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_to_speech_language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_to_speech_enabled: Option<bool>,
}

fn default_font_size() -> u32 {
    FONT_SIZE_DEFAULT
}

impl Default for AccessibilitySettings {
    fn default() -> Self {
        Self::first_load_defaults(Language::default())
    }
}

impl AccessibilitySettings {
    /// The full default snapshot used when no persisted blob exists.
    ///
    /// The speech language is derived from the active language at this
    /// moment only; later language switches do not re-derive it.
    pub fn first_load_defaults(language: Language) -> Self {
        Self {
            font_size: FONT_SIZE_DEFAULT,
            contrast: ContrastMode::Normal,
            dark_mode: false,
            highlight_links: false,
            big_cursor: false,
            pause_animations: false,
            screen_reader: false,
            text_to_speech: Some(false),
            text_to_speech_voice: Some("default".to_string()),
            text_to_speech_rate: Some(1.0),
            text_to_speech_pitch: Some(1.0),
            text_to_speech_volume: Some(1.0),
            text_to_speech_language: Some(language.speech_locale().to_string()),
            text_to_speech_enabled: Some(false),
        }
    }

    /// The snapshot installed by the reset operation.
    ///
    /// Deliberately narrower than the first-load defaults: the speech fields
    /// are omitted and stay omitted in the persisted blob. This mirrors the
    /// shipped behavior and is covered by tests rather than "fixed".
    pub fn reset_defaults() -> Self {
        Self {
            font_size: FONT_SIZE_DEFAULT,
            contrast: ContrastMode::Normal,
            dark_mode: false,
            highlight_links: false,
            big_cursor: false,
            pause_animations: false,
            screen_reader: false,
            text_to_speech: None,
            text_to_speech_voice: None,
            text_to_speech_rate: None,
            text_to_speech_pitch: None,
            text_to_speech_volume: None,
            text_to_speech_language: None,
            text_to_speech_enabled: None,
        }
    }

    /// Clamp the font size into its documented bounds.
    pub fn clamped(mut self) -> Self {
        self.font_size = self.font_size.clamp(FONT_SIZE_MIN, FONT_SIZE_MAX);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_blob_fills_core_defaults() {
        let settings: AccessibilitySettings =
            serde_json::from_str(r#"{"fontSize": 20, "contrast": "high"}"#).unwrap();

        assert_eq!(settings.font_size, 20);
        assert_eq!(settings.contrast, ContrastMode::High);
        assert!(!settings.dark_mode);
        assert!(!settings.highlight_links);
        assert!(!settings.big_cursor);
        assert!(!settings.pause_animations);
        assert!(!settings.screen_reader);
        assert!(settings.text_to_speech_rate.is_none());
    }

    #[test]
    fn test_reset_blob_omits_speech_keys() {
        let json = serde_json::to_string(&AccessibilitySettings::reset_defaults()).unwrap();
        assert!(!json.contains("textToSpeech"));
        assert!(json.contains("\"fontSize\":16"));
    }

    #[test]
    fn test_first_load_speech_language_follows_active_language() {
        let he = AccessibilitySettings::first_load_defaults(Language::Hebrew);
        let en = AccessibilitySettings::first_load_defaults(Language::English);
        assert_eq!(he.text_to_speech_language.as_deref(), Some("he-IL"));
        assert_eq!(en.text_to_speech_language.as_deref(), Some("en-US"));
    }
}
