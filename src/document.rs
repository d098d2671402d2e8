//! Document-level presentation state.
//!
//! The desktop equivalent of the browser's top-level document: reading
//! direction, language tag, the set of active presentation classes, and the
//! managed font-size override. Services mutate this value and the rendering
//! layer reads it each frame, so every global effect stays observable in
//! tests without a live UI.

use std::collections::BTreeSet;

use crate::accessibility::DocumentEffects;
use crate::i18n::Direction;

/// Mutable document state driven by the localization and accessibility
/// services.
///
/// Direction and language have a single writer (`Localizer::set_language`);
/// classes and the font override are reconciled from a settings snapshot by
/// `DocumentState::apply_effects`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentState {
    direction: Direction,
    lang: String,
    classes: BTreeSet<String>,
    font_size_override: Option<u32>,
}

impl Default for DocumentState {
    fn default() -> Self {
        Self {
            direction: Direction::Rtl,
            lang: "he".to_string(),
            classes: BTreeSet::new(),
            font_size_override: None,
        }
    }
}

impl DocumentState {
    /// Create a document with the default (Hebrew, right-to-left) attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current reading direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Set the reading direction attribute.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Current language tag.
    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// Set the language tag attribute.
    pub fn set_lang(&mut self, lang: &str) {
        self.lang = lang.to_string();
    }

    /// Whether a presentation class is currently active.
    pub fn has_class(&self, name: &str) -> bool {
        self.classes.contains(name)
    }

    /// Toggle a presentation class on or off.
    pub fn set_class(&mut self, name: &str, active: bool) {
        if active {
            self.classes.insert(name.to_string());
        } else {
            self.classes.remove(name);
        }
    }

    /// The active class set, ordered.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(|s| s.as_str())
    }

    /// The managed font-size override, if one is injected.
    pub fn font_size_override(&self) -> Option<u32> {
        self.font_size_override
    }

    /// Replace or remove the managed font-size override.
    pub fn set_font_size_override(&mut self, px: Option<u32>) {
        self.font_size_override = px;
    }

    /// Reconcile classes and the font override from a computed effect set.
    ///
    /// Idempotent: applying the same effects twice leaves the document
    /// unchanged, and applying the effects of a reverted snapshot restores
    /// the prior state exactly.
    pub fn apply_effects(&mut self, effects: &DocumentEffects) {
        for (class, active) in effects.classes() {
            self.set_class(class, active);
        }
        self.set_font_size_override(effects.font_size_override);
    }
}
