//! Pure computation of document effects from a settings snapshot.
//!
//! `DocumentEffects::compute` is a function of the snapshot alone; applying
//! the result to a document (or to the egui theme) is a separate step. This
//! keeps every global effect testable without a rendering environment.

use super::settings::{AccessibilitySettings, ContrastMode, FONT_SIZE_DEFAULT};

/// Presentation class names toggled on the document body.
pub mod classes {
    pub const FONT_RESIZE: &str = "accessibility-font-resize";
    pub const DARK_MODE: &str = "dark-mode";
    pub const HIGH_CONTRAST: &str = "high-contrast";
    pub const HIGHLIGHT_LINKS: &str = "highlight-links";
    pub const BIG_CURSOR: &str = "big-cursor";
    pub const PAUSE_ANIMATIONS: &str = "pause-animations";
}

/// Whole-viewport color filter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportFilter {
    /// Contrast multiplier; 1.0 leaves contrast unchanged.
    pub contrast: f32,
    /// Brightness multiplier; 1.0 leaves brightness unchanged.
    pub brightness: f32,
    /// Invert all colors.
    pub invert: bool,
    /// Hue rotation in degrees applied after inversion.
    pub hue_rotate_deg: f32,
}

/// Counter-filter for embedded media (images, video, inline graphics) while
/// the viewport is inverted, so the media itself does not appear inverted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MediaFilter {
    pub hue_rotate_deg: f32,
}

/// Forced high-visibility link styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkHighlight {
    pub background: [u8; 3],
    pub foreground: [u8; 3],
    pub border: [u8; 3],
    pub underline: bool,
}

impl Default for LinkHighlight {
    fn default() -> Self {
        Self {
            background: [255, 255, 0],
            foreground: [0, 0, 0],
            border: [255, 0, 0],
            underline: true,
        }
    }
}

/// The declarative effect set implied by one settings snapshot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DocumentEffects {
    /// Font-size override in pixels. `None` at the default size: at exactly
    /// the default, no override exists at all, which is distinct from an
    /// override that happens to equal the default.
    pub font_size_override: Option<u32>,
    pub viewport_filter: Option<ViewportFilter>,
    pub media_counter_filter: Option<MediaFilter>,
    pub link_highlight: Option<LinkHighlight>,
    pub big_cursor: bool,
    pub animations_paused: bool,
    pub screen_reader: bool,
}

impl DocumentEffects {
    /// Compute the effect set for a settings snapshot.
    pub fn compute(settings: &AccessibilitySettings) -> Self {
        let high_contrast = settings.contrast == ContrastMode::High;

        let font_size_override =
            (settings.font_size != FONT_SIZE_DEFAULT).then_some(settings.font_size);

        let viewport_filter = (settings.dark_mode || high_contrast).then_some(ViewportFilter {
            contrast: if high_contrast { 2.0 } else { 1.0 },
            brightness: 1.0,
            invert: settings.dark_mode,
            hue_rotate_deg: if settings.dark_mode { 180.0 } else { 0.0 },
        });

        let media_counter_filter = settings.dark_mode.then_some(MediaFilter {
            hue_rotate_deg: 180.0,
        });

        let link_highlight = settings.highlight_links.then_some(LinkHighlight::default());

        Self {
            font_size_override,
            viewport_filter,
            media_counter_filter,
            link_highlight,
            big_cursor: settings.big_cursor,
            animations_paused: settings.pause_animations,
            screen_reader: settings.screen_reader,
        }
    }

    /// The body-class toggle list equivalent to this effect set.
    pub fn classes(&self) -> [(&'static str, bool); 6] {
        [
            (classes::FONT_RESIZE, self.font_size_override.is_some()),
            (
                classes::DARK_MODE,
                self.viewport_filter.is_some_and(|f| f.invert),
            ),
            (
                classes::HIGH_CONTRAST,
                self.viewport_filter.is_some_and(|f| f.contrast > 1.0),
            ),
            (classes::HIGHLIGHT_LINKS, self.link_highlight.is_some()),
            (classes::BIG_CURSOR, self.big_cursor),
            (classes::PAUSE_ANIMATIONS, self.animations_paused),
        ]
    }
}
