//! UI theme definitions and the mapping from accessibility effects to egui.

use egui::{Color32, Visuals};

use crate::accessibility::settings::FONT_SIZE_DEFAULT;
use crate::accessibility::DocumentEffects;

/// Theme configuration for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Get the egui Visuals for this theme.
    pub fn visuals(&self) -> Visuals {
        match self {
            Theme::Dark => dark_visuals(),
            Theme::Light => light_visuals(),
        }
    }
}

/// Dark theme colors.
pub struct DarkTheme;

impl DarkTheme {
    pub const BACKGROUND: Color32 = Color32::from_rgb(16, 20, 28);
    pub const PANEL_BG: Color32 = Color32::from_rgb(24, 30, 42);
    pub const CARD_BG: Color32 = Color32::from_rgb(34, 42, 56);
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 242, 246);
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(158, 166, 180);
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    pub const SUCCESS: Color32 = Color32::from_rgb(52, 168, 83);
    pub const WARNING: Color32 = Color32::from_rgb(251, 188, 4);
    pub const ERROR: Color32 = Color32::from_rgb(234, 67, 53);
    pub const BORDER: Color32 = Color32::from_rgb(56, 64, 80);
}

/// Light theme colors.
pub struct LightTheme;

impl LightTheme {
    pub const BACKGROUND: Color32 = Color32::from_rgb(248, 250, 252);
    pub const PANEL_BG: Color32 = Color32::from_rgb(255, 255, 255);
    pub const CARD_BG: Color32 = Color32::from_rgb(241, 245, 249);
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(30, 36, 46);
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(90, 100, 114);
    pub const ACCENT: Color32 = Color32::from_rgb(29, 78, 216);
    pub const SUCCESS: Color32 = Color32::from_rgb(24, 128, 56);
    pub const WARNING: Color32 = Color32::from_rgb(234, 160, 0);
    pub const ERROR: Color32 = Color32::from_rgb(200, 50, 40);
    pub const BORDER: Color32 = Color32::from_rgb(216, 222, 230);
}

fn dark_visuals() -> Visuals {
    let mut visuals = Visuals::dark();

    visuals.window_fill = DarkTheme::PANEL_BG;
    visuals.panel_fill = DarkTheme::PANEL_BG;
    visuals.faint_bg_color = DarkTheme::CARD_BG;
    visuals.extreme_bg_color = DarkTheme::BACKGROUND;

    visuals.widgets.noninteractive.bg_fill = DarkTheme::CARD_BG;
    visuals.widgets.inactive.bg_fill = DarkTheme::CARD_BG;
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(46, 56, 74);
    visuals.widgets.active.bg_fill = DarkTheme::ACCENT;

    visuals.selection.bg_fill = DarkTheme::ACCENT.linear_multiply(0.4);
    visuals.selection.stroke.color = DarkTheme::ACCENT;

    visuals.widgets.noninteractive.fg_stroke.color = DarkTheme::TEXT_PRIMARY;
    visuals.widgets.inactive.fg_stroke.color = DarkTheme::TEXT_SECONDARY;
    visuals.widgets.hovered.fg_stroke.color = DarkTheme::TEXT_PRIMARY;
    visuals.widgets.active.fg_stroke.color = DarkTheme::TEXT_PRIMARY;

    visuals.widgets.noninteractive.bg_stroke.color = DarkTheme::BORDER;
    visuals.widgets.inactive.bg_stroke.color = DarkTheme::BORDER;

    visuals.hyperlink_color = DarkTheme::ACCENT;

    visuals
}

fn light_visuals() -> Visuals {
    let mut visuals = Visuals::light();

    visuals.window_fill = LightTheme::PANEL_BG;
    visuals.panel_fill = LightTheme::PANEL_BG;
    visuals.faint_bg_color = LightTheme::CARD_BG;
    visuals.extreme_bg_color = LightTheme::BACKGROUND;

    visuals.widgets.noninteractive.bg_fill = LightTheme::CARD_BG;
    visuals.widgets.inactive.bg_fill = LightTheme::CARD_BG;
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(226, 232, 240);
    visuals.widgets.active.bg_fill = LightTheme::ACCENT;

    visuals.selection.bg_fill = LightTheme::ACCENT.linear_multiply(0.3);
    visuals.selection.stroke.color = LightTheme::ACCENT;

    visuals.widgets.noninteractive.fg_stroke.color = LightTheme::TEXT_PRIMARY;
    visuals.widgets.inactive.fg_stroke.color = LightTheme::TEXT_SECONDARY;
    visuals.widgets.hovered.fg_stroke.color = LightTheme::TEXT_PRIMARY;

    visuals.widgets.noninteractive.bg_stroke.color = LightTheme::BORDER;
    visuals.widgets.inactive.bg_stroke.color = LightTheme::BORDER;

    visuals.hyperlink_color = LightTheme::ACCENT;

    visuals
}

/// High contrast theme colors meeting WCAG AAA requirements (7:1 ratio).
pub struct HighContrastTheme;

impl HighContrastTheme {
    pub const BACKGROUND: Color32 = Color32::BLACK;
    pub const PANEL_BG: Color32 = Color32::from_rgb(10, 10, 10);
    pub const CARD_BG: Color32 = Color32::from_rgb(20, 20, 20);
    pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(220, 220, 220);
    pub const ACCENT: Color32 = Color32::from_rgb(0, 200, 255);
    pub const BORDER: Color32 = Color32::WHITE;

    /// Create high contrast visuals.
    pub fn visuals() -> Visuals {
        let mut visuals = Visuals::dark();

        visuals.window_fill = Self::PANEL_BG;
        visuals.panel_fill = Self::PANEL_BG;
        visuals.faint_bg_color = Self::CARD_BG;
        visuals.extreme_bg_color = Self::BACKGROUND;

        visuals.widgets.noninteractive.bg_fill = Self::CARD_BG;
        visuals.widgets.inactive.bg_fill = Self::CARD_BG;
        visuals.widgets.hovered.bg_fill = Color32::from_rgb(40, 40, 40);
        visuals.widgets.active.bg_fill = Self::ACCENT;

        visuals.selection.bg_fill = Self::ACCENT.linear_multiply(0.5);
        visuals.selection.stroke.color = Self::ACCENT;

        visuals.widgets.noninteractive.fg_stroke.color = Self::TEXT_PRIMARY;
        visuals.widgets.inactive.fg_stroke.color = Self::TEXT_SECONDARY;
        visuals.widgets.hovered.fg_stroke.color = Self::TEXT_PRIMARY;
        visuals.widgets.active.fg_stroke.color = Self::BACKGROUND;

        // Borders stay prominent
        visuals.widgets.noninteractive.bg_stroke.color = Self::BORDER;
        visuals.widgets.inactive.bg_stroke.color = Self::BORDER;
        visuals.widgets.noninteractive.bg_stroke.width = 1.5;
        visuals.widgets.inactive.bg_stroke.width = 1.5;

        visuals.hyperlink_color = Self::ACCENT;

        visuals
    }

    /// Calculate contrast ratio between two colors (1..=21).
    pub fn contrast_ratio(fg: Color32, bg: Color32) -> f32 {
        let fg_lum = Self::relative_luminance(fg);
        let bg_lum = Self::relative_luminance(bg);

        let (lighter, darker) = if fg_lum > bg_lum {
            (fg_lum, bg_lum)
        } else {
            (bg_lum, fg_lum)
        };

        (lighter + 0.05) / (darker + 0.05)
    }

    /// Relative luminance per WCAG 2.1.
    fn relative_luminance(color: Color32) -> f32 {
        let r = Self::linearize(color.r() as f32 / 255.0);
        let g = Self::linearize(color.g() as f32 / 255.0);
        let b = Self::linearize(color.b() as f32 / 255.0);

        0.2126 * r + 0.7152 * g + 0.0722 * b
    }

    fn linearize(value: f32) -> f32 {
        if value <= 0.03928 {
            value / 12.92
        } else {
            ((value + 0.055) / 1.055).powf(2.4)
        }
    }

    /// Whether the pair meets WCAG AAA (7:1 for normal text).
    pub fn meets_aaa(fg: Color32, bg: Color32) -> bool {
        Self::contrast_ratio(fg, bg) >= 7.0
    }
}

/// Visuals for a theme under the current accessibility effects.
///
/// High contrast wins over everything; the dark-mode inversion flips the
/// base palette (a light theme renders dark and vice versa), which is the
/// closest desktop equivalent of a whole-viewport color inversion while
/// embedded imagery is drawn from its own sources and stays un-inverted.
pub fn themed_visuals(theme: Theme, effects: &DocumentEffects) -> Visuals {
    let high_contrast = effects.viewport_filter.is_some_and(|f| f.contrast > 1.0);
    let inverted = effects.viewport_filter.is_some_and(|f| f.invert);

    let mut visuals = if high_contrast {
        HighContrastTheme::visuals()
    } else {
        match (theme, inverted) {
            (Theme::Dark, false) | (Theme::Light, true) => dark_visuals(),
            (Theme::Light, false) | (Theme::Dark, true) => light_visuals(),
        }
    };

    if let Some(link) = effects.link_highlight {
        visuals.hyperlink_color =
            Color32::from_rgb(link.background[0], link.background[1], link.background[2]);
    }

    visuals
}

/// Push the theme and the current accessibility effects onto a context.
///
/// Re-derived from the egui defaults every time, so repeated application
/// does not compound scaling and toggling an effect off restores the
/// baseline exactly.
pub fn apply_to_context(ctx: &egui::Context, theme: Theme, effects: &DocumentEffects) {
    let defaults = egui::Style::default();
    let mut style = (*ctx.style()).clone();

    style.text_styles = defaults.text_styles.clone();
    if let Some(px) = effects.font_size_override {
        let scale = px as f32 / FONT_SIZE_DEFAULT as f32;
        for font_id in style.text_styles.values_mut() {
            font_id.size *= scale;
        }
    }

    style.animation_time = if effects.animations_paused {
        0.0
    } else {
        defaults.animation_time
    };

    style.visuals = themed_visuals(theme, effects);
    ctx.set_style(style);

    if effects.big_cursor {
        ctx.output_mut(|o| o.cursor_icon = egui::CursorIcon::PointingHand);
    }
}
