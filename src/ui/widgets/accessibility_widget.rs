//! Floating accessibility-settings widget.
//!
//! A bubble pinned to the bottom corner that expands into the settings
//! panel. Every control drives the preference engine, which applies and
//! persists each change; the panel layout mirrors the active direction.

use egui::{Align2, Area, Color32, Frame, RichText, Ui};

use crate::accessibility::settings::{FONT_SIZE_MAX, FONT_SIZE_MIN};
use crate::accessibility::{AccessibilityEngine, ContrastMode};
use crate::document::DocumentState;
use crate::i18n::Localizer;

const BUBBLE_BLUE: Color32 = Color32::from_rgb(37, 99, 235);

/// Widget state: only the expansion flag lives here; the settings belong to
/// the engine.
#[derive(Default)]
pub struct AccessibilityWidget {
    expanded: bool,
}

impl AccessibilityWidget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the bubble and, when expanded, the settings panel.
    pub fn show(
        &mut self,
        ctx: &egui::Context,
        localizer: &Localizer,
        engine: &mut AccessibilityEngine,
        document: &mut DocumentState,
    ) {
        let rtl = localizer.direction().is_rtl();
        // The bubble sits opposite the WhatsApp bubble.
        let anchor = if rtl {
            Align2::RIGHT_BOTTOM
        } else {
            Align2::LEFT_BOTTOM
        };
        let offset = if rtl { [-16.0, -16.0] } else { [16.0, -16.0] };

        Area::new(egui::Id::new("accessibility-bubble"))
            .anchor(anchor, offset)
            .show(ctx, |ui| {
                let icon = if self.expanded { "✕" } else { "♿" };
                let button = egui::Button::new(RichText::new(icon).size(22.0))
                    .fill(BUBBLE_BLUE)
                    .corner_radius(24.0)
                    .min_size(egui::vec2(48.0, 48.0));
                let hover_key = if self.expanded {
                    "accessibility.close"
                } else {
                    "accessibility.open"
                };
                if ui
                    .add(button)
                    .on_hover_text(localizer.translate(hover_key))
                    .clicked()
                {
                    self.expanded = !self.expanded;
                }
            });

        if !self.expanded {
            return;
        }

        let panel_offset = if rtl { [-16.0, -76.0] } else { [16.0, -76.0] };
        Area::new(egui::Id::new("accessibility-panel"))
            .anchor(anchor, panel_offset)
            .show(ctx, |ui| {
                Frame::window(ui.style()).show(ui, |ui| {
                    ui.set_width(280.0);
                    let layout = if rtl {
                        egui::Layout::top_down(egui::Align::Max)
                    } else {
                        egui::Layout::top_down(egui::Align::Min)
                    };
                    ui.with_layout(layout, |ui| {
                        self.panel_contents(ui, localizer, engine, document);
                    });
                });
            });
    }

    fn panel_contents(
        &mut self,
        ui: &mut Ui,
        localizer: &Localizer,
        engine: &mut AccessibilityEngine,
        document: &mut DocumentState,
    ) {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(localizer.translate("accessibility.title"))
                    .strong()
                    .size(15.0),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .small_button("✕")
                    .on_hover_text(localizer.translate("accessibility.close"))
                    .clicked()
                {
                    self.expanded = false;
                }
            });
        });
        ui.separator();

        // Font size stepper
        ui.label(RichText::new(localizer.translate("accessibility.font_size")).strong());
        ui.horizontal(|ui| {
            let font_size = engine.settings().font_size;
            if ui
                .add_enabled(font_size > FONT_SIZE_MIN, egui::Button::new("−"))
                .on_hover_text(localizer.translate("accessibility.font_decrease"))
                .clicked()
            {
                engine.decrease_font_size(document);
            }
            ui.label(RichText::new(format!("{font_size}px")).monospace());
            if ui
                .add_enabled(font_size < FONT_SIZE_MAX, egui::Button::new("+"))
                .on_hover_text(localizer.translate("accessibility.font_increase"))
                .clicked()
            {
                engine.increase_font_size(document);
            }
        });
        ui.add_space(6.0);
        ui.separator();

        // Visual settings
        ui.label(RichText::new(localizer.translate("accessibility.visual_settings")).strong());

        let mut dark_mode = engine.settings().dark_mode;
        if ui
            .checkbox(
                &mut dark_mode,
                localizer.translate("accessibility.dark_mode"),
            )
            .changed()
        {
            engine.set_dark_mode(dark_mode, document);
        }

        let mut high_contrast = engine.settings().contrast == ContrastMode::High;
        if ui
            .checkbox(
                &mut high_contrast,
                localizer.translate("accessibility.high_contrast"),
            )
            .changed()
        {
            let mode = if high_contrast {
                ContrastMode::High
            } else {
                ContrastMode::Normal
            };
            engine.set_contrast(mode, document);
        }

        let mut highlight_links = engine.settings().highlight_links;
        if ui
            .checkbox(
                &mut highlight_links,
                localizer.translate("accessibility.highlight_links"),
            )
            .changed()
        {
            engine.set_highlight_links(highlight_links, document);
        }

        ui.add_space(6.0);
        ui.separator();

        // Navigation & interaction
        ui.label(RichText::new(localizer.translate("accessibility.navigation")).strong());

        let mut big_cursor = engine.settings().big_cursor;
        if ui
            .checkbox(
                &mut big_cursor,
                localizer.translate("accessibility.big_cursor"),
            )
            .changed()
        {
            engine.set_big_cursor(big_cursor, document);
        }

        let mut pause_animations = engine.settings().pause_animations;
        if ui
            .checkbox(
                &mut pause_animations,
                localizer.translate("accessibility.pause_animations"),
            )
            .changed()
        {
            engine.set_pause_animations(pause_animations, document);
        }

        let mut screen_reader = engine.settings().screen_reader;
        if ui
            .checkbox(
                &mut screen_reader,
                localizer.translate("accessibility.screen_reader"),
            )
            .changed()
        {
            engine.set_screen_reader(screen_reader, document);
        }

        ui.add_space(6.0);
        ui.separator();

        if ui
            .button(format!("↺ {}", localizer.translate("accessibility.reset")))
            .on_hover_text(localizer.translate("accessibility.reset_desc"))
            .clicked()
        {
            engine.reset(document);
        }

        ui.add_space(4.0);
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(localizer.translate("accessibility.powered_by"))
                    .small()
                    .weak(),
            );
        });
    }
}
