//! Floating WhatsApp bubble.

use egui::{Align2, Area, Color32, Context, RichText};

use crate::contact::{whatsapp_url, OFFICE_PHONE};
use crate::i18n::Localizer;

const BUBBLE_GREEN: Color32 = Color32::from_rgb(37, 211, 102);

/// Draw the floating bubble at the bottom end-corner (mirrored under RTL)
/// opening a chat with the office number.
pub fn whatsapp_bubble(ctx: &Context, localizer: &Localizer) {
    let anchor = if localizer.direction().is_rtl() {
        Align2::LEFT_BOTTOM
    } else {
        Align2::RIGHT_BOTTOM
    };
    let offset = if localizer.direction().is_rtl() {
        [16.0, -16.0]
    } else {
        [-16.0, -16.0]
    };

    Area::new(egui::Id::new("whatsapp-bubble"))
        .anchor(anchor, offset)
        .show(ctx, |ui| {
            let button = egui::Button::new(RichText::new("💬").size(22.0))
                .fill(BUBBLE_GREEN)
                .corner_radius(24.0)
                .min_size(egui::vec2(48.0, 48.0));
            if ui
                .add(button)
                .on_hover_text(localizer.translate("contact.whatsapp"))
                .clicked()
            {
                ui.ctx()
                    .open_url(egui::OpenUrl::new_tab(whatsapp_url(OFFICE_PHONE)));
            }
        });
}
