//! Call-to-action buttons opening the messaging deep links.

use egui::Ui;

use crate::contact::{tel_url, whatsapp_url, OFFICE_PHONE};
use crate::i18n::Localizer;

/// Which channel the button opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactAction {
    WhatsApp,
    Phone,
}

/// Draw a contact CTA button; clicking opens the external handler.
pub fn contact_button(ui: &mut Ui, localizer: &Localizer, action: ContactAction) {
    let (label_key, url) = match action {
        ContactAction::WhatsApp => ("contact.whatsapp", whatsapp_url(OFFICE_PHONE)),
        ContactAction::Phone => ("contact.call", tel_url(OFFICE_PHONE)),
    };
    let label = match action {
        ContactAction::WhatsApp => format!("💬 {}", localizer.translate(label_key)),
        ContactAction::Phone => format!("📞 {}", localizer.translate(label_key)),
    };
    if ui.button(label).clicked() {
        ui.ctx().open_url(egui::OpenUrl::new_tab(url));
    }
}
