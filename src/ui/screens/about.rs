//! About screen.

use egui::{RichText, Ui};

use crate::i18n::Localizer;

/// About screen (stateless).
#[derive(Default)]
pub struct AboutScreen;

impl AboutScreen {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut Ui, localizer: &Localizer) {
        ui.label(
            RichText::new(localizer.translate("about.title"))
                .strong()
                .size(24.0),
        );
        ui.label(RichText::new(localizer.translate("about.subtitle")).weak());
        ui.add_space(12.0);
        ui.label(localizer.translate("about.body"));
        ui.add_space(16.0);

        ui.columns(3, |columns| {
            value_card(
                &mut columns[0],
                &localizer.translate("about.values.trust"),
                &localizer.translate("about.values.trust_desc"),
            );
            value_card(
                &mut columns[1],
                &localizer.translate("about.values.experience"),
                &localizer.translate("about.values.experience_desc"),
            );
            value_card(
                &mut columns[2],
                &localizer.translate("about.values.service"),
                &localizer.translate("about.values.service_desc"),
            );
        });
    }
}

fn value_card(ui: &mut Ui, title: &str, description: &str) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(title).strong().size(16.0));
        ui.label(RichText::new(description).weak());
    });
}
