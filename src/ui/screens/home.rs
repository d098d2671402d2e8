//! Landing screen: hero, key figures, featured listings.

use egui::{RichText, Ui};

use crate::catalog::{fixtures, Property};
use crate::i18n::{Language, Localizer};
use crate::ui::widgets::{contact_button, property_card, ContactAction};

use super::Screen;

/// Landing screen state (featured listings cached per language).
#[derive(Default)]
pub struct HomeScreen {
    language: Option<Language>,
    featured: Vec<Property>,
}

impl HomeScreen {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_data(&mut self, language: Language) {
        if self.language != Some(language) {
            let mut listings = fixtures::properties(language);
            listings.retain(|p| p.status.is_available());
            listings.truncate(3);
            self.featured = listings;
            self.language = Some(language);
        }
    }

    /// Draw the screen; returns a navigation request, if any.
    pub fn show(&mut self, ui: &mut Ui, localizer: &Localizer) -> Option<Screen> {
        self.ensure_data(localizer.language());
        let mut navigate = None;

        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.label(
                RichText::new(localizer.translate("hero.title"))
                    .strong()
                    .size(30.0),
            );
            ui.add_space(8.0);
            ui.label(RichText::new(localizer.translate("hero.subtitle")).size(17.0));
            ui.add_space(16.0);

            ui.horizontal(|ui| {
                // Center the CTA pair
                let spacing = (ui.available_width() - 360.0).max(0.0) / 2.0;
                ui.add_space(spacing);
                if ui
                    .button(RichText::new(localizer.translate("hero.cta_properties")).size(16.0))
                    .clicked()
                {
                    navigate = Some(Screen::Properties);
                }
                if ui
                    .button(RichText::new(localizer.translate("hero.cta_contact")).size(16.0))
                    .clicked()
                {
                    navigate = Some(Screen::Contact);
                }
            });

            ui.add_space(24.0);
            ui.separator();
            ui.add_space(12.0);

            ui.columns(3, |columns| {
                stat(&mut columns[0], "120+", &localizer.translate("home.stats.properties"));
                stat(&mut columns[1], "20", &localizer.translate("home.stats.years"));
                stat(&mut columns[2], "800+", &localizer.translate("home.stats.clients"));
            });
        });

        ui.add_space(20.0);
        ui.label(
            RichText::new(localizer.translate("home.featured"))
                .strong()
                .size(20.0),
        );
        ui.add_space(8.0);

        for property in &self.featured {
            property_card(ui, localizer, property);
            ui.add_space(8.0);
        }

        if ui
            .link(localizer.translate("home.view_all"))
            .clicked()
        {
            navigate = Some(Screen::Properties);
        }

        ui.add_space(16.0);
        ui.horizontal(|ui| {
            contact_button(ui, localizer, ContactAction::WhatsApp);
            contact_button(ui, localizer, ContactAction::Phone);
        });

        navigate
    }
}

fn stat(ui: &mut Ui, value: &str, label: &str) {
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(value).strong().size(26.0));
        ui.label(RichText::new(label).weak());
    });
}
