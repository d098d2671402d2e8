//! Property listings screen with type/status filters and free-text search.

use egui::{RichText, Ui};

use crate::catalog::{fixtures, Property, PropertyFilter, PropertyStatus, PropertyType};
use crate::i18n::{Language, Localizer};
use crate::ui::widgets::property_card;

/// Listings screen state.
#[derive(Default)]
pub struct PropertiesScreen {
    language: Option<Language>,
    listings: Vec<Property>,
    filter: PropertyFilter,
}

impl PropertiesScreen {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_data(&mut self, language: Language) {
        if self.language != Some(language) {
            self.listings = fixtures::properties(language);
            self.language = Some(language);
        }
    }

    pub fn show(&mut self, ui: &mut Ui, localizer: &Localizer) {
        self.ensure_data(localizer.language());

        ui.label(
            RichText::new(localizer.translate("properties.title"))
                .strong()
                .size(24.0),
        );
        ui.label(RichText::new(localizer.translate("properties.subtitle")).weak());
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            ui.label(localizer.translate("properties.search"));
            ui.text_edit_singleline(&mut self.filter.query);
        });

        ui.horizontal(|ui| {
            if ui
                .selectable_label(
                    self.filter.property_type.is_none(),
                    localizer.translate("properties.filter.all"),
                )
                .clicked()
            {
                self.filter.property_type = None;
            }
            for kind in PropertyType::all() {
                let selected = self.filter.property_type == Some(*kind);
                if ui
                    .selectable_label(selected, localizer.translate(kind.label_key()))
                    .clicked()
                {
                    self.filter.property_type = (!selected).then_some(*kind);
                }
            }

            ui.separator();

            for status in [PropertyStatus::Rent, PropertyStatus::Sale] {
                let selected = self.filter.status == Some(status);
                let key = match status {
                    PropertyStatus::Rent => "properties.filter.rent",
                    _ => "properties.filter.sale",
                };
                if ui
                    .selectable_label(selected, localizer.translate(key))
                    .clicked()
                {
                    self.filter.status = (!selected).then_some(status);
                }
            }
        });

        ui.add_space(12.0);

        let visible = self.filter.apply(&self.listings);
        if visible.is_empty() {
            ui.label(RichText::new(localizer.translate("properties.empty")).weak());
            return;
        }
        for property in visible {
            property_card(ui, localizer, property);
            ui.add_space(8.0);
        }
    }
}
