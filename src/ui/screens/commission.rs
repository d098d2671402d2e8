//! Commission calculator screen.

use egui::{RichText, Ui};

use crate::catalog::PropertyType;
use crate::commission::{calculate_commission, price_per_sqm, DealType};
use crate::i18n::Localizer;
use crate::ui::format_currency;

/// Commission calculator state.
pub struct CommissionScreen {
    deal_type: DealType,
    property_type: PropertyType,
    price_input: String,
    area_input: String,
}

impl Default for CommissionScreen {
    fn default() -> Self {
        Self {
            deal_type: DealType::Rent,
            property_type: PropertyType::Office,
            price_input: String::new(),
            area_input: String::new(),
        }
    }
}

impl CommissionScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, ui: &mut Ui, localizer: &Localizer) {
        ui.label(
            RichText::new(localizer.translate("commission.title"))
                .strong()
                .size(24.0),
        );
        ui.label(RichText::new(localizer.translate("commission.subtitle")).weak());
        ui.add_space(12.0);

        ui.columns(2, |columns| {
            self.input_column(&mut columns[0], localizer);
            self.result_column(&mut columns[1], localizer);
        });
    }

    fn input_column(&mut self, ui: &mut Ui, localizer: &Localizer) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                RichText::new(localizer.translate("commission.deal_details"))
                    .strong()
                    .size(16.0),
            );
            ui.label(RichText::new(localizer.translate("commission.deal_details_desc")).weak());
            ui.add_space(8.0);

            ui.label(localizer.translate("commission.deal_type"));
            ui.horizontal(|ui| {
                for deal in [DealType::Rent, DealType::Sale] {
                    if ui
                        .selectable_label(self.deal_type == deal, localizer.translate(deal.label_key()))
                        .clicked()
                    {
                        self.deal_type = deal;
                    }
                }
            });
            ui.add_space(6.0);

            ui.label(localizer.translate("commission.property_type"));
            ui.horizontal(|ui| {
                for kind in PropertyType::all() {
                    let key = match kind {
                        PropertyType::Office => "commission.office",
                        PropertyType::Commercial => "commission.commercial",
                        PropertyType::Building => "commission.building",
                    };
                    if ui
                        .selectable_label(self.property_type == *kind, localizer.translate(key))
                        .clicked()
                    {
                        self.property_type = *kind;
                    }
                }
            });
            ui.add_space(6.0);

            let price_key = match self.deal_type {
                DealType::Rent => "commission.price_rent",
                DealType::Sale => "commission.price",
            };
            ui.label(localizer.translate(price_key));
            ui.text_edit_singleline(&mut self.price_input);

            ui.label(localizer.translate("commission.area"));
            ui.text_edit_singleline(&mut self.area_input);

            ui.add_space(8.0);
            let rate_key = match self.deal_type {
                DealType::Rent => "commission.rate_rent",
                DealType::Sale => "commission.rate_sale",
            };
            ui.label(RichText::new(localizer.translate(rate_key)).small().weak());
        });
    }

    fn result_column(&mut self, ui: &mut Ui, localizer: &Localizer) {
        let price = self.price_input.trim().parse::<f64>().unwrap_or(0.0);
        let area = self.area_input.trim().parse::<f64>().unwrap_or(0.0);
        let commission = calculate_commission(self.property_type, self.deal_type, price);

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                RichText::new(localizer.translate("commission.result"))
                    .strong()
                    .size(16.0),
            );
            ui.add_space(8.0);

            let display = if commission > 0.0 {
                format_currency(commission)
            } else {
                "---".to_string()
            };
            ui.label(RichText::new(display).strong().size(28.0));
            ui.label(RichText::new(localizer.translate("commission.vat_note")).small().weak());

            if let Some(per_sqm) = price_per_sqm(price, area) {
                ui.add_space(8.0);
                ui.separator();
                ui.label(format!(
                    "{}: {}",
                    localizer.translate("commission.price_per_sqm"),
                    format_currency(per_sqm)
                ));
            }
        });
    }
}
