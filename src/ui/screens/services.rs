//! Brokerage services screen.

use egui::{RichText, Ui};

use crate::catalog::{fixtures, Service};
use crate::commission::DealType;
use crate::i18n::{Language, Localizer};

/// Services screen state.
#[derive(Default)]
pub struct ServicesScreen {
    language: Option<Language>,
    services: Vec<Service>,
}

impl ServicesScreen {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_data(&mut self, language: Language) {
        if self.language != Some(language) {
            self.services = fixtures::services(language);
            self.language = Some(language);
        }
    }

    pub fn show(&mut self, ui: &mut Ui, localizer: &Localizer) {
        self.ensure_data(localizer.language());

        ui.label(
            RichText::new(localizer.translate("services.title"))
                .strong()
                .size(24.0),
        );
        ui.label(RichText::new(localizer.translate("services.subtitle")).weak());
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            for badge in [
                "services.badges.guarantee",
                "services.badges.personal",
                "services.badges.experience",
            ] {
                ui.label(RichText::new(localizer.translate(badge)).small().strong());
                ui.add_space(8.0);
            }
        });
        ui.add_space(12.0);

        for service in &self.services {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&service.name).strong().size(16.0));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let commission = match service.deal_type {
                            DealType::Rent => localizer.translate("commission.rate_rent"),
                            DealType::Sale => format!("{}%", service.commission),
                        };
                        ui.label(format!(
                            "{}: {commission}",
                            localizer.translate("services.commission")
                        ));
                    });
                });
                ui.label(&service.description);
                if !service.features.is_empty() {
                    ui.add_space(4.0);
                    ui.horizontal_wrapped(|ui| {
                        for feature in &service.features {
                            ui.label(RichText::new(format!("• {feature}")).small().weak());
                        }
                    });
                }
            });
            ui.add_space(8.0);
        }
    }
}
