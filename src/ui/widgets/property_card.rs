//! Listing card used by the home and properties screens.

use egui::{Color32, RichText, Ui};

use crate::catalog::{Property, PropertyStatus};
use crate::i18n::Localizer;
use crate::ui::{format_currency, format_number};

fn status_color(status: PropertyStatus) -> Color32 {
    match status {
        PropertyStatus::Rent => Color32::from_rgb(52, 168, 83),
        PropertyStatus::Sale => Color32::from_rgb(59, 130, 246),
        PropertyStatus::Rented | PropertyStatus::Sold => Color32::from_rgb(140, 140, 148),
    }
}

/// Draw one listing card.
pub fn property_card(ui: &mut Ui, localizer: &Localizer, property: &Property) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());

        ui.horizontal(|ui| {
            ui.label(RichText::new(&property.title).strong().size(16.0));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let badge = localizer.translate(property.status.label_key());
                ui.label(
                    RichText::new(badge)
                        .color(status_color(property.status))
                        .strong(),
                );
            });
        });

        ui.label(RichText::new(&property.location).weak());
        ui.add_space(4.0);
        ui.label(&property.description);
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            ui.label(format!(
                "{}: {} {}",
                localizer.translate("properties.area"),
                format_number(property.area_sqm),
                localizer.translate("properties.sqm")
            ));
            ui.separator();
            let mut price = format!(
                "{}: {}",
                localizer.translate("properties.price"),
                format_currency(property.price)
            );
            if property.status == PropertyStatus::Rent {
                price.push(' ');
                price.push_str(&localizer.translate("properties.monthly"));
            }
            ui.label(price);
        });

        if !property.features.is_empty() {
            ui.add_space(4.0);
            ui.horizontal_wrapped(|ui| {
                for feature in &property.features {
                    ui.label(RichText::new(format!("• {feature}")).small().weak());
                }
            });
        }
    });
}
