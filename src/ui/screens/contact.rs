//! Contact screen: validated inquiry form plus direct-contact details.

use egui::{RichText, Ui};

use crate::contact::{ContactForm, Field, OFFICE_EMAIL, OFFICE_PHONE};
use crate::i18n::Localizer;
use crate::ui::widgets::{contact_button, ContactAction, Toasts};

/// Contact screen state.
#[derive(Default)]
pub struct ContactScreen {
    form: ContactForm,
    show_errors: bool,
}

impl ContactScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, ui: &mut Ui, localizer: &Localizer, toasts: &mut Toasts) {
        ui.label(
            RichText::new(localizer.translate("contact.title"))
                .strong()
                .size(24.0),
        );
        ui.label(RichText::new(localizer.translate("contact.subtitle")).weak());
        ui.add_space(12.0);

        ui.columns(2, |columns| {
            self.form_column(&mut columns[0], localizer, toasts);
            self.details_column(&mut columns[1], localizer);
        });
    }

    fn form_column(&mut self, ui: &mut Ui, localizer: &Localizer, toasts: &mut Toasts) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                RichText::new(localizer.translate("contact.form.title"))
                    .strong()
                    .size(16.0),
            );
            ui.label(RichText::new(localizer.translate("contact.form.subtitle")).weak());
            ui.add_space(8.0);

            let errors = if self.show_errors {
                self.form.validate()
            } else {
                Vec::new()
            };
            let error_for = |field: Field| errors.iter().find(|e| e.field == field);

            text_row(
                ui,
                localizer,
                "contact.name",
                "contact.placeholders.name",
                &mut self.form.name,
                error_for(Field::Name).map(|e| e.message_key),
            );
            text_row(
                ui,
                localizer,
                "contact.email",
                "contact.placeholders.email",
                &mut self.form.email,
                error_for(Field::Email).map(|e| e.message_key),
            );
            text_row(
                ui,
                localizer,
                "contact.phone",
                "contact.placeholders.phone",
                &mut self.form.phone,
                error_for(Field::Phone).map(|e| e.message_key),
            );
            text_row(ui, localizer, "contact.company", "", &mut self.form.company, None);

            // Required selects
            choice_row(
                ui,
                localizer,
                "contact.property_type",
                &mut self.form.property_type,
                &[
                    ("office", "commission.office"),
                    ("commercial", "commission.commercial"),
                    ("building", "commission.building"),
                ],
                error_for(Field::PropertyType).map(|e| e.message_key),
            );
            choice_row(
                ui,
                localizer,
                "contact.deal_type",
                &mut self.form.deal_type,
                &[("rent", "commission.rent"), ("sale", "commission.sale")],
                error_for(Field::DealType).map(|e| e.message_key),
            );

            text_row(ui, localizer, "contact.budget", "", &mut self.form.budget, None);
            text_row(ui, localizer, "contact.area", "", &mut self.form.area, None);
            text_row(ui, localizer, "contact.location", "", &mut self.form.location, None);

            ui.label(format!("{} *", localizer.translate("contact.message")));
            ui.add(
                egui::TextEdit::multiline(&mut self.form.message)
                    .hint_text(localizer.translate("contact.placeholders.message"))
                    .desired_rows(4),
            );
            if let Some(error) = error_for(Field::Message) {
                error_label(ui, localizer, error.message_key);
            }

            ui.add_space(8.0);
            if ui
                .button(RichText::new(localizer.translate("contact.send")).size(15.0))
                .clicked()
            {
                self.show_errors = true;
                if self.form.is_valid() {
                    // Submission target is an external collaborator; the
                    // showcase confirms and clears.
                    toasts.success(
                        ui.ctx(),
                        localizer.translate("contact.success"),
                        localizer.translate("contact.success_desc"),
                    );
                    self.form = ContactForm::default();
                    self.show_errors = false;
                }
            }
        });
    }

    fn details_column(&mut self, ui: &mut Ui, localizer: &Localizer) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(localizer.translate("contact.info.response")).strong());
            ui.add_space(6.0);
            ui.label(format!("📍 {}", localizer.translate("contact.info.address")));
            ui.label(format!("🕑 {}", localizer.translate("contact.info.hours")));
            ui.label(format!("📞 {OFFICE_PHONE}"));
            ui.label(format!("✉ {OFFICE_EMAIL}"));
            ui.add_space(10.0);
            contact_button(ui, localizer, ContactAction::WhatsApp);
            contact_button(ui, localizer, ContactAction::Phone);
        });
    }
}

fn text_row(
    ui: &mut Ui,
    localizer: &Localizer,
    label_key: &str,
    placeholder_key: &str,
    value: &mut String,
    error_key: Option<&'static str>,
) {
    let required = matches!(label_key, "contact.name" | "contact.email" | "contact.phone");
    let label = localizer.translate(label_key);
    ui.label(if required { format!("{label} *") } else { label });

    let mut edit = egui::TextEdit::singleline(value);
    if !placeholder_key.is_empty() {
        edit = edit.hint_text(localizer.translate(placeholder_key));
    }
    ui.add(edit);
    if let Some(key) = error_key {
        error_label(ui, localizer, key);
    }
    ui.add_space(4.0);
}

fn choice_row(
    ui: &mut Ui,
    localizer: &Localizer,
    label_key: &str,
    value: &mut String,
    options: &[(&str, &str)],
    error_key: Option<&'static str>,
) {
    ui.label(format!("{} *", localizer.translate(label_key)));
    ui.horizontal(|ui| {
        for (option_value, option_label_key) in options {
            let selected = value == option_value;
            if ui
                .selectable_label(selected, localizer.translate(option_label_key))
                .clicked()
            {
                *value = option_value.to_string();
            }
        }
    });
    if let Some(key) = error_key {
        error_label(ui, localizer, key);
    }
    ui.add_space(4.0);
}

fn error_label(ui: &mut Ui, localizer: &Localizer, message_key: &str) {
    ui.label(
        RichText::new(localizer.translate(message_key))
            .color(egui::Color32::from_rgb(234, 67, 53))
            .small(),
    );
}
