//! Contact surface: form validation and messaging deep links.

use serde::{Deserialize, Serialize};

/// Office phone number used by the messaging and call links.
pub const OFFICE_PHONE: &str = "+972509333901";

/// Office mailbox shown on the contact screen.
pub const OFFICE_EMAIL: &str = "office@nadlan-desk.co.il";

/// Contact-form field snapshot (controlled inputs, empty by default).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub property_type: String,
    pub deal_type: String,
    pub budget: String,
    pub area: String,
    pub location: String,
    pub message: String,
    pub urgency: String,
}

/// Form fields that carry validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    PropertyType,
    DealType,
    Message,
}

/// A failed validation rule: the field and the translation key of its
/// user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message_key: &'static str,
}

impl ContactForm {
    /// Check every rule and return the complete failure list.
    ///
    /// Optional fields (company, budget, area, location, urgency) are never
    /// errors.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.name.trim().chars().count() < 2 {
            errors.push(FieldError {
                field: Field::Name,
                message_key: "contact.errors.name",
            });
        }
        if !is_plausible_email(self.email.trim()) {
            errors.push(FieldError {
                field: Field::Email,
                message_key: "contact.errors.email",
            });
        }
        if digit_count(&self.phone) < 10 {
            errors.push(FieldError {
                field: Field::Phone,
                message_key: "contact.errors.phone",
            });
        }
        if self.property_type.trim().is_empty() {
            errors.push(FieldError {
                field: Field::PropertyType,
                message_key: "contact.errors.property_type",
            });
        }
        if self.deal_type.trim().is_empty() {
            errors.push(FieldError {
                field: Field::DealType,
                message_key: "contact.errors.deal_type",
            });
        }
        if self.message.trim().chars().count() < 10 {
            errors.push(FieldError {
                field: Field::Message,
                message_key: "contact.errors.message",
            });
        }

        errors
    }

    /// Whether the form currently passes validation.
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// The error for one field, if any.
    pub fn error_for(&self, field: Field) -> Option<FieldError> {
        self.validate().into_iter().find(|e| e.field == field)
    }
}

fn is_plausible_email(s: &str) -> bool {
    if s.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && tld.len() >= 2
}

fn digit_count(s: &str) -> usize {
    s.chars().filter(|c| c.is_ascii_digit()).count()
}

/// WhatsApp deep link for a phone number. Everything but digits is dropped
/// from the destination identifier.
pub fn whatsapp_url(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    format!("https://wa.me/{digits}")
}

/// Dialer deep link.
pub fn tel_url(phone: &str) -> String {
    format!("tel:{}", phone.trim())
}
