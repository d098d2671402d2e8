//! Unit tests for the contact form and deep links.

use nadlan::contact::{tel_url, whatsapp_url, ContactForm, Field, OFFICE_PHONE};

fn valid_form() -> ContactForm {
    ContactForm {
        name: "ישראל ישראלי".to_string(),
        email: "israel@example.co.il".to_string(),
        phone: "050-1234567".to_string(),
        property_type: "office".to_string(),
        deal_type: "rent".to_string(),
        message: "מחפשים משרד של כ-300 מ\"ר בתל-אביב".to_string(),
        ..ContactForm::default()
    }
}

#[test]
fn test_valid_form_passes() {
    assert!(valid_form().is_valid());
    assert!(valid_form().validate().is_empty());
}

#[test]
fn test_empty_form_reports_every_required_field() {
    let errors = ContactForm::default().validate();
    let fields: Vec<Field> = errors.iter().map(|e| e.field).collect();

    assert_eq!(errors.len(), 6);
    for field in [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::PropertyType,
        Field::DealType,
        Field::Message,
    ] {
        assert!(fields.contains(&field), "missing error for {field:?}");
    }
}

#[test]
fn test_rules_match_thresholds() {
    let mut form = valid_form();

    form.name = "א".to_string();
    assert_eq!(form.error_for(Field::Name).unwrap().message_key, "contact.errors.name");
    form.name = "אב".to_string();
    assert!(form.error_for(Field::Name).is_none());

    form.phone = "05-123456".to_string(); // 8 digits
    assert!(form.error_for(Field::Phone).is_some());
    form.phone = "0501234567".to_string();
    assert!(form.error_for(Field::Phone).is_none());

    form.message = "קצר מדי".to_string();
    assert!(form.error_for(Field::Message).is_some());

    form.email = "invalid".to_string();
    assert!(form.error_for(Field::Email).is_some());
}

#[test]
fn test_optional_fields_never_error() {
    let mut form = valid_form();
    form.company = String::new();
    form.budget = String::new();
    form.area = String::new();
    form.location = String::new();
    form.urgency = String::new();
    assert!(form.is_valid());
}

#[test]
fn test_deep_links() {
    assert_eq!(whatsapp_url(OFFICE_PHONE), "https://wa.me/972509333901");
    assert_eq!(tel_url(" +972509333901 "), "tel:+972509333901");
}
