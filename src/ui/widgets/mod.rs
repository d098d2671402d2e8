//! Shared widgets.

pub mod accessibility_widget;
pub mod contact_button;
pub mod language_switch;
pub mod property_card;
pub mod toast;
pub mod whatsapp_bubble;

// Re-export primary types
pub use accessibility_widget::AccessibilityWidget;
pub use contact_button::{contact_button, ContactAction};
pub use language_switch::language_switch;
pub use property_card::property_card;
pub use toast::Toasts;
pub use whatsapp_bubble::whatsapp_bubble;
