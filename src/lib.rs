//! Nadlan - Commercial Real-Estate Showcase Application
//!
//! A bilingual (Hebrew/English) desktop application presenting property
//! listings, brokerage services, commission and valuation calculators,
//! articles, and a contact surface, with document-level accessibility
//! preferences applied across the whole interface.

pub mod accessibility;
pub mod catalog;
pub mod commission;
pub mod contact;
pub mod document;
pub mod i18n;
pub mod market;
pub mod prefs;
pub mod ui;

// Re-export commonly used types
pub use accessibility::AccessibilityEngine;
pub use document::DocumentState;
pub use i18n::Localizer;
pub use market::MarketFeed;
pub use prefs::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
