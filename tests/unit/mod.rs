//! Unit test modules.

mod accessibility_test;
mod catalog_test;
mod contact_test;
mod i18n_test;
mod market_test;
mod prefs_test;
