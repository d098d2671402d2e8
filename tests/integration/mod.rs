//! Integration test modules.

mod preferences_roundtrip_test;
mod valuation_flow_test;
