//! Wire types for the third-party market statistics endpoint.
//!
//! The endpoint is an opaque collaborator; the only assumed shape is a set
//! of named histograms of timestamped numeric points plus a dataset size.

use serde::{Deserialize, Serialize};

/// Histogram series names consumed by the valuation model.
pub mod series {
    pub const SELL_PRICE: &str = "sell_price";
    pub const RENT_PRICE: &str = "rent_price";
    pub const SELL_APARTMENT_PRICE: &str = "sell_Apartment_price";
    pub const RENT_APARTMENT_PRICE: &str = "rent_Apartment_price";
}

/// A timestamped data point. `epoch_time` is in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramPoint {
    pub epoch_time: i64,
    pub value: f64,
}

/// One named time series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub histogram_type: String,
    #[serde(default)]
    pub histogram_points: Vec<HistogramPoint>,
}

/// The full statistics payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketStats {
    pub real_estate_count: u64,
    #[serde(default)]
    pub real_estate_histograms: Vec<Histogram>,
}

impl MarketStats {
    /// Find a series by name.
    pub fn series(&self, name: &str) -> Option<&Histogram> {
        self.real_estate_histograms
            .iter()
            .find(|h| h.histogram_type == name)
    }
}
