//! Brokerage commission calculation.
//!
//! Rent deals owe one month's rent; sale deals owe a percentage of the deal
//! price (2% for a whole building, 1.5% otherwise). VAT is added on top.

use serde::{Deserialize, Serialize};

use crate::catalog::PropertyType;

/// Value-added tax rate applied on top of every commission.
pub const VAT_RATE: f64 = 0.17;

/// Deal kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DealType {
    #[default]
    Rent,
    Sale,
}

impl DealType {
    /// Translation key of the deal-type label.
    pub fn label_key(&self) -> &'static str {
        match self {
            DealType::Rent => "commission.rent",
            DealType::Sale => "commission.sale",
        }
    }
}

/// Commission rate for a deal: months of rent for rentals, percent of the
/// price for sales.
pub fn commission_rate(property_type: PropertyType, deal_type: DealType) -> f64 {
    match deal_type {
        DealType::Rent => 1.0,
        DealType::Sale => match property_type {
            PropertyType::Building => 2.0,
            _ => 1.5,
        },
    }
}

/// Commission owed for a deal, VAT included.
///
/// Non-positive or non-finite prices yield 0 (rendered as an empty result,
/// never an error).
pub fn calculate_commission(property_type: PropertyType, deal_type: DealType, price: f64) -> f64 {
    if !price.is_finite() || price <= 0.0 {
        return 0.0;
    }
    let rate = commission_rate(property_type, deal_type);
    match deal_type {
        DealType::Rent => price * (1.0 + VAT_RATE),
        DealType::Sale => price * rate / 100.0 * (1.0 + VAT_RATE),
    }
}

/// Price per square meter, when both inputs are positive.
pub fn price_per_sqm(price: f64, area_sqm: f64) -> Option<f64> {
    (price.is_finite() && area_sqm.is_finite() && price > 0.0 && area_sqm > 0.0)
        .then(|| price / area_sqm)
}
