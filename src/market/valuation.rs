//! Regional valuation model driven by live market statistics.
//!
//! The model never invents a baseline: all prices derive from the latest
//! statistics payload, scaled by regional and per-property adjustments.

use serde::{Deserialize, Serialize};

use super::analysis;
use super::types::{series, MarketStats};

/// Assumed average apartment size used to turn whole-apartment figures into
/// per-square-meter baselines.
pub const AVG_APARTMENT_SIZE_SQM: f64 = 80.0;

/// Value of one parking spot in shekels.
pub const PARKING_SPOT_VALUE: f64 = 80_000.0;

/// Metropolitan regions covered by the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    #[default]
    TelAviv,
    Jerusalem,
    Haifa,
    Netanya,
    Center,
}

impl Region {
    /// Translation key of the region label.
    pub fn label_key(&self) -> &'static str {
        match self {
            Region::TelAviv => "region.tel_aviv",
            Region::Jerusalem => "region.jerusalem",
            Region::Haifa => "region.haifa",
            Region::Netanya => "region.netanya",
            Region::Center => "region.center",
        }
    }

    /// All regions, in display order.
    pub fn all() -> &'static [Region] {
        &[
            Region::TelAviv,
            Region::Jerusalem,
            Region::Haifa,
            Region::Netanya,
            Region::Center,
        ]
    }

    /// Price multiplier relative to the national apartment baseline.
    pub fn price_multiplier(&self) -> f64 {
        match self {
            Region::TelAviv => 1.4,
            Region::Jerusalem => 0.8,
            Region::Haifa => 0.7,
            Region::Netanya => 1.1,
            Region::Center => 0.9,
        }
    }

    /// Regional share of the national market, percent.
    pub fn market_share_pct(&self) -> f64 {
        match self {
            Region::TelAviv => 45.0,
            Region::Jerusalem => 18.0,
            Region::Haifa => 12.0,
            Region::Netanya => 8.0,
            Region::Center => 17.0,
        }
    }

    /// Typical occupancy in the region, percent.
    pub fn occupancy_pct(&self) -> f64 {
        match self {
            Region::TelAviv => 92.0,
            Region::Jerusalem => 88.0,
            Region::Haifa => 85.0,
            Region::Netanya => 90.0,
            Region::Center => 87.0,
        }
    }
}

/// Residential property kinds in the valuation model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResidenceType {
    #[default]
    ApartmentBuilding,
    Apartment,
    House,
    Garden,
    Penthouse,
}

impl ResidenceType {
    /// Translation key of the type label.
    pub fn label_key(&self) -> &'static str {
        match self {
            ResidenceType::ApartmentBuilding => "market.type.apartment_building",
            ResidenceType::Apartment => "market.type.apartment",
            ResidenceType::House => "market.type.house",
            ResidenceType::Garden => "market.type.garden",
            ResidenceType::Penthouse => "market.type.penthouse",
        }
    }

    /// All types, in display order.
    pub fn all() -> &'static [ResidenceType] {
        &[
            ResidenceType::ApartmentBuilding,
            ResidenceType::Apartment,
            ResidenceType::House,
            ResidenceType::Garden,
            ResidenceType::Penthouse,
        ]
    }

    /// Price multiplier relative to a standard apartment.
    pub fn multiplier(&self) -> f64 {
        match self {
            ResidenceType::ApartmentBuilding | ResidenceType::Apartment => 1.0,
            ResidenceType::House => 1.3,
            ResidenceType::Garden => 1.2,
            ResidenceType::Penthouse => 1.8,
        }
    }

    /// Smallest plausible size for the type, square meters.
    pub fn min_size_sqm(&self) -> f64 {
        match self {
            ResidenceType::ApartmentBuilding => 30.0,
            ResidenceType::Apartment => 25.0,
            ResidenceType::House => 80.0,
            ResidenceType::Garden => 40.0,
            ResidenceType::Penthouse => 60.0,
        }
    }

    /// Listing-type code used by the statistics provider.
    pub fn listing_code(&self) -> u16 {
        match self {
            ResidenceType::ApartmentBuilding => 90,
            ResidenceType::Apartment => 130,
            ResidenceType::House => 10,
            ResidenceType::Garden => 15,
            ResidenceType::Penthouse => 20,
        }
    }
}

/// Property condition adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    #[default]
    New,
    Renovated,
    Good,
    NeedsRenovation,
}

impl Condition {
    /// Translation key of the condition label.
    pub fn label_key(&self) -> &'static str {
        match self {
            Condition::New => "market.condition.new",
            Condition::Renovated => "market.condition.renovated",
            Condition::Good => "market.condition.good",
            Condition::NeedsRenovation => "market.condition.needs_renovation",
        }
    }

    /// All conditions, in display order.
    pub fn all() -> &'static [Condition] {
        &[
            Condition::New,
            Condition::Renovated,
            Condition::Good,
            Condition::NeedsRenovation,
        ]
    }

    /// Price multiplier for the condition.
    pub fn multiplier(&self) -> f64 {
        match self {
            Condition::New => 1.0,
            Condition::Renovated => 0.9,
            Condition::Good => 0.8,
            Condition::NeedsRenovation => 0.65,
        }
    }
}

/// Regional figures derived from one statistics payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionSnapshot {
    pub price_per_sqm: f64,
    pub avg_rent_per_sqm: f64,
    pub growth_pct: f64,
}

/// Aggregate national figures for the status panel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MarketOverview {
    pub total_properties: u64,
    pub avg_sell_price: f64,
    pub avg_rent_price: f64,
}

/// Market model built from one statistics payload.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MarketModel {
    sell_price_per_sqm: f64,
    rent_price_per_sqm: f64,
    growth_pct: f64,
    overview: MarketOverview,
}

impl MarketModel {
    /// Derive the model from a statistics payload.
    pub fn from_stats(stats: &MarketStats) -> Self {
        let histograms = &stats.real_estate_histograms;
        let apartment_price = analysis::latest_value(histograms, series::SELL_APARTMENT_PRICE);
        let apartment_rent = analysis::latest_value(histograms, series::RENT_APARTMENT_PRICE);
        let growth_pct = analysis::annual_growth(histograms, series::SELL_PRICE);

        Self {
            sell_price_per_sqm: apartment_price / AVG_APARTMENT_SIZE_SQM,
            rent_price_per_sqm: apartment_rent / AVG_APARTMENT_SIZE_SQM,
            growth_pct,
            overview: MarketOverview {
                total_properties: stats.real_estate_count,
                avg_sell_price: apartment_price,
                avg_rent_price: apartment_rent,
            },
        }
    }

    /// Aggregate national figures.
    pub fn overview(&self) -> &MarketOverview {
        &self.overview
    }

    /// Whether the payload produced a usable price baseline.
    pub fn has_data(&self) -> bool {
        self.sell_price_per_sqm > 0.0
    }

    /// Regional figures scaled from the national baseline.
    pub fn region(&self, region: Region) -> RegionSnapshot {
        let multiplier = region.price_multiplier();
        RegionSnapshot {
            price_per_sqm: (self.sell_price_per_sqm * multiplier).round(),
            avg_rent_per_sqm: (self.rent_price_per_sqm * multiplier).round(),
            growth_pct: self.growth_pct,
        }
    }

    /// Appraise a property. Requires live data; without a positive regional
    /// baseline the valuation is refused rather than fabricated.
    pub fn appraise(
        &self,
        request: &ValuationRequest,
        current_year: i32,
    ) -> Result<Valuation, ValuationError> {
        if !request.size_sqm.is_finite() || request.size_sqm <= 0.0 {
            return Err(ValuationError::InvalidSize);
        }
        let snapshot = self.region(request.region);
        if snapshot.price_per_sqm <= 0.0 {
            return Err(ValuationError::NoMarketData);
        }

        let mut price_per_sqm = snapshot.price_per_sqm * request.residence_type.multiplier();
        price_per_sqm *= request.condition.multiplier();

        let age_years = (current_year - request.year_built).max(0);
        price_per_sqm *= (1.0 - age_years as f64 * 0.01).max(0.7);

        if let Some(floor) = request.floor {
            if floor > 0 {
                price_per_sqm *= if floor <= 2 {
                    0.95
                } else if floor <= 5 {
                    1.0
                } else {
                    1.05
                };
            }
        }

        if let Some(rooms) = request.rooms {
            if rooms >= 4 {
                price_per_sqm *= 1.1;
            } else if rooms <= 2 {
                price_per_sqm *= 0.9;
            }
        }

        let parking_value = request.parking_spots as f64 * PARKING_SPOT_VALUE;
        let current_value = price_per_sqm * request.size_sqm + parking_value;

        let monthly_rent =
            request.size_sqm * snapshot.avg_rent_per_sqm * request.residence_type.multiplier();
        let annual_rent = monthly_rent * 12.0;
        let rent_yield_pct = if current_value > 0.0 {
            annual_rent / current_value * 100.0
        } else {
            0.0
        };

        let growth_pct = snapshot.growth_pct;
        let value_in_5_years = current_value * (1.0 + growth_pct / 100.0).powi(5);

        Ok(Valuation {
            current_value: current_value.round(),
            price_per_sqm: price_per_sqm.round(),
            monthly_rent: monthly_rent.round(),
            annual_rent: annual_rent.round(),
            rent_yield_pct,
            value_in_5_years: value_in_5_years.round(),
            expected_growth_pct: growth_pct,
            occupancy_pct: request.region.occupancy_pct(),
            market_share_pct: request.region.market_share_pct(),
        })
    }
}

/// Inputs to one appraisal.
#[derive(Debug, Clone, PartialEq)]
pub struct ValuationRequest {
    pub region: Region,
    pub residence_type: ResidenceType,
    pub size_sqm: f64,
    pub rooms: Option<u32>,
    pub condition: Condition,
    pub floor: Option<i32>,
    pub parking_spots: u32,
    pub year_built: i32,
}

impl Default for ValuationRequest {
    fn default() -> Self {
        Self {
            region: Region::TelAviv,
            residence_type: ResidenceType::ApartmentBuilding,
            size_sqm: 0.0,
            rooms: None,
            condition: Condition::New,
            floor: None,
            parking_spots: 0,
            year_built: 2020,
        }
    }
}

/// Appraisal output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Valuation {
    pub current_value: f64,
    pub price_per_sqm: f64,
    pub monthly_rent: f64,
    pub annual_rent: f64,
    pub rent_yield_pct: f64,
    pub value_in_5_years: f64,
    pub expected_growth_pct: f64,
    pub occupancy_pct: f64,
    pub market_share_pct: f64,
}

/// Appraisal failures. Both are user-recoverable input/state conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValuationError {
    #[error("size must be a positive number of square meters")]
    InvalidSize,

    #[error("no live market data available")]
    NoMarketData,
}

impl ValuationError {
    /// Translation key of the user-facing message.
    pub fn message_key(&self) -> &'static str {
        match self {
            ValuationError::InvalidSize => "market.errors.size",
            ValuationError::NoMarketData => "market.errors.no_data",
        }
    }
}
