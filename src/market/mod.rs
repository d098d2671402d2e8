//! Live market data: wire types, histogram analysis, the regional valuation
//! model, and the background feed that keeps the statistics fresh.

pub mod analysis;
pub mod client;
pub mod feed;
pub mod types;
pub mod valuation;

// Re-export primary types
pub use client::{MarketDataClient, MarketDataError, DEFAULT_ENDPOINT};
pub use feed::{ApiStatus, MarketEvent, MarketFeed, REFRESH_INTERVAL};
pub use types::{Histogram, HistogramPoint, MarketStats};
pub use valuation::{
    Condition, MarketModel, Region, ResidenceType, Valuation, ValuationError, ValuationRequest,
};
