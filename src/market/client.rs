//! HTTP client for the market statistics endpoint.

use super::types::MarketStats;

/// Default statistics endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://dirobot.co.il/api/analysis/stats";

/// Failures talking to the statistics endpoint.
#[derive(Debug, thiserror::Error)]
pub enum MarketDataError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("invalid payload: {0}")]
    InvalidPayload(String),
}

/// Thin fetch-and-validate client over the statistics endpoint.
pub struct MarketDataClient {
    endpoint: String,
    http: reqwest::Client,
}

impl MarketDataClient {
    /// Client against the default endpoint.
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Client against an explicit endpoint (tests, mirrors).
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Fetch and validate one statistics payload.
    pub async fn fetch_stats(&self) -> Result<MarketStats, MarketDataError> {
        let response = self
            .http
            .get(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| MarketDataError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketDataError::Http(format!("HTTP {status}")));
        }

        let stats: MarketStats = response
            .json()
            .await
            .map_err(|e| MarketDataError::InvalidPayload(e.to_string()))?;

        if stats.real_estate_count == 0 {
            return Err(MarketDataError::InvalidPayload(
                "empty dataset".to_string(),
            ));
        }

        Ok(stats)
    }
}

impl Default for MarketDataClient {
    fn default() -> Self {
        Self::new()
    }
}
