//! Market data provider interface

use crate::models::price::PricePoint;
use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid provider url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("provider returned status {status} for {price_key}")]
    Status { price_key: String, status: u16 },

    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),
}

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Price history for `price_key` over the last `days` days, ascending by
    /// time
    async fn price_history(
        &self,
        price_key: &str,
        days: u32,
    ) -> Result<Vec<PricePoint>, ProviderError>;
}

/// Serves fixed series from memory; useful offline and in tests
#[derive(Debug, Clone, Default)]
pub struct StaticMarketDataProvider {
    series: HashMap<String, Vec<PricePoint>>,
}

impl StaticMarketDataProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_series(mut self, price_key: impl Into<String>, series: Vec<PricePoint>) -> Self {
        self.series.insert(price_key.into(), series);
        self
    }
}

#[async_trait]
impl MarketDataProvider for StaticMarketDataProvider {
    async fn price_history(
        &self,
        price_key: &str,
        _days: u32,
    ) -> Result<Vec<PricePoint>, ProviderError> {
        self.series
            .get(price_key)
            .cloned()
            .ok_or_else(|| ProviderError::UnknownInstrument(price_key.to_string()))
    }
}
