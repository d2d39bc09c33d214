//! CoinGecko market-chart price history

use crate::models::price::PricePoint;
use crate::services::market_data::{MarketDataProvider, ProviderError};
use async_trait::async_trait;
use chrono::DateTime;
use serde::Deserialize;
use tracing::debug;
use url::Url;

/// Above this lookback CoinGecko is asked for daily points, hourly otherwise
const DAILY_INTERVAL_THRESHOLD_DAYS: u32 = 30;

#[derive(Debug, Deserialize)]
struct MarketChart {
    prices: Vec<(f64, f64)>,
}

pub struct CoinGeckoProvider {
    client: reqwest::Client,
    base_url: String,
}

impl CoinGeckoProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn market_chart_url(&self, price_key: &str, days: u32) -> Result<Url, ProviderError> {
        let interval = if days > DAILY_INTERVAL_THRESHOLD_DAYS {
            "daily"
        } else {
            "hourly"
        };
        let endpoint = format!(
            "{}/coins/{}/market_chart",
            self.base_url.trim_end_matches('/'),
            price_key
        );
        let days = days.to_string();
        Ok(Url::parse_with_params(
            &endpoint,
            &[
                ("vs_currency", "usd"),
                ("days", days.as_str()),
                ("interval", interval),
            ],
        )?)
    }
}

#[async_trait]
impl MarketDataProvider for CoinGeckoProvider {
    async fn price_history(
        &self,
        price_key: &str,
        days: u32,
    ) -> Result<Vec<PricePoint>, ProviderError> {
        let url = self.market_chart_url(price_key, days)?;
        debug!(
            price_key = %price_key,
            url = %url,
            "CoinGecko: requesting market chart for {}",
            price_key
        );

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(ProviderError::Status {
                price_key: price_key.to_string(),
                status: response.status().as_u16(),
            });
        }

        let chart: MarketChart = response.json().await?;
        let series: Vec<PricePoint> = chart
            .prices
            .into_iter()
            .filter_map(|(millis, price)| {
                DateTime::from_timestamp_millis(millis as i64).map(|ts| PricePoint::new(ts, price))
            })
            .collect();

        debug!(
            price_key = %price_key,
            count = series.len(),
            "CoinGecko: received {} points for {}",
            series.len(),
            price_key
        );
        Ok(series)
    }
}
