//! Fixtures shared by the integration tests

use async_trait::async_trait;
use chrono::{TimeDelta, TimeZone, Utc};
use std::sync::Mutex;
use std::time::Duration;
use tradeloom::config::EngineConfig;
use tradeloom::models::price::PricePoint;
use tradeloom::models::signal::Signal;
use tradeloom::models::trade::{SwapRequest, TradeOutcome};
use tradeloom::services::TradeExecutor;

pub fn series(prices: &[f64]) -> Vec<PricePoint> {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    prices
        .iter()
        .enumerate()
        .map(|(i, &price)| PricePoint::new(start + TimeDelta::hours(i as i64), price))
        .collect()
}

pub fn flat(count: usize, price: f64) -> Vec<PricePoint> {
    series(&vec![price; count])
}

/// Alternating +2 / -1 steps: a steady uptrend the RSI and bands stay quiet
/// on, so MACD alone votes BUY at full strength
pub fn zigzag_uptrend(count: usize) -> Vec<PricePoint> {
    let mut prices = vec![100.0];
    for i in 1..count {
        let step = if i % 2 == 1 { 2.0 } else { -1.0 };
        prices.push(prices[i - 1] + step);
    }
    series(&prices)
}

/// Mirror image of [`zigzag_uptrend`]: MACD alone votes SELL
pub fn zigzag_downtrend(count: usize) -> Vec<PricePoint> {
    let mut prices = vec![200.0];
    for i in 1..count {
        let step = if i % 2 == 1 { -2.0 } else { 1.0 };
        prices.push(prices[i - 1] + step);
    }
    series(&prices)
}

/// Default instruments, no pacing, long intervals
pub fn test_config() -> EngineConfig {
    EngineConfig {
        instrument_delay: Duration::ZERO,
        cycle_interval: Duration::from_millis(5),
        cycle_cooldown: Duration::from_millis(5),
        ..EngineConfig::default()
    }
}

/// Records every request and answers with a fixed outcome
pub struct RecordingExecutor {
    profit: Option<f64>,
    pub requests: Mutex<Vec<SwapRequest>>,
}

impl RecordingExecutor {
    pub fn fulfilling(profit: f64) -> Self {
        Self {
            profit: Some(profit),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            profit: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<SwapRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl TradeExecutor for RecordingExecutor {
    async fn execute(&self, request: &SwapRequest, _signal: &Signal) -> TradeOutcome {
        self.requests.lock().unwrap().push(request.clone());
        match self.profit {
            Some(profit) => TradeOutcome::fulfilled(profit),
            None => TradeOutcome::failed("pool reverted"),
        }
    }
}
