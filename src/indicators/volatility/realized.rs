//! Annualized realized volatility

use crate::common::math;
use crate::models::price::{prices, PricePoint};

pub const VOLATILITY_PERIOD: u32 = 20;
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Standard deviation of the last `period` log-returns scaled by √252.
///
/// Returns `0.0` when fewer than `period + 1` points exist. That zero is a
/// sentinel for "not enough data", not a measured absence of volatility.
pub fn calculate_volatility(series: &[PricePoint], period: u32) -> f64 {
    let period_len = period as usize;
    if period == 0 || series.len() < period_len + 1 {
        return 0.0;
    }

    let closes = prices(&series[series.len() - period_len - 1..]);
    let returns = math::log_returns(&closes);
    math::population_std(&returns) * TRADING_DAYS_PER_YEAR.sqrt()
}

/// Calculate annualized volatility with default period (20)
pub fn calculate_volatility_default(series: &[PricePoint]) -> f64 {
    calculate_volatility(series, VOLATILITY_PERIOD)
}
