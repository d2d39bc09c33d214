//! Stochastic oscillator

use crate::models::indicators::StochasticIndicator;
use crate::models::price::PricePoint;

pub const STOCHASTIC_PERIOD: u32 = 14;

/// Neutral reading for a window with no range
pub const STOCHASTIC_MIDPOINT: f64 = 50.0;

/// Calculate %K = (last - lowest) / (highest - lowest) * 100 over the last
/// `period` prices. %D is reported equal to %K (no smoothing).
pub fn calculate_stochastic(series: &[PricePoint], period: u32) -> Option<StochasticIndicator> {
    let period_len = period as usize;
    if period == 0 || series.len() < period_len {
        return None;
    }

    let window = &series[series.len() - period_len..];
    let highest = window.iter().map(|p| p.price).fold(f64::MIN, f64::max);
    let lowest = window.iter().map(|p| p.price).fold(f64::MAX, f64::min);
    let current = window[window.len() - 1].price;

    let range = highest - lowest;
    let k = if range > 0.0 {
        (current - lowest) / range * 100.0
    } else {
        STOCHASTIC_MIDPOINT
    };

    Some(StochasticIndicator { k, d: k, period })
}

/// Calculate the stochastic oscillator with default period (14)
pub fn calculate_stochastic_default(series: &[PricePoint]) -> Option<StochasticIndicator> {
    calculate_stochastic(series, STOCHASTIC_PERIOD)
}
