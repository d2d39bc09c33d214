//! MACD (Moving Average Convergence Divergence) indicator

use crate::indicators::trend::calculate_ema;
use crate::models::indicators::MacdIndicator;
use crate::models::price::PricePoint;

pub const MACD_FAST_PERIOD: u32 = 12;
pub const MACD_SLOW_PERIOD: u32 = 26;

const SIGNAL_FRACTION: f64 = 0.9;
const HISTOGRAM_FRACTION: f64 = 0.1;

/// Calculate MACD indicator
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = 0.9 * MACD
/// Histogram = 0.1 * MACD
///
/// The signal line is a fixed fraction of the main line, not an EMA of it.
pub fn calculate_macd(
    series: &[PricePoint],
    fast_period: u32,
    slow_period: u32,
) -> Option<MacdIndicator> {
    let fast_ema = calculate_ema(series, fast_period)?;
    let slow_ema = calculate_ema(series, slow_period)?;

    let macd_line = fast_ema.value - slow_ema.value;

    Some(MacdIndicator {
        macd: macd_line,
        signal: macd_line * SIGNAL_FRACTION,
        histogram: macd_line * HISTOGRAM_FRACTION,
    })
}

/// Calculate MACD with default periods (12, 26)
pub fn calculate_macd_default(series: &[PricePoint]) -> Option<MacdIndicator> {
    calculate_macd(series, MACD_FAST_PERIOD, MACD_SLOW_PERIOD)
}
