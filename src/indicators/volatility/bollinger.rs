//! Bollinger Bands indicator

use crate::common::math;
use crate::models::indicators::BollingerBandsIndicator;
use crate::models::price::{prices, PricePoint};

pub const BOLLINGER_PERIOD: u32 = 20;
pub const BOLLINGER_STD_DEV: f64 = 2.0;

/// Calculate Bollinger Bands
///
/// Middle Band = SMA(period)
/// Upper Band = Middle + (std_dev * standard deviation)
/// Lower Band = Middle - (std_dev * standard deviation)
/// Bandwidth = (2 * std_dev * standard deviation) / Middle
pub fn calculate_bollinger_bands(
    series: &[PricePoint],
    period: u32,
    std_dev: f64,
) -> Option<BollingerBandsIndicator> {
    if series.len() < period as usize {
        return None;
    }

    let closes = prices(series);
    let middle = math::sma(&closes, period as usize)?;
    let std = math::standard_deviation(&closes, period as usize)?;

    let upper = middle + (std_dev * std);
    let lower = middle - (std_dev * std);
    let bandwidth = if middle > 0.0 {
        (std * std_dev * 2.0) / middle
    } else {
        0.0
    };

    Some(BollingerBandsIndicator {
        upper,
        middle,
        lower,
        bandwidth,
        period,
        std_dev,
    })
}

/// Calculate Bollinger Bands with default parameters (20 SMA, 2σ)
pub fn calculate_bollinger_bands_default(series: &[PricePoint]) -> Option<BollingerBandsIndicator> {
    calculate_bollinger_bands(series, BOLLINGER_PERIOD, BOLLINGER_STD_DEV)
}
