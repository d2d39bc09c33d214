//! SMA (Simple Moving Average) indicator

use crate::common::math;
use crate::models::indicators::SmaIndicator;
use crate::models::price::{prices, PricePoint};

pub const SMA_SHORT_PERIOD: u32 = 20;
pub const SMA_LONG_PERIOD: u32 = 50;

/// Mean of the last `period` prices
pub fn calculate_sma(series: &[PricePoint], period: u32) -> Option<SmaIndicator> {
    if series.len() < period as usize {
        return None;
    }

    let closes = prices(series);
    let value = math::sma(&closes, period as usize)?;

    Some(SmaIndicator { value, period })
}
