//! EMA (Exponential Moving Average) indicator

use crate::common::math;
use crate::models::indicators::EmaIndicator;
use crate::models::price::{prices, PricePoint};

/// Calculate EMA for a specific period, seeded with the SMA of the first
/// `period` points
pub fn calculate_ema(series: &[PricePoint], period: u32) -> Option<EmaIndicator> {
    if series.len() < period as usize {
        return None;
    }

    let closes = prices(series);
    let ema_value = math::ema(&closes, period as usize)?;

    Some(EmaIndicator {
        value: ema_value,
        period,
    })
}
