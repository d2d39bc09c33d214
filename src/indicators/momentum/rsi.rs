//! RSI (Relative Strength Index) indicator

use crate::models::indicators::RsiIndicator;
use crate::models::price::PricePoint;

pub const RSI_PERIOD: u32 = 14;

/// Calculate RSI indicator
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss over the last `period` deltas
///
/// Returns 100 when the window holds no losses.
pub fn calculate_rsi(series: &[PricePoint], period: u32) -> Option<RsiIndicator> {
    let period_len = period as usize;
    if period == 0 || series.len() < period_len + 1 {
        return None;
    }

    let recent = &series[series.len() - period_len - 1..];
    let (gains, losses) = recent
        .windows(2)
        .map(|w| w[1].price - w[0].price)
        .fold((0.0, 0.0), |(gains, losses), change| {
            if change > 0.0 {
                (gains + change, losses)
            } else {
                (gains, losses + change)
            }
        });

    let avg_gain = gains / period as f64;
    let avg_loss = losses.abs() / period as f64;

    if avg_loss == 0.0 {
        return Some(RsiIndicator {
            value: 100.0,
            period,
            avg_gain,
            avg_loss,
        });
    }

    let rs = avg_gain / avg_loss;
    let rsi = 100.0 - (100.0 / (1.0 + rs));

    Some(RsiIndicator {
        value: rsi,
        period,
        avg_gain,
        avg_loss,
    })
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(series: &[PricePoint]) -> Option<RsiIndicator> {
    calculate_rsi(series, RSI_PERIOD)
}
