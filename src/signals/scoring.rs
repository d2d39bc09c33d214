//! Per-indicator votes

use crate::models::indicators::{BollingerBandsIndicator, MacdIndicator, RsiIndicator};
use crate::models::signal::{SignalFactor, VoteDirection, VoteSource};
use crate::signals::categories::VoteWeights;

pub const RSI_OVERSOLD: f64 = 30.0;
pub const RSI_OVERBOUGHT: f64 = 70.0;
/// Distance past a threshold that maps to full vote strength
pub const RSI_STRENGTH_SPAN: f64 = 30.0;
const MACD_HISTOGRAM_SCALE: f64 = 10.0;

/// Oversold (< 30) votes BUY, overbought (> 70) votes SELL.
///
/// A window without any price movement reports RSI 100 but casts no vote.
pub fn rsi_vote(rsi: &RsiIndicator) -> Option<SignalFactor> {
    if rsi.is_flat() {
        return None;
    }
    if rsi.value < RSI_OVERSOLD {
        Some(SignalFactor::new(
            VoteSource::Rsi,
            VoteDirection::Buy,
            (RSI_OVERSOLD - rsi.value) / RSI_STRENGTH_SPAN,
            VoteWeights::RSI,
        ))
    } else if rsi.value > RSI_OVERBOUGHT {
        Some(SignalFactor::new(
            VoteSource::Rsi,
            VoteDirection::Sell,
            (rsi.value - RSI_OVERBOUGHT) / RSI_STRENGTH_SPAN,
            VoteWeights::RSI,
        ))
    } else {
        None
    }
}

/// Histogram sign gives the direction, `10 * |histogram|` the strength
pub fn macd_vote(macd: &MacdIndicator) -> Option<SignalFactor> {
    let direction = if macd.histogram > 0.0 {
        VoteDirection::Buy
    } else if macd.histogram < 0.0 {
        VoteDirection::Sell
    } else {
        return None;
    };
    let strength = (macd.histogram.abs() * MACD_HISTOGRAM_SCALE).min(1.0);
    Some(SignalFactor::new(
        VoteSource::Macd,
        direction,
        strength,
        VoteWeights::MACD,
    ))
}

/// Price below the lower band votes BUY, above the upper band votes SELL.
/// Strength is the distance past the band relative to the band half-width.
pub fn bollinger_vote(bands: &BollingerBandsIndicator, price: f64) -> Option<SignalFactor> {
    let half_width = bands.upper - bands.middle;
    if half_width <= 0.0 {
        return None;
    }
    if price < bands.lower {
        let strength = ((bands.lower - price) / half_width).min(1.0);
        Some(SignalFactor::new(
            VoteSource::Bollinger,
            VoteDirection::Buy,
            strength,
            VoteWeights::BOLLINGER,
        ))
    } else if price > bands.upper {
        let strength = ((price - bands.upper) / half_width).min(1.0);
        Some(SignalFactor::new(
            VoteSource::Bollinger,
            VoteDirection::Sell,
            strength,
            VoteWeights::BOLLINGER,
        ))
    } else {
        None
    }
}
