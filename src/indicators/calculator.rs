//! Builds a full indicator set from one price series

use crate::indicators::momentum::{
    calculate_macd_default, calculate_rsi_default, calculate_stochastic_default,
};
use crate::indicators::trend::{calculate_sma, SMA_LONG_PERIOD, SMA_SHORT_PERIOD};
use crate::indicators::volatility::{calculate_bollinger_bands_default, calculate_volatility_default};
use crate::models::indicators::IndicatorSet;
use crate::models::price::PricePoint;

/// Compute every indicator over `series`. Fields whose window is longer than
/// the series stay `None`.
pub fn calculate_indicators(series: &[PricePoint]) -> IndicatorSet {
    IndicatorSet {
        sma_short: calculate_sma(series, SMA_SHORT_PERIOD),
        sma_long: calculate_sma(series, SMA_LONG_PERIOD),
        rsi: calculate_rsi_default(series),
        macd: calculate_macd_default(series),
        bollinger: calculate_bollinger_bands_default(series),
        stochastic: calculate_stochastic_default(series),
        volatility: calculate_volatility_default(series),
    }
}
