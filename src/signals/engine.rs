//! Series-to-signal evaluation used by the analysis cycle

use crate::error::EngineError;
use crate::indicators::calculate_indicators;
use crate::models::indicators::IndicatorSet;
use crate::models::price::PricePoint;
use crate::models::signal::Signal;
use crate::signals::signal_generator::SignalGenerator;

/// Minimum history an instrument needs before it is analyzed
pub const MIN_PRICE_POINTS: usize = 50;

/// Indicators and the signal derived from them for the latest price
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub price: f64,
    pub indicators: IndicatorSet,
    pub signal: Signal,
}

pub struct SignalEngine;

impl SignalEngine {
    /// Evaluate a full series. Series shorter than [`MIN_PRICE_POINTS`] are
    /// rejected with `InsufficientData`.
    pub fn evaluate(
        instrument: &str,
        series: &[PricePoint],
        generator: &SignalGenerator,
    ) -> Result<Evaluation, EngineError> {
        let last = match series.last() {
            Some(last) if series.len() >= MIN_PRICE_POINTS => last,
            _ => {
                return Err(EngineError::InsufficientData {
                    instrument: instrument.to_string(),
                    available: series.len(),
                    required: MIN_PRICE_POINTS,
                })
            }
        };

        let indicators = calculate_indicators(series);
        let signal = generator.generate_signal(&indicators, series);

        Ok(Evaluation {
            price: last.price,
            indicators,
            signal,
        })
    }
}
