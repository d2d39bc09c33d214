//! Fixed vote weights per indicator

use crate::models::signal::VoteSource;

pub struct VoteWeights;

impl VoteWeights {
    pub const RSI: f64 = 0.25;
    pub const MACD: f64 = 0.30;
    pub const BOLLINGER: f64 = 0.25;

    /// Get weight for a vote source
    pub fn get(source: VoteSource) -> f64 {
        match source {
            VoteSource::Rsi => Self::RSI,
            VoteSource::Macd => Self::MACD,
            VoteSource::Bollinger => Self::BOLLINGER,
        }
    }
}
