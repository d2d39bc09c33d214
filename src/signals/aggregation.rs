//! Weighted aggregation of indicator votes

use crate::models::signal::{SignalFactor, VoteDirection};

pub struct Aggregator;

impl Aggregator {
    /// `(Σ buy strength·weight − Σ sell strength·weight) / Σ weight`,
    /// or 0 when no vote was cast
    pub fn net_score(factors: &[SignalFactor]) -> f64 {
        let mut bullish = 0.0;
        let mut bearish = 0.0;
        let mut total_weight = 0.0;

        for factor in factors {
            total_weight += factor.weight;
            match factor.direction {
                VoteDirection::Buy => bullish += factor.strength * factor.weight,
                VoteDirection::Sell => bearish += factor.strength * factor.weight,
            }
        }

        if total_weight > 0.0 {
            (bullish - bearish) / total_weight
        } else {
            0.0
        }
    }
}

/// Confidence is the magnitude of the net score
pub fn calculate_confidence(net_score: f64) -> f64 {
    net_score.abs()
}
