//! Kelly-style position sizing

use crate::config::EngineConfig;
use crate::models::signal::Signal;
use crate::models::state::RiskState;

pub const MAX_KELLY_FRACTION: f64 = 0.5;
/// Keeps the Kelly denominator positive at full confidence
const RUIN_EPSILON: f64 = 0.01;

#[derive(Debug, Clone, Copy)]
pub struct PositionSizer {
    max_trade_amount: f64,
}

impl PositionSizer {
    pub fn new(max_trade_amount: f64) -> Self {
        Self { max_trade_amount }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.max_trade_amount)
    }

    pub fn max_trade_amount(&self) -> f64 {
        self.max_trade_amount
    }

    /// `ceiling · confidence · risk.confidence · min(kelly, 0.5)`, clamped to
    /// `[0.01, ceiling]`
    pub fn size(&self, signal: &Signal, risk: &RiskState) -> f64 {
        let kelly = kelly_fraction(signal);
        let size = self.max_trade_amount * signal.confidence * risk.confidence * kelly;

        size.min(self.max_trade_amount).max(EngineConfig::MIN_TRADE_AMOUNT)
    }
}

/// `|expected_return| / ((1 - confidence) + 0.01)`, capped at 0.5
pub fn kelly_fraction(signal: &Signal) -> f64 {
    let risk_of_ruin = 1.0 - signal.confidence;
    let fraction = signal.expected_return.abs() / (risk_of_ruin + RUIN_EPSILON);
    fraction.min(MAX_KELLY_FRACTION)
}
