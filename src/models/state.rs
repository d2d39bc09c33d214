//! Engine risk state and cumulative trade statistics

use serde::{Deserialize, Serialize};

pub const MIN_RISK_CONFIDENCE: f64 = 0.1;
pub const MAX_RISK_CONFIDENCE: f64 = 1.0;
pub const MIN_LEARNING_RATE: f64 = 0.001;
pub const MAX_LEARNING_RATE: f64 = 0.1;

/// Self-tuned risk parameters, mutated only by adaptation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskState {
    /// In [0.1, 1.0]
    pub confidence: f64,
    /// In [0.001, 0.1]
    pub learning_rate: f64,
}

impl RiskState {
    pub fn new(confidence: f64, learning_rate: f64) -> Self {
        Self {
            confidence,
            learning_rate,
        }
    }
}

impl Default for RiskState {
    fn default() -> Self {
        Self::new(0.5, 0.01)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PerformanceStats {
    pub total_trades: u64,
    #[serde(rename = "profitable")]
    pub profitable_trades: u64,
    #[serde(rename = "totalReturn")]
    pub cumulative_return: f64,
    pub win_rate: f64,
    #[serde(rename = "avgReturn")]
    pub average_return: f64,
    pub best_trade: f64,
    pub worst_trade: f64,
}
