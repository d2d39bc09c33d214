//! Trade requests and outcomes exchanged with the execution collaborator

use crate::models::instrument::Asset;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapRequest {
    pub input: Asset,
    pub output: Asset,
    pub amount: f64,
    pub fee_rate: u32,
}

/// Result reported by a trade executor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum TradeOutcome {
    /// Swap completed; `profit` is realized-vs-input as a fraction
    Fulfilled {
        profit: f64,
        timestamp: DateTime<Utc>,
    },
    Failed {
        error: String,
        timestamp: DateTime<Utc>,
    },
}

impl TradeOutcome {
    pub fn fulfilled(profit: f64) -> Self {
        TradeOutcome::Fulfilled {
            profit,
            timestamp: Utc::now(),
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        TradeOutcome::Failed {
            error: error.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, TradeOutcome::Fulfilled { .. })
    }

    pub fn profit(&self) -> Option<f64> {
        match self {
            TradeOutcome::Fulfilled { profit, .. } => Some(*profit),
            TradeOutcome::Failed { .. } => None,
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            TradeOutcome::Fulfilled { timestamp, .. } | TradeOutcome::Failed { timestamp, .. } => {
                *timestamp
            }
        }
    }
}
