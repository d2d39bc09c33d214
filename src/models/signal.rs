use serde::{Deserialize, Serialize};
use std::fmt;

/// Final trade decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalAction {
    Buy,
    Sell,
    Hold,
}

impl SignalAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalAction::Buy => "BUY",
            SignalAction::Sell => "SELL",
            SignalAction::Hold => "HOLD",
        }
    }
}

impl fmt::Display for SignalAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of a single indicator vote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VoteDirection {
    Buy,
    Sell,
}

/// Indicator that cast a vote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteSource {
    Rsi,
    Macd,
    Bollinger,
}

/// One contributing factor of a signal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalFactor {
    pub source: VoteSource,
    pub direction: VoteDirection,
    /// In [0, 1]
    pub strength: f64,
    /// In (0, 1]
    pub weight: f64,
}

impl SignalFactor {
    pub fn new(source: VoteSource, direction: VoteDirection, strength: f64, weight: f64) -> Self {
        Self {
            source,
            direction,
            strength,
            weight,
        }
    }
}

/// Graded trade decision produced by the signal generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signal {
    pub action: SignalAction,
    /// Absolute net score, in [0, 1]
    pub confidence: f64,
    /// Signed net score
    pub expected_return: f64,
    pub factors: Vec<SignalFactor>,
}

impl Signal {
    pub fn new(
        action: SignalAction,
        confidence: f64,
        expected_return: f64,
        factors: Vec<SignalFactor>,
    ) -> Self {
        Self {
            action,
            confidence,
            expected_return,
            factors,
        }
    }

    pub fn hold() -> Self {
        Self::new(SignalAction::Hold, 0.0, 0.0, Vec::new())
    }

    pub fn is_actionable(&self) -> bool {
        self.action != SignalAction::Hold
    }
}
