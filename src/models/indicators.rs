use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmaIndicator {
    pub value: f64,
    pub period: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmaIndicator {
    pub value: f64,
    pub period: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RsiIndicator {
    pub value: f64,
    pub period: u32,
    pub avg_gain: f64,
    pub avg_loss: f64,
}

impl RsiIndicator {
    /// No price movement at all inside the window
    pub fn is_flat(&self) -> bool {
        self.avg_gain == 0.0 && self.avg_loss == 0.0
    }
}

/// MACD main line with a fixed-fraction signal line and histogram.
///
/// `signal` and `histogram` are proportional to `macd` rather than an EMA of
/// the main line; this is a known approximation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacdIndicator {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BollingerBandsIndicator {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
    pub bandwidth: f64,
    pub period: u32,
    pub std_dev: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StochasticIndicator {
    pub k: f64,
    pub d: f64,
    pub period: u32,
}

/// Technical features computed from one price series.
///
/// Every optional field is `None` when the series is shorter than its window.
/// `volatility` is `0.0` in that case.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndicatorSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sma_short: Option<SmaIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sma_long: Option<SmaIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi: Option<RsiIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd: Option<MacdIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bollinger: Option<BollingerBandsIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stochastic: Option<StochasticIndicator>,
    pub volatility: f64,
}
