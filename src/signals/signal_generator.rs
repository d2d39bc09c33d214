use crate::config::EngineConfig;
use crate::models::indicators::IndicatorSet;
use crate::models::price::PricePoint;
use crate::models::signal::{Signal, SignalAction, SignalFactor};
use crate::signals::aggregation::{calculate_confidence, Aggregator};
use crate::signals::scoring::{bollinger_vote, macd_vote, rsi_vote};

/// Confidence a decision must exceed before it can leave HOLD
pub const MIN_DECISION_CONFIDENCE: f64 = 0.6;

/// Rule-based ensemble: RSI, MACD and Bollinger votes fused into one decision
#[derive(Debug, Clone)]
pub struct SignalGenerator {
    min_profit_threshold: f64,
}

impl SignalGenerator {
    pub fn new(min_profit_threshold: f64) -> Self {
        Self {
            min_profit_threshold,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.min_profit_threshold)
    }

    pub fn min_profit_threshold(&self) -> f64 {
        self.min_profit_threshold
    }

    pub fn generate_signal(&self, indicators: &IndicatorSet, series: &[PricePoint]) -> Signal {
        let factors = self.collect_votes(indicators, series);
        let net_score = Aggregator::net_score(&factors);
        let confidence = calculate_confidence(net_score);
        let action = self.decide(net_score, confidence);

        Signal::new(action, confidence, net_score, factors)
    }

    fn collect_votes(&self, indicators: &IndicatorSet, series: &[PricePoint]) -> Vec<SignalFactor> {
        let mut factors = Vec::with_capacity(3);

        if let Some(factor) = indicators.rsi.as_ref().and_then(rsi_vote) {
            factors.push(factor);
        }

        if let Some(factor) = indicators.macd.as_ref().and_then(macd_vote) {
            factors.push(factor);
        }

        if let (Some(bands), Some(last)) = (indicators.bollinger.as_ref(), series.last()) {
            if let Some(factor) = bollinger_vote(bands, last.price) {
                factors.push(factor);
            }
        }

        factors
    }

    fn decide(&self, net_score: f64, confidence: f64) -> SignalAction {
        if confidence <= MIN_DECISION_CONFIDENCE {
            SignalAction::Hold
        } else if net_score > self.min_profit_threshold {
            SignalAction::Buy
        } else if net_score < -self.min_profit_threshold {
            SignalAction::Sell
        } else {
            SignalAction::Hold
        }
    }
}

impl Default for SignalGenerator {
    fn default() -> Self {
        Self::new(EngineConfig::DEFAULT_MIN_PROFIT_THRESHOLD)
    }
}
