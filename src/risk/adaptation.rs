//! Error-proportional controller for the engine risk state

use crate::models::signal::Signal;
use crate::models::state::{
    RiskState, MAX_LEARNING_RATE, MAX_RISK_CONFIDENCE, MIN_LEARNING_RATE, MIN_RISK_CONFIDENCE,
};

/// Prediction error below which a trade counts as well-forecast
pub const ACCURATE_ERROR: f64 = 0.01;
pub const CONFIDENCE_REWARD: f64 = 0.02;
pub const CONFIDENCE_PENALTY_SCALE: f64 = 0.1;

/// Update `risk` from a realized profit (`None` counts as 0) and return the
/// prediction error
pub fn adapt(risk: &mut RiskState, profit: Option<f64>, signal: &Signal) -> f64 {
    let error = (profit.unwrap_or(0.0) - signal.expected_return).abs();

    if error < ACCURATE_ERROR {
        risk.confidence = (risk.confidence + CONFIDENCE_REWARD).min(MAX_RISK_CONFIDENCE);
    } else {
        risk.confidence =
            (risk.confidence - error * CONFIDENCE_PENALTY_SCALE).max(MIN_RISK_CONFIDENCE);
    }

    risk.learning_rate =
        (risk.learning_rate * (1.0 + error)).clamp(MIN_LEARNING_RATE, MAX_LEARNING_RATE);

    error
}
