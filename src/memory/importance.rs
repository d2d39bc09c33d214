//! Retention priority of a memory payload

use crate::models::memory::MemoryPayload;

pub const BASE_IMPORTANCE: f64 = 1.0;
pub const MAX_IMPORTANCE: f64 = 3.0;

/// Multiplicative score: ×1.5 for a price move over 5%, ×1.3 for a profit,
/// ×1.2 for volatility over 0.15, ×2.0 for a regime change; capped at 3.0
pub fn calculate_importance(payload: &MemoryPayload) -> f64 {
    let mut importance = BASE_IMPORTANCE;

    if payload.price_change.is_some_and(|change| change.abs() > 0.05) {
        importance *= 1.5;
    }

    if payload.profit.is_some_and(|profit| profit > 0.0) {
        importance *= 1.3;
    }

    if payload.volatility.is_some_and(|volatility| volatility > 0.15) {
        importance *= 1.2;
    }

    if payload.regime_change {
        importance *= 2.0;
    }

    importance.min(MAX_IMPORTANCE)
}
