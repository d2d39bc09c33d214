//! Memory log entries

use crate::models::signal::SignalAction;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Structured payload recorded with a memory entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signal: Option<SignalAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_return: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volatility: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_change: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profit: Option<f64>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub regime_change: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryEntry {
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "data")]
    pub payload: MemoryPayload,
    /// In [1.0, 3.0]
    pub importance: f64,
    pub verified: bool,
}

impl MemoryEntry {
    pub fn new(timestamp: DateTime<Utc>, payload: MemoryPayload, importance: f64) -> Self {
        Self {
            timestamp,
            payload,
            importance,
            verified: false,
        }
    }
}
