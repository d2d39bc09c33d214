//! Unit tests for wire shapes of the model types

use chrono::{TimeZone, Utc};
use serde_json::json;
use tradeloom::models::memory::{MemoryEntry, MemoryPayload};
use tradeloom::models::signal::{Signal, SignalAction, SignalFactor, VoteDirection, VoteSource};
use tradeloom::models::trade::TradeOutcome;

#[test]
fn test_signal_shape() {
    let signal = Signal::new(
        SignalAction::Buy,
        1.0,
        1.0,
        vec![SignalFactor::new(VoteSource::Rsi, VoteDirection::Buy, 1.0, 0.25)],
    );
    let value = serde_json::to_value(&signal).unwrap();
    assert_eq!(
        value,
        json!({
            "action": "BUY",
            "confidence": 1.0,
            "expectedReturn": 1.0,
            "factors": [{"source": "rsi", "direction": "BUY", "strength": 1.0, "weight": 0.25}]
        })
    );
}

#[test]
fn test_hold_signal() {
    let hold = Signal::hold();
    assert_eq!(hold.action, SignalAction::Hold);
    assert!(!hold.is_actionable());
    assert_eq!(hold.action.to_string(), "HOLD");
}

#[test]
fn test_memory_entry_omits_empty_fields() {
    let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let entry = MemoryEntry::new(
        at,
        MemoryPayload {
            price: Some(10.0),
            ..MemoryPayload::default()
        },
        1.0,
    );
    let value = serde_json::to_value(&entry).unwrap();
    assert_eq!(
        value,
        json!({
            "timestamp": at.timestamp_millis(),
            "data": {"price": 10.0},
            "importance": 1.0,
            "verified": false
        })
    );
}

#[test]
fn test_trade_outcome_tagged_by_status() {
    let value = serde_json::to_value(TradeOutcome::failed("reverted")).unwrap();
    assert_eq!(value["status"], "failed");
    assert_eq!(value["error"], "reverted");

    let value = serde_json::to_value(TradeOutcome::fulfilled(0.02)).unwrap();
    assert_eq!(value["status"], "fulfilled");
    assert_eq!(value["profit"], 0.02);
}
