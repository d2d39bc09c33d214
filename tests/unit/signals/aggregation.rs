//! Unit tests for vote aggregation

use tradeloom::models::signal::{SignalFactor, VoteDirection, VoteSource};
use tradeloom::signals::{calculate_confidence, Aggregator, VoteWeights};

#[test]
fn test_no_votes_is_zero() {
    assert_eq!(Aggregator::net_score(&[]), 0.0);
}

#[test]
fn test_single_vote_normalizes_to_strength() {
    let factors = [SignalFactor::new(
        VoteSource::Rsi,
        VoteDirection::Buy,
        1.0,
        VoteWeights::RSI,
    )];
    assert_eq!(Aggregator::net_score(&factors), 1.0);
}

#[test]
fn test_opposing_votes_weighted() {
    let factors = [
        SignalFactor::new(VoteSource::Rsi, VoteDirection::Buy, 1.0, 0.25),
        SignalFactor::new(VoteSource::Macd, VoteDirection::Sell, 0.5, 0.30),
    ];
    // (0.25 - 0.15) / 0.55
    let net = Aggregator::net_score(&factors);
    assert!((net - 0.1 / 0.55).abs() < 1e-12);
}

#[test]
fn test_confidence_is_magnitude() {
    assert_eq!(calculate_confidence(-0.7), 0.7);
    assert_eq!(calculate_confidence(0.3), 0.3);
    assert_eq!(calculate_confidence(0.0), 0.0);
}

#[test]
fn test_weights_lookup() {
    assert_eq!(VoteWeights::get(VoteSource::Rsi), 0.25);
    assert_eq!(VoteWeights::get(VoteSource::Macd), 0.30);
    assert_eq!(VoteWeights::get(VoteSource::Bollinger), 0.25);
}
