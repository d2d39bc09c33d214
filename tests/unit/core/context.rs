//! Unit tests for the engine context

use tradeloom::core::EngineContext;
use tradeloom::models::signal::{Signal, SignalAction};
use tradeloom::models::state::RiskState;
use tradeloom::models::trade::TradeOutcome;

#[test]
fn test_fresh_context() {
    let ctx = EngineContext::default();
    assert_eq!(ctx.risk, RiskState::default());
    assert_eq!(ctx.performance.total_trades, 0);
    assert_eq!(ctx.adaptation_speed, EngineContext::DEFAULT_ADAPTATION_SPEED);
    assert_eq!(ctx.market_regime, EngineContext::DEFAULT_MARKET_REGIME);
}

#[test]
fn test_record_outcome_updates_stats_then_risk() {
    let mut ctx = EngineContext::new(RiskState::new(0.5, 0.01));
    let signal = Signal::new(SignalAction::Buy, 0.02, 0.02, Vec::new());

    let error = ctx.record_outcome(&TradeOutcome::fulfilled(0.021), &signal);

    assert!(error < 0.01);
    assert_eq!(ctx.performance.total_trades, 1);
    assert_eq!(ctx.performance.profitable_trades, 1);
    assert!((ctx.risk.confidence - 0.52).abs() < 1e-12);
}

#[test]
fn test_failed_outcome_still_adapts() {
    let mut ctx = EngineContext::new(RiskState::new(0.5, 0.01));
    let signal = Signal::new(SignalAction::Sell, 0.8, -0.8, Vec::new());

    ctx.record_outcome(&TradeOutcome::failed("dry run"), &signal);

    assert_eq!(ctx.performance.total_trades, 1);
    assert_eq!(ctx.performance.profitable_trades, 0);
    assert!((ctx.risk.confidence - 0.42).abs() < 1e-12);
}

#[test]
fn test_report_reflects_state() {
    let ctx = EngineContext::new(RiskState::new(0.75, 0.01));
    assert!(ctx.report().to_string().contains("Bot Confidence: 75.0%"));
}
