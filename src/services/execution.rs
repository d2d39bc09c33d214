//! Trade execution collaborator

use crate::models::signal::Signal;
use crate::models::trade::{SwapRequest, TradeOutcome};
use async_trait::async_trait;
use tracing::info;

/// Submits a swap for a decision and reports how it ended. Failures are
/// reported as `TradeOutcome::Failed`, never as errors.
#[async_trait]
pub trait TradeExecutor: Send + Sync {
    async fn execute(&self, request: &SwapRequest, signal: &Signal) -> TradeOutcome;
}

/// Logs the swap it would submit and reports it as not executed
#[derive(Debug, Clone)]
pub struct DryRunExecutor {
    max_slippage: f64,
}

impl DryRunExecutor {
    pub fn new(max_slippage: f64) -> Self {
        Self { max_slippage }
    }
}

#[async_trait]
impl TradeExecutor for DryRunExecutor {
    async fn execute(&self, request: &SwapRequest, signal: &Signal) -> TradeOutcome {
        let min_output_ratio = 1.0 - self.max_slippage;
        info!(
            action = %signal.action,
            input = %request.input.symbol,
            output = %request.output.symbol,
            amount = request.amount,
            fee_rate = request.fee_rate,
            min_output_ratio = min_output_ratio,
            "DryRunExecutor: would swap {} {} -> {} (min output {:.2}% of quote)",
            request.amount,
            request.input.symbol,
            request.output.symbol,
            min_output_ratio * 100.0
        );
        TradeOutcome::failed("dry run: execution disabled")
    }
}
