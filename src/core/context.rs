//! Engine state shared by sizing, adaptation and persistence

use crate::memory::MemoryStore;
use crate::models::signal::Signal;
use crate::models::state::{PerformanceStats, RiskState};
use crate::models::trade::TradeOutcome;
use crate::risk::{adapt, PerformanceReport};

/// Everything the engine learns across cycles. One instance per engine; it
/// is mutated only from the analysis loop.
#[derive(Debug, Clone)]
pub struct EngineContext {
    pub risk: RiskState,
    pub performance: PerformanceStats,
    pub memory: MemoryStore,
    /// Carried and persisted, not consumed by the core
    pub adaptation_speed: f64,
    /// Carried and persisted, not consumed by the core
    pub market_regime: String,
}

impl EngineContext {
    pub const DEFAULT_ADAPTATION_SPEED: f64 = 0.1;
    pub const DEFAULT_MARKET_REGIME: &'static str = "UNKNOWN";

    pub fn new(risk: RiskState) -> Self {
        Self {
            risk,
            performance: PerformanceStats::default(),
            memory: MemoryStore::new(),
            adaptation_speed: Self::DEFAULT_ADAPTATION_SPEED,
            market_regime: Self::DEFAULT_MARKET_REGIME.to_string(),
        }
    }

    /// Apply one completed trade: update statistics, then adapt the risk
    /// state. Failed outcomes adapt as a profit of 0. Returns the prediction
    /// error.
    pub fn record_outcome(&mut self, outcome: &TradeOutcome, signal: &Signal) -> f64 {
        self.performance.record(outcome);
        adapt(&mut self.risk, outcome.profit(), signal)
    }

    pub fn report(&self) -> PerformanceReport<'_> {
        PerformanceReport::new(&self.performance, &self.risk)
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new(RiskState::default())
    }
}
