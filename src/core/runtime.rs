//! Analysis cycle orchestration: fetch, evaluate, remember, gate, size,
//! execute, adapt, persist

use crate::config::EngineConfig;
use crate::core::context::EngineContext;
use crate::core::scheduler::{StopHandle, Tick};
use crate::db::{EngineSnapshot, SnapshotStore};
use crate::error::EngineError;
use crate::memory::Tier;
use crate::metrics::Metrics;
use crate::models::instrument::Instrument;
use crate::models::memory::MemoryPayload;
use crate::models::signal::Signal;
use crate::models::state::{PerformanceStats, RiskState};
use crate::models::trade::{SwapRequest, TradeOutcome};
use crate::risk::PositionSizer;
use crate::services::{MarketDataProvider, TradeExecutor};
use crate::signals::{SignalEngine, SignalGenerator};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

/// Cycles between snapshot saves
pub const SAVE_EVERY_CYCLES: u64 = 5;
/// Cycles between logged performance reports
pub const REPORT_EVERY_CYCLES: u64 = 10;

/// Where the loop currently is
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "instrument", rename_all = "snake_case")]
pub enum CycleState {
    Idle,
    Running,
    Analyzing(String),
    Deciding(String),
    Executing(String),
    Skipping(String),
    Sleeping,
    Stopped,
}

/// Read-only view of the engine published for the status endpoint
#[derive(Debug, Clone, Serialize)]
pub struct EngineStatus {
    pub state: CycleState,
    pub cycle_count: u64,
    pub risk: RiskState,
    pub performance: PerformanceStats,
    pub last_cycle_at: Option<DateTime<Utc>>,
}

impl Default for EngineStatus {
    fn default() -> Self {
        Self {
            state: CycleState::Idle,
            cycle_count: 0,
            risk: RiskState::default(),
            performance: PerformanceStats::default(),
            last_cycle_at: None,
        }
    }
}

pub type SharedStatus = Arc<RwLock<EngineStatus>>;

/// What happened to one instrument in one cycle
#[derive(Debug, Clone, PartialEq)]
pub enum InstrumentOutcome {
    /// Signal did not clear the confidence gate
    Held(Signal),
    Traded {
        signal: Signal,
        amount: f64,
        outcome: TradeOutcome,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CycleReport {
    pub cycle: u64,
    pub analyzed: usize,
    pub held: usize,
    pub traded: usize,
    pub skipped: usize,
    pub failed: usize,
    /// Set when a stop request ended the pass before every instrument ran
    pub interrupted: bool,
}

/// Owns the engine state and drives one pass over the configured
/// instruments per tick
pub struct AnalysisRuntime {
    config: EngineConfig,
    ctx: EngineContext,
    provider: Arc<dyn MarketDataProvider>,
    executor: Arc<dyn TradeExecutor>,
    generator: SignalGenerator,
    sizer: PositionSizer,
    snapshots: Option<SnapshotStore>,
    metrics: Option<Arc<Metrics>>,
    status: SharedStatus,
    state: CycleState,
    cycle_count: u64,
    last_cycle_at: Option<DateTime<Utc>>,
}

impl AnalysisRuntime {
    pub fn new(
        config: EngineConfig,
        ctx: EngineContext,
        provider: Arc<dyn MarketDataProvider>,
        executor: Arc<dyn TradeExecutor>,
    ) -> Self {
        Self {
            generator: SignalGenerator::from_config(&config),
            sizer: PositionSizer::from_config(&config),
            config,
            ctx,
            provider,
            executor,
            snapshots: None,
            metrics: None,
            status: Arc::new(RwLock::new(EngineStatus::default())),
            state: CycleState::Idle,
            cycle_count: 0,
            last_cycle_at: None,
        }
    }

    pub fn with_snapshots(mut self, store: SnapshotStore) -> Self {
        self.snapshots = Some(store);
        self
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn with_status(mut self, status: SharedStatus) -> Self {
        self.status = status;
        self
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }

    pub fn state(&self) -> &CycleState {
        &self.state
    }

    pub fn status_handle(&self) -> SharedStatus {
        self.status.clone()
    }

    /// One full pass over the configured instruments. The stop flag is
    /// checked before each instrument; the instrument in progress always
    /// finishes.
    pub async fn run_cycle(&mut self, stop: &StopHandle) -> Result<CycleReport, EngineError> {
        let started = Instant::now();
        self.cycle_count += 1;
        let cycle = self.cycle_count;
        self.transition(CycleState::Running).await;

        info!(
            cycle = cycle,
            confidence = self.ctx.risk.confidence,
            "Analysis cycle #{} (confidence {:.1}%)",
            cycle,
            self.ctx.risk.confidence * 100.0
        );

        let mut report = CycleReport {
            cycle,
            ..CycleReport::default()
        };
        let instruments = self.config.instruments.clone();

        for (index, instrument) in instruments.iter().enumerate() {
            if stop.is_stopped() {
                info!(cycle = cycle, "Stop requested, ending cycle #{} early", cycle);
                report.interrupted = true;
                break;
            }

            match self.analyze_instrument(instrument).await {
                Ok(InstrumentOutcome::Held(_)) => {
                    report.analyzed += 1;
                    report.held += 1;
                }
                Ok(InstrumentOutcome::Traded { .. }) => {
                    report.analyzed += 1;
                    report.traded += 1;
                }
                Err(e) if e.is_skip() => {
                    warn!(instrument = %instrument.pair, error = %e, "Skipping {}: {}", instrument.pair, e);
                    report.skipped += 1;
                    if let Some(metrics) = &self.metrics {
                        metrics.instruments_skipped_total.inc();
                    }
                }
                Err(e) => {
                    error!(instrument = %instrument.pair, error = %e, "Analysis of {} failed: {}", instrument.pair, e);
                    report.failed += 1;
                }
            }

            let is_last = index + 1 == instruments.len();
            if !is_last && !self.config.instrument_delay.is_zero() {
                stop.sleep(self.config.instrument_delay).await;
            }
        }

        if cycle % SAVE_EVERY_CYCLES == 0 {
            self.save_snapshot().await;
        }
        if cycle % REPORT_EVERY_CYCLES == 0 {
            self.log_report();
        }

        self.last_cycle_at = Some(Utc::now());
        self.transition(CycleState::Running).await;

        if let Some(metrics) = &self.metrics {
            metrics.cycles_total.inc();
            metrics
                .cycle_duration_seconds
                .observe(started.elapsed().as_secs_f64());
        }

        debug!(
            cycle = cycle,
            analyzed = report.analyzed,
            traded = report.traded,
            skipped = report.skipped,
            failed = report.failed,
            "Cycle #{} finished in {:?}",
            cycle,
            started.elapsed()
        );

        if report.failed > 0 && report.failed == instruments.len() {
            if let Some(metrics) = &self.metrics {
                metrics.cycle_failures_total.inc();
            }
            return Err(EngineError::Cycle(format!(
                "all {} instruments failed in cycle #{}",
                report.failed, cycle
            )));
        }

        Ok(report)
    }

    /// Fetch, evaluate and possibly trade a single instrument
    pub async fn analyze_instrument(
        &mut self,
        instrument: &Instrument,
    ) -> Result<InstrumentOutcome, EngineError> {
        let pair = instrument.pair.clone();
        self.transition(CycleState::Analyzing(pair.clone())).await;
        info!(instrument = %pair, "Analyzing {}", pair);

        let series = match self
            .provider
            .price_history(&instrument.price_key, self.config.lookback_days)
            .await
        {
            Ok(series) => series,
            Err(e) => {
                warn!(instrument = %pair, error = %e, "Price history unavailable for {}: {}", pair, e);
                Vec::new()
            }
        };

        if let Some(bad) = series.iter().find(|p| !p.price.is_finite() || p.price <= 0.0) {
            return Err(EngineError::Cycle(format!(
                "invalid price {} for {} at {}",
                bad.price, pair, bad.timestamp
            )));
        }

        let evaluation = SignalEngine::evaluate(&pair, &series, &self.generator)?;
        let signal = evaluation.signal;

        info!(
            instrument = %pair,
            price = evaluation.price,
            action = %signal.action,
            confidence = signal.confidence,
            expected_return = signal.expected_return,
            rsi = ?evaluation.indicators.rsi.as_ref().map(|r| r.value),
            "{} price {:.6}: {} ({:.1}% confidence, expected return {:.2}%)",
            pair,
            evaluation.price,
            signal.action,
            signal.confidence * 100.0,
            signal.expected_return * 100.0
        );

        if let Some(metrics) = &self.metrics {
            metrics
                .signals_total
                .with_label_values(&[signal.action.as_str()])
                .inc();
        }

        self.ctx.memory.store(
            &instrument.price_key,
            MemoryPayload {
                price: Some(evaluation.price),
                signal: Some(signal.action),
                confidence: Some(signal.confidence),
                expected_return: Some(signal.expected_return),
                volatility: Some(evaluation.indicators.volatility),
                ..MemoryPayload::default()
            },
            Tier::Immediate,
        );

        self.transition(CycleState::Deciding(pair.clone())).await;
        if !(signal.confidence > self.config.confidence_threshold && signal.is_actionable()) {
            self.transition(CycleState::Skipping(pair.clone())).await;
            info!(
                instrument = %pair,
                confidence = signal.confidence,
                threshold = self.config.confidence_threshold,
                "Holding {}: signal too weak",
                pair
            );
            return Ok(InstrumentOutcome::Held(signal));
        }

        self.transition(CycleState::Executing(pair.clone())).await;
        let amount = self.sizer.size(&signal, &self.ctx.risk);
        let (input, output) = instrument.swap_route(signal.action).ok_or_else(|| {
            EngineError::Execution(format!("no swap route for {} on {}", signal.action, pair))
        })?;
        let request = SwapRequest {
            input: input.clone(),
            output: output.clone(),
            amount,
            fee_rate: instrument.fee_rate,
        };

        info!(
            instrument = %pair,
            action = %signal.action,
            amount = amount,
            "Executing {} {} for {:.4}",
            signal.action,
            pair,
            amount
        );
        let outcome = self.executor.execute(&request, &signal).await;
        if let TradeOutcome::Failed { error, .. } = &outcome {
            warn!(instrument = %pair, error = %error, "Trade on {} failed: {}", pair, error);
        }

        let prediction_error = self.ctx.record_outcome(&outcome, &signal);
        info!(
            instrument = %pair,
            prediction_error = prediction_error,
            confidence = self.ctx.risk.confidence,
            "Adapted risk confidence to {:.1}%",
            self.ctx.risk.confidence * 100.0
        );

        if let Some(metrics) = &self.metrics {
            let result = if outcome.is_success() { "fulfilled" } else { "failed" };
            metrics.trades_total.with_label_values(&[result]).inc();
            metrics.risk_confidence.set(self.ctx.risk.confidence);
        }

        Ok(InstrumentOutcome::Traded {
            signal,
            amount,
            outcome,
        })
    }

    /// Write a snapshot if a store is configured. Failures are logged and
    /// reported as `false`; the loop carries on with its in-memory state.
    pub async fn save_snapshot(&self) -> bool {
        let Some(store) = &self.snapshots else {
            return false;
        };

        match write_snapshot(store, &self.ctx).await {
            Ok(()) => {
                info!(path = %store.path().display(), "Saved engine state");
                true
            }
            Err(e) => {
                error!(path = %store.path().display(), error = %e, "Failed to save engine state: {}", e);
                if let Some(metrics) = &self.metrics {
                    metrics.snapshot_failures_total.inc();
                }
                false
            }
        }
    }

    pub fn log_report(&self) {
        info!("\n{}", self.ctx.report());
    }

    async fn transition(&mut self, state: CycleState) {
        self.state = state.clone();
        let mut status = self.status.write().await;
        status.state = state;
        status.cycle_count = self.cycle_count;
        status.risk = self.ctx.risk;
        status.performance = self.ctx.performance.clone();
        status.last_cycle_at = self.last_cycle_at;
    }
}

#[async_trait]
impl Tick for AnalysisRuntime {
    async fn tick(&mut self, stop: &StopHandle) -> Result<(), EngineError> {
        self.run_cycle(stop).await.map(|_| ())
    }

    async fn on_start(&mut self) {
        info!(
            instruments = self.config.instruments.len(),
            "Engine started with {} instruments",
            self.config.instruments.len()
        );
        self.log_report();
    }

    async fn on_sleep(&mut self) {
        self.transition(CycleState::Sleeping).await;
    }

    async fn on_stop(&mut self) {
        self.transition(CycleState::Stopped).await;
        self.save_snapshot().await;
        self.log_report();
    }
}

async fn write_snapshot(store: &SnapshotStore, ctx: &EngineContext) -> Result<(), EngineError> {
    store.save(&EngineSnapshot::capture(ctx, Utc::now())).await?;
    Ok(())
}

/// Load the persisted engine state, or start fresh when the snapshot is
/// missing or unreadable
pub async fn load_context(store: &SnapshotStore, config: &EngineConfig) -> EngineContext {
    match store.load().await {
        Ok(snapshot) => {
            info!(
                path = %store.path().display(),
                last_saved = %snapshot.last_saved,
                "Loaded engine state saved at {}",
                snapshot.last_saved
            );
            snapshot.restore()
        }
        Err(e) => {
            warn!(
                path = %store.path().display(),
                error = %e,
                "No usable engine state, starting fresh: {}",
                e
            );
            EngineContext::new(RiskState::new(
                RiskState::default().confidence,
                config.learning_rate,
            ))
        }
    }
}
