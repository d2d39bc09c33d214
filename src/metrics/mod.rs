//! Prometheus metrics for the analysis loop and status server

use prometheus::{
    Encoder, Gauge, Histogram, HistogramOpts, IntCounter, IntCounterVec, Opts, Registry,
    TextEncoder,
};

pub struct Metrics {
    registry: Registry,
    pub cycles_total: IntCounter,
    pub cycle_failures_total: IntCounter,
    pub cycle_duration_seconds: Histogram,
    pub signals_total: IntCounterVec,
    pub trades_total: IntCounterVec,
    pub instruments_skipped_total: IntCounter,
    pub snapshot_failures_total: IntCounter,
    pub risk_confidence: Gauge,
    pub http_requests_total: IntCounterVec,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let cycles_total = IntCounter::new("tradeloom_cycles_total", "Completed analysis cycles")?;
        let cycle_failures_total = IntCounter::new(
            "tradeloom_cycle_failures_total",
            "Analysis cycles aborted by an error",
        )?;
        let cycle_duration_seconds = Histogram::with_opts(
            HistogramOpts::new(
                "tradeloom_cycle_duration_seconds",
                "Wall time of one analysis cycle",
            )
            .buckets(vec![1.0, 5.0, 15.0, 30.0, 60.0, 120.0, 300.0]),
        )?;
        let signals_total = IntCounterVec::new(
            Opts::new("tradeloom_signals_total", "Signals generated by action"),
            &["action"],
        )?;
        let trades_total = IntCounterVec::new(
            Opts::new("tradeloom_trades_total", "Trade outcomes by result"),
            &["result"],
        )?;
        let instruments_skipped_total = IntCounter::new(
            "tradeloom_instruments_skipped_total",
            "Instrument analyses skipped for insufficient data",
        )?;
        let snapshot_failures_total = IntCounter::new(
            "tradeloom_snapshot_failures_total",
            "Failed snapshot saves",
        )?;
        let risk_confidence = Gauge::new(
            "tradeloom_risk_confidence",
            "Current adaptive risk confidence",
        )?;
        let http_requests_total = IntCounterVec::new(
            Opts::new("tradeloom_http_requests_total", "Status server requests"),
            &["path", "status"],
        )?;

        registry.register(Box::new(cycles_total.clone()))?;
        registry.register(Box::new(cycle_failures_total.clone()))?;
        registry.register(Box::new(cycle_duration_seconds.clone()))?;
        registry.register(Box::new(signals_total.clone()))?;
        registry.register(Box::new(trades_total.clone()))?;
        registry.register(Box::new(instruments_skipped_total.clone()))?;
        registry.register(Box::new(snapshot_failures_total.clone()))?;
        registry.register(Box::new(risk_confidence.clone()))?;
        registry.register(Box::new(http_requests_total.clone()))?;

        Ok(Self {
            registry,
            cycles_total,
            cycle_failures_total,
            cycle_duration_seconds,
            signals_total,
            trades_total,
            instruments_skipped_total,
            snapshot_failures_total,
            risk_confidence,
            http_requests_total,
        })
    }

    /// Render all metrics in the Prometheus text format
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
