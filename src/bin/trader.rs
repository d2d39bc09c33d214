//! Tradeloom trader
//!
//! Runs the analysis loop against CoinGecko price history and serves
//! health, metrics and status over HTTP.

use dotenvy::dotenv;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};
use tradeloom::config::EngineConfig;
use tradeloom::core::{
    load_context, start_server, AnalysisRuntime, AppState, CycleScheduler, EngineStatus,
};
use tradeloom::db::SnapshotStore;
use tradeloom::logging;
use tradeloom::metrics::Metrics;
use tradeloom::services::{CoinGeckoProvider, DryRunExecutor};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let config = EngineConfig::from_env()?;
    config.validate()?;

    let env = tradeloom::config::get_environment();
    info!(environment = %env, "Starting Tradeloom trader");
    info!(
        instruments = config.instruments.len(),
        min_profit_threshold = config.min_profit_threshold,
        max_trade_amount = config.max_trade_amount,
        confidence_threshold = config.confidence_threshold,
        cycle_interval_ms = config.cycle_interval.as_millis() as u64,
        "Configuration loaded"
    );

    let metrics = Arc::new(Metrics::new()?);
    let store = SnapshotStore::new(config.state_path.clone());
    let ctx = load_context(&store, &config).await;
    metrics.risk_confidence.set(ctx.risk.confidence);

    let status = Arc::new(tokio::sync::RwLock::new(EngineStatus::default()));
    let provider = Arc::new(CoinGeckoProvider::new(config.provider_url.clone()));
    let executor = Arc::new(DryRunExecutor::new(config.max_slippage));

    let interval = config.cycle_interval;
    let cooldown = config.cycle_cooldown;
    let port = config.http_port;

    let runtime = AnalysisRuntime::new(config, ctx, provider, executor)
        .with_snapshots(store)
        .with_metrics(metrics.clone())
        .with_status(status.clone());

    if port != 0 {
        let state = AppState::new(status, metrics);
        tokio::spawn(async move {
            if let Err(e) = start_server(port, state).await {
                error!(error = %e, "HTTP server error: {}", e);
            }
        });
    } else {
        info!("HTTP server disabled (PORT=0)");
    }

    let scheduler = CycleScheduler::new(runtime, interval, cooldown);
    let stop = scheduler.stop_handle();
    let mut engine = tokio::spawn(scheduler.run());

    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutdown requested, finishing current work...");
            stop.stop();
            let runtime = (&mut engine).await?;
            info!(cycles = runtime.cycle_count(), "Engine stopped after {} cycles", runtime.cycle_count());
        }
        result = &mut engine => {
            let runtime = result?;
            info!(cycles = runtime.cycle_count(), "Engine stopped after {} cycles", runtime.cycle_count());
        }
    }

    Ok(())
}
