//! Fixed-interval loop driving the analysis cycle

use crate::error::EngineError;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{error, info};

/// Cooperative stop flag shared by the scheduler, the cycle and the caller.
/// Stopping is idempotent and wakes any task sleeping on [`StopHandle::stopped`].
#[derive(Debug, Clone)]
pub struct StopHandle {
    tx: Arc<watch::Sender<bool>>,
}

impl StopHandle {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    pub fn stop(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_stopped(&self) -> bool {
        *self.tx.borrow()
    }

    /// Resolves once a stop has been requested
    pub async fn stopped(&self) {
        let mut rx = self.tx.subscribe();
        // The sender lives as long as self, so this cannot fail
        let _ = rx.wait_for(|stopped| *stopped).await;
    }

    /// Sleep for `duration` unless a stop arrives first. Returns false if
    /// the sleep was cut short.
    pub async fn sleep(&self, duration: Duration) -> bool {
        tokio::select! {
            _ = tokio::time::sleep(duration) => !self.is_stopped(),
            _ = self.stopped() => false,
        }
    }
}

impl Default for StopHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// One unit of scheduled work plus lifecycle hooks
#[async_trait]
pub trait Tick: Send {
    async fn tick(&mut self, stop: &StopHandle) -> Result<(), EngineError>;

    async fn on_start(&mut self) {}

    async fn on_sleep(&mut self) {}

    async fn on_stop(&mut self) {}
}

/// Runs a [`Tick`] every `interval`, pausing for `cooldown` after a failed
/// tick. A tick that is in progress always completes before the loop exits.
pub struct CycleScheduler<T> {
    task: T,
    interval: Duration,
    cooldown: Duration,
    stop: StopHandle,
}

impl<T: Tick> CycleScheduler<T> {
    pub fn new(task: T, interval: Duration, cooldown: Duration) -> Self {
        Self {
            task,
            interval,
            cooldown,
            stop: StopHandle::new(),
        }
    }

    /// Use an externally owned stop flag
    pub fn with_stop_handle(mut self, stop: StopHandle) -> Self {
        self.stop = stop;
        self
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn task(&self) -> &T {
        &self.task
    }

    /// Run until stopped and hand the task back. Consuming the scheduler
    /// rules out a second concurrent loop over the same task.
    pub async fn run(mut self) -> T {
        info!(
            interval_ms = self.interval.as_millis() as u64,
            cooldown_ms = self.cooldown.as_millis() as u64,
            "CycleScheduler: started"
        );
        self.task.on_start().await;

        let mut ticks: u64 = 0;
        while !self.stop.is_stopped() {
            ticks += 1;
            let pause = match self.task.tick(&self.stop).await {
                Ok(()) => self.interval,
                Err(e) => {
                    error!(
                        error = %e,
                        cooldown_ms = self.cooldown.as_millis() as u64,
                        "CycleScheduler: tick failed, cooling down"
                    );
                    self.cooldown
                }
            };

            if self.stop.is_stopped() {
                break;
            }
            self.task.on_sleep().await;
            if !self.stop.sleep(pause).await {
                break;
            }
        }

        self.task.on_stop().await;
        info!(ticks = ticks, "CycleScheduler: stopped after {} ticks", ticks);
        self.task
    }
}
