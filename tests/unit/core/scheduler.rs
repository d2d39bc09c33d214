//! Unit tests for the cycle scheduler

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tradeloom::core::{CycleScheduler, StopHandle, Tick};
use tradeloom::error::EngineError;

#[derive(Default)]
struct Counter {
    ticks: Arc<AtomicU64>,
    stop_after: Option<u64>,
    fail_first: bool,
    started: bool,
    stopped: bool,
    sleeps: u64,
}

#[async_trait]
impl Tick for Counter {
    async fn tick(&mut self, stop: &StopHandle) -> Result<(), EngineError> {
        let n = self.ticks.fetch_add(1, Ordering::SeqCst) + 1;
        if self.stop_after == Some(n) {
            stop.stop();
        }
        if self.fail_first && n == 1 {
            return Err(EngineError::Cycle("boom".to_string()));
        }
        Ok(())
    }

    async fn on_start(&mut self) {
        self.started = true;
    }

    async fn on_sleep(&mut self) {
        self.sleeps += 1;
    }

    async fn on_stop(&mut self) {
        self.stopped = true;
    }
}

#[tokio::test]
async fn test_runs_until_stopped() {
    let task = Counter {
        stop_after: Some(3),
        ..Counter::default()
    };
    let scheduler = CycleScheduler::new(task, Duration::from_millis(1), Duration::from_millis(1));
    let task = scheduler.run().await;

    assert_eq!(task.ticks.load(Ordering::SeqCst), 3);
    assert_eq!(task.sleeps, 2);
    assert!(task.started);
    assert!(task.stopped);
}

#[tokio::test]
async fn test_failed_tick_waits_for_cooldown_not_interval() {
    let task = Counter {
        stop_after: Some(2),
        fail_first: true,
        ..Counter::default()
    };
    let scheduler = CycleScheduler::new(task, Duration::from_secs(600), Duration::from_millis(5));
    let started = Instant::now();
    let task = tokio::time::timeout(Duration::from_secs(5), scheduler.run())
        .await
        .expect("cooldown should be used after a failed tick");

    assert_eq!(task.ticks.load(Ordering::SeqCst), 2);
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn test_stop_wakes_sleeping_loop() {
    let ticks = Arc::new(AtomicU64::new(0));
    let task = Counter {
        ticks: ticks.clone(),
        ..Counter::default()
    };
    let scheduler = CycleScheduler::new(task, Duration::from_secs(600), Duration::from_secs(600));
    let stop = scheduler.stop_handle();
    let handle = tokio::spawn(scheduler.run());

    while ticks.load(Ordering::SeqCst) == 0 {
        tokio::time::sleep(Duration::from_millis(1)).await;
    }
    stop.stop();

    let task = tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("stop should interrupt the sleep")
        .unwrap();
    assert_eq!(task.ticks.load(Ordering::SeqCst), 1);
    assert!(task.stopped);
}

#[tokio::test]
async fn test_stopped_before_start_runs_no_ticks() {
    let stop = StopHandle::new();
    stop.stop();
    let scheduler = CycleScheduler::new(
        Counter::default(),
        Duration::from_millis(1),
        Duration::from_millis(1),
    )
    .with_stop_handle(stop);

    let task = scheduler.run().await;
    assert_eq!(task.ticks.load(Ordering::SeqCst), 0);
    assert!(task.started);
    assert!(task.stopped);
}

#[tokio::test]
async fn test_stop_handle_is_idempotent() {
    let stop = StopHandle::new();
    assert!(!stop.is_stopped());
    stop.stop();
    stop.stop();
    assert!(stop.is_stopped());
    tokio::time::timeout(Duration::from_secs(1), stop.stopped())
        .await
        .unwrap();
    assert!(!stop.sleep(Duration::from_secs(60)).await);
}
