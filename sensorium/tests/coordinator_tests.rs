// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use sensorium::{Config, Coordinator};
use sensorium_core::SensoriumError;
use std::time::Duration;
use tokio::time::sleep;

fn fast_config() -> Config {
    Config {
        sensors: 3,
        min_interval_ms: 1,
        max_interval_ms: 5,
        aggregation_period_ms: 10,
        shutdown_grace_ms: 2_000,
        final_drain: true,
        buffer_capacity: None,
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn all_tasks_stop_within_the_grace_period() -> anyhow::Result<()> {
    let mut coordinator = Coordinator::new(fast_config());
    coordinator.start();
    sleep(Duration::from_millis(50)).await;

    let report = coordinator.stop().await?;

    assert!(report.total_collected > 0, "producers must have run");
    assert_eq!(report.remaining, 0, "final drain must empty the buffer");
    assert_eq!(report.dropped, 0);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn without_final_drain_the_buffer_keeps_trailing_readings() -> anyhow::Result<()> {
    let config = Config {
        // Aggregation never fires within the test budget
        aggregation_period_ms: 60_000,
        final_drain: false,
        ..fast_config()
    };

    let mut coordinator = Coordinator::new(config);
    coordinator.start();
    sleep(Duration::from_millis(50)).await;

    let report = coordinator.stop().await?;

    assert!(report.total_collected > 0);
    assert_eq!(
        report.remaining as u64, report.total_collected,
        "nothing was drained, everything must remain"
    );
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn capacity_limit_is_reported_at_shutdown() -> anyhow::Result<()> {
    let config = Config {
        aggregation_period_ms: 60_000,
        final_drain: false,
        buffer_capacity: Some(1),
        ..fast_config()
    };

    let mut coordinator = Coordinator::new(config);
    coordinator.start();
    sleep(Duration::from_millis(50)).await;

    let report = coordinator.stop().await?;

    assert_eq!(report.total_collected, 1);
    assert_eq!(report.remaining, 1);
    assert!(report.dropped > 0, "excess readings must be counted");
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn exhausted_grace_period_fails_with_shutdown_timeout() {
    let config = Config {
        // Producers park in a long pause; a zero grace elapses on the
        // first pending poll of the join, before any task can finish
        min_interval_ms: 60_000,
        max_interval_ms: 60_000,
        shutdown_grace_ms: 0,
        ..fast_config()
    };

    let mut coordinator = Coordinator::new(config);
    coordinator.start();
    sleep(Duration::from_millis(20)).await;

    let result = coordinator.stop().await;

    assert!(matches!(
        result,
        Err(SensoriumError::ShutdownTimeout { .. })
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn stop_before_start_reports_an_idle_run() -> anyhow::Result<()> {
    let mut coordinator = Coordinator::new(fast_config());

    let report = coordinator.stop().await?;

    assert_eq!(report.total_collected, 0);
    assert_eq!(report.remaining, 0);
    Ok(())
}
