// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Periodic consumer draining the shared buffer.

use crate::Summary;
use sensorium_core::{Result, SampleBuffer, SensoriumError};
use std::time::Duration;
use tokio::select;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

/// The single consumer: polls the buffer on a fixed period and reports
/// summary statistics for every non-empty drain.
///
/// This is not a wall-clock-aligned window. The loop sleeps a fixed period
/// between checks, so the population captured per cycle depends on
/// produce/drain timing. Cycles that find the buffer empty are skipped
/// silently.
///
/// With `final_drain` enabled the aggregator performs exactly one more
/// drain-and-report after observing cancellation, so readings inserted
/// between the last periodic drain and shutdown are not lost. Disabling it
/// restores the original behavior, which accepts that trailing loss.
pub struct Aggregator {
    cancel_token: CancellationToken,
    task_handle: Option<JoinHandle<()>>,
}

impl Aggregator {
    /// Creates a stopped aggregator.
    pub fn new(cancel_token: CancellationToken) -> Self {
        Self {
            cancel_token,
            task_handle: None,
        }
    }

    /// Spawns the polling loop.
    pub fn start(&mut self, buffer: SampleBuffer, period: Duration, final_drain: bool) {
        let cancel_token = self.cancel_token.clone();
        let handle = tokio::spawn(async move {
            Self::run(buffer, period, final_drain, cancel_token).await;
        });
        self.task_handle = Some(handle);
    }

    /// Cancels the token and awaits the polling loop.
    pub async fn stop(&mut self) -> Result<()> {
        if let Some(handle) = self.task_handle.take() {
            self.cancel_token.cancel();
            handle
                .await
                .map_err(|e| SensoriumError::task_failed("aggregator", e.to_string()))?;
        }
        Ok(())
    }

    async fn run(
        buffer: SampleBuffer,
        period: Duration,
        final_drain: bool,
        cancel_token: CancellationToken,
    ) {
        tracing::debug!(?period, final_drain, "aggregator started");

        loop {
            select! {
                _ = sleep(period) => {
                    Self::drain_and_report(&buffer);
                }
                _ = cancel_token.cancelled() => break,
            }
        }

        if final_drain {
            Self::drain_and_report(&buffer);
        }

        tracing::debug!("aggregator stopped");
    }

    fn drain_and_report(buffer: &SampleBuffer) {
        if buffer.is_empty() {
            return;
        }
        let snapshot = buffer.drain();
        if let Some(summary) = Summary::from_snapshot(&snapshot) {
            println!("[aggregator] {summary}");
        }
    }
}
