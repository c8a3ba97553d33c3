// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sensor simulator task - one concurrent producer per sensor id.

use crate::ReadingGenerator;
use sensorium_core::{Result, SampleBuffer, SensoriumError};
use std::ops::RangeInclusive;
use tokio::select;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

/// A single simulated sensor producing readings at random intervals.
///
/// The task runs until the cancellation token is observed, then exits.
/// Cancellation is cooperative: it takes effect at the next suspension
/// point, so an in-progress pause is abandoned but an in-flight insert
/// completes. Callers must await [`stop`](Self::stop) before treating the
/// buffer content as final.
pub struct SensorSimulator {
    sensor_id: u32,
    cancel_token: CancellationToken,
    task_handle: Option<JoinHandle<()>>,
}

impl SensorSimulator {
    /// Creates a simulator for the given sensor id.
    pub fn new(sensor_id: u32, cancel_token: CancellationToken) -> Self {
        Self {
            sensor_id,
            cancel_token,
            task_handle: None,
        }
    }

    /// Spawns the producer loop, pacing readings within `interval_ms`.
    pub fn start(&mut self, buffer: SampleBuffer, interval_ms: RangeInclusive<u64>) {
        let cancel_token = self.cancel_token.clone();
        let sensor_id = self.sensor_id;
        let handle = tokio::spawn(async move {
            Self::run(sensor_id, buffer, interval_ms, cancel_token).await;
        });
        self.task_handle = Some(handle);
    }

    /// Cancels the token and awaits the producer loop.
    pub async fn stop(&mut self) -> Result<()> {
        if let Some(handle) = self.task_handle.take() {
            self.cancel_token.cancel();
            handle.await.map_err(|e| {
                SensoriumError::task_failed(format!("sensor-{}", self.sensor_id), e.to_string())
            })?;
        }
        Ok(())
    }

    async fn run(
        sensor_id: u32,
        buffer: SampleBuffer,
        interval_ms: RangeInclusive<u64>,
        cancel_token: CancellationToken,
    ) {
        let mut generator = ReadingGenerator::new(sensor_id, interval_ms);
        tracing::debug!(sensor_id, "sensor simulator started");

        loop {
            if cancel_token.is_cancelled() {
                break;
            }

            buffer.insert(generator.next_reading());

            select! {
                _ = sleep(generator.next_pause()) => {}
                _ = cancel_token.cancelled() => break,
            }
        }

        tracing::debug!(sensor_id, "sensor simulator stopped");
    }
}
