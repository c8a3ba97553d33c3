// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Task supervision: spawn, cancel, join.

use crate::Config;
use sensorium_core::{Result, SampleBuffer, SensoriumError};
use sensorium_tasks::{Aggregator, SensorSimulator};
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

/// Owns the cancellation token, the shared buffer and every task handle.
///
/// All tasks share one token. [`stop`](Self::stop) cancels it once and joins
/// every task under the configured grace period; a task that does not reach
/// its terminal state in time fails the whole run with
/// [`SensoriumError::ShutdownTimeout`].
pub struct Coordinator {
    config: Config,
    cancel_token: CancellationToken,
    buffer: SampleBuffer,
    simulators: Vec<SensorSimulator>,
    aggregator: Option<Aggregator>,
}

/// Final totals reported at shutdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShutdownReport {
    /// Readings inserted over the whole run.
    pub total_collected: u64,
    /// Readings still buffered at exit (typically zero with the final
    /// drain enabled).
    pub remaining: usize,
    /// Readings rejected by the capacity limit, if one was set.
    pub dropped: u64,
}

impl Coordinator {
    /// Creates the shared state; no task runs until [`start`](Self::start).
    pub fn new(config: Config) -> Self {
        let buffer = match config.buffer_capacity {
            Some(limit) => SampleBuffer::with_capacity(limit),
            None => SampleBuffer::new(),
        };
        Self {
            config,
            cancel_token: CancellationToken::new(),
            buffer,
            simulators: Vec::new(),
            aggregator: None,
        }
    }

    /// Spawns one simulator per sensor id and the single aggregator.
    pub fn start(&mut self) {
        for sensor_id in 1..=self.config.sensors {
            let mut simulator = SensorSimulator::new(sensor_id, self.cancel_token.clone());
            simulator.start(self.buffer.clone(), self.config.interval_ms());
            self.simulators.push(simulator);
        }

        let mut aggregator = Aggregator::new(self.cancel_token.clone());
        aggregator.start(
            self.buffer.clone(),
            self.config.aggregation_period(),
            self.config.final_drain,
        );
        self.aggregator = Some(aggregator);

        tracing::info!(sensors = self.config.sensors, "all tasks started");
    }

    /// Cancels the token and joins every task within the grace period.
    ///
    /// The simulators are joined before the buffer is treated as final, so
    /// no in-flight insert can slip past the report.
    pub async fn stop(&mut self) -> Result<ShutdownReport> {
        self.cancel_token.cancel();

        let grace = self.config.shutdown_grace();
        match timeout(grace, self.join_all()).await {
            Ok(joined) => joined?,
            Err(_) => return Err(SensoriumError::shutdown_timeout(grace)),
        }

        tracing::info!("all tasks stopped");
        Ok(ShutdownReport {
            total_collected: self.buffer.total_inserted(),
            remaining: self.buffer.len(),
            dropped: self.buffer.total_dropped(),
        })
    }

    async fn join_all(&mut self) -> Result<()> {
        for simulator in &mut self.simulators {
            simulator.stop().await?;
        }
        if let Some(aggregator) = &mut self.aggregator {
            aggregator.stop().await?;
        }
        Ok(())
    }
}
