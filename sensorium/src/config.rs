// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! CLI configuration.
//!
//! The original behavior hard-coded the sensor count and timing bounds;
//! here they are named flags with the original values as defaults.

use clap::Parser;
use sensorium_core::{Result, SensoriumError};
use std::ops::RangeInclusive;
use std::time::Duration;

/// Concurrent sensor sampling and aggregation.
#[derive(Debug, Clone, Parser)]
#[command(name = "sensorium", version, about)]
pub struct Config {
    /// Number of concurrent sensor producers.
    #[arg(long, default_value_t = 2)]
    pub sensors: u32,

    /// Lower bound on the pause between readings, in milliseconds.
    #[arg(long, default_value_t = 500)]
    pub min_interval_ms: u64,

    /// Upper bound on the pause between readings, in milliseconds.
    #[arg(long, default_value_t = 10_000)]
    pub max_interval_ms: u64,

    /// Aggregation polling period, in milliseconds.
    #[arg(long, default_value_t = 1_000)]
    pub aggregation_period_ms: u64,

    /// How long to wait for tasks to stop once shutdown is requested,
    /// in milliseconds.
    #[arg(long, default_value_t = 15_000)]
    pub shutdown_grace_ms: u64,

    /// Drain the buffer one last time after shutdown is requested.
    /// Disable to accept trailing-data loss, as the original did.
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub final_drain: bool,

    /// Maximum number of buffered readings; unbounded when omitted.
    #[arg(long)]
    pub buffer_capacity: Option<usize>,
}

impl Config {
    /// Rejects settings no run could make sense of. Called before any task
    /// is spawned.
    pub fn validate(&self) -> Result<()> {
        if self.sensors == 0 {
            return Err(SensoriumError::invalid_config(
                "at least one sensor is required",
            ));
        }
        if self.min_interval_ms > self.max_interval_ms {
            return Err(SensoriumError::invalid_config(
                "min-interval-ms must not exceed max-interval-ms",
            ));
        }
        if self.aggregation_period_ms == 0 {
            return Err(SensoriumError::invalid_config(
                "aggregation-period-ms must be positive",
            ));
        }
        Ok(())
    }

    /// Producer pacing bounds, in milliseconds.
    pub fn interval_ms(&self) -> RangeInclusive<u64> {
        self.min_interval_ms..=self.max_interval_ms
    }

    /// Consumer polling period.
    pub fn aggregation_period(&self) -> Duration {
        Duration::from_millis(self.aggregation_period_ms)
    }

    /// Bounded wait for tasks to reach their terminal state at shutdown.
    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_millis(self.shutdown_grace_ms)
    }
}
