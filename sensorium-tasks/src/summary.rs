// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Aggregate statistics over one drained snapshot.

use sensorium_core::Reading;
use std::fmt;

/// Count and unweighted arithmetic means over one snapshot of readings.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Number of readings in the snapshot.
    pub count: usize,
    /// Population mean of the temperatures.
    pub mean_temperature: f64,
    /// Population mean of the humidities.
    pub mean_humidity: f64,
}

impl Summary {
    /// Computes the summary of a snapshot.
    ///
    /// Returns `None` for an empty snapshot; the mean of zero readings is
    /// undefined and the aggregator skips those cycles entirely.
    #[must_use]
    pub fn from_snapshot(snapshot: &[Reading]) -> Option<Self> {
        if snapshot.is_empty() {
            return None;
        }
        let count = snapshot.len();
        let mean_temperature =
            snapshot.iter().map(|r| r.temperature).sum::<f64>() / count as f64;
        let mean_humidity = snapshot.iter().map(|r| r.humidity).sum::<f64>() / count as f64;
        Some(Self {
            count,
            mean_temperature,
            mean_humidity,
        })
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} readings - avg temperature {:.2}°C, avg humidity {:.2}%",
            self.count, self.mean_temperature, self.mean_humidity
        )
    }
}
