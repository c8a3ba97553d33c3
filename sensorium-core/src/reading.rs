// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sensor reading domain type.

use chrono::{DateTime, Utc};

/// One timestamped sensor observation.
///
/// A `Reading` is immutable once constructed: it is created by a producer,
/// held by the [`SampleBuffer`](crate::SampleBuffer) until a drain moves it
/// out, and dropped after aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    /// Identifier of the producing sensor (>= 1).
    pub sensor_id: u32,
    /// Temperature in degrees Celsius, within [0, 40] by construction.
    pub temperature: f64,
    /// Relative humidity in percent, within [0, 100] by construction.
    pub humidity: f64,
    /// UTC instant of generation.
    pub timestamp: DateTime<Utc>,
}

impl Reading {
    /// Creates a reading timestamped with the current UTC instant.
    pub fn new(sensor_id: u32, temperature: f64, humidity: f64) -> Self {
        Self {
            sensor_id,
            temperature,
            humidity,
            timestamp: Utc::now(),
        }
    }
}
