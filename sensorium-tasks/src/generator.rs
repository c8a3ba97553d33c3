// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Deterministic per-sensor reading generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sensorium_core::Reading;
use std::ops::RangeInclusive;
use std::time::Duration;

/// Generates the reading and pacing sequence for one sensor.
///
/// The RNG is seeded with the sensor id, so two generators created with the
/// same id produce identical sequences of (temperature, humidity) pairs.
/// This keeps simulator runs reproducible in tests.
///
/// # Example
///
/// ```
/// use sensorium_tasks::ReadingGenerator;
///
/// let mut a = ReadingGenerator::new(1, 500..=10_000);
/// let mut b = ReadingGenerator::new(1, 500..=10_000);
/// let (ra, rb) = (a.next_reading(), b.next_reading());
/// assert_eq!(ra.temperature, rb.temperature);
/// assert_eq!(ra.humidity, rb.humidity);
/// ```
pub struct ReadingGenerator {
    sensor_id: u32,
    rng: StdRng,
    interval_ms: RangeInclusive<u64>,
}

impl ReadingGenerator {
    /// Creates a generator for the given sensor, pacing its readings within
    /// `interval_ms` milliseconds.
    ///
    /// The interval must not be inverted: `start <= end` is required, or
    /// [`next_pause`](Self::next_pause) would panic.
    #[must_use]
    pub fn new(sensor_id: u32, interval_ms: RangeInclusive<u64>) -> Self {
        debug_assert!(
            interval_ms.start() <= interval_ms.end(),
            "inverted pacing interval"
        );
        Self {
            sensor_id,
            rng: StdRng::seed_from_u64(u64::from(sensor_id)),
            interval_ms,
        }
    }

    /// Produces the next reading, timestamped now.
    ///
    /// Temperature is uniform in [0, 40], humidity uniform in [0, 100],
    /// both rounded to two decimals.
    pub fn next_reading(&mut self) -> Reading {
        let temperature = round2(self.rng.random_range(0.0..=40.0));
        let humidity = round2(self.rng.random_range(0.0..=100.0));
        Reading::new(self.sensor_id, temperature, humidity)
    }

    /// Picks the pause before the next reading, uniform within the
    /// configured bounds.
    pub fn next_pause(&mut self) -> Duration {
        Duration::from_millis(self.rng.random_range(self.interval_ms.clone()))
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
