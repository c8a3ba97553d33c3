// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use clap::Parser;
use sensorium::Config;
use sensorium_core::SensoriumError;

#[test]
fn defaults_match_the_original_constants() {
    let config = Config::parse_from(["sensorium"]);

    assert_eq!(config.sensors, 2);
    assert_eq!(config.min_interval_ms, 500);
    assert_eq!(config.max_interval_ms, 10_000);
    assert_eq!(config.aggregation_period_ms, 1_000);
    assert!(config.final_drain);
    assert_eq!(config.buffer_capacity, None);
    assert!(config.validate().is_ok());
}

#[test]
fn zero_sensors_is_rejected() {
    let config = Config::parse_from(["sensorium", "--sensors", "0"]);

    assert!(matches!(
        config.validate(),
        Err(SensoriumError::InvalidConfig { .. })
    ));
}

#[test]
fn inverted_interval_bounds_are_rejected() {
    let config = Config::parse_from([
        "sensorium",
        "--min-interval-ms",
        "1000",
        "--max-interval-ms",
        "500",
    ]);

    assert!(matches!(
        config.validate(),
        Err(SensoriumError::InvalidConfig { .. })
    ));
}

#[test]
fn zero_aggregation_period_is_rejected() {
    let config = Config::parse_from(["sensorium", "--aggregation-period-ms", "0"]);

    assert!(matches!(
        config.validate(),
        Err(SensoriumError::InvalidConfig { .. })
    ));
}

#[test]
fn final_drain_can_be_disabled() {
    let config = Config::parse_from(["sensorium", "--final-drain", "false"]);

    assert!(!config.final_drain);
}
