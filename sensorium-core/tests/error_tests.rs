// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use sensorium_core::SensoriumError;
use std::time::Duration;

#[test]
fn shutdown_timeout_display_includes_grace_period() {
    let err = SensoriumError::shutdown_timeout(Duration::from_secs(15));
    assert_eq!(err.to_string(), "shutdown timed out after 15s");
}

#[test]
fn task_failed_display_names_the_task() {
    let err = SensoriumError::task_failed("sensor-3", "task panicked");
    assert_eq!(err.to_string(), "task 'sensor-3' failed: task panicked");
}

#[test]
fn invalid_config_display_carries_context() {
    let err = SensoriumError::invalid_config("at least one sensor is required");
    assert_eq!(
        err.to_string(),
        "invalid configuration: at least one sensor is required"
    );
}
