// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for sensorium.
//!
//! The reference behavior assumes randomness, timing and I/O never fail, so
//! the taxonomy is small: supervision failures and configuration mistakes.
//! Insert and drain define no error conditions; allocation failure aborts
//! the process rather than being swallowed.

use std::time::Duration;

/// Root error type for all sensorium operations.
#[derive(Debug, thiserror::Error)]
pub enum SensoriumError {
    /// A producer or the aggregator did not reach its terminal state within
    /// the shutdown grace period after cancellation was requested.
    #[error("shutdown timed out after {waited:?}")]
    ShutdownTimeout {
        /// How long the coordinator waited before giving up.
        waited: Duration,
    },

    /// A supervised task panicked or was aborted before reaching its
    /// terminal state.
    #[error("task '{task}' failed: {context}")]
    TaskFailed {
        /// Name of the failing task.
        task: String,
        /// Description of the failure, typically the join error.
        context: String,
    },

    /// Configuration validation failure, reported before any task starts.
    #[error("invalid configuration: {context}")]
    InvalidConfig {
        /// Description of the rejected setting.
        context: String,
    },
}

impl SensoriumError {
    /// Create a shutdown timeout error recording the grace period waited.
    pub fn shutdown_timeout(waited: Duration) -> Self {
        Self::ShutdownTimeout { waited }
    }

    /// Create a task failure error for the named task.
    pub fn task_failed(task: impl Into<String>, context: impl Into<String>) -> Self {
        Self::TaskFailed {
            task: task.into(),
            context: context.into(),
        }
    }

    /// Create a configuration error with the given context.
    pub fn invalid_config(context: impl Into<String>) -> Self {
        Self::InvalidConfig {
            context: context.into(),
        }
    }
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, SensoriumError>;
