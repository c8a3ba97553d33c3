// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Concurrent, unordered sample buffer with an atomic drain.
//!
//! A [`SampleBuffer`] accepts inserts from any number of concurrent
//! producers and lets a single consumer take the whole current content in
//! one atomic snapshot-and-clear step.
//!
//! ## Characteristics
//!
//! - **Unordered**: drained readings carry no ordering guarantee.
//! - **Linearizable drain**: the drain swaps the storage out under the lock,
//!   so every inserted reading lands in exactly one drain result or stays
//!   buffered for a future drain. No loss, no duplication.
//! - **Thread-safe**: cheap to clone; all clones share the same storage.
//!
//! ## Example
//!
//! ```
//! use sensorium_core::{Reading, SampleBuffer};
//!
//! let buffer = SampleBuffer::new();
//! buffer.insert(Reading::new(1, 21.5, 48.0));
//! buffer.insert(Reading::new(2, 19.0, 52.5));
//!
//! let snapshot = buffer.drain();
//! assert_eq!(snapshot.len(), 2);
//! assert!(buffer.is_empty());
//! ```

use crate::Reading;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

struct BufferState {
    readings: Mutex<Vec<Reading>>,
    capacity: Option<usize>,
    total_inserted: AtomicU64,
    total_dropped: AtomicU64,
}

/// A shared container of readings, safe for concurrent insertion and a
/// concurrent snapshot-and-clear drain.
///
/// Created once at startup and cloned into every producer and the consumer.
/// The buffer is cleared, never destroyed, by a drain.
#[derive(Clone)]
pub struct SampleBuffer {
    state: Arc<BufferState>,
}

impl SampleBuffer {
    /// Creates an empty, unbounded buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::build(None)
    }

    /// Creates an empty buffer that holds at most `limit` readings.
    ///
    /// Once the limit is reached, further inserts drop the new reading and
    /// count it in [`total_dropped`](Self::total_dropped). This keeps memory
    /// bounded when the consumer stalls, at the price of losing the newest
    /// data instead of blocking the producers.
    #[must_use]
    pub fn with_capacity(limit: usize) -> Self {
        Self::build(Some(limit))
    }

    fn build(capacity: Option<usize>) -> Self {
        Self {
            state: Arc::new(BufferState {
                readings: Mutex::new(Vec::new()),
                capacity,
                total_inserted: AtomicU64::new(0),
                total_dropped: AtomicU64::new(0),
            }),
        }
    }

    /// Appends one reading.
    ///
    /// Safe to call concurrently from any number of producers; the critical
    /// section is a single push, so the call never blocks for long.
    pub fn insert(&self, reading: Reading) {
        let mut readings = self.state.readings.lock();
        if let Some(limit) = self.state.capacity {
            if readings.len() >= limit {
                drop(readings);
                self.state.total_dropped.fetch_add(1, Ordering::Relaxed);
                tracing::warn!(
                    sensor_id = reading.sensor_id,
                    limit,
                    "buffer at capacity, dropping reading"
                );
                return;
            }
        }
        readings.push(reading);
        self.state.total_inserted.fetch_add(1, Ordering::Relaxed);
    }

    /// Atomically captures all currently held readings and empties the
    /// buffer.
    ///
    /// The storage is swapped out under the lock, so the operation is
    /// linearizable with respect to concurrent [`insert`](Self::insert)
    /// calls: a reading never appears in two drain results and never
    /// disappears without appearing in exactly one. An empty buffer drains
    /// to an empty `Vec`.
    #[must_use]
    pub fn drain(&self) -> Vec<Reading> {
        std::mem::take(&mut *self.state.readings.lock())
    }

    /// Number of readings currently buffered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.readings.lock().len()
    }

    /// Whether the buffer currently holds no readings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.readings.lock().is_empty()
    }

    /// Lifetime count of successfully inserted readings.
    #[must_use]
    pub fn total_inserted(&self) -> u64 {
        self.state.total_inserted.load(Ordering::Relaxed)
    }

    /// Lifetime count of readings rejected by the capacity limit.
    #[must_use]
    pub fn total_dropped(&self) -> u64 {
        self.state.total_dropped.load(Ordering::Relaxed)
    }
}

impl Default for SampleBuffer {
    fn default() -> Self {
        Self::new()
    }
}
