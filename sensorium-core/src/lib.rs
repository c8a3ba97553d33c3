// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

pub mod error;
pub mod reading;
pub mod sample_buffer;

pub use self::error::{Result, SensoriumError};
pub use self::reading::Reading;
pub use self::sample_buffer::SampleBuffer;
