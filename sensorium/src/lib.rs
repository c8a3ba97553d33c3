// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

pub mod config;
pub mod coordinator;

pub use self::config::Config;
pub use self::coordinator::{Coordinator, ShutdownReport};
