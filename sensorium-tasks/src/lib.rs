// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

pub mod aggregator;
pub mod generator;
pub mod simulator;
pub mod summary;

pub use self::aggregator::Aggregator;
pub use self::generator::ReadingGenerator;
pub use self::simulator::SensorSimulator;
pub use self::summary::Summary;
