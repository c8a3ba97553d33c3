// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! sensorium - concurrent sensor sampling and aggregation.

use anyhow::Result;
use clap::Parser;
use sensorium::{Config, Coordinator};
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::parse();
    config.validate()?;

    println!(
        "Starting sensor aggregation with {} sensors. Press Enter (or Ctrl-C) to stop.",
        config.sensors
    );

    let mut coordinator = Coordinator::new(config);
    coordinator.start();

    wait_for_shutdown().await;

    let report = coordinator.stop().await?;
    println!(
        "Aggregation stopped. Total readings collected: {}, remaining in buffer: {}",
        report.total_collected, report.remaining
    );
    if report.dropped > 0 {
        println!("Readings dropped at capacity: {}", report.dropped);
    }
    Ok(())
}

async fn wait_for_shutdown() {
    let mut line = String::new();
    let mut stdin = BufReader::new(tokio::io::stdin());
    tokio::select! {
        _ = stdin.read_line(&mut line) => {}
        _ = tokio::signal::ctrl_c() => {}
    }
}
