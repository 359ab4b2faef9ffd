//! Transit mock CLI
//!
//! Runs provider operations in-process and prints the JSON payloads.

#![allow(clippy::print_stdout)]

use std::sync::Arc;

use application::TransportService;
use clap::Parser;
use infrastructure::{AppConfig, MockTransitAdapter, TelemetryConfig, init_telemetry};
use integration_transit::MockTransitConfig;
use presentation_cli::{Cli, execute, log_filter_from_verbosity};
use tracing::warn;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let telemetry = TelemetryConfig::default().with_filter(log_filter_from_verbosity(cli.verbose));
    init_telemetry(&telemetry)?;

    let loaded = match &cli.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    };
    let mut config = loaded.unwrap_or_else(|e| {
        warn!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });

    if cli.no_delay {
        config.mock_transit = MockTransitConfig::instant();
    }

    let adapter = MockTransitAdapter::from_config(&config.mock_transit);
    let service = TransportService::new(Arc::new(adapter));

    println!("{}", execute(cli.command, &service).await?);

    Ok(())
}
