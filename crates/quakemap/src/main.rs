//! Command-line entry point for quakemap.
//!
//! Produces a single self-contained HTML page showing recent USGS
//! earthquakes as magnitude-styled circle markers, with the PB2002
//! tectonic plate boundaries as a toggleable overlay.
//!
//! # Pipeline
//!
//! ```text
//! USGS feed ---+
//!              +--> compose_map --> MapRenderer --> quakemap.html
//! PB2002 ------+
//! ```
//!
//! The run is one-shot: fetch, render, write, exit. The page does all
//! drawing in the browser with Leaflet.

mod config;
mod pipeline;

use std::path::PathBuf;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig, QuakemapConfig};

/// Default configuration file, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "quakemap.yaml";

/// Application entry point.
///
/// Loads configuration, initializes logging, then runs the pipeline once.
///
/// # Errors
///
/// Returns an error if configuration is invalid, the earthquake feed
/// cannot be fetched, or the page cannot be rendered or written.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::var("QUAKEMAP_CONFIG")
        .map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    let config = QuakemapConfig::load(&config_path)
        .with_context(|| format!("failed to load {}", config_path.display()))?;

    init_tracing(&config.logging);

    info!(
        config = %config_path.display(),
        period = %config.feed.period,
        output = config.output.path,
        "quakemap starting"
    );

    let summary = pipeline::run(&config).await?;
    info!(
        output = %summary.output.display(),
        markers = summary.stats.markers,
        skipped = summary.stats.skipped,
        boundaries = summary.stats.boundaries,
        faults_included = summary.faults_included,
        "map written"
    );

    Ok(())
}

/// `RUST_LOG` wins over the configured level when set.
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    match logging.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init(),
    }
}
