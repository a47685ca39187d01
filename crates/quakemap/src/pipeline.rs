//! One run of the generator: fetch, compose, render, write.

use std::path::{Path, PathBuf};

use anyhow::Context;
use quakemap_feeds::{FeedClient, FeedError};
use quakemap_map::{compose_map, MapRenderer, MapStats};
use quakemap_types::{BoundaryCollection, QuakeCollection};
use tracing::{info, warn};

use crate::config::QuakemapConfig;

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Where the page was written.
    pub output: PathBuf,
    /// Feature counts of the rendered map.
    pub stats: MapStats,
    /// Whether the plate-boundary overlay made it onto the page.
    pub faults_included: bool,
}

/// Fetch both feeds, build the map, and write the page.
///
/// A failed earthquake fetch aborts the run. A failed plate-boundary fetch
/// is logged and the page is rendered without that overlay.
///
/// # Errors
///
/// Returns an error if the earthquake feed cannot be fetched, the map
/// configuration is invalid, the template fails, or the file cannot be
/// written.
pub async fn run(config: &QuakemapConfig) -> anyhow::Result<RunSummary> {
    let client = FeedClient::new(&config.feed).context("failed to build HTTP client")?;
    info!(
        quake_url = client.quake_url(),
        faults_url = client.faults_url(),
        faults_enabled = config.feed.faults_enabled,
        "fetching feeds"
    );

    let (quakes, faults) = fetch_feeds(&client, config.feed.faults_enabled).await;
    let quakes = quakes.context("failed to fetch earthquake feed")?;
    let faults = match faults {
        Some(Ok(faults)) => Some(faults),
        Some(Err(e)) => {
            warn!(error = %e, "plate boundaries unavailable, rendering without them");
            None
        }
        None => None,
    };
    let faults_included = faults.is_some();

    let map = compose_map(&config.map, &quakes, faults).context("failed to compose map")?;

    let renderer = match &config.output.templates_dir {
        Some(dir) => MapRenderer::from_dir(dir),
        None => MapRenderer::new().context("failed to load embedded template")?,
    };
    let html = renderer.render(&map).context("failed to render map page")?;

    let output = PathBuf::from(&config.output.path);
    write_page(&output, &html).await?;

    Ok(RunSummary {
        output,
        stats: map.stats,
        faults_included,
    })
}

async fn fetch_feeds(
    client: &FeedClient,
    faults_enabled: bool,
) -> (
    Result<QuakeCollection, FeedError>,
    Option<Result<BoundaryCollection, FeedError>>,
) {
    let faults = async {
        if faults_enabled {
            Some(client.fetch_fault_boundaries().await)
        } else {
            None
        }
    };
    tokio::join!(client.fetch_earthquakes(), faults)
}

async fn write_page(path: &Path, html: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    tokio::fs::write(path, html)
        .await
        .with_context(|| format!("failed to write {}", path.display()))
}
