//! HTTP client for the earthquake and plate-boundary feeds.
//!
//! One `reqwest::Client` is shared by both fetches. Each fetch is a single
//! GET: a non-success status or an unparseable body is returned as a
//! [`FeedError`] and never retried.

use quakemap_types::{BoundaryCollection, FeatureCollection, QuakeCollection};
use tracing::{debug, info};

use crate::config::FeedConfig;
use crate::error::FeedError;

/// Fetches `GeoJSON` feature collections from the configured feeds.
#[derive(Debug, Clone)]
pub struct FeedClient {
    client: reqwest::Client,
    quake_url: String,
    faults_url: String,
}

impl FeedClient {
    /// Create a client for the feeds named in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Client`] if the TLS backend cannot be
    /// initialized.
    pub fn new(config: &FeedConfig) -> Result<Self, FeedError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| FeedError::Client(e.to_string()))?;

        Ok(Self {
            client,
            quake_url: config.quake_url(),
            faults_url: config.faults_url.clone(),
        })
    }

    /// URL of the earthquake feed.
    pub fn quake_url(&self) -> &str {
        &self.quake_url
    }

    /// URL of the plate-boundary dataset.
    pub fn faults_url(&self) -> &str {
        &self.faults_url
    }

    /// Fetch the earthquake feed.
    pub async fn fetch_earthquakes(&self) -> Result<QuakeCollection, FeedError> {
        self.fetch(&self.quake_url).await
    }

    /// Fetch the plate-boundary dataset.
    pub async fn fetch_fault_boundaries(&self) -> Result<BoundaryCollection, FeedError> {
        self.fetch(&self.faults_url).await
    }

    /// GET `url` and decode the body as a feature collection.
    async fn fetch(&self, url: &str) -> Result<FeatureCollection, FeedError> {
        debug!(url, "requesting feed");

        let response = self
            .client
            .get(url)
            .header("Accept", "application/geo+json, application/json")
            .send()
            .await
            .map_err(|e| FeedError::Request {
                url: url.to_owned(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                url: url.to_owned(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| FeedError::Request {
            url: url.to_owned(),
            message: format!("failed to read body: {e}"),
        })?;

        let collection = decode(url, &body)?;
        info!(url, features = collection.features.len(), "feed loaded");
        Ok(collection)
    }
}

/// Parse a feed body that was obtained some other way.
pub fn parse_collection(body: &str) -> Result<FeatureCollection, FeedError> {
    decode("<inline>", body)
}

fn decode(url: &str, body: &str) -> Result<FeatureCollection, FeedError> {
    serde_json::from_str(body).map_err(|source| FeedError::Decode {
        url: url.to_owned(),
        source,
    })
}
