//! Configuration loading for the quakemap binary.
//!
//! The canonical configuration lives in `quakemap.yaml` (path overridable
//! via `QUAKEMAP_CONFIG`). A missing file means "all defaults": the 30-day
//! USGS feed with plate boundaries, written to `quakemap.html`.
//! Environment variables override selected values after parsing.

use std::path::Path;

use quakemap_feeds::{FeedConfig, FeedPeriod};
use quakemap_map::MapConfig;
use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// An environment override holds an unusable value.
    #[error("invalid {name}: {reason}")]
    InvalidOverride {
        /// The environment variable.
        name: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration. Mirrors the structure of `quakemap.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QuakemapConfig {
    /// Which feeds to fetch.
    #[serde(default)]
    pub feed: FeedConfig,

    /// How to draw the map.
    #[serde(default)]
    pub map: MapConfig,

    /// Where the page goes.
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Output settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    /// Destination of the rendered HTML page.
    #[serde(default = "default_output_path")]
    pub path: String,

    /// Directory holding a replacement `map.html` template.
    #[serde(default)]
    pub templates_dir: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            templates_dir: None,
        }
    }
}

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is unset (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Line format.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl QuakemapConfig {
    /// Load configuration from a YAML file, falling back to defaults when
    /// the file does not exist, then apply environment overrides:
    ///
    /// - `MAPBOX_ACCESS_TOKEN` overrides `map.tiles.access_token`
    /// - `QUAKEMAP_FEED_PERIOD` overrides `feed.period`
    /// - `QUAKEMAP_UTC_OFFSET` overrides `map.utc_offset`
    /// - `QUAKEMAP_OUTPUT` overrides `output.path`
    /// - `QUAKEMAP_TEMPLATES_DIR` overrides `output.templates_dir`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if an existing file cannot be read,
    /// [`ConfigError::Yaml`] if it is not valid YAML, or
    /// [`ConfigError::InvalidOverride`] for a malformed override.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with(path, |name| std::env::var(name).ok())
    }

    /// [`QuakemapConfig::load`] with overrides read through `lookup`.
    ///
    /// # Errors
    ///
    /// Same as [`QuakemapConfig::load`].
    pub fn load_with<F>(path: &Path, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match std::fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => return Err(e.into()),
        };
        config.apply_overrides(lookup)?;
        Ok(config)
    }

    /// Parse configuration from a YAML string. No overrides are applied.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Apply overrides read through `lookup`.
    ///
    /// [`QuakemapConfig::load`] passes `std::env::var`; tests pass a fixed table.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOverride`] if `QUAKEMAP_FEED_PERIOD`
    /// names an unknown period.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = lookup("MAPBOX_ACCESS_TOKEN") {
            self.map.tiles.access_token = token;
        }
        if let Some(period) = lookup("QUAKEMAP_FEED_PERIOD") {
            self.feed.period = period
                .parse::<FeedPeriod>()
                .map_err(|reason| ConfigError::InvalidOverride {
                    name: "QUAKEMAP_FEED_PERIOD",
                    reason,
                })?;
        }
        if let Some(offset) = lookup("QUAKEMAP_UTC_OFFSET") {
            self.map.utc_offset = offset;
        }
        if let Some(path) = lookup("QUAKEMAP_OUTPUT") {
            self.output.path = path;
        }
        if let Some(dir) = lookup("QUAKEMAP_TEMPLATES_DIR") {
            self.output.templates_dir = Some(dir);
        }
        Ok(())
    }
}

fn default_output_path() -> String {
    "quakemap.html".to_owned()
}

fn default_log_level() -> String {
    "info".to_owned()
}
