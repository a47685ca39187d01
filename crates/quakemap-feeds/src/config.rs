//! Feed selection and client settings.
//!
//! USGS publishes summary feeds for every combination of a magnitude
//! threshold and a time window at
//! `{base_url}/{threshold}_{period}.geojson`. [`FeedConfig`] picks one and
//! also names the plate-boundary dataset.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

/// Default USGS summary feed directory.
pub const USGS_SUMMARY_BASE_URL: &str = "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary";

/// PB2002 plate boundaries (Bird, 2003) as `GeoJSON`.
pub const PB2002_BOUNDARIES_URL: &str =
    "https://raw.githubusercontent.com/fraxen/tectonicplates/master/GeoJSON/PB2002_boundaries.json";

/// Time window covered by a summary feed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedPeriod {
    /// Past hour.
    Hour,
    /// Past day.
    Day,
    /// Past seven days.
    Week,
    /// Past thirty days.
    #[default]
    Month,
}

impl FeedPeriod {
    /// The period segment of the feed file name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
        }
    }
}

impl fmt::Display for FeedPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeedPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hour" => Ok(Self::Hour),
            "day" => Ok(Self::Day),
            "week" | "7d" => Ok(Self::Week),
            "month" | "30d" => Ok(Self::Month),
            other => Err(format!("unknown feed period: {other}")),
        }
    }
}

/// Minimum magnitude included in a summary feed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum FeedThreshold {
    /// Every recorded event.
    #[default]
    #[serde(rename = "all")]
    All,
    /// Events USGS flags as significant.
    #[serde(rename = "significant")]
    Significant,
    /// Magnitude 1.0 and above.
    #[serde(rename = "1.0", alias = "m1.0")]
    AtLeastOne,
    /// Magnitude 2.5 and above.
    #[serde(rename = "2.5", alias = "m2.5")]
    AtLeastTwoPointFive,
    /// Magnitude 4.5 and above.
    #[serde(rename = "4.5", alias = "m4.5")]
    AtLeastFourPointFive,
}

impl FeedThreshold {
    /// The threshold segment of the feed file name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Significant => "significant",
            Self::AtLeastOne => "1.0",
            Self::AtLeastTwoPointFive => "2.5",
            Self::AtLeastFourPointFive => "4.5",
        }
    }
}

/// Which feeds to fetch and how.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FeedConfig {
    /// Directory holding the USGS summary feeds.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Time window of the earthquake feed.
    #[serde(default)]
    pub period: FeedPeriod,

    /// Magnitude threshold of the earthquake feed.
    #[serde(default)]
    pub threshold: FeedThreshold,

    /// Plate-boundary dataset URL.
    #[serde(default = "default_faults_url")]
    pub faults_url: String,

    /// Whether to fetch and draw plate boundaries at all.
    #[serde(default = "default_true")]
    pub faults_enabled: bool,

    /// Per-request timeout in milliseconds.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    /// `User-Agent` header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl FeedConfig {
    /// URL of the configured earthquake summary feed.
    pub fn quake_url(&self) -> String {
        format!(
            "{}/{}_{}.geojson",
            self.base_url.trim_end_matches('/'),
            self.threshold.as_str(),
            self.period.as_str()
        )
    }

    /// Request timeout as a [`Duration`].
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            period: FeedPeriod::default(),
            threshold: FeedThreshold::default(),
            faults_url: default_faults_url(),
            faults_enabled: true,
            request_timeout_ms: default_request_timeout_ms(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_base_url() -> String {
    USGS_SUMMARY_BASE_URL.to_owned()
}

fn default_faults_url() -> String {
    PB2002_BOUNDARIES_URL.to_owned()
}

const fn default_true() -> bool {
    true
}

const fn default_request_timeout_ms() -> u64 {
    30_000
}

fn default_user_agent() -> String {
    format!("quakemap/{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_feed_is_all_month() {
        let config = FeedConfig::default();
        assert_eq!(
            config.quake_url(),
            "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_month.geojson"
        );
        assert!(config.faults_enabled);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn week_feed_url() {
        let config = FeedConfig {
            period: FeedPeriod::Week,
            ..FeedConfig::default()
        };
        assert!(config.quake_url().ends_with("/all_week.geojson"));
    }

    #[test]
    fn threshold_segments() {
        let config = FeedConfig {
            base_url: "http://localhost:9000/feeds/".to_owned(),
            period: FeedPeriod::Day,
            threshold: FeedThreshold::AtLeastFourPointFive,
            ..FeedConfig::default()
        };
        assert_eq!(config.quake_url(), "http://localhost:9000/feeds/4.5_day.geojson");
        assert_eq!(FeedThreshold::Significant.as_str(), "significant");
        assert_eq!(FeedThreshold::AtLeastOne.as_str(), "1.0");
        assert_eq!(FeedThreshold::AtLeastTwoPointFive.as_str(), "2.5");
    }

    #[test]
    fn period_parsing() {
        assert_eq!("Week".parse::<FeedPeriod>(), Ok(FeedPeriod::Week));
        assert_eq!("30d".parse::<FeedPeriod>(), Ok(FeedPeriod::Month));
        assert_eq!("hour".parse::<FeedPeriod>(), Ok(FeedPeriod::Hour));
        assert!("fortnight".parse::<FeedPeriod>().is_err());
        assert_eq!(FeedPeriod::Day.to_string(), "day");
    }
}
