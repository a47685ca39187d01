//! `GeoJSON` feed model.
//!
//! Feature collections, features, and geometries are the `geojson` crate's
//! types. USGS earthquake properties and feed metadata are read out of them
//! field by field, so a feature with odd or `null` properties still yields
//! a usable [`QuakeProperties`] instead of failing the whole feed.

use geojson::feature::Id;
use geojson::{Feature, FeatureCollection, Geometry, Value};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// An earthquake feed.
pub type QuakeCollection = FeatureCollection;

/// A plate-boundary dataset.
pub type BoundaryCollection = FeatureCollection;

/// The location of a point feature, split into named parts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLocation {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
    /// Depth in kilometres, when the feed supplies a third coordinate.
    pub depth_km: Option<f64>,
}

impl PointLocation {
    /// Location of a `Point` geometry (`[lng, lat, depth?]`).
    ///
    /// Returns `None` for every other geometry kind and for points with
    /// fewer than two coordinates.
    pub fn from_geometry(geometry: &Geometry) -> Option<Self> {
        let Value::Point(coordinates) = &geometry.value else {
            return None;
        };
        let lng = *coordinates.first()?;
        let lat = *coordinates.get(1)?;
        Some(Self {
            lat,
            lng,
            depth_km: coordinates.get(2).copied(),
        })
    }

    /// Location of a feature, when it has a point geometry.
    pub fn from_feature(feature: &Feature) -> Option<Self> {
        feature.geometry.as_ref().and_then(Self::from_geometry)
    }
}

/// The `GeoJSON` type name of a geometry value.
pub const fn geometry_kind(value: &Value) -> &'static str {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}

/// A feature id (string or number) as text.
pub fn feature_id(feature: &Feature) -> Option<String> {
    feature.id.as_ref().map(|id| match id {
        Id::String(s) => s.clone(),
        Id::Number(n) => n.to_string(),
    })
}

/// Properties of one earthquake in a USGS summary feed.
///
/// Only `mag`, `place`, and `time` drive the map. The remaining fields are
/// kept so callers can surface them without re-reading the feature.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuakeProperties {
    /// Magnitude. `null` in the feed for events still under review.
    #[serde(default)]
    pub mag: Option<f64>,
    /// Human-readable region description, e.g. `10km N of Testville`.
    #[serde(default)]
    pub place: Option<String>,
    /// Event origin time in Unix epoch milliseconds.
    #[serde(default)]
    pub time: Option<i64>,
    /// Last update time in Unix epoch milliseconds.
    #[serde(default)]
    pub updated: Option<i64>,
    /// Event page on the USGS site.
    #[serde(default)]
    pub url: Option<String>,
    /// Feed-supplied title, e.g. `M 4.2 - 10km N of Testville`.
    #[serde(default)]
    pub title: Option<String>,
    /// Magnitude type, e.g. `ml` or `mww`.
    #[serde(rename = "magType", default)]
    pub mag_type: Option<String>,
    /// PAGER alert level (`green`, `yellow`, `orange`, `red`).
    #[serde(default)]
    pub alert: Option<String>,
    /// `1` when the event occurred in an oceanic region with tsunami potential.
    #[serde(default)]
    pub tsunami: Option<i64>,
    /// Event type, usually `earthquake`.
    #[serde(rename = "type", default)]
    pub event_type: Option<String>,
}

impl QuakeProperties {
    /// Read the USGS fields of a feature.
    ///
    /// Missing, `null`, or wrongly typed members come back as `None`.
    pub fn from_feature(feature: &Feature) -> Self {
        let f64_of = |key: &str| feature.property(key).and_then(JsonValue::as_f64);
        let i64_of = |key: &str| feature.property(key).and_then(JsonValue::as_i64);
        let str_of = |key: &str| {
            feature
                .property(key)
                .and_then(JsonValue::as_str)
                .map(ToOwned::to_owned)
        };

        Self {
            mag: f64_of("mag"),
            place: str_of("place"),
            time: i64_of("time"),
            updated: i64_of("updated"),
            url: str_of("url"),
            title: str_of("title"),
            mag_type: str_of("magType"),
            alert: str_of("alert"),
            tsunami: i64_of("tsunami"),
            event_type: str_of("type"),
        }
    }
}

/// Feed-level metadata published by USGS summary feeds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedMetadata {
    /// Generation time in Unix epoch milliseconds.
    #[serde(default)]
    pub generated: Option<i64>,
    /// Canonical feed URL.
    #[serde(default)]
    pub url: Option<String>,
    /// Feed title, e.g. `USGS All Earthquakes, Past Week`.
    #[serde(default)]
    pub title: Option<String>,
    /// HTTP status reported by the feed generator.
    #[serde(default)]
    pub status: Option<u16>,
    /// Feed API version.
    #[serde(default)]
    pub api: Option<String>,
    /// Number of features in the feed.
    #[serde(default)]
    pub count: Option<u64>,
}

impl FeedMetadata {
    /// The `metadata` foreign member of a collection, if present and well formed.
    pub fn from_collection(collection: &FeatureCollection) -> Option<Self> {
        collection
            .foreign_members
            .as_ref()?
            .get("metadata")
            .cloned()
            .and_then(|value| serde_json::from_value(value).ok())
    }
}
