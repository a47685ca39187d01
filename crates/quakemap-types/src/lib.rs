//! Shared type definitions for quakemap.
//!
//! Input types read the `GeoJSON` feeds (parsed with the `geojson` crate);
//! output types describe the styles, legend, and popups consumed by the map
//! page. Output types flow to `TypeScript` via `ts-rs`.
//!
//! # Modules
//!
//! - [`feed`] -- Point locations, USGS properties, and feed metadata
//! - [`style`] -- Color buckets, marker and line styles, legend, popup text

pub mod feed;
pub mod style;

pub use ::geojson::feature::Id as FeatureId;
pub use ::geojson::{Feature, FeatureCollection, Geometry, Value as GeometryValue};
pub use feed::{
    feature_id, geometry_kind, BoundaryCollection, FeedMetadata, PointLocation, QuakeCollection,
    QuakeProperties,
};
pub use style::{ColorBucket, Legend, LegendEntry, LineStyle, MarkerStyle, PopupText};
