//! Map assembly for quakemap.
//!
//! Takes configuration plus fetched feeds and produces a [`QuakeMap`]
//! through one explicit composition call, then renders it to a standalone
//! Leaflet page.
//!
//! # Architecture
//!
//! ```text
//! MapConfig + QuakeCollection + Option<BoundaryCollection>
//!     --> compose_map --> QuakeMap --> MapRenderer --> HTML
//! ```

pub mod compose;
pub mod config;
pub mod error;
pub mod render;

pub use compose::{compose_map, LatLng, Marker, MapStats, QuakeMap};
pub use config::{BaseLayerConfig, ControlPosition, MapConfig, TileConfig};
pub use error::MapError;
pub use render::MapRenderer;
