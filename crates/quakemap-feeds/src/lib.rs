//! Feed access for quakemap.
//!
//! Fetches the USGS earthquake summary feed and the PB2002 plate-boundary
//! dataset as `GeoJSON` feature collections over HTTP via `reqwest`.
//!
//! # Modules
//!
//! - [`config`] -- Feed selection (period, threshold, URLs) and timeouts
//! - [`client`] -- The HTTP client and body parsing
//! - [`error`] -- Fetch and decode errors

pub mod client;
pub mod config;
pub mod error;

pub use client::{parse_collection, FeedClient};
pub use config::{FeedConfig, FeedPeriod, FeedThreshold};
pub use error::FeedError;
