//! Visual encoding for quakemap.
//!
//! Maps an earthquake's magnitude to a marker radius and a fill color
//! bucket, renders popup text from its timestamp, magnitude, and place,
//! and publishes the legend that explains the buckets.
//!
//! Every function here is pure and total: malformed or missing input is
//! normalized to the safest visual treatment, never reported as an error.
//!
//! # Modules
//!
//! - [`encoding`] -- Radius, color bucket, marker and fault-line styles
//! - [`popup`] -- Popup text and timestamp formatting
//! - [`legend`] -- The magnitude legend

pub mod encoding;
pub mod error;
pub mod legend;
pub mod popup;

pub use encoding::{color_bucket_for, fault_line_style, marker_style_for, radius_for};
pub use error::StyleError;
pub use legend::standard_legend;
pub use popup::{popup_text_for, TimestampFormatter};
