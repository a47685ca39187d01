//! Visual encoding outputs handed to the map renderer.
//!
//! These are the values the browser side consumes: marker and line styles,
//! color buckets with their legend labels, and popup text. They are exported
//! to `TypeScript` so the page script and the Rust side share one shape.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Color buckets
// ---------------------------------------------------------------------------

/// A magnitude range drawn with one fill color.
///
/// Buckets are half-open with an exclusive lower bound: a magnitude equal
/// to a boundary belongs to the lower bucket. Each bucket owns both its
/// color and its legend label, so the legend can never disagree with the
/// marker fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum ColorBucket {
    /// `(-inf, 1]`, plus absent or non-finite magnitudes.
    UpToOne,
    /// `(1, 2]`
    OneToTwo,
    /// `(2, 3]`
    TwoToThree,
    /// `(3, 4]`
    ThreeToFour,
    /// `(4, 5]`
    FourToFive,
    /// `(5, inf)`
    AboveFive,
}

impl ColorBucket {
    /// Every bucket in ascending magnitude order.
    pub const ALL: [Self; 6] = [
        Self::UpToOne,
        Self::OneToTwo,
        Self::TwoToThree,
        Self::ThreeToFour,
        Self::FourToFive,
        Self::AboveFive,
    ];

    /// Fill color as a lowercase `#rrggbb` string.
    pub const fn color(self) -> &'static str {
        match self {
            Self::UpToOne => "#00ee18",
            Self::OneToTwo => "#98ee00",
            Self::TwoToThree => "#d4ee00",
            Self::ThreeToFour => "#eecc00",
            Self::FourToFive => "#ea822c",
            Self::AboveFive => "#ee0000",
        }
    }

    /// Legend label describing the magnitude range.
    pub const fn label(self) -> &'static str {
        match self {
            Self::UpToOne => "<= 1.0",
            Self::OneToTwo => "1.0 - 2.0",
            Self::TwoToThree => "2.0 - 3.0",
            Self::ThreeToFour => "3.0 - 4.0",
            Self::FourToFive => "4.0 - 5.0",
            Self::AboveFive => "> 5.0",
        }
    }
}

// ---------------------------------------------------------------------------
// Styles
// ---------------------------------------------------------------------------

/// Style of one circular earthquake marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct MarkerStyle {
    /// Outline color.
    pub stroke_color: String,
    /// Fill color taken from the magnitude bucket.
    pub fill_color: String,
    /// Outline opacity in `[0, 1]`.
    pub stroke_opacity: f64,
    /// Fill opacity in `[0, 1]`.
    pub fill_opacity: f64,
    /// Marker radius in pixels. Always strictly positive.
    pub radius: f64,
    /// Outline width in pixels.
    pub stroke_weight: f64,
    /// The bucket the fill color came from.
    pub bucket: ColorBucket,
}

/// Style of a polyline overlay such as the plate boundaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct LineStyle {
    /// Line color.
    pub stroke_color: String,
    /// Line width in pixels.
    pub stroke_weight: f64,
    /// Fill opacity for closed shapes; zero keeps polygons hollow.
    pub fill_opacity: f64,
}

// ---------------------------------------------------------------------------
// Legend
// ---------------------------------------------------------------------------

/// One row of the magnitude legend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct LegendEntry {
    /// The bucket this row describes.
    pub bucket: ColorBucket,
    /// Swatch color.
    pub color: String,
    /// Range label.
    pub label: String,
}

impl From<ColorBucket> for LegendEntry {
    fn from(bucket: ColorBucket) -> Self {
        Self {
            bucket,
            color: bucket.color().to_owned(),
            label: bucket.label().to_owned(),
        }
    }
}

/// The magnitude legend: a title and entries in ascending magnitude order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Legend {
    /// Heading shown above the swatches.
    pub title: String,
    /// Rows in ascending magnitude order.
    pub entries: Vec<LegendEntry>,
}

impl Legend {
    /// Look up the entry declared for a bucket.
    pub fn entry(&self, bucket: ColorBucket) -> Option<&LegendEntry> {
        self.entries.iter().find(|e| e.bucket == bucket)
    }
}

// ---------------------------------------------------------------------------
// Popup
// ---------------------------------------------------------------------------

/// Text shown in a marker popup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct PopupText {
    /// Formatted event time, e.g. `14 Nov 2023 22:13:20`.
    pub date_time: String,
    /// Magnitude as published.
    pub magnitude: String,
    /// Place description as published.
    pub location: String,
}

impl PopupText {
    /// The popup lines in display order.
    pub fn lines(&self) -> [String; 3] {
        [
            format!("Date and Time: {}", self.date_time),
            format!("Magnitude: {}", self.magnitude),
            format!("Location: {}", self.location),
        ]
    }
}

impl core::fmt::Display for PopupText {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.lines().join("\n"))
    }
}
