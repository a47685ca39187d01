//! The magnitude legend.
//!
//! Built from [`ColorBucket::ALL`], the same table the marker fill comes
//! from.

use quakemap_types::{ColorBucket, Legend, LegendEntry};

/// Legend heading.
pub const LEGEND_TITLE: &str = "Earthquake Magnitude";

/// The standard legend: one entry per bucket, ascending.
pub fn standard_legend() -> Legend {
    Legend {
        title: LEGEND_TITLE.to_owned(),
        entries: ColorBucket::ALL.into_iter().map(LegendEntry::from).collect(),
    }
}
