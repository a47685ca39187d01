//! Magnitude to marker style.
//!
//! Absent, non-positive, and non-finite magnitudes take the fixed
//! minimum radius and the lowest bucket. Nothing here can fail.

use quakemap_types::{ColorBucket, LineStyle, MarkerStyle};

/// Pixels of radius per unit of magnitude.
pub const RADIUS_SCALE: f64 = 2.5;

/// Radius in pixels for magnitudes that have no positive size.
pub const MIN_RADIUS: f64 = 1.0;

/// Marker outline color.
pub const STROKE_COLOR: &str = "#000000";

/// Marker outline opacity.
pub const STROKE_OPACITY: f64 = 0.6;

/// Marker fill opacity.
pub const FILL_OPACITY: f64 = 1.0;

/// Marker outline width in pixels.
pub const STROKE_WEIGHT: f64 = 0.3;

/// Plate-boundary line color.
pub const FAULT_COLOR: &str = "#f6a001";

/// Plate-boundary line width in pixels.
pub const FAULT_WEIGHT: f64 = 1.0;

/// Marker radius for a magnitude.
///
/// `magnitude * 2.5` for positive magnitudes, so small events stay small
/// (`0.2` gives `0.5`). Absent, zero, negative, and non-finite magnitudes
/// get [`MIN_RADIUS`], which keeps every radius strictly positive.
pub fn radius_for(magnitude: Option<f64>) -> f64 {
    match magnitude {
        Some(m) if m.is_finite() && m > 0.0 => m * RADIUS_SCALE,
        _ => MIN_RADIUS,
    }
}

/// Color bucket for a magnitude.
///
/// Comparisons are strict, so a magnitude sitting exactly on a boundary
/// falls into the lower bucket (`2.0` is [`ColorBucket::OneToTwo`]).
pub fn color_bucket_for(magnitude: Option<f64>) -> ColorBucket {
    let Some(m) = magnitude.filter(|m| m.is_finite()) else {
        return ColorBucket::UpToOne;
    };

    if m > 5.0 {
        ColorBucket::AboveFive
    } else if m > 4.0 {
        ColorBucket::FourToFive
    } else if m > 3.0 {
        ColorBucket::ThreeToFour
    } else if m > 2.0 {
        ColorBucket::TwoToThree
    } else if m > 1.0 {
        ColorBucket::OneToTwo
    } else {
        ColorBucket::UpToOne
    }
}

/// Full marker style for a magnitude.
pub fn marker_style_for(magnitude: Option<f64>) -> MarkerStyle {
    let bucket = color_bucket_for(magnitude);
    MarkerStyle {
        stroke_color: STROKE_COLOR.to_owned(),
        fill_color: bucket.color().to_owned(),
        stroke_opacity: STROKE_OPACITY,
        fill_opacity: FILL_OPACITY,
        radius: radius_for(magnitude),
        stroke_weight: STROKE_WEIGHT,
        bucket,
    }
}

/// Style of the plate-boundary overlay.
pub fn fault_line_style() -> LineStyle {
    LineStyle {
        stroke_color: FAULT_COLOR.to_owned(),
        stroke_weight: FAULT_WEIGHT,
        fill_opacity: 0.0,
    }
}
