//! Popup text for earthquake markers.
//!
//! Times are rendered in an explicit UTC offset carried by
//! [`TimestampFormatter`], never in the host's local zone, so the same feed
//! produces the same page on every machine.

use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Offset, Utc};
use quakemap_types::{PopupText, QuakeProperties};

use crate::error::StyleError;

/// Placeholder for values the feed left out.
pub const UNKNOWN: &str = "unknown";

/// `14 Nov 2023 22:13:20`: day, short month, year, unpadded clock.
const DATE_TIME_FORMAT: &str = "%-d %b %Y %-H:%-M:%-S";

/// Formats Unix-millisecond timestamps in a fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimestampFormatter {
    offset: FixedOffset,
}

impl TimestampFormatter {
    /// Formatter for the given offset.
    pub const fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// Formatter rendering times in UTC.
    pub fn utc() -> Self {
        Self::new(Utc.fix())
    }

    /// The offset times are rendered in.
    pub const fn offset(self) -> FixedOffset {
        self.offset
    }

    /// Format a timestamp in Unix epoch milliseconds.
    ///
    /// Absent or out-of-range timestamps render as [`UNKNOWN`].
    pub fn format_millis(self, millis: Option<i64>) -> String {
        millis
            .and_then(DateTime::from_timestamp_millis)
            .map_or_else(
                || UNKNOWN.to_owned(),
                |utc| {
                    utc.with_timezone(&self.offset)
                        .format(DATE_TIME_FORMAT)
                        .to_string()
                },
            )
    }
}

impl Default for TimestampFormatter {
    fn default() -> Self {
        Self::utc()
    }
}

impl FromStr for TimestampFormatter {
    type Err = StyleError;

    /// Accepts `UTC`, `Z`, or an offset such as `+05:30` / `-0800`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("utc") || trimmed.eq_ignore_ascii_case("z") {
            return Ok(Self::utc());
        }
        trimmed
            .parse::<FixedOffset>()
            .map(Self::new)
            .map_err(|e| StyleError::InvalidUtcOffset(format!("{trimmed}: {e}")))
    }
}

/// Popup text for one earthquake, from its feature properties.
///
/// The magnitude is printed as published (`4.2`, `5`, `-0.4`); absent
/// magnitudes and places print as [`UNKNOWN`].
pub fn popup_text_for(properties: &QuakeProperties, formatter: TimestampFormatter) -> PopupText {
    PopupText {
        date_time: formatter.format_millis(properties.time),
        magnitude: properties
            .mag
            .map_or_else(|| UNKNOWN.to_owned(), |m| m.to_string()),
        location: properties
            .place
            .clone()
            .unwrap_or_else(|| UNKNOWN.to_owned()),
    }
}
