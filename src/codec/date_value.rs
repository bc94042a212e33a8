//! Display formatting and parsing for scalar date components.
//!
//! Field widgets show the year unpadded, the month as a three-letter
//! abbreviation, and day/hour/minute zero-padded to two digits. Full
//! timestamps travel as ISO-8601 UTC strings.

use chrono::{DateTime, Datelike, Timelike, Utc};

use crate::core::TimeScale;
use crate::error::{TimelineError, TimelineResult};

pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Two-digit zero padding for day/hour/minute fields.
#[must_use]
pub fn pad2(value: u32) -> String {
    format!("{value:02}")
}

/// Abbreviation for a one-based month number.
#[must_use]
pub fn month_abbrev(month1: u32) -> Option<&'static str> {
    let index = month1.checked_sub(1)? as usize;
    MONTH_ABBREVIATIONS.get(index).copied()
}

/// One-based month number for an abbreviation, case-insensitively.
#[must_use]
pub fn parse_month_abbrev(text: &str) -> Option<u32> {
    let upper = text.trim().to_ascii_uppercase();
    MONTH_ABBREVIATIONS
        .iter()
        .position(|abbrev| *abbrev == upper)
        .map(|index| index as u32 + 1)
}

/// Formats a timestamp as `YYYY-MM-DDTHH:MM:SSZ`.
#[must_use]
pub fn format_iso(date: DateTime<Utc>) -> String {
    date.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Parses an ISO-8601 timestamp into UTC.
pub fn parse_iso(text: &str) -> TimelineResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(text)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|err| TimelineError::InvalidDateValue(format!("{text}: {err}")))
}

/// Display text for one date sub-field, selected by its time-scale stop.
#[must_use]
pub fn field_text(date: DateTime<Utc>, field: TimeScale) -> String {
    match field {
        TimeScale::Year => date.year().to_string(),
        TimeScale::Month => month_abbrev(date.month()).unwrap_or("JAN").to_owned(),
        TimeScale::Day => pad2(date.day()),
        TimeScale::Hour => pad2(date.hour()),
        TimeScale::Minute => pad2(date.minute()),
    }
}
