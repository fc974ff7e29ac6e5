//! Parser for the `Start Time` column.

use chrono::NaiveDateTime;

const FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Parses a trip timestamp such as `2017-01-01 09:07:57`.
///
/// Surrounding whitespace is ignored and the first matching format wins.
/// Values are kept as naive local time.
///
/// Returns `None` if no known format matches.
pub fn parse_start_time(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}
