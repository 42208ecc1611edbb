//! Small helpers shared across domain modules.

use chrono::NaiveDate;

use crate::errors::Result;

/// Case-insensitive substring match.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Parses an ISO `YYYY-MM-DD` date.
///
/// Malformed input is rejected here instead of degrading to a meaningless
/// comparison downstream.
pub fn parse_iso_date(value: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")?)
}
