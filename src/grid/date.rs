//! Date key derivation
//!
//! Day logs are keyed by a `yyyy-MM-dd` string. Formatting goes through
//! chrono's `NaiveDate`, which is proleptic Gregorian and locale-invariant,
//! so the same calendar date always maps to the same key regardless of host
//! locale settings. "Today" is taken from the local timezone.

use chrono::{Local, NaiveDate};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a date as its store key
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Today's date in the local timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a user-supplied `yyyy-MM-dd` date argument
pub fn parse_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
}
