//! Date and identifier conventions shared by the API and the 1C consumer.
//!
//! The API speaks "compact" dates (`YYYYMMDD`); 1C expects "dotted" dates
//! (`DD.MM.YYYY HH:MM:SS`). Posting instants travel as `YYYY-MM-DDTHH:MM:SS`.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serializer;

/// Width of posting identifiers. Counts beyond 999999 render wider than this
/// and no longer sort lexically; they are never wrapped or truncated.
pub const IDENTIFIER_WIDTH: usize = 6;

const COMPACT_LEN: usize = 8;
const DOTTED_FORMAT: &str = "%d.%m.%Y %H:%M:%S";
const INSTANT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A field that could not be read in its expected textual convention.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("'{value}' is not an 8-digit YYYYMMDD date")]
    CompactShape { value: String },
    #[error("'{value}' is not a valid calendar date")]
    CalendarDate { value: String },
    #[error("'{value}' is not an integer amount")]
    Amount { value: String },
}

/// Parse a compact `YYYYMMDD` date into an instant at midnight.
pub fn compact_to_instant(raw: &str) -> Result<NaiveDateTime, ParseError> {
    if raw.len() != COMPACT_LEN || !raw.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(ParseError::CompactShape {
            value: raw.to_string(),
        });
    }

    let field = |range: std::ops::Range<usize>| raw[range].parse::<u32>().ok();
    let date = match (field(0..4), field(4..6), field(6..8)) {
        (Some(year), Some(month), Some(day)) => {
            NaiveDate::from_ymd_opt(year as i32, month, day)
        }
        _ => None,
    };

    date.and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| ParseError::CalendarDate {
            value: raw.to_string(),
        })
}

/// Render a compact date in the dotted 1C form, or hand the input back
/// untouched when it is not a compact date.
pub fn instant_to_dotted(raw: &str) -> String {
    match compact_to_instant(raw) {
        Ok(instant) => instant.format(DOTTED_FORMAT).to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Identifier following `current_count` existing postings.
pub fn next_identifier(current_count: u64) -> String {
    format!("{:0width$}", current_count + 1, width = IDENTIFIER_WIDTH)
}

/// Wire form of posting instants.
pub fn format_instant(instant: &NaiveDateTime) -> String {
    instant.format(INSTANT_FORMAT).to_string()
}

/// Parse the wire form produced by [`format_instant`].
pub fn parse_instant(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw.trim(), INSTANT_FORMAT).ok()
}

pub(crate) fn serialize_instant<S>(
    instant: &NaiveDateTime,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_instant(instant))
}

/// Absent instants go out as an empty string, matching what 1C clients
/// already handle.
pub(crate) fn serialize_optional_instant<S>(
    instant: &Option<NaiveDateTime>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match instant {
        Some(value) => serializer.serialize_str(&format_instant(value)),
        None => serializer.serialize_str(""),
    }
}
