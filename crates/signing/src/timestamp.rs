//! Request timestamps.
//!
//! The signed timestamp is ISO-8601 with seconds precision and a numeric UTC
//! offset, e.g. `2024-04-22T09:55:40+07:00`. Signing and verification treat
//! it as an opaque string; these helpers only produce and sanity-check it.
//! Whether a timestamp is too old is left to the caller.

use chrono::{DateTime, FixedOffset, Local, SecondsFormat, TimeZone};
use error_stack::{Report, ResultExt};

use crate::error::SignatureError;

/// Formats `time` as `YYYY-MM-DDTHH:MM:SS±HH:MM`.
///
/// UTC is rendered as `+00:00`, never `Z`.
#[must_use]
pub fn format_timestamp<Tz: TimeZone>(time: &DateTime<Tz>) -> String {
    time.fixed_offset()
        .to_rfc3339_opts(SecondsFormat::Secs, false)
}

/// Current local time in request-timestamp format.
#[must_use]
pub fn now_timestamp() -> String {
    format_timestamp(&Local::now())
}

/// Parses an incoming request timestamp.
///
/// # Errors
///
/// Returns [`SignatureError::InvalidRequest`] if `timestamp` is not a valid
/// RFC 3339 date-time or uses `Z` instead of a numeric offset.
pub fn parse_timestamp(timestamp: &str) -> Result<DateTime<FixedOffset>, Report<SignatureError>> {
    if timestamp.ends_with(['Z', 'z']) {
        return Err(Report::new(SignatureError::InvalidRequest {
            message: format!("Timestamp '{timestamp}' must use a numeric UTC offset"),
        }));
    }

    DateTime::parse_from_rfc3339(timestamp).change_context(SignatureError::InvalidRequest {
        message: format!("Invalid timestamp '{timestamp}'"),
    })
}
