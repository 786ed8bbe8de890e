//! Deadline text and epoch normalization.
//!
//! Accepted text grammars, tried in order (first success wins):
//! - RFC 3339 (`2021-09-30T10:00:00Z`)
//! - `MM/DD/YYYY HH:MM AM|PM` and `MM/DD/YYYY HHAM|PM`
//! - 24-hour `MM/DD/YYYY HH:MM`
//! - date-only `MM/DD/YYYY` and `YYYY-MM-DD` (midnight)
//!
//! Month, day, and 12-hour values accept one or two digits; AM/PM is
//! case-insensitive. Parsed values are interpreted as UTC.

use pactguard_types::PactError;
use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

const US_DATETIME: &[BorrowedFormatItem<'static>] = format_description!(
    "[month padding:none]/[day padding:none]/[year] \
     [hour padding:none repr:12]:[minute] [period case_sensitive:false]"
);
const US_DATETIME_COMPACT: &[BorrowedFormatItem<'static>] = format_description!(
    "[month padding:none]/[day padding:none]/[year] \
     [hour padding:none repr:12][period case_sensitive:false]"
);
const US_DATETIME_24H: &[BorrowedFormatItem<'static>] =
    format_description!("[month padding:none]/[day padding:none]/[year] [hour]:[minute]");
const US_DATE: &[BorrowedFormatItem<'static>] =
    format_description!("[month padding:none]/[day padding:none]/[year]");
const CALENDAR_DATE: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

/// Parse a free-form deadline string. Failure is a validation error, never
/// silently "no deadline".
pub(crate) fn parse_text(input: &str) -> Result<OffsetDateTime, PactError> {
    let s = input.trim();

    if let Ok(t) = OffsetDateTime::parse(s, &Rfc3339) {
        return Ok(t);
    }
    for format in [US_DATETIME, US_DATETIME_COMPACT, US_DATETIME_24H] {
        if let Ok(t) = PrimitiveDateTime::parse(s, format) {
            return Ok(t.assume_utc());
        }
    }
    for format in [US_DATE, CALENDAR_DATE] {
        if let Ok(d) = Date::parse(s, format) {
            return Ok(d.midnight().assume_utc());
        }
    }

    Err(PactError::InvalidDate {
        input: input.to_string(),
    })
}

/// Interpret seconds since the Unix epoch, preserving fractional seconds.
pub(crate) fn from_epoch_seconds(secs: f64) -> Result<OffsetDateTime, PactError> {
    if !secs.is_finite() {
        return Err(PactError::InvalidDate {
            input: format!("epoch {secs}"),
        });
    }
    OffsetDateTime::from_unix_timestamp_nanos((secs * 1e9) as i128).map_err(|_| {
        PactError::InvalidDate {
            input: format!("epoch {secs}"),
        }
    })
}

/// `YYYY-MM-DD` rendering used in violation reasons.
pub(crate) fn calendar_date(t: OffsetDateTime) -> String {
    t.format(CALENDAR_DATE)
        .unwrap_or_else(|_| t.date().to_string())
}
