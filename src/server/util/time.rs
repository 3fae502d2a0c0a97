//! Conversions between Odoo's stored timestamps and the display timezone.
//!
//! Odoo stores datetime fields as naive UTC strings (`2025-04-01 12:00:00`). Customers see
//! and answer with civil times in the display timezone (`Europe/Zurich` by default).

use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::server::error::{odoo::OdooError, Error};

/// Format of datetime fields on Odoo's wire.
pub const ODOO_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Civil time formats accepted from clients, tried in order.
const CIVIL_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Converts a stored Odoo datetime to the display timezone.
///
/// # Returns
/// - `Ok(DateTime<Tz>)` - The same instant in `timezone`
/// - `Err(Error::OdooError)` - Odoo returned a value that is not a datetime
pub fn stored_to_local(stored: &str, timezone: Tz) -> Result<DateTime<Tz>, Error> {
    let naive = NaiveDateTime::parse_from_str(stored, ODOO_DATETIME_FORMAT).map_err(|err| {
        OdooError::Protocol(format!("invalid datetime {:?} from Odoo: {}", stored, err))
    })?;

    Ok(naive.and_utc().with_timezone(&timezone))
}

/// Parses a client supplied date into UTC.
///
/// RFC 3339 input carries its own offset; civil times are interpreted in `timezone`. On
/// the autumn change-over an ambiguous civil time resolves to its earlier instant, while
/// a civil time skipped by the spring change-over is rejected.
///
/// # Returns
/// - `Ok(DateTime<Utc>)` - The instant the client meant
/// - `Err(Error::Validation)` - The input is not a date or does not exist in `timezone`
pub fn client_to_utc(input: &str, timezone: Tz) -> Result<DateTime<Utc>, Error> {
    let input = input.trim();

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(input) {
        return Ok(with_offset.with_timezone(&Utc));
    }

    let naive = CIVIL_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .ok_or_else(|| {
            Error::Validation(format!(
                "Invalid date {:?}, expected e.g. 2025-04-01T14:00:00",
                input
            ))
        })?;

    match timezone.from_local_datetime(&naive) {
        LocalResult::Single(local) => Ok(local.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest.with_timezone(&Utc)),
        LocalResult::None => Err(Error::Validation(format!(
            "{} does not exist in timezone {}",
            naive, timezone
        ))),
    }
}

/// Formats an instant the way Odoo stores datetime fields.
pub fn utc_to_stored(instant: DateTime<Utc>) -> String {
    instant.naive_utc().format(ODOO_DATETIME_FORMAT).to_string()
}
