// Timestamp formatting, optionally projected into an IANA timezone
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeError {
    #[error("Invalid timezone: {0}. Expected an IANA timezone identifier such as 'America/New_York', 'Europe/London', or 'UTC'")]
    InvalidTimezone(String),
}

/// Format the current instant.
///
/// Without a timezone the result is UTC with millisecond precision and a
/// trailing `Z` (`2025-10-22T21:09:31.654Z`). With a timezone the result is
/// the wall-clock time in that zone, same precision, no offset designator.
/// The asymmetry is part of the contract.
pub fn current_time(timezone: Option<&str>) -> Result<String, TimeError> {
    format_instant(Utc::now(), timezone)
}

pub fn format_instant(instant: DateTime<Utc>, timezone: Option<&str>) -> Result<String, TimeError> {
    match timezone {
        None | Some("") => Ok(instant.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()),
        Some(name) => {
            let tz: Tz = name
                .parse()
                .map_err(|_| TimeError::InvalidTimezone(name.to_string()))?;
            Ok(instant
                .with_timezone(&tz)
                .format("%Y-%m-%dT%H:%M:%S%.3f")
                .to_string())
        }
    }
}
