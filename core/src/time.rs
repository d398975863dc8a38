//! Time related utils.

use crate::{Error, Result};
use chrono::{TimeZone, Utc};

/// DateTime is the alias for chrono::DateTime<Utc>.
pub type DateTime = chrono::DateTime<Utc>;

/// Create datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into unix timestamp seconds: `1191242096`
pub fn format_unix_timestamp(t: DateTime) -> String {
    t.timestamp().to_string()
}

/// Build a datetime from unix timestamp seconds.
pub fn from_unix_timestamp(secs: i64) -> Result<DateTime> {
    Utc.timestamp_opt(secs, 0)
        .single()
        .ok_or_else(|| Error::unexpected(format!("timestamp {secs} is out of range")))
}
