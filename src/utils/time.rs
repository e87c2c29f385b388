//! Timestamp conversion helpers.

use std::time::SystemTime;

use chrono::{DateTime, SecondsFormat, Utc};

/// Format a filesystem timestamp as RFC 3339 in UTC with millisecond
/// precision, e.g. `2024-05-01T09:30:00.000Z`.
#[must_use]
pub fn to_iso8601(time: SystemTime) -> String {
    let datetime: DateTime<Utc> = time.into();
    datetime.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Whole seconds elapsed between `then` and `now`.
///
/// Timestamps in the future (clock skew, touched files) count as zero.
#[must_use]
pub fn elapsed_seconds(then: SystemTime, now: SystemTime) -> u64 {
    now.duration_since(then)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0)
}
