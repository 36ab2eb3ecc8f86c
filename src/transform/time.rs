use crate::store::TimeRow;
use chrono::{DateTime, Datelike, Timelike, Utc};

/// Break an epoch-millisecond timestamp into its UTC calendar parts.
///
/// Returns `None` when the instant is outside chrono's representable range.
pub fn decompose_timestamp(ts_ms: i64) -> Option<TimeRow> {
    let instant = DateTime::<Utc>::from_timestamp_millis(ts_ms)?;
    Some(TimeRow {
        start_time: ts_ms,
        hour: instant.hour(),
        day: instant.day(),
        week: instant.iso_week().week(),
        month: instant.month(),
        year: instant.year(),
        weekday: instant.format("%A").to_string(),
    })
}
