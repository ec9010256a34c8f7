use chrono::{DateTime, Local, TimeZone, Utc};

const MS_PER_MINUTE: f64 = 60_000.0;
const MS_PER_HOUR: f64 = 3_600_000.0;
const MS_PER_DAY: f64 = 86_400_000.0;

/// Convert unix seconds (possibly fractional) to a UTC instant.
/// Returns None for non-finite, non-positive or out-of-range input.
fn instant_from_seconds(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() || seconds <= 0.0 {
        return None;
    }
    let millis = (seconds * 1000.0).trunc();
    if millis > i64::MAX as f64 {
        return None;
    }
    DateTime::from_timestamp_millis(millis as i64)
}

/// Format unix seconds in the local time zone as `Jan 5, 2024, 14:30`.
/// Returns an empty string for invalid timestamps.
pub fn format_timestamp(seconds: f64) -> String {
    format_timestamp_in(seconds, &Local)
}

/// Like `format_timestamp`, in an explicit time zone
pub fn format_timestamp_in<Tz>(seconds: f64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match instant_from_seconds(seconds) {
        Some(instant) => instant
            .with_timezone(tz)
            .format("%b %-d, %Y, %H:%M")
            .to_string(),
        None => String::new(),
    }
}

/// Describe unix seconds relative to now: `3 days ago`, `in 1 hour`,
/// `5 mins ago`. Returns an empty string for invalid timestamps.
pub fn relative_time_from_seconds(seconds: f64) -> String {
    relative_time_between(seconds, Utc::now())
}

/// Like `relative_time_from_seconds`, against an explicit reference instant.
///
/// Uses the largest whole unit that is non-zero (days, then hours, then
/// minutes). Anything under a minute reads `0 min`.
pub fn relative_time_between(seconds: f64, now: DateTime<Utc>) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return String::new();
    }

    let diff = now.timestamp_millis() as f64 - seconds * 1000.0;
    let ahead = diff < 0.0;
    let abs = diff.abs();

    let days = (abs / MS_PER_DAY).floor() as u64;
    let hours = (abs / MS_PER_HOUR).floor() as u64;
    let minutes = (abs / MS_PER_MINUTE).floor() as u64;

    let (count, unit) = if days > 0 {
        (days, "day")
    } else if hours > 0 {
        (hours, "hour")
    } else {
        (minutes, "min")
    };
    let plural = if count > 1 { "s" } else { "" };

    if ahead {
        format!("in {} {}{}", count, unit, plural)
    } else {
        format!("{} {}{} ago", count, unit, plural)
    }
}
