//! Clock-time helpers for race timestamps
//!
//! Timestamps are wall-clock times of day with second precision, written
//! as zero-padded 24-hour `HH:MM:SS`.

use chrono::{NaiveTime, Timelike};

/// chrono format string for race timestamps
pub const CLOCK_FORMAT: &str = "%H:%M:%S";

/// Parse a strict `HH:MM:SS` timestamp
///
/// chrono alone is lenient about padding (`9:05:00`) and accepts a leap
/// second (`23:59:60`); both are rejected here.
pub fn parse_clock_time(text: &str) -> Option<NaiveTime> {
    let bytes = text.as_bytes();
    if bytes.len() != 8 || bytes[2] != b':' || bytes[5] != b':' {
        return None;
    }
    let digits_ok = [0, 1, 3, 4, 6, 7]
        .iter()
        .all(|&i| bytes[i].is_ascii_digit());
    if !digits_ok {
        return None;
    }

    NaiveTime::parse_from_str(text, CLOCK_FORMAT)
        .ok()
        // leap seconds are encoded as nanosecond overflow
        .filter(|time| time.nanosecond() < 1_000_000_000)
}

/// Seconds elapsed from `start` to `end` (negative if `end` is earlier)
pub fn elapsed_seconds(start: NaiveTime, end: NaiveTime) -> f64 {
    end.signed_duration_since(start).num_milliseconds() as f64 / 1000.0
}

/// Render a timestamp back into `HH:MM:SS`
pub fn format_clock_time(time: NaiveTime) -> String {
    time.format(CLOCK_FORMAT).to_string()
}
