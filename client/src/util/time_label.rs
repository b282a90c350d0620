//! Clock labels for message headers.
//!
//! The visible part is `HH:MM`; the hover label carries the full date with a
//! 1-based month and the day of the month.

#[cfg(test)]
#[path = "time_label_test.rs"]
mod time_label_test;

use std::fmt::Display;

use chrono::TimeZone;

/// Placeholder shown when a timestamp cannot be represented.
pub const UNKNOWN_TIME: &str = "--:--";

/// Short and full renderings of one message timestamp.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimeLabel {
    /// `HH:MM`, zero padded.
    pub short: String,
    /// `YYYY-MM-DD HH:MM:SS`, used as the hover title.
    pub full: String,
}

/// Render `timestamp_secs` (POSIX seconds) in the given time zone.
pub fn time_label<Tz>(timestamp_secs: i64, tz: &Tz) -> TimeLabel
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match tz.timestamp_opt(timestamp_secs, 0).single() {
        Some(at) => TimeLabel {
            short: at.format("%H:%M").to_string(),
            full: at.format("%Y-%m-%d %H:%M:%S").to_string(),
        },
        None => TimeLabel { short: UNKNOWN_TIME.to_owned(), full: String::new() },
    }
}

/// Render `timestamp_secs` in the browser's (or host's) local time zone.
pub fn local_time_label(timestamp_secs: i64) -> TimeLabel {
    time_label(timestamp_secs, &chrono::Local)
}
