//! Time utilities: 12-hour clock parsing, schedule descriptors, date+time
//! combination, remaining-time formatting.

use crate::errors::{AppError, AppResult};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use std::sync::LazyLock;

/// Matches `6:30 AM`, `06:30pm`, `12:00 Am` ...
static CLOCK_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,2}):(\d{2})\s*([AaPp][Mm])").unwrap());

/// A single session window inside one day. Always `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeRange {
    /// Returns `None` for zero-length or overnight ranges.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Option<Self> {
        (start < end).then_some(Self { start, end })
    }
}

/// Convert `hh`, `mm` and an AM/PM marker into a wall-clock time.
/// 12 AM is midnight, 12 PM stays noon, any other PM hour adds 12.
fn to_24h(hours: u32, minutes: u32, period: &str) -> Option<NaiveTime> {
    if hours > 12 {
        return None;
    }
    let h = match (period.to_ascii_uppercase().as_str(), hours) {
        ("AM", 12) => 0,
        ("AM", h) => h,
        ("PM", 12) => 12,
        ("PM", h) => h + 12,
        _ => return None,
    };
    NaiveTime::from_hms_opt(h, minutes, 0)
}

/// Parse a single 12-hour clock value such as `"06:30 PM"`.
pub fn parse_clock_12h(s: &str) -> Option<NaiveTime> {
    let caps = CLOCK_TOKEN.captures(s.trim())?;
    if caps.get(0)?.as_str().len() != s.trim().len() {
        return None;
    }
    let h = caps[1].parse().ok()?;
    let m = caps[2].parse().ok()?;
    to_24h(h, m, &caps[3])
}

/// Every clock token in order of appearance. Invalid values (e.g. `13:00 PM`)
/// stay in the sequence as `None` so pairing is not shifted.
fn clock_tokens(descriptor: &str) -> Vec<Option<NaiveTime>> {
    CLOCK_TOKEN
        .captures_iter(descriptor)
        .map(|caps| {
            let h = caps[1].parse().ok()?;
            let m = caps[2].parse().ok()?;
            to_24h(h, m, &caps[3])
        })
        .collect()
}

/// Lenient descriptor parsing used on the read side.
///
/// Consecutive clock tokens form `(start, end)` pairs; an odd trailing token is
/// dropped, and so is any pair that is invalid or not `start < end`. Empty
/// strings and placeholders like `"--"` yield no ranges.
pub fn parse_time_ranges(descriptor: &str) -> Vec<TimeRange> {
    clock_tokens(descriptor)
        .chunks_exact(2)
        .filter_map(|pair| TimeRange::new(pair[0]?, pair[1]?))
        .collect()
}

/// Strict descriptor validation used before writing schedule data.
pub fn validate_descriptor(descriptor: &str) -> AppResult<Vec<TimeRange>> {
    let tokens = clock_tokens(descriptor);

    if tokens.len() % 2 != 0 {
        return Err(AppError::InvalidSchedule(format!(
            "'{}' has an unpaired time",
            descriptor.replace('\n', " | ")
        )));
    }

    let mut ranges = Vec::with_capacity(tokens.len() / 2);
    for pair in tokens.chunks_exact(2) {
        let (Some(start), Some(end)) = (pair[0], pair[1]) else {
            return Err(AppError::InvalidSchedule(format!(
                "'{}' contains an invalid clock time",
                descriptor.replace('\n', " | ")
            )));
        };
        let range = TimeRange::new(start, end).ok_or_else(|| {
            AppError::InvalidSchedule(format!(
                "range {} - {} ends before it starts (overnight ranges are not supported)",
                format_clock_12h(start),
                format_clock_12h(end)
            ))
        })?;
        ranges.push(range);
    }

    Ok(ranges)
}

/// `06:30 PM` style rendering.
pub fn format_clock_12h(t: NaiveTime) -> String {
    t.format("%I:%M %p").to_string()
}

/// Parse a check-in/out time: `08:30 AM` first, then plain `HH:MM`.
pub fn parse_wall_time(s: &str) -> Option<NaiveTime> {
    parse_clock_12h(s).or_else(|| NaiveTime::parse_from_str(s.trim(), "%H:%M").ok())
}

/// Combine a `YYYY-MM-DD` date and a wall-clock time into one instant.
pub fn combine(date: &str, time: &str) -> Option<NaiveDateTime> {
    let d = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()?;
    let t = parse_wall_time(time)?;
    Some(d.and_time(t))
}

/// Parse the `--at` override: `YYYY-MM-DD HH:MM` or `YYYY-MM-DD hh:mm AM`.
pub fn parse_instant(s: &str) -> AppResult<NaiveDateTime> {
    let (date, time) = s
        .trim()
        .split_once(' ')
        .ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
    combine(date, time).ok_or_else(|| AppError::InvalidTime(s.to_string()))
}

/// Whole minutes, rounded up.
pub fn ceil_minutes(d: Duration) -> i64 {
    let secs = d.num_seconds().max(0);
    (secs + 59) / 60
}

/// `1h 5m Remaining` / `30m Remaining`
pub fn format_remaining(d: Duration) -> String {
    let mins = ceil_minutes(d);
    let (h, m) = (mins / 60, mins % 60);
    if h > 0 {
        format!("{}h {}m Remaining", h, m)
    } else {
        format!("{}m Remaining", m)
    }
}
