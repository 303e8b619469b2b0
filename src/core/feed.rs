//! Live activity feed built from attendance records.

use crate::models::activity::{ActivityEvent, ActivityKind};
use crate::models::attendance::AttendanceRecord;
use crate::utils::date::parse_date;
use crate::utils::time::combine;
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use std::cmp::Reverse;

pub const DEFAULT_FEED_LIMIT: usize = 10;

/// Coarse age bucket for an event that happened `age_secs` ago.
/// Events from the future read as "just now".
pub fn relative_label(age_secs: i64, date_text: &str) -> String {
    match age_secs {
        s if s < 60 => "just now".to_string(),
        s if s < 3600 => format!("{} mins ago", s / 60),
        s if s < 86_400 => format!("{} hours ago", s / 3600),
        _ => date_text.to_string(),
    }
}

fn event(record: &AttendanceRecord, kind: ActivityKind, time: &str) -> ActivityEvent {
    ActivityEvent {
        name: record.name.clone(),
        kind,
        instant: combine(&record.date, time),
        time_text: time.to_string(),
        date_text: record.date.clone(),
        label: String::new(),
    }
}

/// One check-in event per record, plus a check-out event when the record has
/// an exit time.
pub fn expand(records: &[AttendanceRecord]) -> Vec<ActivityEvent> {
    let mut events = Vec::with_capacity(records.len() * 2);
    for r in records {
        events.push(event(r, ActivityKind::CheckedIn, &r.time));
        if let Some(exit) = &r.exit_time {
            events.push(event(r, ActivityKind::CheckedOut, exit));
        }
    }
    events
}

/// Most recent first, at most `limit` events, each with a relative label.
///
/// Events whose instant could not be parsed go after every dated event and are
/// labelled with their raw date.
pub fn aggregate(records: &[AttendanceRecord], now: NaiveDateTime, limit: usize) -> Vec<ActivityEvent> {
    let mut events = expand(records);

    // `None < Some(_)`, so reversing puts undated events last.
    events.sort_by_key(|e| Reverse(e.instant));
    events.truncate(limit);

    for e in &mut events {
        e.label = match e.instant {
            Some(instant) => relative_label((now - instant).num_seconds(), &e.date_text),
            None => e.date_text.clone(),
        };
    }

    events
}

/// A member's visits, latest check-in first. Rows whose date or time does not
/// parse keep their relative order at the end.
pub fn history(records: &[AttendanceRecord]) -> Vec<AttendanceRecord> {
    let mut out = records.to_vec();
    out.sort_by_key(|r| Reverse(combine(&r.date, &r.time)));
    out
}

/// Number of check-ins recorded for `today`.
pub fn todays_attendance(records: &[AttendanceRecord], today: NaiveDate) -> usize {
    records
        .iter()
        .filter(|r| parse_date(r.date.trim()) == Some(today))
        .count()
}

/// Number of check-ins in the calendar month of `today`.
pub fn monthly_attendance(records: &[AttendanceRecord], today: NaiveDate) -> usize {
    records
        .iter()
        .filter_map(|r| parse_date(r.date.trim()))
        .filter(|d| d.year() == today.year() && d.month() == today.month())
        .count()
}
