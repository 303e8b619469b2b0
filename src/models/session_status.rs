use crate::utils::date::weekday_name;
use crate::utils::time::{format_clock_12h, format_remaining};
use chrono::{Duration, NaiveDateTime, NaiveTime, Weekday};

/// Where "now" sits relative to a person's weekly sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    InProgress {
        end: NaiveDateTime,
        remaining: Duration,
    },
    UpcomingToday {
        start: NaiveTime,
    },
    UpcomingFutureDay {
        day: Weekday,
        start: NaiveTime,
    },
    NoneFound,
}

impl SessionStatus {
    pub fn title(&self) -> String {
        match self {
            SessionStatus::InProgress { remaining, .. } => format_remaining(*remaining),
            SessionStatus::UpcomingToday { start } => {
                format!("Today, {}", format_clock_12h(*start))
            }
            SessionStatus::UpcomingFutureDay { day, start } => {
                format!("{}, {}", weekday_name(*day), format_clock_12h(*start))
            }
            SessionStatus::NoneFound => "No Upcoming".to_string(),
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            SessionStatus::InProgress { .. } => "Session in Progress",
            SessionStatus::UpcomingToday { .. } => "Upcoming Workout",
            SessionStatus::UpcomingFutureDay { .. } => "Next Workout",
            SessionStatus::NoneFound => "Check Schedule",
        }
    }
}
