use crate::core::feed::{aggregate, todays_attendance};
use crate::core::provider::{AttendanceProvider, ScheduleProvider};
use crate::core::resolver::resolve;
use crate::errors::AppResult;
use crate::models::activity::ActivityEvent;
use crate::models::category::Category;
use crate::models::schedule::WeeklySchedule;
use crate::models::session_status::SessionStatus;
use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct FeedSnapshot {
    pub today_count: usize,
    pub events: Vec<ActivityEvent>,
}

/// One refresh pass of each dashboard panel: fetch fresh data, then compute.
pub struct Dashboard;

impl Dashboard {
    pub fn status<P: ScheduleProvider>(
        provider: &mut P,
        category: Category,
        now: NaiveDateTime,
    ) -> AppResult<SessionStatus> {
        let week = WeeklySchedule::from_entries(provider.schedule_entries()?)?;
        Ok(resolve(now, &week, category))
    }

    pub fn feed<P: AttendanceProvider>(
        provider: &mut P,
        now: NaiveDateTime,
        limit: usize,
    ) -> AppResult<FeedSnapshot> {
        let records = provider.all_attendance()?;
        Ok(FeedSnapshot {
            today_count: todays_attendance(&records, now.date()),
            events: aggregate(&records, now, limit),
        })
    }
}
