//! Data sources for the resolver and the feed.

use crate::errors::AppResult;
use crate::models::attendance::AttendanceRecord;
use crate::models::schedule::ScheduleEntry;

/// Supplies the weekly schedule table. Day uniqueness is the provider's job.
pub trait ScheduleProvider {
    fn schedule_entries(&mut self) -> AppResult<Vec<ScheduleEntry>>;
}

/// Supplies attendance records for one person or for everybody.
pub trait AttendanceProvider {
    fn attendance_for(&mut self, user_id: &str) -> AppResult<Vec<AttendanceRecord>>;
    fn all_attendance(&mut self) -> AppResult<Vec<AttendanceRecord>>;
}
