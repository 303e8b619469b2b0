//! SQLite-backed schedule and attendance providers.

use crate::core::provider::{AttendanceProvider, ScheduleProvider};
use crate::db::pool::DbPool;
use crate::db::queries::{load_attendance, load_schedule};
use crate::errors::AppResult;
use crate::models::attendance::AttendanceRecord;
use crate::models::schedule::ScheduleEntry;

impl ScheduleProvider for DbPool {
    fn schedule_entries(&mut self) -> AppResult<Vec<ScheduleEntry>> {
        load_schedule(&self.conn)
    }
}

impl AttendanceProvider for DbPool {
    fn attendance_for(&mut self, user_id: &str) -> AppResult<Vec<AttendanceRecord>> {
        load_attendance(&self.conn, Some(user_id))
    }

    fn all_attendance(&mut self) -> AppResult<Vec<AttendanceRecord>> {
        load_attendance(&self.conn, None)
    }
}
