use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{close_attendance, find_open_attendance, insert_attendance};
use crate::errors::{AppError, AppResult};
use crate::models::attendance::{AttendanceRecord, AttendanceStatus};
use crate::utils::time::{combine, format_clock_12h};
use chrono::NaiveDateTime;

/// Who is checking in, and where.
#[derive(Debug, Clone)]
pub struct Visitor {
    pub user_id: String,
    pub name: String,
    pub gender: String,
    pub hall: String,
}

pub struct CheckinLogic;

impl CheckinLogic {
    /// Open a new `Present` record at `at`.
    pub fn check_in(pool: &mut DbPool, visitor: &Visitor, at: NaiveDateTime) -> AppResult<AttendanceRecord> {
        let date = at.format("%Y-%m-%d").to_string();

        if let Some(open) = find_open_attendance(&pool.conn, &visitor.user_id)?
            && open.date == date
        {
            return Err(AppError::AlreadyCheckedIn(visitor.user_id.clone(), date));
        }

        let mut rec = AttendanceRecord {
            id: 0,
            user_id: visitor.user_id.clone(),
            name: visitor.name.clone(),
            gender: visitor.gender.clone(),
            hall: visitor.hall.clone(),
            date,
            time: format_clock_12h(at.time()),
            exit_time: None,
            status: AttendanceStatus::Present,
        };
        rec.id = insert_attendance(&pool.conn, &rec)?;

        ttlog(
            &pool.conn,
            "checkin",
            &rec.user_id,
            &format!("{} checked in at {} {} ({})", rec.name, rec.date, rec.time, rec.hall),
        )?;

        Ok(rec)
    }

    /// Close the latest open record of `user_id` at `at`.
    pub fn check_out(pool: &mut DbPool, user_id: &str, at: NaiveDateTime) -> AppResult<AttendanceRecord> {
        let mut rec = find_open_attendance(&pool.conn, user_id)?
            .ok_or_else(|| AppError::NotCheckedIn(user_id.to_string()))?;

        if let Some(entered) = combine(&rec.date, &rec.time)
            && at < entered
        {
            return Err(AppError::InvalidTime(format!(
                "check-out {} is before check-in {} {}",
                at.format("%Y-%m-%d %H:%M"),
                rec.date,
                rec.time
            )));
        }

        let exit = format_clock_12h(at.time());
        if close_attendance(&pool.conn, rec.id, &exit)? == 0 {
            return Err(AppError::NotCheckedIn(user_id.to_string()));
        }
        rec.exit_time = Some(exit);
        rec.status = AttendanceStatus::CheckedOut;

        ttlog(
            &pool.conn,
            "checkout",
            &rec.user_id,
            &format!(
                "{} checked out at {} (in since {} {})",
                rec.name,
                rec.exit_time.as_deref().unwrap_or_default(),
                rec.date,
                rec.time
            ),
        )?;

        Ok(rec)
    }
}
