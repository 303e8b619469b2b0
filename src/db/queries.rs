use crate::errors::{AppError, AppResult};
use crate::models::attendance::{AttendanceRecord, AttendanceStatus};
use crate::models::schedule::ScheduleEntry;
use crate::utils::date::{parse_weekday, weekday_name};
use chrono::{Local, Weekday};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn conversion_error(col: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(col, rusqlite::types::Type::Text, Box::new(err))
}

// ---------------------------
// Schedule
// ---------------------------

pub fn map_schedule_row(row: &Row) -> Result<ScheduleEntry> {
    let day_str: String = row.get("day")?;
    let day = parse_weekday(&day_str).ok_or_else(|| conversion_error(0, AppError::InvalidDay(day_str)))?;

    Ok(ScheduleEntry {
        day,
        male_student_time: row.get("male_student_time")?,
        female_student_time: row.get("female_student_time")?,
        staff_time: row.get("staff_time")?,
    })
}

pub fn load_schedule(conn: &Connection) -> AppResult<Vec<ScheduleEntry>> {
    let mut stmt = conn.prepare_cached(
        "SELECT day, male_student_time, female_student_time, staff_time FROM schedule",
    )?;

    let rows = stmt.query_map([], map_schedule_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    out.sort_by_key(|e| e.day.num_days_from_sunday());
    Ok(out)
}

/// Insert or replace the single row for `entry.day`.
pub fn upsert_schedule_entry(conn: &Connection, entry: &ScheduleEntry) -> AppResult<()> {
    conn.execute(
        "INSERT INTO schedule (day, male_student_time, female_student_time, staff_time, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5)
         ON CONFLICT(day) DO UPDATE SET
            male_student_time   = excluded.male_student_time,
            female_student_time = excluded.female_student_time,
            staff_time          = excluded.staff_time,
            updated_at          = excluded.updated_at",
        params![
            weekday_name(entry.day),
            entry.male_student_time,
            entry.female_student_time,
            entry.staff_time,
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(())
}

pub fn load_schedule_day(conn: &Connection, day: Weekday) -> AppResult<Option<ScheduleEntry>> {
    let entry = conn
        .query_row(
            "SELECT day, male_student_time, female_student_time, staff_time
             FROM schedule WHERE day = ?1",
            [weekday_name(day)],
            map_schedule_row,
        )
        .optional()?;
    Ok(entry)
}

pub fn delete_schedule_day(conn: &Connection, day: Weekday) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM schedule WHERE day = ?1", [weekday_name(day)])?)
}

// ---------------------------
// Attendance
// ---------------------------

const ATTENDANCE_COLUMNS: &str =
    "id, user_id, name, gender, hall, date, time, exit_time, status";

pub fn map_attendance_row(row: &Row) -> Result<AttendanceRecord> {
    let status_str: String = row.get("status")?;
    let status = AttendanceStatus::from_db_str(&status_str).ok_or_else(|| {
        conversion_error(8, AppError::Other(format!("Invalid status: {}", status_str)))
    })?;

    Ok(AttendanceRecord {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        name: row.get("name")?,
        gender: row.get("gender")?,
        hall: row.get("hall")?,
        date: row.get("date")?,
        time: row.get("time")?,
        exit_time: row.get("exit_time")?,
        status,
    })
}

/// Records of one user (`Some`) or everybody (`None`), oldest first.
pub fn load_attendance(conn: &Connection, user_id: Option<&str>) -> AppResult<Vec<AttendanceRecord>> {
    let mut out = Vec::new();

    match user_id {
        Some(uid) => {
            let mut stmt = conn.prepare_cached(&format!(
                "SELECT {ATTENDANCE_COLUMNS} FROM attendance WHERE user_id = ?1 ORDER BY id ASC"
            ))?;
            for r in stmt.query_map([uid], map_attendance_row)? {
                out.push(r?);
            }
        }
        None => {
            let mut stmt = conn.prepare_cached(&format!(
                "SELECT {ATTENDANCE_COLUMNS} FROM attendance ORDER BY id ASC"
            ))?;
            for r in stmt.query_map([], map_attendance_row)? {
                out.push(r?);
            }
        }
    }

    Ok(out)
}

/// Latest record of `user_id` that has not been checked out.
pub fn find_open_attendance(conn: &Connection, user_id: &str) -> AppResult<Option<AttendanceRecord>> {
    let rec = conn
        .query_row(
            &format!(
                "SELECT {ATTENDANCE_COLUMNS} FROM attendance
                 WHERE user_id = ?1 AND status = 'Present'
                 ORDER BY id DESC LIMIT 1"
            ),
            [user_id],
            map_attendance_row,
        )
        .optional()?;
    Ok(rec)
}

pub fn insert_attendance(conn: &Connection, rec: &AttendanceRecord) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO attendance (user_id, name, gender, hall, date, time, exit_time, status, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            rec.user_id,
            rec.name,
            rec.gender,
            rec.hall,
            rec.date,
            rec.time,
            rec.exit_time,
            rec.status.to_db_str(),
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Set the exit time of an open record. Closed records are left untouched;
/// returns the number of rows changed.
pub fn close_attendance(conn: &Connection, id: i64, exit_time: &str) -> AppResult<usize> {
    Ok(conn.execute(
        "UPDATE attendance SET exit_time = ?1, status = ?2
         WHERE id = ?3 AND status = ?4",
        params![
            exit_time,
            AttendanceStatus::CheckedOut.to_db_str(),
            id,
            AttendanceStatus::Present.to_db_str(),
        ],
    )?)
}
