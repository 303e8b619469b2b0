use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_schedule_day, load_schedule_day, upsert_schedule_entry};
use crate::errors::AppResult;
use crate::models::schedule::ScheduleEntry;
use crate::utils::date::weekday_name;
use crate::utils::time::validate_descriptor;
use chrono::Weekday;

/// Column updates for one weekday; `None` keeps the stored value.
#[derive(Debug, Default, Clone)]
pub struct DayUpdate {
    pub male_student_time: Option<String>,
    pub female_student_time: Option<String>,
    pub staff_time: Option<String>,
}

pub struct ScheduleLogic;

impl ScheduleLogic {
    /// Validate and store the descriptors for `day`.
    ///
    /// Every descriptor is checked strictly before anything is written, so a
    /// rejected update leaves the row as it was.
    pub fn set_day(pool: &mut DbPool, day: Weekday, update: DayUpdate) -> AppResult<ScheduleEntry> {
        for d in [
            &update.male_student_time,
            &update.female_student_time,
            &update.staff_time,
        ]
        .into_iter()
        .flatten()
        {
            validate_descriptor(d)?;
        }

        let mut entry = load_schedule_day(&pool.conn, day)?.unwrap_or_else(|| ScheduleEntry::new(day));
        if let Some(v) = update.male_student_time {
            entry.male_student_time = v;
        }
        if let Some(v) = update.female_student_time {
            entry.female_student_time = v;
        }
        if let Some(v) = update.staff_time {
            entry.staff_time = v;
        }

        upsert_schedule_entry(&pool.conn, &entry)?;
        ttlog(
            &pool.conn,
            "schedule_set",
            weekday_name(day),
            &format!(
                "male='{}' female='{}' staff='{}'",
                entry.male_student_time.replace('\n', " | "),
                entry.female_student_time.replace('\n', " | "),
                entry.staff_time.replace('\n', " | ")
            ),
        )?;

        Ok(entry)
    }

    /// Remove the row for `day`. Returns false when there was none.
    pub fn clear_day(pool: &mut DbPool, day: Weekday) -> AppResult<bool> {
        let removed = delete_schedule_day(&pool.conn, day)? > 0;
        if removed {
            ttlog(
                &pool.conn,
                "schedule_clear",
                weekday_name(day),
                "Schedule entry removed",
            )?;
        }
        Ok(removed)
    }
}
