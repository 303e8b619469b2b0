use super::category::Category;
use crate::errors::{AppError, AppResult};
use crate::utils::date::weekday_name;
use chrono::Weekday;
use serde::Serialize;

/// One row of the weekly schedule table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleEntry {
    #[serde(serialize_with = "serialize_day")]
    pub day: Weekday,
    pub male_student_time: String,
    pub female_student_time: String,
    pub staff_time: String,
}

fn serialize_day<S: serde::Serializer>(day: &Weekday, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(weekday_name(*day))
}

impl ScheduleEntry {
    pub fn new(day: Weekday) -> Self {
        Self {
            day,
            male_student_time: String::new(),
            female_student_time: String::new(),
            staff_time: String::new(),
        }
    }

    /// The descriptor that applies to the given category.
    pub fn descriptor(&self, category: Category) -> &str {
        match category {
            Category::MaleStudent => &self.male_student_time,
            Category::FemaleStudent => &self.female_student_time,
            Category::Staff => &self.staff_time,
        }
    }
}

/// The week as 7 slots indexed by `Weekday::num_days_from_sunday()`.
/// At most one entry per day by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklySchedule {
    days: [Option<ScheduleEntry>; 7],
}

impl WeeklySchedule {
    pub fn from_entries(entries: impl IntoIterator<Item = ScheduleEntry>) -> AppResult<Self> {
        let mut week = Self::default();
        for entry in entries {
            let slot = &mut week.days[entry.day.num_days_from_sunday() as usize];
            if slot.is_some() {
                return Err(AppError::DuplicateScheduleDay(
                    weekday_name(entry.day).to_string(),
                ));
            }
            *slot = Some(entry);
        }
        Ok(week)
    }

    pub fn get(&self, day: Weekday) -> Option<&ScheduleEntry> {
        self.days[day.num_days_from_sunday() as usize].as_ref()
    }
}
