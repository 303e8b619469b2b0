//! Session status resolution over the cyclic weekly schedule.

use crate::models::category::Category;
use crate::models::schedule::WeeklySchedule;
use crate::models::session_status::SessionStatus;
use crate::utils::time::parse_time_ranges;
use chrono::{Datelike, Days, NaiveDateTime};

/// Find the session `now` falls in, or the next one within the coming week.
///
/// Today is scanned first and compared against the time of day; for the six
/// following days the first listed range of the first day that has any range
/// wins. Ranges are taken in the order they are written, not sorted.
pub fn resolve(now: NaiveDateTime, schedule: &WeeklySchedule, category: Category) -> SessionStatus {
    let today = now.date();

    for offset in 0..7u64 {
        let Some(check_date) = today.checked_add_days(Days::new(offset)) else {
            break;
        };

        let ranges = schedule
            .get(check_date.weekday())
            .map(|entry| parse_time_ranges(entry.descriptor(category)))
            .unwrap_or_default();

        for range in ranges {
            if offset > 0 {
                return SessionStatus::UpcomingFutureDay {
                    day: check_date.weekday(),
                    start: range.start,
                };
            }

            let start = check_date.and_time(range.start);
            let end = check_date.and_time(range.end);

            if start <= now && now < end {
                return SessionStatus::InProgress {
                    end,
                    remaining: end - now,
                };
            }
            if now < start {
                return SessionStatus::UpcomingToday { start: range.start };
            }
        }
    }

    SessionStatus::NoneFound
}
