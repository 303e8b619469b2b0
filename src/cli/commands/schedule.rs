use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::schedule::{DayUpdate, ScheduleLogic};
use crate::db::pool::DbPool;
use crate::db::queries::load_schedule;
use crate::errors::{AppError, AppResult};
use crate::models::schedule::WeeklySchedule;
use crate::ui::messages::{info, success};
use crate::utils::date::{WEEK_DAYS, parse_weekday, weekday_name};
use crate::utils::table::Table;
use chrono::Weekday;

fn day_arg(s: &str) -> AppResult<Weekday> {
    parse_weekday(s).ok_or_else(|| AppError::InvalidDay(s.to_string()))
}

/// Shell users type `\n` literally to separate shifts.
fn unescape(s: &Option<String>) -> Option<String> {
    s.as_ref().map(|v| v.replace("\\n", "\n"))
}

fn cell(descriptor: &str) -> String {
    let flat = descriptor
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" / ");
    if flat.is_empty() { "--".to_string() } else { flat }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Schedule {
        list,
        set,
        clear,
        male,
        female,
        staff,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        if let Some(day) = set {
            let day = day_arg(day)?;
            let update = DayUpdate {
                male_student_time: unescape(male),
                female_student_time: unescape(female),
                staff_time: unescape(staff),
            };
            ScheduleLogic::set_day(&mut pool, day, update)?;
            success(format!("Schedule for {} saved", weekday_name(day)));
        }

        if let Some(day) = clear {
            let day = day_arg(day)?;
            if ScheduleLogic::clear_day(&mut pool, day)? {
                success(format!("Schedule for {} removed", weekday_name(day)));
            } else {
                info(format!("No schedule entry for {}", weekday_name(day)));
            }
        }

        if *list || (set.is_none() && clear.is_none()) {
            print_week(&pool, cfg.separator_char)?;
        }
    }
    Ok(())
}

fn print_week(pool: &DbPool, separator: char) -> AppResult<()> {
    let week = WeeklySchedule::from_entries(load_schedule(&pool.conn)?)?;

    let mut table = Table::new(["Day", "Male Student", "Female Student", "Teacher/Staff"]);
    for day in WEEK_DAYS {
        let row = match week.get(day) {
            Some(e) => vec![
                weekday_name(day).to_string(),
                cell(&e.male_student_time),
                cell(&e.female_student_time),
                cell(&e.staff_time),
            ],
            None => vec![
                weekday_name(day).to_string(),
                "--".into(),
                "--".into(),
                "--".into(),
            ],
        };
        table.add_row(row);
    }

    println!("📅 Weekly schedule:\n");
    print!("{}", table.render(separator));
    Ok(())
}
