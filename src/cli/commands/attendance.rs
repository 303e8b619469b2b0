use super::resolve_now;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::feed::{history, monthly_attendance};
use crate::core::provider::AttendanceProvider;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::attendance::AttendanceRecord;
use crate::models::person::{IdSource, Person};
use crate::ui::messages::{info, warning};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Attendance {
        member_id,
        email,
        account_id,
        at,
    } = cmd
    {
        let today = resolve_now(at)?.date();
        let mut pool = DbPool::new(&cfg.database)?;

        let records = if member_id.is_none() && email.is_none() && account_id.is_none() {
            pool.all_attendance()?
        } else {
            let mut person = Person::new(email.as_deref().unwrap_or_default());
            person.member_id = member_id.clone();
            person.account_id = account_id.clone();

            let id = person.attendance_id()?;
            if let Some(other) = &id.conflict {
                warning(format!(
                    "member id '{}' differs from the id in the email ('{}'); using the member id",
                    id.id, other
                ));
            }
            match id.source {
                IdSource::Email => info(format!("Attendance id {} taken from the email", id.id)),
                IdSource::Account => info(format!("Attendance id {} taken from the account", id.id)),
                IdSource::MemberId => {}
            }
            pool.attendance_for(&id.id)?
        };

        let records = history(&records);
        print_records(&records, cfg.separator_char);
        println!(
            "\n📊 Visits this month: {}",
            monthly_attendance(&records, today)
        );
    }
    Ok(())
}

fn print_records(records: &[AttendanceRecord], separator: char) {
    if records.is_empty() {
        println!("No attendance records.");
        return;
    }

    let mut table = Table::new(["ID", "Name", "Hall", "Date", "In", "Out", "Status"]);
    for r in records {
        table.add_row(vec![
            r.user_id.clone(),
            r.name.clone(),
            r.hall.clone(),
            r.date.clone(),
            r.time.clone(),
            r.exit_time.clone().unwrap_or_else(|| "-".into()),
            r.status.to_db_str().to_string(),
        ]);
    }
    print!("{}", table.render(separator));
}
