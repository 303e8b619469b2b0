use super::{resolve_now, run_refreshing};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dashboard::Dashboard;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::category::{Gender, Role};
use crate::models::person::Person;
use crate::ui::messages::warning;
use crate::utils::colors::status_style;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status {
        email,
        gender,
        role,
        at,
        watch,
        iterations,
    } = cmd
    {
        let mut person = Person::new(email.trim());
        // any other value reads the male column, as the front desk always did
        if let Some(g) = gender {
            match Gender::from_code(g) {
                Ok(g) => person.gender = Some(g),
                Err(e) => warning(format!("{}; using the male student column", e)),
            }
        }
        if let Some(r) = role {
            person.role = Role::from_code(r)?;
        }
        let category = person.category();

        let mut pool = DbPool::new(&cfg.database)?;

        run_refreshing(*watch, cfg.status_refresh_secs, *iterations, || {
            let now = resolve_now(at)?;
            let status = Dashboard::status(&mut pool, category, now)?;

            println!("👤 {} ({})", person.email, category.label());
            println!("{}", status_style(&status).paint(status.title()));
            println!("{}", status.subtitle());
            Ok(())
        })?;
    }
    Ok(())
}
