use super::resolve_now;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::checkin::{CheckinLogic, Visitor};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::category::Gender;
use crate::ui::messages::success;

/// Handle both `checkin` and `checkout`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Checkin {
            user,
            name,
            gender,
            hall,
            at,
        } => {
            let gender = match gender {
                Some(g) => Gender::from_code(g)?.as_str().to_string(),
                None => String::new(),
            };
            let visitor = Visitor {
                user_id: user.trim().to_string(),
                name: name.trim().to_string(),
                gender,
                hall: hall.clone().unwrap_or_else(|| cfg.default_hall.clone()),
            };
            let at = resolve_now(at)?;

            let mut pool = DbPool::new(&cfg.database)?;
            let rec = CheckinLogic::check_in(&mut pool, &visitor, at)?;
            success(format!(
                "{} checked in at {} {} ({})",
                rec.name, rec.date, rec.time, rec.hall
            ));
        }
        Commands::Checkout { user, at } => {
            let at = resolve_now(at)?;

            let mut pool = DbPool::new(&cfg.database)?;
            let rec = CheckinLogic::check_out(&mut pool, user.trim(), at)?;
            success(format!(
                "{} checked out at {}",
                rec.name,
                rec.exit_time.as_deref().unwrap_or("--")
            ));
        }
        _ => {}
    }
    Ok(())
}
