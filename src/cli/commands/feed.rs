use super::{resolve_now, run_refreshing};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dashboard::{Dashboard, FeedSnapshot};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::header;
use crate::utils::colors::activity_style;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Feed {
        limit,
        at,
        json,
        watch,
        iterations,
    } = cmd
    {
        let limit = limit.unwrap_or(cfg.feed_limit);
        let mut pool = DbPool::new(&cfg.database)?;

        run_refreshing(*watch, cfg.feed_refresh_secs, *iterations, || {
            let now = resolve_now(at)?;
            let snap = Dashboard::feed(&mut pool, now, limit)?;

            if *json {
                let out = serde_json::to_string_pretty(&snap)
                    .map_err(|e| AppError::Other(e.to_string()))?;
                println!("{}", out);
            } else {
                print_feed(&snap);
            }
            Ok(())
        })?;
    }
    Ok(())
}

fn print_feed(snap: &FeedSnapshot) {
    header("Live Activity");
    println!("Today's attendance: {}\n", snap.today_count);

    if snap.events.is_empty() {
        println!("No recent activity.");
        return;
    }

    for e in &snap.events {
        let line = format!("{} {} at {}", e.name, e.kind.label().to_lowercase(), e.time_text);
        println!(
            "{} {}  ({})",
            e.kind.icon(),
            activity_style(e.kind).paint(line),
            e.label
        );
    }
}
