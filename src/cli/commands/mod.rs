pub mod attendance;
pub mod checkin;
pub mod config;
pub mod feed;
pub mod init;
pub mod log;
pub mod schedule;
pub mod status;

use crate::errors::AppResult;
use crate::ui::messages::error;
use crate::utils::date;
use crate::utils::time::parse_instant;
use chrono::NaiveDateTime;
use std::thread;
use std::time::Duration;

/// `--at` override, or the local wall clock.
pub(crate) fn resolve_now(at: &Option<String>) -> AppResult<NaiveDateTime> {
    match at {
        Some(s) => parse_instant(s),
        None => Ok(date::now()),
    }
}

/// Run `pass` once, or every `interval_secs` when watching.
///
/// While watching, a failing pass is reported and the loop keeps going; the
/// next pass fetches fresh data again. `iterations` bounds the loop.
pub(crate) fn run_refreshing<F>(
    watch: bool,
    interval_secs: u64,
    iterations: Option<u32>,
    mut pass: F,
) -> AppResult<()>
where
    F: FnMut() -> AppResult<()>,
{
    if !watch {
        return pass();
    }

    let mut done = 0u32;
    loop {
        if let Err(e) = pass() {
            error(format!("Could not load: {}", e));
        }
        done += 1;

        if iterations.is_some_and(|n| done >= n) {
            return Ok(());
        }
        thread::sleep(Duration::from_secs(interval_secs.max(1)));
    }
}
