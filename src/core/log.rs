use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;

fn color_for_operation(op: &str) -> Colour {
    match op {
        "checkin" => Colour::Green,
        "checkout" => Colour::Red,
        "schedule_set" => Colour::Yellow,
        "schedule_clear" => Colour::Red,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// Cut to `max` characters, marking the cut with `...`.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
        out.push_str("...");
        out
    } else {
        s.to_string()
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let rows: Vec<(i64, String, String, String, String)> = entries
            .into_iter()
            .map(|e| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or(e.date);
                let target = if e.target.is_empty() {
                    String::new()
                } else {
                    format!(" ({})", e.target)
                };
                (e.id, date, e.operation, truncate(&target, 40), e.message)
            })
            .collect();

        let id_w = rows.iter().map(|r| r.0.to_string().len()).max().unwrap_or(1);
        let date_w = rows.iter().map(|r| r.1.len()).max().unwrap_or(10);
        let op_w = rows
            .iter()
            .map(|r| r.2.len() + r.3.chars().count())
            .max()
            .unwrap_or(10);

        println!("📜 Internal log:\n");

        for (id, date, op, target, message) in rows {
            let padding = " ".repeat(op_w.saturating_sub(op.len() + target.chars().count()));
            println!(
                "{:>id_w$}: {:<date_w$} | {}{}{} => {}",
                id,
                date,
                color_for_operation(&op).paint(op.as_str()),
                target,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
