use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists. Applied migrations are recorded there.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

struct Migration {
    version: &'static str,
    message: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20240110_0001_create_schedule",
        message: "Created schedule table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS schedule (
            day                 TEXT PRIMARY KEY CHECK(day IN (
                'Sunday','Monday','Tuesday','Wednesday','Thursday','Friday','Saturday'
            )),
            male_student_time   TEXT NOT NULL DEFAULT '',
            female_student_time TEXT NOT NULL DEFAULT '',
            staff_time          TEXT NOT NULL DEFAULT '',
            updated_at          TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: "20240110_0002_create_attendance",
        message: "Created attendance table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS attendance (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id    TEXT NOT NULL,
            name       TEXT NOT NULL,
            gender     TEXT NOT NULL DEFAULT '',
            hall       TEXT NOT NULL DEFAULT '',
            date       TEXT NOT NULL,
            time       TEXT NOT NULL,
            exit_time  TEXT,
            status     TEXT NOT NULL DEFAULT 'Present' CHECK(status IN ('Present','Checked Out')),
            created_at TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: "20240305_0003_attendance_indexes",
        message: "Indexed attendance by user and date",
        sql: r#"
        CREATE INDEX IF NOT EXISTS idx_attendance_user_status ON attendance(user_id, status);
        CREATE INDEX IF NOT EXISTS idx_attendance_date ON attendance(date);
        "#,
    },
];

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> Result<()> {
    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(m.sql)?;
    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [m.version, m.message],
    )?;
    tx.commit()?;

    success(format!("Migration applied: {} → {}", m.version, m.message));
    Ok(())
}

/// Run every migration not yet recorded in `log`. Returns how many ran.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            apply(conn, m).map_err(|e| AppError::Migration(format!("{}: {}", m.version, e)))?;
            applied += 1;
        }
    }
    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_run_once() {
        let conn = Connection::open_in_memory().unwrap();
        assert_eq!(run_pending_migrations(&conn).unwrap(), MIGRATIONS.len());
        assert_eq!(run_pending_migrations(&conn).unwrap(), 0);

        let n: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(n as usize, MIGRATIONS.len());
    }

    #[test]
    fn failed_migration_names_its_version() {
        let conn = Connection::open_in_memory().unwrap();
        // a view squatting on the table name survives IF NOT EXISTS, then
        // refuses the index migration
        conn.execute_batch("CREATE VIEW attendance AS SELECT 1 AS user_id, 1 AS status, 1 AS date;")
            .unwrap();

        match run_pending_migrations(&conn) {
            Err(AppError::Migration(msg)) => {
                assert!(msg.starts_with("20240305_0003_attendance_indexes:"), "{msg}")
            }
            other => panic!("expected a migration error, got {other:?}"),
        }
    }

    #[test]
    fn schedule_rejects_unknown_day_names() {
        let conn = Connection::open_in_memory().unwrap();
        run_pending_migrations(&conn).unwrap();
        let res = conn.execute(
            "INSERT INTO schedule (day, updated_at) VALUES ('Funday', 'x')",
            [],
        );
        assert!(res.is_err());
    }
}
