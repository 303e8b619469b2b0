#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn gym() -> Command {
    cargo_bin_cmd!("rgymdesk")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rgymdesk.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize the DB without touching the user's config file
pub fn init_db(db_path: &str) {
    gym()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Sunday..Thursday two male shifts, Friday/Saturday weekend windows
pub fn init_db_with_campus_schedule(db_path: &str) {
    init_db(db_path);

    for day in ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday"] {
        gym()
            .args([
                "--db",
                db_path,
                "schedule",
                "--set",
                day,
                "--male",
                "1st Shift: 06:30 AM - 07:30 AM\\n2nd Shift: 06:30 PM - 10:00 PM",
                "--female",
                "04:00 PM - 06:00 PM",
                "--staff",
                "07:30 AM - 08:30 AM",
            ])
            .assert()
            .success();
    }

    for day in ["Friday", "Saturday"] {
        gym()
            .args([
                "--db",
                db_path,
                "schedule",
                "--set",
                day,
                "--male",
                "04:00 PM - 09:00 PM",
                "--female",
                "10:00 AM - 12:00 PM",
                "--staff",
                "09:00 AM - 10:00 AM",
            ])
            .assert()
            .success();
    }
}

pub fn check_in(db_path: &str, user: &str, name: &str, at: &str) {
    gym()
        .args([
            "--db", db_path, "checkin", "--user", user, "--name", name, "--at", at,
        ])
        .assert()
        .success();
}

pub fn check_out(db_path: &str, user: &str, at: &str) {
    gym()
        .args(["--db", db_path, "checkout", "--user", user, "--at", at])
        .assert()
        .success();
}
