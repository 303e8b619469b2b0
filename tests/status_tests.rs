use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{gym, init_db, init_db_with_campus_schedule, setup_test_db};

const MALE_STUDENT: &str = "u2104128@student.cuet.ac.bd";
const FEMALE_STUDENT: &str = "u2104129@student.cuet.ac.bd";
const TEACHER: &str = "teacher@cuet.ac.bd";

fn status(db: &str, email: &str, extra: &[&str], at: &str) -> assert_cmd::assert::Assert {
    let mut args = vec!["--db", db, "status", "--email", email, "--at", at];
    args.extend_from_slice(extra);
    gym().args(args).assert()
}

#[test]
fn test_status_in_progress_during_morning_shift() {
    let db = setup_test_db("status_in_progress");
    init_db_with_campus_schedule(&db);

    // 2023-10-22 is a Sunday
    status(&db, MALE_STUDENT, &[], "2023-10-22 07:00")
        .success()
        .stdout(contains("Male Student"))
        .stdout(contains("30m Remaining"))
        .stdout(contains("Session in Progress"));
}

#[test]
fn test_status_skips_finished_shift() {
    let db = setup_test_db("status_next_shift");
    init_db_with_campus_schedule(&db);

    status(&db, MALE_STUDENT, &[], "2023-10-22 08:00 AM")
        .success()
        .stdout(contains("Today, 06:30 PM"))
        .stdout(contains("Upcoming Workout"));
}

#[test]
fn test_status_uses_gender_and_role_columns() {
    let db = setup_test_db("status_columns");
    init_db_with_campus_schedule(&db);

    status(&db, FEMALE_STUDENT, &["--gender", "female"], "2023-10-22 08:00")
        .success()
        .stdout(contains("Female Student"))
        .stdout(contains("Today, 04:00 PM"));

    status(&db, TEACHER, &[], "2023-10-22 08:00")
        .success()
        .stdout(contains("Teacher/Staff"))
        .stdout(contains("30m Remaining"));

    // explicit role wins over the email heuristic
    status(&db, TEACHER, &["--role", "student"], "2023-10-22 08:00")
        .success()
        .stdout(contains("Male Student"));
}

#[test]
fn test_status_next_day() {
    let db = setup_test_db("status_next_day");
    init_db_with_campus_schedule(&db);

    // Thursday night → Friday morning for female students
    status(&db, FEMALE_STUDENT, &["--gender", "F"], "2023-10-26 23:00")
        .success()
        .stdout(contains("Friday, 10:00 AM"))
        .stdout(contains("Next Workout"));
}

#[test]
fn test_status_unknown_gender_reads_male_column() {
    let db = setup_test_db("status_unknown_gender");
    init_db_with_campus_schedule(&db);

    status(&db, FEMALE_STUDENT, &["--gender", "Other"], "2023-10-22 08:00")
        .success()
        .stdout(contains("Invalid gender: Other; using the male student column"))
        .stdout(contains("Male Student"))
        .stdout(contains("Today, 06:30 PM"));
}

#[test]
fn test_status_with_empty_schedule() {
    let db = setup_test_db("status_empty");
    init_db(&db);

    status(&db, TEACHER, &[], "2023-10-22 08:00")
        .success()
        .stdout(contains("No Upcoming"))
        .stdout(contains("Check Schedule"));
}

#[test]
fn test_status_watch_runs_bounded_passes() {
    let db = setup_test_db("status_watch");
    init_db_with_campus_schedule(&db);

    status(&db, MALE_STUDENT, &["--watch", "--iterations", "1"], "2023-10-22 07:00")
        .success()
        .stdout(contains("30m Remaining"));
}

#[test]
fn test_status_rejects_bad_input() {
    let db = setup_test_db("status_bad_input");
    init_db(&db);

    status(&db, MALE_STUDENT, &["--role", "janitor"], "2023-10-22 08:00")
        .failure()
        .stderr(contains("Invalid role: janitor"));

    status(&db, MALE_STUDENT, &[], "yesterday at noon")
        .failure()
        .stderr(contains("Invalid time format"));
}

#[test]
fn test_schedule_set_rejects_overnight_ranges() {
    let db = setup_test_db("schedule_overnight");
    init_db(&db);

    gym()
        .args([
            "--db",
            &db,
            "schedule",
            "--set",
            "Friday",
            "--staff",
            "10:00 PM - 02:00 AM",
        ])
        .assert()
        .failure()
        .stderr(contains("overnight"));

    gym()
        .args(["--db", &db, "schedule", "--list"])
        .assert()
        .success()
        .stdout(contains("10:00 PM").not());
}

#[test]
fn test_schedule_list_and_clear() {
    let db = setup_test_db("schedule_list_clear");
    init_db_with_campus_schedule(&db);

    gym()
        .args(["--db", &db, "schedule", "--list"])
        .assert()
        .success()
        .stdout(contains("Wednesday"))
        .stdout(contains("1st Shift: 06:30 AM - 07:30 AM / 2nd Shift: 06:30 PM - 10:00 PM"))
        .stdout(contains("09:00 AM - 10:00 AM"));

    gym()
        .args(["--db", &db, "schedule", "--clear", "sat"])
        .assert()
        .success()
        .stdout(contains("Schedule for Saturday removed"));

    gym()
        .args(["--db", &db, "schedule", "--set", "Funday"])
        .assert()
        .failure()
        .stderr(contains("Invalid day name"));
}
