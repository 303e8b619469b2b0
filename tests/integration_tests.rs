use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{check_in, gym, init_db, setup_test_db};

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("init_schema");

    gym()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Migration applied"))
        .stdout(contains("initialization completed"));

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    for table in ["schedule", "attendance", "log"] {
        let n: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
                [table],
                |r| r.get(0),
            )
            .expect("query sqlite_master");
        assert_eq!(n, 1, "missing table {table}");
    }

    // second init is a no-op for the schema
    gym()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Migration applied").not());
}

#[test]
fn test_checkin_twice_same_day_fails() {
    let db_path = setup_test_db("checkin_twice");
    init_db(&db_path);

    check_in(&db_path, "U001", "Alex Morgan", "2023-10-25 08:30");

    gym()
        .args([
            "--db",
            &db_path,
            "checkin",
            "--user",
            "U001",
            "--name",
            "Alex Morgan",
            "--at",
            "2023-10-25 09:00",
        ])
        .assert()
        .failure()
        .stderr(contains("already checked in on 2023-10-25"));
}

#[test]
fn test_checkin_checkout_shows_in_history() {
    let db_path = setup_test_db("checkin_history");
    init_db(&db_path);

    gym()
        .args([
            "--db",
            &db_path,
            "checkin",
            "--user",
            "U002",
            "--name",
            "John Wick",
            "--gender",
            "m",
            "--hall",
            "Cardio Zone",
            "--at",
            "2023-10-25 09:15",
        ])
        .assert()
        .success()
        .stdout(contains("John Wick checked in at 2023-10-25 09:15 AM (Cardio Zone)"));

    gym()
        .args([
            "--db", &db_path, "checkout", "--user", "U002", "--at", "2023-10-25 11:40",
        ])
        .assert()
        .success()
        .stdout(contains("John Wick checked out at 11:40 AM"));

    gym()
        .args(["--db", &db_path, "attendance", "--member-id", "U002"])
        .assert()
        .success()
        .stdout(contains("Cardio Zone"))
        .stdout(contains("11:40 AM"))
        .stdout(contains("Checked Out"));
}

#[test]
fn test_checkin_rejects_unknown_gender() {
    let db_path = setup_test_db("checkin_gender");
    init_db(&db_path);

    gym()
        .args([
            "--db", &db_path, "checkin", "--user", "U9", "--name", "X", "--gender", "q",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid gender: q"));
}

#[test]
fn test_attendance_history_newest_first_with_monthly_count() {
    let db_path = setup_test_db("attendance_history_order");
    init_db(&db_path);

    check_in(&db_path, "U1", "Rae Lin", "2023-10-26 07:00");
    // back-filled visit, stored after the newer one
    check_in(&db_path, "U1", "Rae Lin", "2023-10-20 06:00 PM");
    check_in(&db_path, "U1", "Rae Lin", "2023-09-29 07:00");

    let out = gym()
        .args([
            "--db",
            &db_path,
            "attendance",
            "--member-id",
            "U1",
            "--at",
            "2023-10-27 09:00",
        ])
        .output()
        .expect("failed to run attendance");
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    let newer = stdout.find("2023-10-26").expect("2023-10-26 missing");
    let older = stdout.find("2023-10-20").expect("2023-10-20 missing");
    let oldest = stdout.find("2023-09-29").expect("2023-09-29 missing");
    assert!(newer < older && older < oldest, "history must be newest first:\n{stdout}");
    assert!(stdout.contains("Visits this month: 2"));
}

#[test]
fn test_attendance_falls_back_to_account_id() {
    let db_path = setup_test_db("attendance_account_id");
    init_db(&db_path);

    check_in(&db_path, "64f1c0ffee", "Dr. Rahman", "2023-10-25 07:45");

    gym()
        .args([
            "--db",
            &db_path,
            "attendance",
            "--email",
            "teacher@cuet.ac.bd",
            "--account-id",
            "64f1c0ffee",
        ])
        .assert()
        .success()
        .stdout(contains("taken from the account"))
        .stdout(contains("Dr. Rahman"));
}
