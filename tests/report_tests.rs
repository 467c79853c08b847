use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{ll, seed_basic, setup_test_db, temp_out};

/// Alice holds a draft, Bob a confirmed record, both in June 2025.
fn seed_report_data(db: &str) {
    ll().args(["--db", db, "--operator", "Alice Rai", "add", "2025-06-03"])
        .assert()
        .success();

    ll().args([
        "--db",
        db,
        "--role",
        "admin",
        "add",
        "2025-06-03",
        "--employee",
        "Bob Karki",
        "--fill",
    ])
    .assert()
    .success();
}

#[test]
fn test_admin_report_shows_only_confirmed() {
    let db = setup_test_db("report_admin_confirmed");
    seed_basic(&db);
    seed_report_data(&db);

    ll().args([
        "--db",
        &db,
        "--role",
        "admin",
        "report",
        "--from",
        "2025-06-01",
        "--to",
        "2025-06-30",
    ])
    .assert()
    .success()
    .stdout(contains("Bob Karki"))
    .stdout(contains("Alice Rai").not())
    .stdout(contains("total cost"));
}

#[test]
fn test_employee_report_shows_only_their_own() {
    let db = setup_test_db("report_own_records");
    seed_basic(&db);
    seed_report_data(&db);

    ll().args([
        "--db",
        &db,
        "--operator",
        "Alice Rai",
        "report",
        "--from",
        "2025-06-01",
        "--to",
        "2025-06-30",
    ])
    .assert()
    .success()
    .stdout(contains("Alice Rai"))
    .stdout(contains("Bob Karki").not());

    // Asking for someone else's records intersects to nothing.
    ll().args([
        "--db",
        &db,
        "--operator",
        "Alice Rai",
        "report",
        "--from",
        "2025-06-01",
        "--to",
        "2025-06-30",
        "--employee",
        "Bob Karki",
    ])
    .assert()
    .success()
    .stdout(contains("No records found"));
}

#[test]
fn test_report_range_filters_by_date() {
    let db = setup_test_db("report_range");
    seed_basic(&db);
    seed_report_data(&db);

    ll().args([
        "--db",
        &db,
        "--role",
        "admin",
        "report",
        "--from",
        "2025-07-01",
        "--to",
        "2025-07-31",
    ])
    .assert()
    .success()
    .stdout(contains("No records found"));
}

#[test]
fn test_report_csv_export() {
    let db = setup_test_db("report_csv");
    seed_basic(&db);
    seed_report_data(&db);

    let out = temp_out("lunch_report", "csv");
    ll().args([
        "--db",
        &db,
        "--role",
        "admin",
        "report",
        "--from",
        "2025-06-01",
        "--to",
        "2025-06-30",
        "--format",
        "csv",
        "--out",
        &out,
    ])
    .assert()
    .success()
    .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("Bob Karki"));
    assert!(content.contains("180"));
}

#[test]
fn test_report_pdf_export() {
    let db = setup_test_db("report_pdf");
    seed_basic(&db);
    seed_report_data(&db);

    let out = temp_out("lunch_report", "pdf");
    ll().args([
        "--db",
        &db,
        "--role",
        "admin",
        "report",
        "--from",
        "2025-06-01",
        "--to",
        "2025-06-30",
        "--format",
        "pdf",
        "--out",
        &out,
    ])
    .assert()
    .success()
    .stdout(contains("PDF export completed"));

    let bytes = fs::read(&out).expect("read exported pdf");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_report_file_format_requires_out() {
    let db = setup_test_db("report_needs_out");
    seed_basic(&db);
    seed_report_data(&db);

    ll().args([
        "--db",
        &db,
        "--role",
        "admin",
        "report",
        "--from",
        "2025-06-01",
        "--to",
        "2025-06-30",
        "--format",
        "json",
    ])
    .assert()
    .failure()
    .stderr(contains("--out FILE is required"));
}
