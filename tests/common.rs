#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ll() -> Command {
    cargo_bin_cmd!("lunchlog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_lunchlog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the schema only.
pub fn init_db(db_path: &str) {
    ll().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize the schema and seed the fixtures most tests need:
/// two employees, the Veg/Non-Veg lunch types, and a 13:00-14:30
/// confirmation window.
pub fn seed_basic(db_path: &str) {
    init_db(db_path);

    ll().args([
        "--db",
        db_path,
        "--role",
        "admin",
        "employee",
        "--add",
        "Alice Rai",
        "--email",
        "alice@example.com",
    ])
    .assert()
    .success();

    ll().args([
        "--db",
        db_path,
        "--role",
        "admin",
        "employee",
        "--add",
        "Bob Karki",
        "--email",
        "bob@example.com",
    ])
    .assert()
    .success();

    ll().args([
        "--db", db_path, "--role", "admin", "types", "--add", "Veg", "--cost", "120",
    ])
    .assert()
    .success();

    ll().args([
        "--db", db_path, "--role", "admin", "types", "--add", "Non-Veg", "--cost", "180",
    ])
    .assert()
    .success();

    ll().args([
        "--db", db_path, "--role", "admin", "timing", "--start", "13:00", "--end", "14:30",
    ])
    .assert()
    .success();
}

/// Count rows in the outbox for a given kind/status pair.
pub fn outbox_count(db_path: &str, kind: &str, status: &str) -> i64 {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    conn.query_row(
        "SELECT COUNT(*) FROM outbox WHERE kind = ?1 AND status = ?2",
        [kind, status],
        |row| row.get(0),
    )
    .expect("count outbox")
}
