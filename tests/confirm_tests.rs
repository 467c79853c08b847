use predicates::str::contains;

mod common;
use common::{ll, seed_basic, setup_test_db};

#[test]
fn test_confirm_inside_window() {
    let db = setup_test_db("confirm_inside");
    seed_basic(&db);

    let alice = ["--db", db.as_str(), "--operator", "Alice Rai"];

    ll().args(alice).args(["add", "2025-06-02"]).assert().success();

    ll().args(alice)
        .args(["--at", "2025-06-02 13:30", "confirm", "2025-06-02"])
        .assert()
        .success()
        .stdout(contains("has been confirmed"));
}

#[test]
fn test_window_bounds_are_inclusive() {
    let db = setup_test_db("confirm_bounds");
    seed_basic(&db);

    let alice = ["--db", db.as_str(), "--operator", "Alice Rai"];

    ll().args(alice).args(["add", "2025-06-02"]).assert().success();

    // Exactly the end of the window still passes.
    ll().args(alice)
        .args(["--at", "2025-06-02 14:30", "confirm", "2025-06-02"])
        .assert()
        .success();

    // One minute past the end fails, echoing the window and the time.
    ll().args(alice).args(["add", "2025-06-03"]).assert().success();
    ll().args(alice)
        .args(["--at", "2025-06-03 14:31", "confirm", "2025-06-03"])
        .assert()
        .failure()
        .stderr(contains("between 13:00 and 14:30"))
        .stderr(contains("Current time: 14:31"));
}

#[test]
fn test_confirm_without_timing_configuration() {
    let db = setup_test_db("confirm_no_timing");
    common::init_db(&db);

    ll().args([
        "--db",
        &db,
        "--role",
        "admin",
        "employee",
        "--add",
        "Alice Rai",
    ])
    .assert()
    .success();
    ll().args([
        "--db", &db, "--role", "admin", "types", "--add", "Veg", "--cost", "120",
    ])
    .assert()
    .success();

    let alice = ["--db", db.as_str(), "--operator", "Alice Rai"];
    ll().args(alice).args(["add", "2025-06-03"]).assert().success();

    ll().args(alice)
        .args(["--at", "2025-06-03 13:30", "confirm", "2025-06-03"])
        .assert()
        .failure()
        .stderr(contains("Lunch timing is not configured"));
}

#[test]
fn test_admin_bypasses_the_window() {
    let db = setup_test_db("confirm_admin_bypass");
    seed_basic(&db);

    ll().args(["--db", &db, "--operator", "Alice Rai", "add", "2025-06-02"])
        .assert()
        .success();

    ll().args([
        "--db",
        &db,
        "--role",
        "admin",
        "--at",
        "2025-06-02 20:00",
        "confirm",
        "2025-06-02",
        "--employee",
        "Alice Rai",
    ])
    .assert()
    .success();
}

#[test]
fn test_requested_records_need_admin() {
    let db = setup_test_db("confirm_requested");
    seed_basic(&db);

    let alice = ["--db", db.as_str(), "--operator", "Alice Rai"];

    ll().args(alice).args(["add", "2025-06-02"]).assert().success();
    ll().args(alice)
        .args(["request", "2025-06-02"])
        .assert()
        .success()
        .stdout(contains("request has been submitted"));

    // Even inside the window, the owner cannot confirm a requested record.
    ll().args(alice)
        .args(["--at", "2025-06-02 13:30", "confirm", "2025-06-02"])
        .assert()
        .failure()
        .stderr(contains("Only admin can confirm requested records"));

    // Admin confirms it outside the window.
    ll().args([
        "--db",
        &db,
        "--role",
        "admin",
        "--at",
        "2025-06-02 20:00",
        "confirm",
        "2025-06-02",
        "--employee",
        "Alice Rai",
    ])
    .assert()
    .success();
}

#[test]
fn test_request_is_only_valid_from_draft() {
    let db = setup_test_db("request_from_draft");
    seed_basic(&db);

    let alice = ["--db", db.as_str(), "--operator", "Alice Rai"];

    ll().args(alice).args(["add", "2025-06-02"]).assert().success();
    ll().args(alice)
        .args(["--at", "2025-06-02 13:30", "confirm", "2025-06-02"])
        .assert()
        .success();

    ll().args(alice)
        .args(["request", "2025-06-02"])
        .assert()
        .failure()
        .stderr(contains("Only draft records can be requested"));
}
