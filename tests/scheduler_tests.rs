use predicates::str::contains;

mod common;
use common::{ll, outbox_count, seed_basic, setup_test_db};

fn configure_scheduler(db: &str) {
    ll().args([
        "--db", db, "--role", "admin", "remind", "--time", "14:00", "--activate",
    ])
    .assert()
    .success();
}

#[test]
fn test_tick_dispatches_once_per_day() {
    let db = setup_test_db("tick_once_per_day");
    seed_basic(&db);
    configure_scheduler(&db);

    ll().args(["--db", &db, "--at", "2025-06-02 14:10", "remind", "--tick"])
        .assert()
        .success()
        .stdout(contains("Sent: 2, Failed: 0"));

    assert_eq!(outbox_count(&db, "reminder", "sent"), 2);

    // Second tick the same timezone-day contacts nobody.
    ll().args(["--db", &db, "--at", "2025-06-02 14:40", "remind", "--tick"])
        .assert()
        .success()
        .stdout(contains("Nothing to dispatch"));

    assert_eq!(outbox_count(&db, "reminder", "sent"), 2);

    // The next day it fires again.
    ll().args(["--db", &db, "--at", "2025-06-03 14:10", "remind", "--tick"])
        .assert()
        .success()
        .stdout(contains("Sent: 2, Failed: 0"));

    assert_eq!(outbox_count(&db, "reminder", "sent"), 4);
}

#[test]
fn test_tick_outside_dispatch_window() {
    let db = setup_test_db("tick_outside_window");
    seed_basic(&db);
    configure_scheduler(&db);

    ll().args(["--db", &db, "--at", "2025-06-02 10:00", "remind", "--tick"])
        .assert()
        .success()
        .stdout(contains("Nothing to dispatch"));

    assert_eq!(outbox_count(&db, "reminder", "sent"), 0);
}

#[test]
fn test_tick_without_configuration_logs_and_exits() {
    let db = setup_test_db("tick_unconfigured");
    seed_basic(&db);

    ll().args(["--db", &db, "--at", "2025-06-02 14:10", "remind", "--tick"])
        .assert()
        .success()
        .stdout(contains("Nothing to dispatch"));
}

#[test]
fn test_send_now_bypasses_the_daily_guard() {
    let db = setup_test_db("send_now_guard");
    seed_basic(&db);
    configure_scheduler(&db);

    ll().args(["--db", &db, "--at", "2025-06-02 14:10", "remind", "--tick"])
        .assert()
        .success();
    assert_eq!(outbox_count(&db, "reminder", "sent"), 2);

    // A plain tick is guarded; --now clears the guard and resends.
    ll().args([
        "--db",
        &db,
        "--role",
        "admin",
        "--at",
        "2025-06-02 14:20",
        "remind",
        "--now",
    ])
    .assert()
    .success()
    .stdout(contains("Sent: 2"));
    assert_eq!(outbox_count(&db, "reminder", "sent"), 4);

    // --now is admin-only.
    ll().args(["--db", &db, "--at", "2025-06-02 14:20", "remind", "--now"])
        .assert()
        .failure()
        .stderr(contains("Only admin"));
}

#[test]
fn test_send_test_bypasses_all_guards() {
    let db = setup_test_db("send_test");
    seed_basic(&db);

    // No scheduler configuration, deep in the night: still sends.
    ll().args([
        "--db",
        &db,
        "--operator",
        "Alice Rai",
        "--at",
        "2025-06-02 03:00",
        "remind",
        "--send-test",
    ])
    .assert()
    .success()
    .stdout(contains("Test email sent to alice@example.com"));

    assert_eq!(outbox_count(&db, "test", "sent"), 1);
}

#[test]
fn test_admin_fill_closes_pending_requests() {
    let db = setup_test_db("fill_closes_requests");
    seed_basic(&db);

    let alice = ["--db", db.as_str(), "--operator", "Alice Rai"];

    ll().args(alice).args(["add", "2025-06-02"]).assert().success();
    ll().args(alice)
        .args(["request", "2025-06-02"])
        .assert()
        .success();

    assert_eq!(outbox_count(&db, "fill_request", "pending"), 1);

    // The requested record is cancelled by admin, then filled on behalf;
    // the pending request is closed by the fill.
    ll().args([
        "--db",
        &db,
        "--role",
        "admin",
        "cancel",
        "2025-06-02",
        "--employee",
        "Alice Rai",
    ])
    .assert()
    .success();

    ll().args([
        "--db",
        &db,
        "--role",
        "admin",
        "add",
        "2025-06-02",
        "--employee",
        "Alice Rai",
        "--fill",
    ])
    .assert()
    .success();

    assert_eq!(outbox_count(&db, "fill_request", "pending"), 0);
    assert_eq!(outbox_count(&db, "fill_request", "done"), 1);
}
