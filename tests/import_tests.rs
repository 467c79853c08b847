use predicates::str::contains;
use std::fs;

mod common;
use common::{ll, seed_basic, setup_test_db, temp_out};

fn write_csv(name: &str, content: &str) -> String {
    let path = temp_out(name, "csv");
    fs::write(&path, content).expect("write csv fixture");
    path
}

#[test]
fn test_import_isolates_row_failures() {
    let db = setup_test_db("import_row_failures");
    seed_basic(&db);

    // Good row, unknown employee, Saturday (2024-12-14), good row.
    let csv = write_csv(
        "import_rows",
        "Employee Name,Date,Lunch Type,State,Remarks\n\
         Alice Rai,2024-12-09,Non-Veg,confirmed,\n\
         Unknown Person,2024-12-09,Veg,confirmed,\n\
         Bob Karki,2024-12-14,Veg,confirmed,\n\
         Bob Karki,2024-12-10,Veg,draft,Extra spicy\n",
    );

    ll().args(["--db", &db, "--role", "admin", "import", &csv])
        .assert()
        .success()
        .stdout(contains("Successfully imported/updated: 2"))
        .stdout(contains("Errors: 1"))
        .stdout(contains("Skipped (Saturdays): 1"))
        .stdout(contains("Employee 'Unknown Person' not found"));

    // The good rows landed.
    ll().args([
        "--db",
        &db,
        "--role",
        "admin",
        "list",
        "--period",
        "2024-12",
    ])
    .assert()
    .success()
    .stdout(contains("2024-12-09"))
    .stdout(contains("2024-12-10"));
}

#[test]
fn test_import_updates_existing_active_record() {
    let db = setup_test_db("import_updates");
    seed_basic(&db);

    // Tuesday draft (auto Veg) created interactively...
    ll().args(["--db", &db, "--operator", "Alice Rai", "add", "2025-06-03"])
        .assert()
        .success();

    // ...then the import sheet says it was a confirmed Non-Veg.
    let csv = write_csv(
        "import_update",
        "Employee Name,Date,Lunch Type,State,Remarks\n\
         Alice Rai,2025-06-03,Non-Veg,confirmed,from sheet\n",
    );

    ll().args(["--db", &db, "--role", "admin", "import", &csv])
        .assert()
        .success()
        .stdout(contains("Successfully imported/updated: 1"));

    ll().args([
        "--db",
        &db,
        "--operator",
        "Alice Rai",
        "list",
        "--period",
        "2025-06-03",
    ])
    .assert()
    .success()
    .stdout(contains("Non-Veg"))
    .stdout(contains("Confirmed"))
    .stdout(contains("from sheet"));
}

#[test]
fn test_import_rejects_missing_columns() {
    let db = setup_test_db("import_missing_cols");
    seed_basic(&db);

    let csv = write_csv(
        "import_bad_header",
        "Employee,Date,Type\nAlice Rai,2025-06-03,Veg\n",
    );

    ll().args(["--db", &db, "--role", "admin", "import", &csv])
        .assert()
        .failure()
        .stderr(contains("Missing required columns"));
}

#[test]
fn test_import_is_admin_only() {
    let db = setup_test_db("import_admin_only");
    seed_basic(&db);

    let csv = write_csv(
        "import_denied",
        "Employee Name,Date,Lunch Type,State,Remarks\n\
         Alice Rai,2025-06-03,Veg,confirmed,\n",
    );

    ll().args(["--db", &db, "--operator", "Alice Rai", "import", &csv])
        .assert()
        .failure()
        .stderr(contains("Only admin can import"));
}

#[test]
fn test_template_is_written() {
    let db = setup_test_db("import_template");
    seed_basic(&db);

    let out = temp_out("lunch_template", "xlsx");
    ll().args(["--db", &db, "import", "--template", &out])
        .assert()
        .success()
        .stdout(contains("Template export completed"));

    assert!(fs::metadata(&out).map(|m| m.len() > 0).unwrap_or(false));
}
