use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
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

/// Check if a table exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if `lunch_records` has the `is_admin_request` column.
fn records_has_admin_request_column(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('lunch_records')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "is_admin_request" {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the full schema for a fresh database.
///
/// The partial unique index on lunch_records is the store-level guarantee
/// behind the one-active-record-per-employee-per-day rule; the lifecycle
/// pre-checks only produce the friendlier error message.
fn create_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            id      INTEGER PRIMARY KEY AUTOINCREMENT,
            name    TEXT NOT NULL COLLATE NOCASE UNIQUE,
            email   TEXT NOT NULL DEFAULT '',
            active  INTEGER NOT NULL DEFAULT 1
        );

        CREATE TABLE IF NOT EXISTS lunch_types (
            id      INTEGER PRIMARY KEY AUTOINCREMENT,
            name    TEXT NOT NULL COLLATE NOCASE UNIQUE,
            cost    REAL NOT NULL CHECK (cost > 0),
            note    TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS lunch_records (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id      INTEGER NOT NULL REFERENCES employees(id),
            date             TEXT NOT NULL,
            lunch_type_id    INTEGER NOT NULL REFERENCES lunch_types(id),
            note             TEXT NOT NULL DEFAULT '',
            state            TEXT NOT NULL DEFAULT 'draft'
                             CHECK (state IN ('draft','requested','confirmed','cancelled')),
            is_admin_request INTEGER NOT NULL DEFAULT 0,
            created_at       TEXT NOT NULL
        );

        CREATE UNIQUE INDEX IF NOT EXISTS idx_records_one_active_per_day
            ON lunch_records(employee_id, date) WHERE state != 'cancelled';
        CREATE INDEX IF NOT EXISTS idx_records_date ON lunch_records(date);

        CREATE TABLE IF NOT EXISTS lunch_timing (
            id          INTEGER PRIMARY KEY CHECK (id = 1),
            start_time  REAL NOT NULL,
            end_time    REAL NOT NULL,
            note        TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS templates (
            id      INTEGER PRIMARY KEY AUTOINCREMENT,
            name    TEXT NOT NULL UNIQUE,
            subject TEXT NOT NULL,
            body    TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS reminder_config (
            id             INTEGER PRIMARY KEY CHECK (id = 1),
            email_time     REAL NOT NULL DEFAULT 14.0,
            template_id    INTEGER REFERENCES templates(id),
            is_active      INTEGER NOT NULL DEFAULT 1,
            last_sent_date TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS outbox (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            kind       TEXT NOT NULL CHECK (kind IN ('reminder','fill_request','test')),
            recipient  TEXT NOT NULL,
            subject    TEXT NOT NULL,
            body       TEXT NOT NULL,
            status     TEXT NOT NULL CHECK (status IN ('pending','sent','failed','done')),
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_outbox_kind_status ON outbox(kind, status);
        "#,
    )?;
    Ok(())
}

/// Add `is_admin_request` to databases created before the admin-fill flow.
fn migrate_add_admin_request_column(conn: &Connection) -> Result<()> {
    let version = "20250418_0003_add_admin_request_flag";

    if records_has_admin_request_column(conn)? {
        return Ok(());
    }

    // Marker check, in case the column probe ever races a partial apply.
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(());
    }

    conn.execute(
        "ALTER TABLE lunch_records ADD COLUMN is_admin_request INTEGER NOT NULL DEFAULT 0;",
        [],
    )?;

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added is_admin_request flag to lunch_records')",
        [version],
    )?;

    success(format!(
        "Migration applied: {} → added 'is_admin_request' to lunch_records",
        version
    ));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked from db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Base schema (no-op on an up-to-date database)
    let records_existed = table_exists(conn, "lunch_records")?;
    create_schema(conn)?;

    if !records_existed {
        success("Created lunch tracking schema.");
    }

    // 3) Column-level upgrades for databases created by older versions
    if records_existed {
        migrate_add_admin_request_column(conn)?;
    }

    Ok(())
}
