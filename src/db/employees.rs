use crate::errors::AppResult;
use crate::models::employee::Employee;
use rusqlite::{Connection, OptionalExtension, Row, params};

fn map_row(row: &Row) -> rusqlite::Result<Employee> {
    Ok(Employee {
        id: row.get("id")?,
        name: row.get("name")?,
        email: row.get("email")?,
        active: row.get::<_, i64>("active")? == 1,
    })
}

pub fn insert(conn: &Connection, name: &str, email: &str) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO employees (name, email, active) VALUES (?1, ?2, 1)",
        params![name, email],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Name lookup is case-insensitive (the employees.name column collates
/// NOCASE), matching how import rows resolve names.
pub fn find_by_name(conn: &Connection, name: &str) -> AppResult<Option<Employee>> {
    let mut stmt =
        conn.prepare_cached("SELECT id, name, email, active FROM employees WHERE name = ?1")?;
    let emp = stmt.query_row([name.trim()], map_row).optional()?;
    Ok(emp)
}

pub fn list(conn: &Connection) -> AppResult<Vec<Employee>> {
    let mut stmt =
        conn.prepare("SELECT id, name, email, active FROM employees ORDER BY name ASC")?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn set_active(conn: &Connection, name: &str, active: bool) -> AppResult<bool> {
    let changed = conn.execute(
        "UPDATE employees SET active = ?1 WHERE name = ?2",
        params![if active { 1 } else { 0 }, name.trim()],
    )?;
    Ok(changed > 0)
}

/// Reminder recipients: active employees with a contact address.
pub fn active_with_email(conn: &Connection) -> AppResult<Vec<Employee>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, email, active FROM employees
         WHERE active = 1 AND TRIM(email) != ''
         ORDER BY name ASC",
    )?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
