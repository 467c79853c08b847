//! Queries for the configuration tables: lunch types, the confirmation
//! window singleton, the reminder scheduler singleton, and templates.

use crate::errors::AppResult;
use crate::models::lunch_type::LunchType;
use crate::models::reminder::{ReminderConfig, Template};
use crate::models::timing::LunchTiming;
use rusqlite::{Connection, OptionalExtension, Row, params};

// ---------------------------
// Lunch types
// ---------------------------

fn map_type(row: &Row) -> rusqlite::Result<LunchType> {
    Ok(LunchType {
        id: row.get("id")?,
        name: row.get("name")?,
        cost: row.get("cost")?,
        note: row.get("note")?,
    })
}

pub fn insert_lunch_type(conn: &Connection, name: &str, cost: f64, note: &str) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO lunch_types (name, cost, note) VALUES (?1, ?2, ?3)",
        params![name, cost, note],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn find_lunch_type(conn: &Connection, name: &str) -> AppResult<Option<LunchType>> {
    let mut stmt =
        conn.prepare_cached("SELECT id, name, cost, note FROM lunch_types WHERE name = ?1")?;
    let t = stmt.query_row([name.trim()], map_type).optional()?;
    Ok(t)
}

pub fn list_lunch_types(conn: &Connection) -> AppResult<Vec<LunchType>> {
    let mut stmt = conn.prepare("SELECT id, name, cost, note FROM lunch_types ORDER BY name ASC")?;
    let rows = stmt.query_map([], map_type)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------
// Confirmation window (singleton row, id = 1)
// ---------------------------

pub fn set_timing(conn: &Connection, start: f64, end: f64, note: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO lunch_timing (id, start_time, end_time, note)
         VALUES (1, ?1, ?2, ?3)
         ON CONFLICT(id) DO UPDATE SET start_time = ?1, end_time = ?2, note = ?3",
        params![start, end, note],
    )?;
    Ok(())
}

pub fn get_timing(conn: &Connection) -> AppResult<Option<LunchTiming>> {
    let mut stmt =
        conn.prepare_cached("SELECT start_time, end_time FROM lunch_timing WHERE id = 1")?;
    let t = stmt
        .query_row([], |row| {
            Ok(LunchTiming {
                start_time: row.get(0)?,
                end_time: row.get(1)?,
            })
        })
        .optional()?;
    Ok(t)
}

// ---------------------------
// Reminder scheduler config (singleton row, id = 1)
// ---------------------------

fn map_config(row: &Row) -> rusqlite::Result<ReminderConfig> {
    Ok(ReminderConfig {
        email_time: row.get("email_time")?,
        template_id: row.get("template_id")?,
        is_active: row.get::<_, i64>("is_active")? == 1,
        last_sent_date: row.get("last_sent_date")?,
    })
}

pub fn get_reminder_config(conn: &Connection) -> AppResult<Option<ReminderConfig>> {
    let mut stmt = conn.prepare_cached(
        "SELECT email_time, template_id, is_active, last_sent_date
         FROM reminder_config WHERE id = 1",
    )?;
    let cfg = stmt.query_row([], map_config).optional()?;
    Ok(cfg)
}

/// The scheduler only ever acts on an existing, active configuration.
pub fn active_reminder_config(conn: &Connection) -> AppResult<Option<ReminderConfig>> {
    Ok(get_reminder_config(conn)?.filter(|c| c.is_active))
}

/// Create or update the singleton configuration row.
pub fn configure_reminder(
    conn: &Connection,
    email_time: Option<f64>,
    is_active: Option<bool>,
) -> AppResult<ReminderConfig> {
    conn.execute(
        "INSERT INTO reminder_config (id) VALUES (1) ON CONFLICT(id) DO NOTHING",
        [],
    )?;

    if let Some(t) = email_time {
        conn.execute(
            "UPDATE reminder_config SET email_time = ?1 WHERE id = 1",
            params![t],
        )?;
    }
    if let Some(a) = is_active {
        conn.execute(
            "UPDATE reminder_config SET is_active = ?1 WHERE id = 1",
            params![if a { 1 } else { 0 }],
        )?;
    }

    get_reminder_config(conn)?
        .ok_or_else(|| crate::errors::AppError::Other("reminder_config row missing".to_string()))
}

pub fn set_last_sent(conn: &Connection, date: &str) -> AppResult<()> {
    conn.execute(
        "UPDATE reminder_config SET last_sent_date = ?1 WHERE id = 1",
        params![date],
    )?;
    Ok(())
}

pub fn set_template_id(conn: &Connection, template_id: i64) -> AppResult<()> {
    conn.execute(
        "UPDATE reminder_config SET template_id = ?1 WHERE id = 1",
        params![template_id],
    )?;
    Ok(())
}

// ---------------------------
// Templates
// ---------------------------

fn map_template(row: &Row) -> rusqlite::Result<Template> {
    Ok(Template {
        id: row.get("id")?,
        name: row.get("name")?,
        subject: row.get("subject")?,
        body: row.get("body")?,
    })
}

pub fn insert_template(conn: &Connection, name: &str, subject: &str, body: &str) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO templates (name, subject, body) VALUES (?1, ?2, ?3)",
        params![name, subject, body],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_template(conn: &Connection, id: i64) -> AppResult<Option<Template>> {
    let mut stmt =
        conn.prepare_cached("SELECT id, name, subject, body FROM templates WHERE id = ?1")?;
    let t = stmt.query_row([id], map_template).optional()?;
    Ok(t)
}

pub fn find_template_by_name(conn: &Connection, name: &str) -> AppResult<Option<Template>> {
    let mut stmt =
        conn.prepare_cached("SELECT id, name, subject, body FROM templates WHERE name = ?1")?;
    let t = stmt.query_row([name], map_template).optional()?;
    Ok(t)
}
