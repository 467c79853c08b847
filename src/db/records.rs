use crate::errors::{AppError, AppResult};
use crate::models::record::LunchRecord;
use crate::models::record_state::RecordState;
use chrono::{Local, NaiveDate};
use rusqlite::{Connection, OptionalExtension, Row, ToSql, params};

/// Shared SELECT: joins employee and lunch type so every loaded record
/// carries its display name and the read-time cost.
const SELECT_RECORD: &str = "SELECT r.id, r.employee_id, e.name AS employee, r.date,
        r.lunch_type_id, t.name AS lunch_type, t.cost AS cost,
        r.note, r.state, r.is_admin_request, r.created_at
     FROM lunch_records r
     JOIN employees e ON e.id = r.employee_id
     JOIN lunch_types t ON t.id = r.lunch_type_id";

pub fn map_row(row: &Row) -> rusqlite::Result<LunchRecord> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let state_str: String = row.get("state")?;
    let state = RecordState::from_db_str(&state_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::Other(format!("Invalid state: {}", state_str))),
        )
    })?;

    Ok(LunchRecord {
        id: row.get("id")?,
        employee_id: row.get("employee_id")?,
        employee: row.get("employee")?,
        date,
        lunch_type_id: row.get("lunch_type_id")?,
        lunch_type: row.get("lunch_type")?,
        cost: row.get("cost")?,
        note: row.get("note")?,
        state,
        is_admin_request: row.get::<_, i64>("is_admin_request")? == 1,
        created_at: row.get("created_at")?,
    })
}

/// The non-cancelled record for (employee, date), if any. The partial
/// unique index guarantees there is at most one.
pub fn find_active(
    conn: &Connection,
    employee_id: i64,
    date: &NaiveDate,
) -> AppResult<Option<LunchRecord>> {
    let sql = format!(
        "{SELECT_RECORD} WHERE r.employee_id = ?1 AND r.date = ?2 AND r.state != 'cancelled'"
    );
    let mut stmt = conn.prepare_cached(&sql)?;
    let rec = stmt
        .query_row(params![employee_id, date.to_string()], map_row)
        .optional()?;
    Ok(rec)
}

/// Most recent record for (employee, date) regardless of state. Used to
/// distinguish "already cancelled" from "never existed".
pub fn find_latest(
    conn: &Connection,
    employee_id: i64,
    date: &NaiveDate,
) -> AppResult<Option<LunchRecord>> {
    let sql = format!(
        "{SELECT_RECORD} WHERE r.employee_id = ?1 AND r.date = ?2 ORDER BY r.id DESC LIMIT 1"
    );
    let mut stmt = conn.prepare_cached(&sql)?;
    let rec = stmt
        .query_row(params![employee_id, date.to_string()], map_row)
        .optional()?;
    Ok(rec)
}

pub fn insert(
    conn: &Connection,
    employee_id: i64,
    date: &NaiveDate,
    lunch_type_id: i64,
    note: &str,
    state: RecordState,
    is_admin_request: bool,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO lunch_records (employee_id, date, lunch_type_id, note, state, is_admin_request, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            employee_id,
            date.to_string(),
            lunch_type_id,
            note,
            state.to_db_str(),
            if is_admin_request { 1 } else { 0 },
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn set_state(conn: &Connection, id: i64, state: RecordState) -> AppResult<()> {
    conn.execute(
        "UPDATE lunch_records SET state = ?1 WHERE id = ?2",
        params![state.to_db_str(), id],
    )?;
    Ok(())
}

/// Update mutable details; state changes go through set_state only.
pub fn update_details(
    conn: &Connection,
    id: i64,
    employee_id: i64,
    date: &NaiveDate,
    lunch_type_id: i64,
    note: &str,
) -> AppResult<()> {
    conn.execute(
        "UPDATE lunch_records
         SET employee_id = ?1, date = ?2, lunch_type_id = ?3, note = ?4
         WHERE id = ?5",
        params![employee_id, date.to_string(), lunch_type_id, note, id],
    )?;
    Ok(())
}

/// Filter for record listings and reports.
#[derive(Debug, Default)]
pub struct RecordQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub employee_id: Option<i64>,
    pub states: Option<Vec<RecordState>>,
}

pub fn query(conn: &Connection, q: &RecordQuery) -> AppResult<Vec<LunchRecord>> {
    let mut sql = format!("{SELECT_RECORD} WHERE 1=1");

    let from_s = q.from.map(|d| d.to_string());
    let to_s = q.to.map(|d| d.to_string());

    let mut args: Vec<&dyn ToSql> = Vec::new();

    if let Some(ref s) = from_s {
        sql.push_str(&format!(" AND r.date >= ?{}", args.len() + 1));
        args.push(s);
    }
    if let Some(ref s) = to_s {
        sql.push_str(&format!(" AND r.date <= ?{}", args.len() + 1));
        args.push(s);
    }
    if let Some(ref id) = q.employee_id {
        sql.push_str(&format!(" AND r.employee_id = ?{}", args.len() + 1));
        args.push(id);
    }
    if let Some(ref states) = q.states {
        // States are a fixed enum; inline them as literals.
        let list = states
            .iter()
            .map(|s| format!("'{}'", s.to_db_str()))
            .collect::<Vec<_>>()
            .join(",");
        sql.push_str(&format!(" AND r.state IN ({list})"));
    }

    sql.push_str(" ORDER BY r.date DESC, e.name ASC");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(rusqlite::params_from_iter(args), map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
