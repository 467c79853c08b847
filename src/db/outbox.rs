//! The outbox table: every notification the system produces lands here
//! (reminders, admin-fill requests, test sends). Delivery transports sit
//! behind the `notify::Notifier` trait; the outbox is the durable record.

use crate::errors::AppResult;
use chrono::{Local, NaiveDate};
use rusqlite::{Connection, params};

/// Address used for notifications aimed at the admin group rather than a
/// single employee.
pub const ADMIN_RECIPIENT: &str = "admins";

pub fn push(
    conn: &Connection,
    kind: &str,
    recipient: &str,
    subject: &str,
    body: &str,
    status: &str,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO outbox (kind, recipient, subject, body, status, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            kind,
            recipient,
            subject,
            body,
            status,
            Local::now().to_rfc3339()
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Subject line used for admin-fill requests; also the key by which an
/// admin-created record closes the matching pending request.
pub fn fill_request_subject(employee: &str, date: &NaiveDate) -> String {
    format!("Admin fill request: {} - {}", employee, date)
}

/// Mark pending admin-fill requests for (employee, date) as handled.
/// Returns how many were closed.
pub fn close_fill_requests(
    conn: &Connection,
    employee: &str,
    date: &NaiveDate,
) -> AppResult<usize> {
    let closed = conn.execute(
        "UPDATE outbox SET status = 'done'
         WHERE kind = 'fill_request' AND status = 'pending' AND subject = ?1",
        params![fill_request_subject(employee, date)],
    )?;
    Ok(closed)
}
