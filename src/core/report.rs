//! Role-gated report query over stored records.
//!
//! Admin sees only confirmed records; everyone else sees only their own
//! (whatever the state). The optional employee filter narrows further,
//! it never widens.

use crate::db::{employees, records};
use crate::errors::{AppError, AppResult};
use crate::models::record::LunchRecord;
use crate::models::record_state::RecordState;
use crate::models::role::Role;
use chrono::NaiveDate;
use rusqlite::Connection;

pub struct ReportFilter<'a> {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub employee: Option<&'a str>,
}

pub fn run_report(
    conn: &Connection,
    role: Role,
    operator: Option<&str>,
    filter: &ReportFilter,
) -> AppResult<Vec<LunchRecord>> {
    let mut query = records::RecordQuery {
        from: Some(filter.from),
        to: Some(filter.to),
        ..Default::default()
    };

    let requested_id = match filter.employee {
        Some(name) => Some(
            employees::find_by_name(conn, name)?
                .ok_or_else(|| AppError::EmployeeNotFound(name.to_string()))?
                .id,
        ),
        None => None,
    };

    if role.is_admin() {
        query.states = Some(vec![RecordState::Confirmed]);
        query.employee_id = requested_id;
    } else {
        let name = operator.ok_or(AppError::Identity)?;
        let own = employees::find_by_name(conn, name)?.ok_or(AppError::Identity)?;

        // A non-admin asking for someone else intersects to nothing.
        if let Some(id) = requested_id
            && id != own.id
        {
            return Ok(Vec::new());
        }
        query.employee_id = Some(own.id);
    }

    records::query(conn, &query)
}

pub fn total_cost(rows: &[LunchRecord]) -> f64 {
    rows.iter().map(|r| r.cost).sum()
}
