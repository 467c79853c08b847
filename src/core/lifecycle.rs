//! The lunch record state machine and its invariants.
//!
//! Every mutation of a record flows through here: creation (self-service
//! or admin on-behalf), the admin-fill request flow, window-gated
//! confirmation, cancellation, admin reset, and field edits. Records are
//! never deleted, only transitioned to cancelled.

use crate::db::{employees, log::ttlog, outbox, records, settings};
use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use crate::models::record::LunchRecord;
use crate::models::record_state::RecordState;
use crate::models::role::Role;
use crate::core::{menu, window};
use crate::utils::time::format_clock;
use chrono::NaiveDate;
use rusqlite::Connection;

/// Resolve which employee an operation targets.
///
/// Roles that may act for others use `requested` when given; everyone
/// else is forced onto the operator's own linked identity.
fn resolve_target(
    conn: &Connection,
    role: Role,
    operator: Option<&str>,
    requested: Option<&str>,
) -> AppResult<Employee> {
    if role.acts_for_others()
        && let Some(name) = requested
    {
        return employees::find_by_name(conn, name)?
            .ok_or_else(|| AppError::EmployeeNotFound(name.to_string()));
    }

    let name = operator.ok_or(AppError::Identity)?;
    employees::find_by_name(conn, name)?.ok_or(AppError::Identity)
}

fn duplicate_error(existing: &LunchRecord) -> AppError {
    AppError::Duplicate {
        employee: existing.employee.clone(),
        date: existing.date.format("%B %d, %Y").to_string(),
        day: existing.day(),
    }
}

pub struct CreateRequest<'a> {
    pub employee: Option<&'a str>,
    pub date: NaiveDate,
    pub lunch_type: Option<&'a str>,
    pub note: Option<&'a str>,
    /// Admin on-behalf creation: record lands directly in `confirmed`
    /// and any pending admin-fill request for the slot is closed.
    pub fill: bool,
}

pub fn create(
    conn: &Connection,
    role: Role,
    operator: Option<&str>,
    req: &CreateRequest,
) -> AppResult<LunchRecord> {
    if req.fill && !role.is_admin() {
        return Err(AppError::Authorization(
            "Only admin can fill records on behalf of employees.".to_string(),
        ));
    }

    let target = resolve_target(conn, role, operator, req.employee)?;

    if menu::is_holiday(&req.date) && !role.is_admin() {
        return Err(AppError::Holiday);
    }

    // The weekday rule decides the lunch type; only an admin may override
    // it explicitly. On the Saturday holiday (admin-only territory) there
    // is no rotation entry, so un-overridden fills fall back to Veg.
    let type_name = match (role.is_admin(), req.lunch_type) {
        (true, Some(name)) => name,
        _ => menu::lunch_type_for(&req.date).unwrap_or(menu::VEG),
    };
    let lunch_type = settings::find_lunch_type(conn, type_name)?
        .ok_or_else(|| AppError::LunchTypeNotFound(type_name.to_string()))?;

    if let Some(existing) = records::find_active(conn, target.id, &req.date)? {
        return Err(duplicate_error(&existing));
    }

    let (state, is_admin_request, note) = if req.fill {
        (
            RecordState::Confirmed,
            true,
            req.note.unwrap_or("Created by admin"),
        )
    } else {
        (RecordState::Draft, false, req.note.unwrap_or(""))
    };

    records::insert(
        conn,
        target.id,
        &req.date,
        lunch_type.id,
        note,
        state,
        is_admin_request,
    )?;

    let record = records::find_active(conn, target.id, &req.date)?
        .ok_or_else(|| AppError::Other("record vanished right after insert".to_string()))?;

    if req.fill {
        let closed = outbox::close_fill_requests(conn, &target.name, &req.date)?;
        if closed > 0 {
            ttlog(
                conn,
                "fill",
                &record.reference(),
                &format!("Closed {closed} pending admin fill request(s)"),
            )?;
        }
    }

    ttlog(
        conn,
        "add",
        &record.reference(),
        &format!(
            "Created lunch record ({}, {})",
            record.lunch_type,
            record.state.label()
        ),
    )?;

    Ok(record)
}

/// Employee asks the admins to handle the record. Valid from draft only.
pub fn request_admin_fill(
    conn: &Connection,
    role: Role,
    operator: Option<&str>,
    employee: Option<&str>,
    date: NaiveDate,
) -> AppResult<LunchRecord> {
    let target = resolve_target(conn, role, operator, employee)?;

    let record = records::find_active(conn, target.id, &date)?.ok_or_else(|| {
        AppError::RecordNotFound {
            employee: target.name.clone(),
            date: date.to_string(),
        }
    })?;

    if record.state != RecordState::Draft {
        return Err(AppError::InvalidState(
            "Only draft records can be requested.".to_string(),
        ));
    }

    records::set_state(conn, record.id, RecordState::Requested)?;

    let body = format!(
        "Employee {} has requested admin assistance.\n\
         Date: {}\nDay: {}\nLunch Type: {}\n\
         Please confirm this record or fill it on their behalf.",
        record.employee,
        record.date_str(),
        record.day(),
        record.lunch_type
    );
    outbox::push(
        conn,
        "fill_request",
        outbox::ADMIN_RECIPIENT,
        &outbox::fill_request_subject(&record.employee, &date),
        &body,
        "pending",
    )?;

    ttlog(
        conn,
        "request",
        &record.reference(),
        "Admin fill requested",
    )?;

    records::find_active(conn, target.id, &date)?
        .ok_or_else(|| AppError::Other("record vanished during request".to_string()))
}

/// Confirm a draft or requested record.
///
/// Requested records need an admin. Draft self-service confirmation is
/// gated by the configured window (inclusive both ends); admins bypass
/// the window but not the requirement that a window exists.
pub fn confirm(
    conn: &Connection,
    role: Role,
    operator: Option<&str>,
    employee: Option<&str>,
    date: NaiveDate,
    current_hour: f64,
) -> AppResult<LunchRecord> {
    let target = resolve_target(conn, role, operator, employee)?;

    let record = records::find_latest(conn, target.id, &date)?.ok_or_else(|| {
        AppError::RecordNotFound {
            employee: target.name.clone(),
            date: date.to_string(),
        }
    })?;

    if record.state == RecordState::Requested && !role.is_admin() {
        return Err(AppError::Authorization(
            "Only admin can confirm requested records. Please wait for admin approval."
                .to_string(),
        ));
    }

    if !matches!(record.state, RecordState::Draft | RecordState::Requested) {
        return Err(AppError::InvalidState(
            "Only draft or requested records can be confirmed.".to_string(),
        ));
    }

    let timing = settings::get_timing(conn)?.ok_or(AppError::TimingNotConfigured)?;

    if record.state != RecordState::Requested
        && !role.is_admin()
        && !window::within_window(current_hour, timing.start_time, timing.end_time)
    {
        return Err(AppError::OutOfWindow {
            start: format_clock(timing.start_time),
            end: format_clock(timing.end_time),
            current: format_clock(current_hour),
        });
    }

    let was_requested = record.state == RecordState::Requested;
    records::set_state(conn, record.id, RecordState::Confirmed)?;

    if was_requested && role.is_admin() {
        ttlog(
            conn,
            "confirm",
            &record.reference(),
            "Admin confirmed this requested lunch record",
        )?;
    } else {
        ttlog(conn, "confirm", &record.reference(), "Lunch record confirmed")?;
    }

    records::find_active(conn, target.id, &date)?
        .ok_or_else(|| AppError::Other("record vanished during confirm".to_string()))
}

/// Cancel a record. Cancelled is terminal; confirmed/requested records
/// need an admin.
pub fn cancel(
    conn: &Connection,
    role: Role,
    operator: Option<&str>,
    employee: Option<&str>,
    date: NaiveDate,
) -> AppResult<LunchRecord> {
    let target = resolve_target(conn, role, operator, employee)?;

    let record = records::find_latest(conn, target.id, &date)?.ok_or_else(|| {
        AppError::RecordNotFound {
            employee: target.name.clone(),
            date: date.to_string(),
        }
    })?;

    if record.state == RecordState::Cancelled {
        return Err(AppError::AlreadyCancelled);
    }

    if matches!(
        record.state,
        RecordState::Confirmed | RecordState::Requested
    ) && !role.is_admin()
    {
        return Err(AppError::Authorization(
            "You cannot cancel a confirmed/requested lunch record. Please contact admin."
                .to_string(),
        ));
    }

    records::set_state(conn, record.id, RecordState::Cancelled)?;
    ttlog(conn, "cancel", &record.reference(), "Lunch record cancelled")?;

    records::find_latest(conn, target.id, &date)?
        .ok_or_else(|| AppError::Other("record vanished during cancel".to_string()))
}

/// Admin-only: force a record back to draft from any state.
pub fn reset_to_draft(
    conn: &Connection,
    role: Role,
    operator: Option<&str>,
    employee: Option<&str>,
    date: NaiveDate,
) -> AppResult<LunchRecord> {
    if !role.is_admin() {
        return Err(AppError::Authorization(
            "Only admin can reset to draft.".to_string(),
        ));
    }

    let target = resolve_target(conn, role, operator, employee)?;

    let record = records::find_latest(conn, target.id, &date)?.ok_or_else(|| {
        AppError::RecordNotFound {
            employee: target.name.clone(),
            date: date.to_string(),
        }
    })?;

    // Reviving a cancelled record re-enters the one-per-day index; make
    // sure no other active record took the slot in the meantime.
    if record.state == RecordState::Cancelled
        && let Some(existing) = records::find_active(conn, target.id, &date)?
        && existing.id != record.id
    {
        return Err(duplicate_error(&existing));
    }

    records::set_state(conn, record.id, RecordState::Draft)?;
    ttlog(conn, "reset", &record.reference(), "Record reset to draft")?;

    records::find_active(conn, target.id, &date)?
        .ok_or_else(|| AppError::Other("record vanished during reset".to_string()))
}

pub struct ModifyRequest<'a> {
    pub employee: Option<&'a str>,
    pub date: NaiveDate,
    pub new_employee: Option<&'a str>,
    pub new_date: Option<NaiveDate>,
    pub new_type: Option<&'a str>,
    pub new_note: Option<&'a str>,
}

/// Edit record fields. Employee/date moves are admin-only; confirmed and
/// requested records are immutable to non-admins; state never changes
/// here (state transitions have their own operations).
pub fn modify(
    conn: &Connection,
    role: Role,
    operator: Option<&str>,
    req: &ModifyRequest,
) -> AppResult<LunchRecord> {
    let target = resolve_target(conn, role, operator, req.employee)?;

    let record = records::find_active(conn, target.id, &req.date)?.ok_or_else(|| {
        AppError::RecordNotFound {
            employee: target.name.clone(),
            date: req.date.to_string(),
        }
    })?;

    if (req.new_employee.is_some() || req.new_date.is_some()) && !role.is_admin() {
        return Err(AppError::Authorization(
            "You cannot change the employee or the lunch date. Please contact admin if needed."
                .to_string(),
        ));
    }

    if matches!(
        record.state,
        RecordState::Confirmed | RecordState::Requested
    ) && !role.is_admin()
    {
        return Err(AppError::ImmutableState);
    }

    let new_employee = match req.new_employee {
        Some(name) => employees::find_by_name(conn, name)?
            .ok_or_else(|| AppError::EmployeeNotFound(name.to_string()))?,
        None => target.clone(),
    };
    let new_date = req.new_date.unwrap_or(record.date);

    // Moving the record must not collide with another active record.
    if (new_employee.id != record.employee_id || new_date != record.date)
        && let Some(existing) = records::find_active(conn, new_employee.id, &new_date)?
        && existing.id != record.id
    {
        return Err(duplicate_error(&existing));
    }

    let new_type_id = match req.new_type {
        Some(name) => {
            settings::find_lunch_type(conn, name)?
                .ok_or_else(|| AppError::LunchTypeNotFound(name.to_string()))?
                .id
        }
        None => record.lunch_type_id,
    };
    let new_note = req.new_note.unwrap_or(&record.note);

    records::update_details(
        conn,
        record.id,
        new_employee.id,
        &new_date,
        new_type_id,
        new_note,
    )?;

    ttlog(conn, "edit", &record.reference(), "Lunch record updated")?;

    records::find_active(conn, new_employee.id, &new_date)?
        .ok_or_else(|| AppError::Other("record vanished during edit".to_string()))
}
