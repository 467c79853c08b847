//! Bulk CSV import of lunch records.
//!
//! Rows follow the same create-or-update contract as interactive use:
//! an existing active record for (employee, date) is updated in place,
//! otherwise a new record is created with the row's state. One bad row
//! never aborts the batch; Saturdays are skipped, not errored.

use crate::core::menu;
use crate::db::{employees, log::ttlog, records, settings};
use crate::errors::{AppError, AppResult};
use crate::models::record_state::RecordState;
use crate::utils::date::parse_date;
use rusqlite::Connection;
use std::path::Path;

const REQUIRED_COLUMNS: [&str; 4] = ["Employee Name", "Date", "Lunch Type", "State"];

/// Cap on error detail lines in the rendered summary.
const MAX_ERROR_DETAILS: usize = 20;

#[derive(Debug, Default)]
pub struct ImportOutcome {
    pub success: u32,
    pub errors: u32,
    pub skipped: u32,
    pub error_details: Vec<String>,
}

impl ImportOutcome {
    pub fn render_summary(&self) -> String {
        let mut out = format!(
            "Import completed!\n\n\
             ✅ Successfully imported/updated: {} records\n\
             ❌ Errors: {}\n\
             ⏭️ Skipped (Saturdays): {}\n",
            self.success, self.errors, self.skipped
        );

        if !self.error_details.is_empty() {
            out.push_str("\nError Details:\n");
            for line in self.error_details.iter().take(MAX_ERROR_DETAILS) {
                out.push_str(line);
                out.push('\n');
            }
            if self.error_details.len() > MAX_ERROR_DETAILS {
                out.push_str(&format!(
                    "... and {} more errors\n",
                    self.error_details.len() - MAX_ERROR_DETAILS
                ));
            }
        }

        out
    }
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h.trim() == name)
}

/// Import lunch records from a CSV file with columns
/// Employee Name, Date, Lunch Type, State, Remarks.
pub fn import_csv(conn: &Connection, path: &Path) -> AppResult<ImportOutcome> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| AppError::Import(format!("Error reading file: {e}")))?;

    let headers = reader
        .headers()
        .map_err(|e| AppError::Import(format!("Error reading file: {e}")))?
        .clone();

    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .filter(|c| column_index(&headers, c).is_none())
        .copied()
        .collect();
    if !missing.is_empty() {
        return Err(AppError::Import(format!(
            "Missing required columns: {}. Required columns are: {}",
            missing.join(", "),
            REQUIRED_COLUMNS.join(", ")
        )));
    }

    let employee_col = column_index(&headers, "Employee Name").expect("checked above");
    let date_col = column_index(&headers, "Date").expect("checked above");
    let type_col = column_index(&headers, "Lunch Type").expect("checked above");
    let state_col = column_index(&headers, "State").expect("checked above");
    let remarks_col = column_index(&headers, "Remarks");

    let mut outcome = ImportOutcome::default();

    for (index, result) in reader.records().enumerate() {
        // Row 1 is the header line.
        let row_no = index + 2;

        let record = match result {
            Ok(r) => r,
            Err(e) => {
                outcome.errors += 1;
                outcome
                    .error_details
                    .push(format!("Row {row_no}: {e}"));
                continue;
            }
        };

        if let Err(msg) = import_row(
            conn,
            &record,
            employee_col,
            date_col,
            type_col,
            state_col,
            remarks_col,
            &mut outcome,
        ) {
            outcome.errors += 1;
            outcome.error_details.push(format!("Row {row_no}: {msg}"));
        }
    }

    ttlog(
        conn,
        "import",
        &path.display().to_string(),
        &format!(
            "Imported {} records ({} errors, {} skipped)",
            outcome.success, outcome.errors, outcome.skipped
        ),
    )?;

    Ok(outcome)
}

#[allow(clippy::too_many_arguments)]
fn import_row(
    conn: &Connection,
    record: &csv::StringRecord,
    employee_col: usize,
    date_col: usize,
    type_col: usize,
    state_col: usize,
    remarks_col: Option<usize>,
    outcome: &mut ImportOutcome,
) -> Result<(), String> {
    let employee_name = record.get(employee_col).unwrap_or("").trim();
    let employee = employees::find_by_name(conn, employee_name)
        .map_err(|e| e.to_string())?
        .ok_or_else(|| format!("Employee '{employee_name}' not found"))?;

    let date_raw = record.get(date_col).unwrap_or("").trim();
    let date =
        parse_date(date_raw).ok_or_else(|| format!("Invalid date format - {date_raw}"))?;

    if menu::is_holiday(&date) {
        outcome.skipped += 1;
        return Ok(());
    }

    let type_name = record.get(type_col).unwrap_or("").trim();
    let lunch_type = settings::find_lunch_type(conn, type_name)
        .map_err(|e| e.to_string())?
        .ok_or_else(|| format!("Lunch type '{type_name}' not found"))?;

    // Unknown states default to confirmed (past records are assumed
    // served).
    let state = RecordState::from_db_str(&record.get(state_col).unwrap_or("").trim().to_lowercase())
        .filter(|s| *s != RecordState::Requested)
        .unwrap_or(RecordState::Confirmed);

    let note = remarks_col
        .and_then(|c| record.get(c))
        .unwrap_or("")
        .trim()
        .to_string();

    match records::find_active(conn, employee.id, &date).map_err(|e| e.to_string())? {
        Some(existing) => {
            records::update_details(
                conn,
                existing.id,
                existing.employee_id,
                &existing.date,
                lunch_type.id,
                &note,
            )
            .map_err(|e| e.to_string())?;
            records::set_state(conn, existing.id, state).map_err(|e| e.to_string())?;
        }
        None => {
            records::insert(conn, employee.id, &date, lunch_type.id, &note, state, false)
                .map_err(|e| e.to_string())?;
        }
    }

    outcome.success += 1;
    Ok(())
}
