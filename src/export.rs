//! Report output formats: CSV, JSON, and PDF, plus the XLSX sample
//! template for the bulk importer.

pub mod model;
mod json_csv;
mod pdf;
pub mod xlsx;

pub use model::RecordExport;

use crate::errors::AppResult;
use crate::models::record::LunchRecord;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Helper for export completion messages.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Table,
    Csv,
    Json,
    Pdf,
}

/// Write report rows to a file in the requested format.
pub fn write_report(format: ReportFormat, rows: &[LunchRecord], path: &Path) -> AppResult<()> {
    let export_rows: Vec<RecordExport> = rows.iter().map(RecordExport::from).collect();
    match format {
        ReportFormat::Table => Ok(()), // rendered to stdout by the caller
        ReportFormat::Csv => json_csv::export_csv(&export_rows, path),
        ReportFormat::Json => json_csv::export_json(&export_rows, path),
        ReportFormat::Pdf => pdf::export_pdf(&export_rows, path),
    }
}
