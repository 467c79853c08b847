//! XLSX sample template for the bulk importer: the expected header row
//! plus a few example records.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook};
use std::io;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const TEMPLATE_HEADERS: [&str; 5] = ["Employee Name", "Date", "Lunch Type", "State", "Remarks"];

const SAMPLE_ROWS: [[&str; 5]; 3] = [
    ["John Doe", "2024-12-09", "Non-Veg", "confirmed", ""],
    ["Jane Smith", "2024-12-09", "Veg", "confirmed", "Extra spicy"],
    ["John Doe", "2024-12-10", "Veg", "confirmed", ""],
];

pub fn write_template(path: &Path) -> AppResult<()> {
    info(format!("Writing import template: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name("Lunch Records")
        .map_err(to_io_app_error)?;

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    let mut col_widths: Vec<usize> = TEMPLATE_HEADERS
        .iter()
        .map(|h| UnicodeWidthStr::width(*h))
        .collect();

    for (col, header) in TEMPLATE_HEADERS.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_io_app_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    for (row_index, row) in SAMPLE_ROWS.iter().enumerate() {
        for (col, value) in row.iter().enumerate() {
            worksheet
                .write((row_index + 1) as u32, col as u16, *value)
                .map_err(to_io_app_error)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(*value));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_io_app_error)?;
    }

    let path_str = path
        .to_str()
        .ok_or_else(|| AppError::from(io::Error::other("invalid path")))?;
    workbook.save(path_str).map_err(to_io_app_error)?;

    crate::export::notify_export_success("Template", path);
    Ok(())
}

fn to_io_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::from(io::Error::other(e.to_string()))
}
