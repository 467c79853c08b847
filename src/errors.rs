//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    // ---------------------------
    // Record lifecycle errors
    // ---------------------------
    #[error("No employee linked with your user account.")]
    Identity,

    #[error("Employee '{0}' not found")]
    EmployeeNotFound(String),

    #[error("Lunch type '{0}' not found. Please create it in configuration.")]
    LunchTypeNotFound(String),

    #[error("No lunch record found for {employee} on {date}")]
    RecordNotFound { employee: String, date: String },

    #[error(
        "Lunch record already exists for {employee} on {date} ({day}). Only one record per day is allowed."
    )]
    Duplicate {
        employee: String,
        date: String,
        day: String,
    },

    #[error("Saturday is a holiday. No lunch record allowed.")]
    Holiday,

    #[error("{0}")]
    InvalidState(String),

    #[error("{0}")]
    Authorization(String),

    #[error(
        "You cannot confirm lunch now. Confirmation is only allowed between {start} and {end}. Current time: {current}"
    )]
    OutOfWindow {
        start: String,
        end: String,
        current: String,
    },

    #[error("Lunch timing is not configured. Please contact admin.")]
    TimingNotConfigured,

    #[error("This record is already cancelled.")]
    AlreadyCancelled,

    #[error("You cannot edit a confirmed or requested lunch record.")]
    ImmutableState,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Import / export errors
    // ---------------------------
    #[error("Import error: {0}")]
    Import(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
