//! Error handling for report processing operations.
//!
//! Row-level problems (blank lines, short rows, odd tails) never reach this
//! type; they resolve to absent fields inside the pipeline. What remains are
//! the conditions that end a single day's run: a missing report, an
//! impossible date, or a failing adapter.

use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Report not found at path: {path}")]
    ReportNotFound { path: PathBuf },

    #[error("Invalid report date: {year}-{month}-{day}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("No calendar day precedes {date}")]
    NoPreviousDay { date: NaiveDate },

    #[error("Invalid timestamp '{value}': expected an HH:MM slice at position 11..16")]
    InvalidTimestamp { value: String },

    #[error("Report discovery failed in {dir}: {reason}")]
    Discovery { dir: PathBuf, reason: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

pub type Result<T> = std::result::Result<T, ReportError>;
