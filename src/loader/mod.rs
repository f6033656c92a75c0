//! CSV loading for employee master data and attendance logs.
//!
//! Rows that cannot be parsed are skipped and reported in a [`LoadReport`]
//! rather than failing the whole file. Only an unreadable file is an error.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::loader::{load_attendance, load_employees};
//!
//! let employees = load_employees("./data/employees.csv")?;
//! let attendance = load_attendance("./data/attendance.csv")?;
//! println!(
//!     "{} employees, {} attendance records, {} rows skipped",
//!     employees.loaded.len(),
//!     attendance.loaded.len(),
//!     employees.skipped.len() + attendance.skipped.len()
//! );
//! # Ok::<(), payroll_engine::error::EngineError>(())
//! ```

mod attendance;
mod employees;

use std::fs;
use std::path::Path;

use chrono::{NaiveDate, NaiveTime};
use csv::{ReaderBuilder, StringRecord, Trim};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{EngineError, EngineResult};

pub use attendance::{ATTENDANCE_MIN_COLUMNS, load_attendance, parse_attendance};
pub use employees::{EMPLOYEE_COLUMNS, load_employees, parse_employees};

/// A row that was left out of a load, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRecord {
    /// 1-based line number in the source file.
    pub line: u64,
    /// Why the row was skipped.
    pub reason: String,
}

/// The outcome of loading one CSV file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadReport<T> {
    /// Everything that loaded successfully.
    pub loaded: T,
    /// Rows that were skipped.
    pub skipped: Vec<SkippedRecord>,
}

impl<T> LoadReport<T> {
    /// Returns true if no rows were skipped.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

fn read_file(path: &Path) -> EngineResult<String> {
    fs::read_to_string(path).map_err(|e| EngineError::CsvReadError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Parses CSV content row by row, collecting good rows with their line
/// numbers and skipped rows.
fn parse_rows<T>(
    content: &str,
    source: &str,
    mut parse_row: impl FnMut(&StringRecord) -> Result<T, String>,
) -> EngineResult<(Vec<(u64, T)>, Vec<SkippedRecord>)> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(content.as_bytes());

    reader.headers().map_err(|e| EngineError::CsvReadError {
        path: source.to_string(),
        message: format!("Failed to read CSV headers: {}", e),
    })?;

    let mut rows = Vec::new();
    let mut skipped = Vec::new();

    for result in reader.records() {
        let (line, outcome) = match result {
            Ok(record) => {
                let line = record.position().map_or(0, |p| p.line());
                if record.iter().all(str::is_empty) {
                    continue;
                }
                (line, parse_row(&record))
            }
            Err(e) => (
                e.position().map_or(0, |p| p.line()),
                Err(format!("unreadable row: {}", e)),
            ),
        };

        match outcome {
            Ok(row) => rows.push((line, row)),
            Err(reason) => {
                warn!(source, line, reason = %reason, "Skipping CSV row");
                skipped.push(SkippedRecord { line, reason });
            }
        }
    }

    Ok((rows, skipped))
}

/// Returns a trimmed cell, or `None` when the cell is empty or absent.
fn cell(record: &StringRecord, index: usize) -> Option<&str> {
    record.get(index).map(str::trim).filter(|s| !s.is_empty())
}

/// Parses a peso amount such as `₱ 90,000.00`.
pub fn parse_peso(value: &str) -> Result<Decimal, String> {
    let cleaned: String = value
        .chars()
        .filter(|c| *c != '₱' && *c != ',' && !c.is_whitespace())
        .collect();
    cleaned
        .parse::<Decimal>()
        .map_err(|_| format!("invalid amount '{}'", value))
}

/// Parses a date in `MM/DD/YYYY` or `YYYY-MM-DD` form.
pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%m/%d/%Y")
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d"))
        .map_err(|_| format!("invalid date '{}'", value))
}

/// Parses a clock time in `H:MM`, `HH:MM` or `HH:MM:SS` form.
pub fn parse_time(value: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map_err(|_| format!("invalid time '{}'", value))
}
