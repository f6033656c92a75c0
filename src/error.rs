//! Error types for the Payroll Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading inputs and
//! computing payroll. Recoverable per-field problems (negative hours,
//! missing time entries) are not errors; they are clamped and reported as
//! [`CalculationWarning`](crate::models::CalculationWarning)s instead.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Payroll Engine.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::EmployeeNotFound {
///     employee_id: "10001".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee not found: 10001");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An input CSV file could not be opened or its header could not be read.
    #[error("Failed to read CSV '{path}': {message}")]
    CsvReadError {
        /// The path (or source name) of the CSV input.
        path: String,
        /// A description of the read error.
        message: String,
    },

    /// No employee exists with the given id.
    #[error("Employee not found: {employee_id}")]
    EmployeeNotFound {
        /// The id that was looked up.
        employee_id: String,
    },

    /// The employee has no attendance records inside the requested window.
    #[error("No attendance data for employee '{employee_id}' between {start_date} and {end_date}")]
    NoAttendanceData {
        /// The employee id.
        employee_id: String,
        /// First date of the window (inclusive).
        start_date: NaiveDate,
        /// Last date of the window (inclusive).
        end_date: NaiveDate,
    },

    /// The pay period request was out of range (bad month or period type).
    #[error("Invalid pay period: {message}")]
    InvalidPayPeriod {
        /// A description of what made the request invalid.
        message: String,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A numeric or structural input to a calculation was invalid.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The input that was invalid.
        field: String,
        /// A description of what made the input invalid.
        message: String,
    },

    /// A holiday list already contains an entry for this date.
    #[error("Duplicate holiday on {date}: '{name}'")]
    DuplicateHoliday {
        /// The date that is already taken.
        date: NaiveDate,
        /// The name of the rejected holiday.
        name: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
