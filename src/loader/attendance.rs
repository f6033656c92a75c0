//! Attendance log loading.

use std::path::Path;

use csv::StringRecord;
use tracing::{info, warn};

use super::{LoadReport, SkippedRecord, cell, parse_date, parse_rows, parse_time, read_file};
use crate::error::EngineResult;
use crate::models::{AbsenceCategory, AttendanceLog, AttendanceRecord};

/// Minimum number of columns in the attendance file.
///
/// employee id, last name, first name, date, log in, log out, followed by an
/// optional absence type.
pub const ATTENDANCE_MIN_COLUMNS: usize = 6;

const ABSENCE_COLUMN: usize = 6;

fn parse_attendance_row(record: &StringRecord) -> Result<AttendanceRecord, String> {
    if record.len() < ATTENDANCE_MIN_COLUMNS || record.len() > ABSENCE_COLUMN + 1 {
        return Err(format!(
            "expected {} or {} columns, found {}",
            ATTENDANCE_MIN_COLUMNS,
            ABSENCE_COLUMN + 1,
            record.len()
        ));
    }

    let employee_id = cell(record, 0)
        .ok_or_else(|| "employee id is missing".to_string())?
        .to_string();
    let date = parse_date(cell(record, 3).ok_or_else(|| "date is missing".to_string())?)?;
    let time_in = cell(record, 4)
        .map(parse_time)
        .transpose()
        .map_err(|e| format!("log in: {}", e))?;
    let time_out = cell(record, 5)
        .map(parse_time)
        .transpose()
        .map_err(|e| format!("log out: {}", e))?;

    let absence = match cell(record, ABSENCE_COLUMN) {
        None => None,
        Some(label) => Some(
            AbsenceCategory::from_label(label)
                .ok_or_else(|| format!("unknown absence type '{}'", label))?,
        ),
    };

    Ok(AttendanceRecord {
        employee_id,
        date,
        time_in,
        time_out,
        absence,
    })
}

/// Parses attendance CSV content.
///
/// A second record for the same employee and date is skipped; the first
/// occurrence wins.
///
/// # Examples
///
/// ```
/// use payroll_engine::loader::parse_attendance;
/// use payroll_engine::models::AbsenceCategory;
/// use chrono::NaiveDate;
///
/// let content = "\
/// Employee #,Last Name,First Name,Date,Log In,Log Out,Absence Type
/// 10001,Garcia,Manuel III,06/03/2024,8:59,18:31,
/// 10001,Garcia,Manuel III,06/04/2024,,,Sick Leave
/// ";
///
/// let report = parse_attendance(content, "attendance.csv").unwrap();
/// let records = report.loaded.records_for("10001");
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[1].absence, Some(AbsenceCategory::SickLeave));
/// ```
pub fn parse_attendance(content: &str, source: &str) -> EngineResult<LoadReport<AttendanceLog>> {
    let (records, mut skipped) = parse_rows(content, source, parse_attendance_row)?;

    let mut log = AttendanceLog::new();
    for (line, record) in records {
        if let Err(duplicate) = log.insert(record) {
            let reason = format!(
                "duplicate attendance for employee '{}' on {}",
                duplicate.employee_id, duplicate.date
            );
            warn!(source, line, reason = %reason, "Skipping CSV row");
            skipped.push(SkippedRecord { line, reason });
        }
    }
    skipped.sort_by_key(|record| record.line);

    info!(
        source,
        loaded = log.len(),
        skipped = skipped.len(),
        "Attendance data loaded"
    );

    Ok(LoadReport {
        loaded: log,
        skipped,
    })
}

/// Loads an attendance log from a CSV file.
///
/// # Errors
///
/// Returns [`EngineError::CsvReadError`](crate::error::EngineError::CsvReadError)
/// if the file cannot be read.
pub fn load_attendance<P: AsRef<Path>>(path: P) -> EngineResult<LoadReport<AttendanceLog>> {
    let path = path.as_ref();
    let content = read_file(path)?;
    parse_attendance(&content, &path.display().to_string())
}
