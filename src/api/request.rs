//! Request types for the payroll API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceLog, AttendanceRecord, Employee, PeriodType};

/// Request body for the `/payroll` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// The employee to pay.
    pub employee: Employee,
    /// The employee's attendance. Records outside the cutoff window are ignored.
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
    /// Calendar year of the payroll date.
    pub year: i32,
    /// Calendar month of the payroll date (1-12).
    pub month: u32,
    /// Which semi-monthly run.
    pub period_type: PeriodType,
}

/// Request body for the `/attendance` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRequest {
    /// The employee the records belong to.
    pub employee_id: String,
    /// Attendance records to report on.
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
    /// First date of the range (inclusive).
    pub start_date: NaiveDate,
    /// Last date of the range (inclusive).
    pub end_date: NaiveDate,
}

/// Collects request records into a log for one employee.
///
/// Every record must carry `employee_id` and no date may repeat.
pub(crate) fn attendance_log(
    employee_id: &str,
    records: Vec<AttendanceRecord>,
) -> EngineResult<AttendanceLog> {
    let mut log = AttendanceLog::new();
    for record in records {
        if record.employee_id != employee_id {
            return Err(EngineError::InvalidInput {
                field: "attendance".to_string(),
                message: format!(
                    "record on {} belongs to employee '{}', expected '{}'",
                    record.date, record.employee_id, employee_id
                ),
            });
        }
        if let Err(duplicate) = log.insert(record) {
            return Err(EngineError::InvalidInput {
                field: "attendance".to_string(),
                message: format!("more than one record on {}", duplicate.date),
            });
        }
    }
    Ok(log)
}
