//! Per-day work-hours breakdown and the per-period attendance summary.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AbsenceCategory, CalculationWarning};

/// Hours, overtime, lateness and undertime computed for one attendance day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyWorkHours {
    /// The attendance date.
    pub date: NaiveDate,
    /// Paid hours worked, net of lunch, capped at the standard day.
    pub hours_worked: Decimal,
    /// Hours worked after the end of the standard day.
    pub overtime_hours: Decimal,
    /// Minutes between the official start and a late time-in.
    pub late_minutes: u32,
    /// Minutes between an early time-out and the official end.
    pub undertime_minutes: u32,
    /// Whether the employee arrived after the grace cutoff.
    pub is_late: bool,
    /// Whether the date is the employee's rest day.
    pub is_rest_day: bool,
    /// Absence category carried from the attendance record.
    pub absence: Option<AbsenceCategory>,
    /// Problems found while computing this day.
    #[serde(default)]
    pub warnings: Vec<CalculationWarning>,
}

impl DailyWorkHours {
    /// Returns true if any time was credited for the day.
    pub fn is_present(&self) -> bool {
        self.hours_worked > Decimal::ZERO || self.overtime_hours > Decimal::ZERO
    }
}

/// Totals over every attendance day of a pay period.
///
/// Built in one fold by
/// [`summarize_attendance`](crate::calculation::summarize_attendance); the
/// fields are never updated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    /// Sum of hours worked over all days.
    pub total_hours: Decimal,
    /// Hours worked on days that are not holidays.
    pub regular_hours: Decimal,
    /// Hours worked on holidays.
    pub holiday_hours: Decimal,
    /// Sum of overtime hours over all days.
    pub overtime_hours: Decimal,
    /// Overtime hours on days that are not holidays.
    pub regular_overtime_hours: Decimal,
    /// Sum of late minutes.
    pub late_minutes: u32,
    /// Sum of undertime minutes.
    pub undertime_minutes: u32,
    /// Whether at least one day was late.
    pub is_late_any_day: bool,
    /// Number of attendance records in the period.
    pub days_recorded: u32,
    /// Number of days with credited time.
    pub days_present: u32,
    /// Number of unpaid or unauthorized absence days.
    pub unpaid_absence_days: u32,
    /// Number of paid leave days.
    pub paid_leave_days: u32,
}

impl AttendanceSummary {
    /// Returns true if any unpaid absence was recorded.
    pub fn has_unpaid_absences(&self) -> bool {
        self.unpaid_absence_days > 0
    }
}

/// Per-day breakdowns and their summary for one employee and date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceReport {
    /// The employee the report covers.
    pub employee_id: String,
    /// First date of the range (inclusive).
    pub start_date: NaiveDate,
    /// Last date of the range (inclusive).
    pub end_date: NaiveDate,
    /// One breakdown per attendance record, in date order.
    pub days: Vec<DailyWorkHours>,
    /// The fold of `days`.
    pub summary: AttendanceSummary,
}
