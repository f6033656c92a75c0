//! Core data models for the Payroll Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod directory;
mod employee;
mod holiday;
mod pay_period;
mod payroll_result;
mod timesheet;

pub use attendance::{AbsenceCategory, AttendanceRecord};
pub use directory::{AttendanceLog, EmployeeDirectory};
pub use employee::{
    Employee, EmploymentStatus, GovernmentIds, STANDARD_HOURS_PER_DAY, WORKING_DAYS_PER_MONTH,
};
pub use holiday::{Holiday, HolidayType};
pub use pay_period::{PayPeriod, PeriodType};
pub use payroll_result::{
    CalculationWarning, DeductionResult, HolidayPayLine, PayBreakdown, PayRates, PayrollResult,
    WarningSeverity,
};
pub use timesheet::{AttendanceReport, AttendanceSummary, DailyWorkHours};
