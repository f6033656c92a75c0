//! Payroll result models.
//!
//! This module contains the [`PayrollResult`] type and its associated
//! structures that capture every output of one semi-monthly run: earnings,
//! attendance deductions, statutory deductions, net pay and warnings.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AttendanceSummary, HolidayType, PayPeriod};

/// How much attention a warning needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningSeverity {
    /// Informational only.
    Low,
    /// A value was clamped or a component was zeroed.
    Medium,
    /// The result is probably wrong without manual review.
    High,
}

/// A warning generated during calculation.
///
/// Warnings indicate input problems that were recovered locally (a value
/// clamped to zero, a day with no clock entries) and name the input that
/// caused the recovery.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{CalculationWarning, WarningSeverity};
///
/// let warning = CalculationWarning::new(
///     "MISSING_TIME_ENTRY",
///     "No time-out recorded on 2024-06-03",
///     WarningSeverity::Medium,
/// );
/// assert_eq!(warning.code, "MISSING_TIME_ENTRY");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level.
    pub severity: WarningSeverity,
}

impl CalculationWarning {
    /// Creates a new warning.
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        severity: WarningSeverity,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            severity,
        }
    }
}

/// Statutory deductions withheld on one run.
///
/// # Example
///
/// ```
/// use payroll_engine::models::DeductionResult;
/// use rust_decimal::Decimal;
///
/// let deductions = DeductionResult::new(
///     Decimal::new(112500, 2),
///     Decimal::new(90000, 2),
///     Decimal::new(10000, 2),
///     Decimal::ZERO,
/// );
/// assert_eq!(deductions.total_deductions, Decimal::new(212500, 2));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionResult {
    /// Social Security System employee share.
    pub sss_deduction: Decimal,
    /// PhilHealth employee share.
    pub philhealth_deduction: Decimal,
    /// Pag-IBIG employee share.
    pub pagibig_deduction: Decimal,
    /// Withholding tax.
    pub withholding_tax: Decimal,
    /// Sum of the four fields above.
    pub total_deductions: Decimal,
}

impl DeductionResult {
    /// Builds a result, computing the total from the four components.
    pub fn new(sss: Decimal, philhealth: Decimal, pagibig: Decimal, tax: Decimal) -> Self {
        Self {
            sss_deduction: sss,
            philhealth_deduction: philhealth,
            pagibig_deduction: pagibig,
            withholding_tax: tax,
            total_deductions: sss + philhealth + pagibig + tax,
        }
    }
}

/// Holiday pay earned on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayPayLine {
    /// The holiday date.
    pub date: NaiveDate,
    /// The holiday name.
    pub name: String,
    /// Regular or special non-working.
    pub holiday_type: HolidayType,
    /// Hours worked on the holiday.
    pub hours_worked: Decimal,
    /// Overtime hours worked on the holiday.
    pub overtime_hours: Decimal,
    /// Whether the holiday fell on the rest day.
    pub is_rest_day: bool,
    /// Holiday pay for the date.
    pub amount: Decimal,
}

/// Earnings and attendance deductions that make up gross pay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayBreakdown {
    /// Pay for hours worked on non-holiday days.
    pub regular_pay: Decimal,
    /// Overtime premium pay on non-holiday days.
    pub overtime_pay: Decimal,
    /// Pay earned on holidays.
    pub holiday_pay: Decimal,
    /// Per-date holiday pay lines.
    pub holiday_lines: Vec<HolidayPayLine>,
    /// Deduction for late minutes.
    pub late_deduction: Decimal,
    /// Deduction for undertime minutes.
    pub undertime_deduction: Decimal,
    /// Deduction for unpaid absence days.
    pub absence_deduction: Decimal,
    /// Earnings less attendance deductions.
    pub gross_pay: Decimal,
}

/// The rates an employee was paid at on this run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayRates {
    /// Hourly rate.
    pub hourly_rate: Decimal,
    /// Daily rate.
    pub daily_rate: Decimal,
    /// Per-minute rate used for late and undertime deductions.
    pub per_minute_rate: Decimal,
}

/// The complete result of one semi-monthly payroll run for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The employee the run is for.
    pub employee_id: String,
    /// The employee's display name.
    pub employee_name: String,
    /// The employee's position.
    pub position: String,
    /// The pay period of the run.
    pub pay_period: PayPeriod,
    /// Rates used.
    pub rates: PayRates,
    /// Attendance totals the run was computed from.
    pub attendance: AttendanceSummary,
    /// Earnings, attendance deductions and gross pay.
    pub breakdown: PayBreakdown,
    /// Statutory deductions.
    pub deductions: DeductionResult,
    /// Gross pay less statutory deductions.
    pub net_pay: Decimal,
    /// Non-taxable allowances for this run (half the monthly allowances).
    pub allowances: Decimal,
    /// Net pay plus allowances.
    pub take_home_pay: Decimal,
    /// Warnings raised while computing the run.
    pub warnings: Vec<CalculationWarning>,
}

impl PayrollResult {
    /// Shortcut for the gross pay of the run.
    pub fn gross_pay(&self) -> Decimal {
        self.breakdown.gross_pay
    }
}
