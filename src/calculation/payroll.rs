//! Payroll processing for one employee and one semi-monthly run.
//!
//! This module combines the attendance summary, per-day holiday pay and the
//! statutory deductions into a [`PayrollResult`].

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use super::deductions::calculate_deductions;
use super::holiday_calendar::HolidayCalendar;
use super::holiday_pay::calculate_holiday_pay;
use super::round_money;
use crate::config::StatutoryTables;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceSummary, CalculationWarning, DailyWorkHours, Employee, HolidayPayLine, PayBreakdown,
    PayPeriod, PayRates, PayrollResult, WarningSeverity,
};

/// Multiplier for overtime worked on an ordinary day.
pub const REGULAR_OVERTIME_RATE: Decimal = Decimal::from_parts(125, 0, 0, false, 2);

/// Warning code for a run whose deductions exceed its earnings.
pub const NEGATIVE_GROSS: &str = "NEGATIVE_GROSS";

const SEMI_MONTHLY_DIVISOR: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

fn validate(
    employee: &Employee,
    summary: &AttendanceSummary,
    days: &[DailyWorkHours],
    pay_period: &PayPeriod,
) -> EngineResult<()> {
    if employee.basic_salary <= Decimal::ZERO {
        return Err(EngineError::InvalidEmployee {
            field: "basic_salary".to_string(),
            message: format!(
                "basic salary must be positive for employee {}, got {}",
                employee.id, employee.basic_salary
            ),
        });
    }

    let hour_fields = [
        ("total_hours", summary.total_hours),
        ("regular_hours", summary.regular_hours),
        ("holiday_hours", summary.holiday_hours),
        ("overtime_hours", summary.overtime_hours),
        ("regular_overtime_hours", summary.regular_overtime_hours),
    ];
    if let Some((field, value)) = hour_fields.iter().find(|(_, value)| *value < Decimal::ZERO) {
        return Err(EngineError::InvalidInput {
            field: field.to_string(),
            message: format!("must be non-negative, got {}", value),
        });
    }

    if let Some(day) = days.iter().find(|day| !pay_period.contains_date(day.date)) {
        return Err(EngineError::InvalidInput {
            field: "date".to_string(),
            message: format!(
                "{} is outside the pay period {} to {}",
                day.date, pay_period.start_date, pay_period.end_date
            ),
        });
    }

    Ok(())
}

/// Processes payroll for one employee and one pay period.
///
/// # Arguments
///
/// * `employee` - The employee being paid
/// * `summary` - The attendance summary folded from `days`
/// * `days` - Per-day breakdowns inside the pay period
/// * `pay_period` - The semi-monthly run
/// * `calendar` - Holidays used for holiday pay
/// * `tables` - Statutory contribution and tax tables
///
/// # Returns
///
/// A [`PayrollResult`] with the pay breakdown, deductions and net pay, or an
/// error if:
/// - The employee's basic salary is not positive (`InvalidEmployee`)
/// - The summary carries negative hours (`InvalidInput`)
/// - A day lies outside the pay period (`InvalidInput`)
///
/// Each pay component is rounded to centavos and gross and net are summed
/// from the rounded components.
pub fn process_payroll(
    employee: &Employee,
    summary: &AttendanceSummary,
    days: &[DailyWorkHours],
    pay_period: &PayPeriod,
    calendar: &HolidayCalendar,
    tables: &StatutoryTables,
) -> EngineResult<PayrollResult> {
    validate(employee, summary, days, pay_period)?;

    let rates = employee.pay_rates();
    let PayRates {
        hourly_rate,
        daily_rate,
        per_minute_rate,
    } = rates.clone();

    let mut warnings: Vec<CalculationWarning> = days
        .iter()
        .flat_map(|day| day.warnings.iter().cloned())
        .collect();

    let regular_pay = round_money(hourly_rate * summary.regular_hours);
    let overtime_pay =
        round_money(summary.regular_overtime_hours * hourly_rate * REGULAR_OVERTIME_RATE);

    let mut holiday_lines = Vec::new();
    for day in days {
        let result = calculate_holiday_pay(
            calendar,
            day.date,
            &rates,
            day.hours_worked,
            day.is_rest_day,
            day.is_late,
            day.overtime_hours,
        );
        warnings.extend(result.warnings);

        if let (Some(holiday_type), Some(name)) = (result.holiday_type, result.holiday_name) {
            holiday_lines.push(HolidayPayLine {
                date: day.date,
                name,
                holiday_type,
                hours_worked: day.hours_worked,
                overtime_hours: day.overtime_hours,
                is_rest_day: day.is_rest_day,
                amount: round_money(result.amount),
            });
        }
    }
    let holiday_pay: Decimal = holiday_lines.iter().map(|line| line.amount).sum();

    let late_deduction = round_money(Decimal::from(summary.late_minutes) * per_minute_rate);
    let undertime_deduction =
        round_money(Decimal::from(summary.undertime_minutes) * per_minute_rate);
    let absence_deduction = round_money(daily_rate * Decimal::from(summary.unpaid_absence_days));

    let gross_pay = regular_pay + overtime_pay + holiday_pay
        - late_deduction
        - undertime_deduction
        - absence_deduction;

    if gross_pay < Decimal::ZERO {
        warn!(
            employee_id = %employee.id,
            gross_pay = %gross_pay,
            "Gross pay is negative"
        );
        warnings.push(CalculationWarning::new(
            NEGATIVE_GROSS,
            format!(
                "Deductions for lateness, undertime and absences exceed earnings; gross pay is {}",
                gross_pay
            ),
            WarningSeverity::High,
        ));
    }

    let deductions = calculate_deductions(
        tables,
        gross_pay,
        pay_period.period_type,
        employee.basic_salary,
    );
    let net_pay = gross_pay - deductions.total_deductions;
    let allowances = round_money(employee.monthly_allowances() / SEMI_MONTHLY_DIVISOR);
    let take_home_pay = net_pay + allowances;

    info!(
        employee_id = %employee.id,
        period = %pay_period.period_type,
        payroll_date = %pay_period.payroll_date,
        gross_pay = %gross_pay,
        net_pay = %net_pay,
        "Payroll processed"
    );

    Ok(PayrollResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        employee_id: employee.id.clone(),
        employee_name: employee.full_name(),
        position: employee.position.clone(),
        pay_period: pay_period.clone(),
        rates: PayRates {
            hourly_rate: hourly_rate.round_dp(4),
            daily_rate: daily_rate.round_dp(4),
            per_minute_rate: per_minute_rate.round_dp(4),
        },
        attendance: summary.clone(),
        breakdown: PayBreakdown {
            regular_pay,
            overtime_pay,
            holiday_pay,
            holiday_lines,
            late_deduction,
            undertime_deduction,
            absence_deduction,
            gross_pay,
        },
        deductions,
        net_pay,
        allowances,
        take_home_pay,
        warnings,
    })
}
