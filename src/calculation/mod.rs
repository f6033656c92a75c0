//! Calculation logic for the Payroll Engine.
//!
//! This module contains the calculation functions for a semi-monthly run:
//! daily work hours with grace period and lunch deduction, the holiday
//! calendar, holiday premium pay, statutory deductions, period aggregation,
//! payroll processing and cutoff date arithmetic.

mod attendance_summary;
mod cutoff;
mod deductions;
mod holiday_calendar;
mod holiday_pay;
mod payroll;
mod work_hours;

use rust_decimal::{Decimal, RoundingStrategy};

pub use attendance_summary::{summarize_attendance, total_hours_worked};
pub use cutoff::{
    END_MONTH_CUTOFF_END_DAY, END_MONTH_CUTOFF_START_DAY, MID_MONTH_CUTOFF_END_DAY,
    MID_MONTH_CUTOFF_START_DAY, MID_MONTH_PAYROLL_DAY, get_cutoff_date_range, get_payroll_date,
    pay_period_containing,
};
pub use deductions::{
    calculate_contribution, calculate_deductions, calculate_pagibig, calculate_philhealth,
    calculate_sss, calculate_withholding_tax,
};
pub use holiday_calendar::HolidayCalendar;
pub use holiday_pay::{
    HOLIDAY_OVERTIME_RATE, HolidayPayResult, NEGATIVE_INPUT_CLAMPED, REST_DAY_RATE,
    calculate_holiday_pay, holiday_overtime_pay,
};
pub use payroll::{NEGATIVE_GROSS, REGULAR_OVERTIME_RATE, process_payroll};
pub use work_hours::{
    GRACE_PERIOD_END_SECONDS, LUNCH_BREAK_MINUTES, MISSING_TIME_ENTRY, NEGATIVE_DURATION, REST_DAY,
    STANDARD_DAILY_HOURS, WORK_END_SECONDS, WORK_START_SECONDS, calculate_daily_work_hours,
    calculate_hours_worked, calculate_late_minutes, calculate_overtime_hours,
    calculate_undertime_minutes, is_late,
};

/// Rounds a peso amount to centavos, halves away from zero.
///
/// ```
/// use payroll_engine::calculation::round_money;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_money(Decimal::new(12345, 3)), Decimal::new(1235, 2));
/// assert_eq!(round_money(Decimal::new(-12345, 3)), Decimal::new(-1235, 2));
/// ```
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
