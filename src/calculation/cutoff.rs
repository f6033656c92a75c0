//! Pay period date arithmetic.
//!
//! This module derives payroll dates and cutoff windows for the two
//! semi-monthly runs. Mid-month runs are paid on the 15th and cover the 27th
//! of the prior month through the 12th; end-month runs are paid on the last
//! day of the month and cover the 13th through the 26th.

use chrono::{Datelike, NaiveDate};

use crate::error::{EngineError, EngineResult};
use crate::models::{PayPeriod, PeriodType};

/// Day of month the mid-month run is paid.
pub const MID_MONTH_PAYROLL_DAY: u32 = 15;

/// First day of the mid-month cutoff, counted in the prior month.
pub const MID_MONTH_CUTOFF_START_DAY: u32 = 27;

/// Last day of the mid-month cutoff.
pub const MID_MONTH_CUTOFF_END_DAY: u32 = 12;

/// First day of the end-month cutoff.
pub const END_MONTH_CUTOFF_START_DAY: u32 = 13;

/// Last day of the end-month cutoff.
pub const END_MONTH_CUTOFF_END_DAY: u32 = 26;

fn make_date(year: i32, month: u32, day: u32) -> EngineResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| EngineError::InvalidPayPeriod {
        message: format!("{:04}-{:02}-{:02} is not a valid date", year, month, day),
    })
}

fn last_day_of_month(year: i32, month: u32) -> EngineResult<NaiveDate> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    make_date(next_year, next_month, 1)?
        .pred_opt()
        .ok_or_else(|| EngineError::InvalidPayPeriod {
            message: format!("no last day for {:04}-{:02}", year, month),
        })
}

/// Returns the payroll date for a year, month and run.
///
/// # Errors
///
/// Returns [`EngineError::InvalidPayPeriod`] if the month is outside 1..=12.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::get_payroll_date;
/// use payroll_engine::models::PeriodType;
/// use chrono::NaiveDate;
///
/// let mid = get_payroll_date(2024, 2, PeriodType::MidMonth).unwrap();
/// assert_eq!(mid, NaiveDate::from_ymd_opt(2024, 2, 15).unwrap());
///
/// let end = get_payroll_date(2024, 2, PeriodType::EndMonth).unwrap();
/// assert_eq!(end, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// ```
pub fn get_payroll_date(year: i32, month: u32, period_type: PeriodType) -> EngineResult<NaiveDate> {
    if !(1..=12).contains(&month) {
        return Err(EngineError::InvalidPayPeriod {
            message: format!("month {} is out of range", month),
        });
    }

    match period_type {
        PeriodType::MidMonth => make_date(year, month, MID_MONTH_PAYROLL_DAY),
        PeriodType::EndMonth => last_day_of_month(year, month),
    }
}

/// Returns the inclusive cutoff window `(start, end)` for a payroll date.
///
/// Only the payroll date's year and month are used, so any date in the
/// payroll month yields the same window.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::get_cutoff_date_range;
/// use payroll_engine::models::PeriodType;
/// use chrono::NaiveDate;
///
/// let payroll_date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// let (start, end) = get_cutoff_date_range(payroll_date, PeriodType::MidMonth).unwrap();
/// assert_eq!(start, NaiveDate::from_ymd_opt(2023, 12, 27).unwrap());
/// assert_eq!(end, NaiveDate::from_ymd_opt(2024, 1, 12).unwrap());
/// ```
pub fn get_cutoff_date_range(
    payroll_date: NaiveDate,
    period_type: PeriodType,
) -> EngineResult<(NaiveDate, NaiveDate)> {
    let year = payroll_date.year();
    let month = payroll_date.month();

    match period_type {
        PeriodType::MidMonth => {
            let (prior_year, prior_month) = if month == 1 {
                (year - 1, 12)
            } else {
                (year, month - 1)
            };
            Ok((
                make_date(prior_year, prior_month, MID_MONTH_CUTOFF_START_DAY)?,
                make_date(year, month, MID_MONTH_CUTOFF_END_DAY)?,
            ))
        }
        PeriodType::EndMonth => Ok((
            make_date(year, month, END_MONTH_CUTOFF_START_DAY)?,
            make_date(year, month, END_MONTH_CUTOFF_END_DAY)?,
        )),
    }
}

/// Returns the pay period whose cutoff window contains `date`.
///
/// Dates from the 27th onwards belong to the next month's mid-month run.
///
/// ```
/// use payroll_engine::calculation::pay_period_containing;
/// use payroll_engine::models::PeriodType;
/// use chrono::NaiveDate;
///
/// let period = pay_period_containing(NaiveDate::from_ymd_opt(2024, 12, 28).unwrap()).unwrap();
/// assert_eq!((period.year, period.month), (2025, 1));
/// assert_eq!(period.period_type, PeriodType::MidMonth);
/// ```
pub fn pay_period_containing(date: NaiveDate) -> EngineResult<PayPeriod> {
    let day = date.day();
    if day <= MID_MONTH_CUTOFF_END_DAY {
        PayPeriod::new(date.year(), date.month(), PeriodType::MidMonth)
    } else if day <= END_MONTH_CUTOFF_END_DAY {
        PayPeriod::new(date.year(), date.month(), PeriodType::EndMonth)
    } else if date.month() == 12 {
        PayPeriod::new(date.year() + 1, 1, PeriodType::MidMonth)
    } else {
        PayPeriod::new(date.year(), date.month() + 1, PeriodType::MidMonth)
    }
}
