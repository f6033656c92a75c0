//! Period aggregation of daily work hours.

use rust_decimal::Decimal;

use super::holiday_calendar::HolidayCalendar;
use crate::models::{AttendanceSummary, DailyWorkHours};

fn absorb(summary: AttendanceSummary, day: &DailyWorkHours, is_holiday: bool) -> AttendanceSummary {
    let present = day.is_present();
    let (regular_hours, holiday_hours, regular_overtime_hours) = if is_holiday {
        (
            summary.regular_hours,
            summary.holiday_hours + day.hours_worked,
            summary.regular_overtime_hours,
        )
    } else {
        (
            summary.regular_hours + day.hours_worked,
            summary.holiday_hours,
            summary.regular_overtime_hours + day.overtime_hours,
        )
    };

    // An absence label only counts on a day with no credited time
    let absence = day.absence.filter(|_| !present);

    AttendanceSummary {
        total_hours: summary.total_hours + day.hours_worked,
        regular_hours,
        holiday_hours,
        overtime_hours: summary.overtime_hours + day.overtime_hours,
        regular_overtime_hours,
        late_minutes: summary.late_minutes + day.late_minutes,
        undertime_minutes: summary.undertime_minutes + day.undertime_minutes,
        is_late_any_day: summary.is_late_any_day || day.is_late,
        days_recorded: summary.days_recorded + 1,
        days_present: summary.days_present + u32::from(present),
        unpaid_absence_days: summary.unpaid_absence_days
            + u32::from(absence.is_some_and(|a| a.is_unpaid())),
        paid_leave_days: summary.paid_leave_days
            + u32::from(absence.is_some_and(|a| !a.is_unpaid())),
    }
}

/// Folds a period's daily breakdowns into one immutable summary.
///
/// Hours on holidays are kept apart from regular hours so they are paid
/// once, through holiday pay. `total_hours` is always the raw sum of daily
/// hours and equals `regular_hours + holiday_hours`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{calculate_daily_work_hours, summarize_attendance, HolidayCalendar};
/// use payroll_engine::models::AttendanceRecord;
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let days: Vec<_> = [3, 4]
///     .iter()
///     .map(|d| AttendanceRecord {
///         employee_id: "10001".to_string(),
///         date: NaiveDate::from_ymd_opt(2024, 6, *d).unwrap(),
///         time_in: NaiveTime::from_hms_opt(8, 0, 0),
///         time_out: NaiveTime::from_hms_opt(18, 0, 0),
///         absence: None,
///     })
///     .map(|record| calculate_daily_work_hours(&record))
///     .collect();
///
/// let summary = summarize_attendance(&days, &HolidayCalendar::default());
/// assert_eq!(summary.total_hours, Decimal::from(16));
/// assert_eq!(summary.overtime_hours, Decimal::from(2));
/// assert_eq!(summary.days_present, 2);
/// ```
pub fn summarize_attendance(days: &[DailyWorkHours], calendar: &HolidayCalendar) -> AttendanceSummary {
    days.iter().fold(AttendanceSummary::default(), |summary, day| {
        absorb(summary, day, calendar.is_holiday(day.date))
    })
}

/// Sums the hours worked across daily breakdowns.
pub fn total_hours_worked(days: &[DailyWorkHours]) -> Decimal {
    days.iter().map(|day| day.hours_worked).sum()
}
