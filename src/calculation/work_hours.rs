//! Daily work hours calculation.
//!
//! This module turns a raw time-in/time-out pair into hours worked, overtime,
//! late minutes and undertime minutes under the standard 08:00 to 17:00
//! workday with a fixed one-hour lunch and a ten-minute grace period.

use chrono::{Datelike, NaiveTime, Timelike, Weekday};
use rust_decimal::Decimal;
use tracing::warn;

use crate::models::{AttendanceRecord, CalculationWarning, DailyWorkHours, WarningSeverity};

/// Official start of the workday, in seconds from midnight (08:00).
pub const WORK_START_SECONDS: u32 = 8 * 3600;

/// Last arrival that is not late, in seconds from midnight (08:10).
pub const GRACE_PERIOD_END_SECONDS: u32 = WORK_START_SECONDS + 10 * 60;

/// Official end of the workday, in seconds from midnight (17:00).
pub const WORK_END_SECONDS: u32 = 17 * 3600;

/// Unpaid lunch break deducted from every worked day, in minutes.
pub const LUNCH_BREAK_MINUTES: u32 = 60;

/// Maximum regular hours credited for one day.
pub const STANDARD_DAILY_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// The day of the week treated as the rest day.
pub const REST_DAY: Weekday = Weekday::Sun;

/// Warning code for a record with a missing time-in or time-out.
pub const MISSING_TIME_ENTRY: &str = "MISSING_TIME_ENTRY";

/// Warning code for a record whose time-out is before its time-in.
pub const NEGATIVE_DURATION: &str = "NEGATIVE_DURATION";

const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

fn seconds_of(time: NaiveTime) -> u32 {
    time.num_seconds_from_midnight()
}

/// Whole minutes between two instants, zero when `to` is not after `from`.
fn minutes_between(from: u32, to: u32) -> u32 {
    to.saturating_sub(from) / 60
}

fn minutes_to_hours(minutes: u32) -> Decimal {
    Decimal::from(minutes) / MINUTES_PER_HOUR
}

/// Returns true if an arrival is after the 08:10 grace period.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::is_late;
/// use chrono::NaiveTime;
///
/// assert!(!is_late(NaiveTime::from_hms_opt(8, 10, 0).unwrap()));
/// assert!(is_late(NaiveTime::from_hms_opt(8, 11, 0).unwrap()));
/// ```
pub fn is_late(time_in: NaiveTime) -> bool {
    seconds_of(time_in) > GRACE_PERIOD_END_SECONDS
}

/// Calculates the regular hours worked for a day.
///
/// On a late day the span runs from the actual arrival to the earlier of
/// time-out and 17:00. Otherwise the day is credited from 08:00 and capped at
/// eight hours. The lunch hour is always deducted and the result never goes
/// below zero.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_hours_worked;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let time_in = NaiveTime::from_hms_opt(8, 5, 0).unwrap();
/// let time_out = NaiveTime::from_hms_opt(19, 0, 0).unwrap();
/// assert_eq!(calculate_hours_worked(time_in, time_out, false), Decimal::from(8));
///
/// let late_in = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
/// assert_eq!(calculate_hours_worked(late_in, time_out, true), Decimal::from(7));
/// ```
pub fn calculate_hours_worked(time_in: NaiveTime, time_out: NaiveTime, is_late: bool) -> Decimal {
    let out = seconds_of(time_out);
    if out < seconds_of(time_in) {
        return Decimal::ZERO;
    }

    if is_late {
        let span = minutes_between(seconds_of(time_in), out.min(WORK_END_SECONDS));
        minutes_to_hours(span.saturating_sub(LUNCH_BREAK_MINUTES))
    } else {
        let span = minutes_between(WORK_START_SECONDS, out);
        minutes_to_hours(span.saturating_sub(LUNCH_BREAK_MINUTES)).min(STANDARD_DAILY_HOURS)
    }
}

/// Calculates overtime hours past 17:00.
///
/// A late arrival forfeits overtime for the whole day.
///
/// ```
/// use payroll_engine::calculation::calculate_overtime_hours;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let time_out = NaiveTime::from_hms_opt(19, 30, 0).unwrap();
/// assert_eq!(calculate_overtime_hours(time_out, false), Decimal::new(25, 1));
/// assert_eq!(calculate_overtime_hours(time_out, true), Decimal::ZERO);
/// ```
pub fn calculate_overtime_hours(time_out: NaiveTime, is_late: bool) -> Decimal {
    if is_late {
        return Decimal::ZERO;
    }
    minutes_to_hours(minutes_between(WORK_END_SECONDS, seconds_of(time_out)))
}

/// Minutes between 08:00 and a late arrival; zero inside the grace period.
pub fn calculate_late_minutes(time_in: NaiveTime) -> u32 {
    if !is_late(time_in) {
        return 0;
    }
    minutes_between(WORK_START_SECONDS, seconds_of(time_in))
}

/// Minutes between an early time-out and 17:00.
pub fn calculate_undertime_minutes(time_out: NaiveTime) -> u32 {
    minutes_between(seconds_of(time_out), WORK_END_SECONDS)
}

/// Builds the per-day breakdown for one attendance record.
///
/// Records without both time entries produce zero hours. When such a record
/// carries no absence category a `MISSING_TIME_ENTRY` warning is attached.
/// A time-out before the time-in produces zero hours and a
/// `NEGATIVE_DURATION` warning.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_daily_work_hours;
/// use payroll_engine::models::AttendanceRecord;
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let record = AttendanceRecord {
///     employee_id: "10001".to_string(),
///     date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
///     time_in: NaiveTime::from_hms_opt(8, 30, 0),
///     time_out: NaiveTime::from_hms_opt(16, 30, 0),
///     absence: None,
/// };
///
/// let day = calculate_daily_work_hours(&record);
/// assert!(day.is_late);
/// assert_eq!(day.late_minutes, 30);
/// assert_eq!(day.undertime_minutes, 30);
/// assert_eq!(day.hours_worked, Decimal::from(7));
/// ```
pub fn calculate_daily_work_hours(record: &AttendanceRecord) -> DailyWorkHours {
    let mut day = DailyWorkHours {
        date: record.date,
        hours_worked: Decimal::ZERO,
        overtime_hours: Decimal::ZERO,
        late_minutes: 0,
        undertime_minutes: 0,
        is_late: false,
        is_rest_day: record.date.weekday() == REST_DAY,
        absence: record.absence,
        warnings: Vec::new(),
    };

    let (time_in, time_out) = match (record.time_in, record.time_out) {
        (Some(time_in), Some(time_out)) => (time_in, time_out),
        _ => {
            if record.absence.is_none() {
                warn!(
                    employee_id = %record.employee_id,
                    date = %record.date,
                    "Attendance record is missing a time entry"
                );
                day.warnings.push(CalculationWarning::new(
                    MISSING_TIME_ENTRY,
                    format!("Missing time-in or time-out on {}", record.date),
                    WarningSeverity::Medium,
                ));
            }
            return day;
        }
    };

    if time_out < time_in {
        warn!(
            employee_id = %record.employee_id,
            date = %record.date,
            time_in = %time_in,
            time_out = %time_out,
            "Time-out is before time-in"
        );
        day.warnings.push(CalculationWarning::new(
            NEGATIVE_DURATION,
            format!(
                "Time-out {} is before time-in {} on {}; hours set to 0",
                time_out, time_in, record.date
            ),
            WarningSeverity::High,
        ));
        return day;
    }

    let late = is_late(time_in);
    day.is_late = late;
    day.hours_worked = calculate_hours_worked(time_in, time_out, late);
    day.overtime_hours = calculate_overtime_hours(time_out, late);
    day.late_minutes = calculate_late_minutes(time_in);
    day.undertime_minutes = calculate_undertime_minutes(time_out);
    day
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AbsenceCategory;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_time(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M").unwrap()
    }

    fn create_record(date: NaiveDate, time_in: Option<&str>, time_out: Option<&str>) -> AttendanceRecord {
        AttendanceRecord {
            employee_id: "10001".to_string(),
            date,
            time_in: time_in.map(make_time),
            time_out: time_out.map(make_time),
            absence: None,
        }
    }

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
    }

    // ==========================================================================
    // Grace period
    // ==========================================================================

    #[test]
    fn test_arrival_at_grace_boundary_is_not_late() {
        assert!(!is_late(make_time("07:45")));
        assert!(!is_late(make_time("08:00")));
        assert!(!is_late(make_time("08:10")));
        assert!(is_late(make_time("08:11")));
        assert!(is_late(NaiveTime::from_hms_opt(8, 10, 1).unwrap()));
    }

    #[test]
    fn test_late_minutes_counted_from_eight() {
        assert_eq!(calculate_late_minutes(make_time("08:10")), 0);
        assert_eq!(calculate_late_minutes(make_time("08:11")), 11);
        assert_eq!(calculate_late_minutes(make_time("09:30")), 90);
    }

    // ==========================================================================
    // Hours worked
    // ==========================================================================

    #[test]
    fn test_full_day_is_eight_hours() {
        let hours = calculate_hours_worked(make_time("08:00"), make_time("17:00"), false);
        assert_eq!(hours, dec("8"));
    }

    #[test]
    fn test_early_and_grace_arrivals_credit_from_eight() {
        for time_in in ["07:30", "08:00", "08:09", "08:10"] {
            let hours = calculate_hours_worked(make_time(time_in), make_time("17:00"), false);
            assert_eq!(hours, dec("8"), "time_in {}", time_in);
        }
    }

    #[test]
    fn test_regular_hours_capped_at_eight() {
        let hours = calculate_hours_worked(make_time("08:00"), make_time("21:00"), false);
        assert_eq!(hours, dec("8"));
    }

    #[test]
    fn test_early_leave_reduces_hours() {
        let hours = calculate_hours_worked(make_time("08:00"), make_time("15:30"), false);
        assert_eq!(hours, dec("6.5"));
    }

    #[test]
    fn test_late_hours_stop_at_five() {
        let hours = calculate_hours_worked(make_time("09:00"), make_time("20:00"), true);
        assert_eq!(hours, dec("7"));
    }

    #[test]
    fn test_short_span_clamps_to_zero() {
        let hours = calculate_hours_worked(make_time("08:00"), make_time("08:30"), false);
        assert_eq!(hours, Decimal::ZERO);

        let late_hours = calculate_hours_worked(make_time("16:30"), make_time("17:00"), true);
        assert_eq!(late_hours, Decimal::ZERO);
    }

    #[test]
    fn test_reversed_times_give_zero_hours() {
        let hours = calculate_hours_worked(make_time("17:00"), make_time("08:00"), false);
        assert_eq!(hours, Decimal::ZERO);
    }

    // ==========================================================================
    // Overtime and undertime
    // ==========================================================================

    #[test]
    fn test_overtime_after_five() {
        assert_eq!(calculate_overtime_hours(make_time("17:00"), false), Decimal::ZERO);
        assert_eq!(calculate_overtime_hours(make_time("19:00"), false), dec("2"));
        assert_eq!(calculate_overtime_hours(make_time("17:45"), false), dec("0.75"));
    }

    #[test]
    fn test_late_forfeits_overtime_for_every_time_out() {
        for time_out in ["16:00", "17:00", "18:00", "22:30", "23:59"] {
            assert_eq!(
                calculate_overtime_hours(make_time(time_out), true),
                Decimal::ZERO,
                "time_out {}",
                time_out
            );
        }
    }

    #[test]
    fn test_undertime_minutes() {
        assert_eq!(calculate_undertime_minutes(make_time("17:00")), 0);
        assert_eq!(calculate_undertime_minutes(make_time("18:00")), 0);
        assert_eq!(calculate_undertime_minutes(make_time("16:15")), 45);
    }

    // ==========================================================================
    // Daily breakdown
    // ==========================================================================

    #[test]
    fn test_daily_breakdown_with_overtime() {
        let record = create_record(monday(), Some("08:05"), Some("19:00"));
        let day = calculate_daily_work_hours(&record);

        assert!(!day.is_late);
        assert!(!day.is_rest_day);
        assert_eq!(day.hours_worked, dec("8"));
        assert_eq!(day.overtime_hours, dec("2"));
        assert_eq!(day.late_minutes, 0);
        assert_eq!(day.undertime_minutes, 0);
        assert!(day.warnings.is_empty());
        assert!(day.is_present());
    }

    #[test]
    fn test_daily_breakdown_late_day() {
        let record = create_record(monday(), Some("08:45"), Some("19:00"));
        let day = calculate_daily_work_hours(&record);

        assert!(day.is_late);
        assert_eq!(day.late_minutes, 45);
        assert_eq!(day.overtime_hours, Decimal::ZERO);
        assert_eq!(day.hours_worked, dec("7.25"));
    }

    #[test]
    fn test_missing_time_out_warns() {
        let record = create_record(monday(), Some("08:00"), None);
        let day = calculate_daily_work_hours(&record);

        assert_eq!(day.hours_worked, Decimal::ZERO);
        assert_eq!(day.overtime_hours, Decimal::ZERO);
        assert_eq!(day.late_minutes, 0);
        assert_eq!(day.undertime_minutes, 0);
        assert_eq!(day.warnings.len(), 1);
        assert_eq!(day.warnings[0].code, MISSING_TIME_ENTRY);
        assert!(day.warnings[0].message.contains("2024-06-03"));
        assert!(!day.is_present());
    }

    #[test]
    fn test_absence_without_times_does_not_warn() {
        let mut record = create_record(monday(), None, None);
        record.absence = Some(AbsenceCategory::SickLeave);

        let day = calculate_daily_work_hours(&record);
        assert!(day.warnings.is_empty());
        assert_eq!(day.absence, Some(AbsenceCategory::SickLeave));
        assert_eq!(day.hours_worked, Decimal::ZERO);
    }

    #[test]
    fn test_negative_duration_warns() {
        let record = create_record(monday(), Some("17:00"), Some("08:00"));
        let day = calculate_daily_work_hours(&record);

        assert_eq!(day.hours_worked, Decimal::ZERO);
        assert_eq!(day.undertime_minutes, 0);
        assert_eq!(day.warnings.len(), 1);
        assert_eq!(day.warnings[0].code, NEGATIVE_DURATION);
        assert_eq!(day.warnings[0].severity, WarningSeverity::High);
    }

    #[test]
    fn test_sunday_is_rest_day() {
        let sunday = NaiveDate::from_ymd_opt(2024, 6, 9).unwrap();
        let day = calculate_daily_work_hours(&create_record(sunday, Some("08:00"), Some("17:00")));
        assert!(day.is_rest_day);

        let saturday = NaiveDate::from_ymd_opt(2024, 6, 8).unwrap();
        let day = calculate_daily_work_hours(&create_record(saturday, Some("08:00"), Some("17:00")));
        assert!(!day.is_rest_day);
    }
}
