//! Holiday premium pay calculation.
//!
//! Regular holidays pay 200% for hours worked and 100% of the daily rate when
//! not worked; work on a rest day that is also a regular holiday earns a
//! further 30%. Special non-working holidays pay 130% for hours worked and
//! nothing when not worked.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::holiday_calendar::HolidayCalendar;
use super::payroll::REGULAR_OVERTIME_RATE;
use super::work_hours::STANDARD_DAILY_HOURS;
use crate::models::{CalculationWarning, HolidayType, PayRates, WarningSeverity};

/// Multiplier applied to overtime hours worked on any holiday.
pub const HOLIDAY_OVERTIME_RATE: Decimal = Decimal::from_parts(13, 0, 0, false, 1);

/// Multiplier applied to regular holiday pay when the holiday is a rest day.
pub const REST_DAY_RATE: Decimal = Decimal::from_parts(13, 0, 0, false, 1);

/// Warning code for a negative input that was clamped to zero.
pub const NEGATIVE_INPUT_CLAMPED: &str = "NEGATIVE_INPUT_CLAMPED";

/// The result of a holiday pay calculation for one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayPayResult {
    /// The holiday's type, or `None` if the date is not a holiday.
    pub holiday_type: Option<HolidayType>,
    /// The holiday's name, if any.
    pub holiday_name: Option<String>,
    /// Pay for regular hours (or the unworked regular holiday daily rate).
    pub base_pay: Decimal,
    /// Pay for overtime hours.
    pub overtime_pay: Decimal,
    /// Extra pay for working a regular holiday on a rest day.
    pub rest_day_premium: Decimal,
    /// Total holiday pay for the date.
    pub amount: Decimal,
    /// Warnings raised while calculating.
    pub warnings: Vec<CalculationWarning>,
}

impl HolidayPayResult {
    fn none(warnings: Vec<CalculationWarning>) -> Self {
        Self {
            holiday_type: None,
            holiday_name: None,
            base_pay: Decimal::ZERO,
            overtime_pay: Decimal::ZERO,
            rest_day_premium: Decimal::ZERO,
            amount: Decimal::ZERO,
            warnings,
        }
    }
}

fn clamp_non_negative(
    field: &str,
    value: Decimal,
    date: NaiveDate,
    warnings: &mut Vec<CalculationWarning>,
) -> Decimal {
    if value >= Decimal::ZERO {
        return value;
    }
    warn!(field, value = %value, date = %date, "Negative holiday pay input clamped to 0");
    warnings.push(CalculationWarning::new(
        NEGATIVE_INPUT_CLAMPED,
        format!("{} of {} on {} was negative and treated as 0", field, value, date),
        WarningSeverity::Medium,
    ));
    Decimal::ZERO
}

/// Calculates the overtime portion of holiday pay.
///
/// Overtime on a holiday earns 130% of the hourly rate, plus the 25%
/// overtime premium unless the employee was late that day.
pub fn holiday_overtime_pay(overtime_hours: Decimal, hourly_rate: Decimal, is_late: bool) -> Decimal {
    let pay = overtime_hours * hourly_rate * HOLIDAY_OVERTIME_RATE;
    if is_late {
        pay
    } else {
        pay * REGULAR_OVERTIME_RATE
    }
}

/// Calculates holiday pay for one date.
///
/// Hours are priced at the employee's hourly rate and an unworked regular
/// holiday at the daily rate, both taken from `rates`. Regular hours are
/// capped at eight; anything beyond is paid through `overtime_hours`.
/// Negative inputs are clamped to zero with a `NEGATIVE_INPUT_CLAMPED`
/// warning.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{calculate_holiday_pay, HolidayCalendar};
/// use payroll_engine::models::{Holiday, HolidayType, PayRates};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let date = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
/// let mut calendar = HolidayCalendar::default();
/// calendar
///     .add_holiday(Holiday {
///         name: "Christmas Day".to_string(),
///         date,
///         holiday_type: HolidayType::Regular,
///     })
///     .unwrap();
///
/// let rates = PayRates {
///     hourly_rate: Decimal::from(200),
///     daily_rate: Decimal::from(1600),
///     per_minute_rate: Decimal::from(200) / Decimal::from(60),
/// };
///
/// // Not worked: 100% of the daily rate
/// let idle = calculate_holiday_pay(&calendar, date, &rates, Decimal::ZERO, false, false, Decimal::ZERO);
/// assert_eq!(idle.amount, Decimal::from(1600));
///
/// // Worked 8 hours: 200%
/// let worked = calculate_holiday_pay(&calendar, date, &rates, Decimal::from(8), false, false, Decimal::ZERO);
/// assert_eq!(worked.amount, Decimal::from(3200));
/// ```
pub fn calculate_holiday_pay(
    calendar: &HolidayCalendar,
    date: NaiveDate,
    rates: &PayRates,
    hours_worked: Decimal,
    is_rest_day: bool,
    is_late: bool,
    overtime_hours: Decimal,
) -> HolidayPayResult {
    let mut warnings = Vec::new();
    let daily_rate = clamp_non_negative("daily_rate", rates.daily_rate, date, &mut warnings);
    let hourly_rate = clamp_non_negative("hourly_rate", rates.hourly_rate, date, &mut warnings);
    let hours_worked = clamp_non_negative("hours_worked", hours_worked, date, &mut warnings);
    let overtime_hours = clamp_non_negative("overtime_hours", overtime_hours, date, &mut warnings);

    let Some(holiday) = calendar.get_holiday(date) else {
        return HolidayPayResult::none(warnings);
    };

    let regular_hours = hours_worked.min(STANDARD_DAILY_HOURS);
    let worked = hours_worked > Decimal::ZERO;

    let (base_pay, overtime_pay, rest_day_premium) = match (holiday.holiday_type, worked) {
        (HolidayType::Regular, false) => (daily_rate, Decimal::ZERO, Decimal::ZERO),
        (HolidayType::SpecialNonWorking, false) => (Decimal::ZERO, Decimal::ZERO, Decimal::ZERO),
        (HolidayType::Regular, true) => {
            let base = regular_hours * hourly_rate * HolidayType::Regular.premium_rate();
            let overtime = holiday_overtime_pay(overtime_hours, hourly_rate, is_late);
            let premium = if is_rest_day {
                (base + overtime) * (REST_DAY_RATE - Decimal::ONE)
            } else {
                Decimal::ZERO
            };
            (base, overtime, premium)
        }
        (HolidayType::SpecialNonWorking, true) => {
            let base = regular_hours * hourly_rate * HolidayType::SpecialNonWorking.premium_rate();
            let overtime = holiday_overtime_pay(overtime_hours, hourly_rate, is_late);
            (base, overtime, Decimal::ZERO)
        }
    };

    HolidayPayResult {
        holiday_type: Some(holiday.holiday_type),
        holiday_name: Some(holiday.name.clone()),
        base_pay,
        overtime_pay,
        rest_day_premium,
        amount: base_pay + overtime_pay + rest_day_premium,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Holiday;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn regular_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 12).unwrap()
    }

    fn special_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 8, 21).unwrap()
    }

    fn create_test_calendar() -> HolidayCalendar {
        let mut calendar = HolidayCalendar::default();
        calendar
            .add_holiday(Holiday {
                name: "Independence Day".to_string(),
                date: regular_date(),
                holiday_type: HolidayType::Regular,
            })
            .unwrap();
        calendar
            .add_holiday(Holiday {
                name: "Ninoy Aquino Day".to_string(),
                date: special_date(),
                holiday_type: HolidayType::SpecialNonWorking,
            })
            .unwrap();
        calendar
    }

    fn assert_close(actual: Decimal, expected: Decimal) {
        assert!(
            (actual - expected).abs() <= dec("0.01"),
            "expected {} to be within 0.01 of {}",
            actual,
            expected
        );
    }

    // Daily rate 1,636.36 (basic 36,000 / 22); hourly 204.545
    fn daily_rate() -> Decimal {
        dec("1636.36")
    }

    fn hourly_rate() -> Decimal {
        daily_rate() / dec("8")
    }

    fn rates() -> PayRates {
        PayRates {
            hourly_rate: hourly_rate(),
            daily_rate: daily_rate(),
            per_minute_rate: hourly_rate() / dec("60"),
        }
    }

    #[test]
    fn test_not_a_holiday_pays_nothing() {
        let calendar = create_test_calendar();
        let date = NaiveDate::from_ymd_opt(2024, 6, 13).unwrap();
        let result = calculate_holiday_pay(&calendar, date, &rates(), dec("8"), false, false, dec("2"));

        assert_eq!(result.amount, Decimal::ZERO);
        assert!(result.holiday_type.is_none());
        assert!(result.holiday_name.is_none());
    }

    #[test]
    fn test_regular_holiday_not_worked_pays_daily_rate_exactly() {
        let calendar = create_test_calendar();
        let result = calculate_holiday_pay(
            &calendar,
            regular_date(),
            &rates(),
            Decimal::ZERO,
            false,
            false,
            Decimal::ZERO,
        );

        assert_eq!(result.amount, daily_rate());
        assert_eq!(result.holiday_type, Some(HolidayType::Regular));
        assert_eq!(result.holiday_name.as_deref(), Some("Independence Day"));
    }

    #[test]
    fn test_regular_holiday_eight_hours_pays_double() {
        let calendar = create_test_calendar();
        let result = calculate_holiday_pay(
            &calendar,
            regular_date(),
            &rates(),
            dec("8"),
            false,
            false,
            Decimal::ZERO,
        );

        assert_close(result.amount, daily_rate() * dec("2"));
    }

    #[test]
    fn test_regular_holiday_with_overtime() {
        let calendar = create_test_calendar();
        let result = calculate_holiday_pay(
            &calendar,
            regular_date(),
            &rates(),
            dec("8"),
            false,
            false,
            dec("2"),
        );

        let expected = dec("8") * hourly_rate() * dec("2")
            + dec("2") * hourly_rate() * dec("1.3") * dec("1.25");
        assert_close(result.amount, expected);
        assert_close(result.overtime_pay, dec("2") * hourly_rate() * dec("1.625"));
    }

    #[test]
    fn test_regular_holiday_on_rest_day() {
        let calendar = create_test_calendar();
        let result = calculate_holiday_pay(
            &calendar,
            regular_date(),
            &rates(),
            dec("8"),
            true,
            false,
            Decimal::ZERO,
        );

        assert_close(result.amount, daily_rate() * dec("2") * dec("1.3"));
        assert_close(result.rest_day_premium, daily_rate() * dec("2") * dec("0.3"));
    }

    #[test]
    fn test_regular_holiday_hours_capped_at_eight() {
        let calendar = create_test_calendar();
        let result = calculate_holiday_pay(
            &calendar,
            regular_date(),
            &rates(),
            dec("11"),
            false,
            false,
            Decimal::ZERO,
        );

        assert_close(result.base_pay, daily_rate() * dec("2"));
    }

    #[test]
    fn test_special_holiday_not_worked_pays_nothing() {
        let calendar = create_test_calendar();
        let result = calculate_holiday_pay(
            &calendar,
            special_date(),
            &rates(),
            Decimal::ZERO,
            false,
            false,
            Decimal::ZERO,
        );

        assert_eq!(result.amount, Decimal::ZERO);
        assert_eq!(result.holiday_type, Some(HolidayType::SpecialNonWorking));
    }

    #[test]
    fn test_special_holiday_eight_hours() {
        let calendar = create_test_calendar();
        let result = calculate_holiday_pay(
            &calendar,
            special_date(),
            &rates(),
            dec("8"),
            false,
            false,
            Decimal::ZERO,
        );

        assert_close(result.amount, daily_rate() * dec("1.3"));
    }

    #[test]
    fn test_special_holiday_on_rest_day_does_not_stack() {
        let calendar = create_test_calendar();
        let weekday = calculate_holiday_pay(
            &calendar,
            special_date(),
            &rates(),
            dec("8"),
            false,
            false,
            Decimal::ZERO,
        );
        let rest_day = calculate_holiday_pay(
            &calendar,
            special_date(),
            &rates(),
            dec("8"),
            true,
            false,
            Decimal::ZERO,
        );

        assert_eq!(weekday.amount, rest_day.amount);
        assert_eq!(rest_day.rest_day_premium, Decimal::ZERO);
    }

    #[test]
    fn test_late_overtime_drops_overtime_premium() {
        let calendar = create_test_calendar();
        let result = calculate_holiday_pay(
            &calendar,
            regular_date(),
            &rates(),
            dec("8"),
            false,
            true,
            dec("2"),
        );

        assert_close(result.overtime_pay, dec("2") * hourly_rate() * dec("1.3"));
        assert_close(
            result.amount,
            dec("8") * hourly_rate() * dec("2") + dec("2") * hourly_rate() * dec("1.3"),
        );
    }

    #[test]
    fn test_negative_inputs_are_clamped_with_warnings() {
        let calendar = create_test_calendar();
        let result = calculate_holiday_pay(
            &calendar,
            regular_date(),
            &rates(),
            dec("-4"),
            false,
            false,
            dec("-1"),
        );

        // Clamped to zero hours: the unworked regular holiday rule applies
        assert_eq!(result.amount, daily_rate());
        assert_eq!(result.warnings.len(), 2);
        assert!(result.warnings.iter().all(|w| w.code == NEGATIVE_INPUT_CLAMPED));
        assert!(result.warnings[0].message.contains("hours_worked"));
    }

    #[test]
    fn test_negative_daily_rate_pays_zero() {
        let calendar = create_test_calendar();
        let result = calculate_holiday_pay(
            &calendar,
            regular_date(),
            &PayRates {
                daily_rate: dec("-100"),
                ..rates()
            },
            Decimal::ZERO,
            false,
            false,
            Decimal::ZERO,
        );

        assert_eq!(result.amount, Decimal::ZERO);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_worked_hours_use_stated_hourly_rate() {
        let calendar = create_test_calendar();
        // Stated hourly rate above the daily rate / 8 equivalent
        let stated = PayRates {
            hourly_rate: dec("535.71"),
            daily_rate: dec("90000") / dec("22"),
            per_minute_rate: dec("535.71") / dec("60"),
        };

        let worked = calculate_holiday_pay(
            &calendar,
            regular_date(),
            &stated,
            dec("8"),
            false,
            false,
            dec("0.2"),
        );
        assert_close(worked.base_pay, dec("8") * dec("535.71") * dec("2"));
        assert_close(worked.overtime_pay, dec("0.2") * dec("535.71") * dec("1.625"));

        let idle = calculate_holiday_pay(
            &calendar,
            regular_date(),
            &stated,
            Decimal::ZERO,
            false,
            false,
            Decimal::ZERO,
        );
        assert_eq!(idle.amount, stated.daily_rate);
    }
}
