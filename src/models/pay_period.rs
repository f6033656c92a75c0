//! Pay period model.
//!
//! This module contains the [`PeriodType`] and [`PayPeriod`] types that
//! define the semi-monthly calculation window. The calendar arithmetic that
//! derives the window lives in [`crate::calculation`].

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::{get_cutoff_date_range, get_payroll_date};
use crate::error::{EngineError, EngineResult};

/// Which of the two semi-monthly runs a pay period belongs to.
///
/// Contributions are withheld on the mid-month run and income tax on the
/// end-month run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodType {
    /// Paid on the 15th; covers the 27th of the prior month to the 12th.
    MidMonth,
    /// Paid on the last day of the month; covers the 13th to the 26th.
    EndMonth,
}

impl std::fmt::Display for PeriodType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PeriodType::MidMonth => write!(f, "Mid-Month"),
            PeriodType::EndMonth => write!(f, "End-Month"),
        }
    }
}

impl FromStr for PeriodType {
    type Err = EngineError;

    /// Parses `mid_month`/`mid`/`1` and `end_month`/`end`/`2`.
    ///
    /// ```
    /// use payroll_engine::models::PeriodType;
    ///
    /// assert_eq!("mid".parse::<PeriodType>().unwrap(), PeriodType::MidMonth);
    /// assert_eq!("End-Month".parse::<PeriodType>().unwrap(), PeriodType::EndMonth);
    /// assert!("3".parse::<PeriodType>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "mid_month" | "mid" | "1" => Ok(PeriodType::MidMonth),
            "end_month" | "end" | "2" => Ok(PeriodType::EndMonth),
            _ => Err(EngineError::InvalidPayPeriod {
                message: format!("unknown period type '{}'", s),
            }),
        }
    }
}

/// A semi-monthly pay period with its cutoff window and payroll date.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{PayPeriod, PeriodType};
/// use chrono::NaiveDate;
///
/// let period = PayPeriod::new(2024, 1, PeriodType::MidMonth).unwrap();
/// assert_eq!(period.start_date, NaiveDate::from_ymd_opt(2023, 12, 27).unwrap());
/// assert_eq!(period.end_date, NaiveDate::from_ymd_opt(2024, 1, 12).unwrap());
/// assert_eq!(period.payroll_date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// Payroll year.
    pub year: i32,
    /// Payroll month (1-12).
    pub month: u32,
    /// Mid-month or end-month run.
    pub period_type: PeriodType,
    /// First attendance date counted (inclusive).
    pub start_date: NaiveDate,
    /// Last attendance date counted (inclusive).
    pub end_date: NaiveDate,
    /// The date the run is paid out.
    pub payroll_date: NaiveDate,
}

impl PayPeriod {
    /// Builds the pay period for a year, month and run.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPayPeriod`] if the month is outside
    /// 1..=12 or the year is outside chrono's supported range.
    pub fn new(year: i32, month: u32, period_type: PeriodType) -> EngineResult<Self> {
        let payroll_date = get_payroll_date(year, month, period_type)?;
        let (start_date, end_date) = get_cutoff_date_range(payroll_date, period_type)?;

        Ok(Self {
            year,
            month,
            period_type,
            start_date,
            end_date,
            payroll_date,
        })
    }

    /// Checks if a given date falls within the cutoff window (inclusive).
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Iterates over every date of the cutoff window in order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start_date
            .iter_days()
            .take_while(move |date| *date <= self.end_date)
    }

    /// Number of calendar days in the cutoff window.
    pub fn length_in_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_contains_date_is_inclusive() {
        let period = PayPeriod::new(2024, 6, PeriodType::EndMonth).unwrap();
        assert!(period.contains_date(make_date(2024, 6, 13)));
        assert!(period.contains_date(make_date(2024, 6, 20)));
        assert!(period.contains_date(make_date(2024, 6, 26)));
        assert!(!period.contains_date(make_date(2024, 6, 12)));
        assert!(!period.contains_date(make_date(2024, 6, 27)));
    }

    #[test]
    fn test_dates_cover_window() {
        let period = PayPeriod::new(2024, 6, PeriodType::EndMonth).unwrap();
        let dates: Vec<NaiveDate> = period.dates().collect();
        assert_eq!(dates.len(), 14);
        assert_eq!(dates.first().copied(), Some(make_date(2024, 6, 13)));
        assert_eq!(dates.last().copied(), Some(make_date(2024, 6, 26)));
        assert_eq!(period.length_in_days(), 14);
    }

    #[test]
    fn test_mid_month_window_spans_month_boundary() {
        let period = PayPeriod::new(2024, 3, PeriodType::MidMonth).unwrap();
        assert_eq!(period.start_date, make_date(2024, 2, 27));
        assert_eq!(period.end_date, make_date(2024, 3, 12));
        // 2024 is a leap year: Feb 27, 28, 29 + Mar 1..=12
        assert_eq!(period.length_in_days(), 15);
    }

    #[test]
    fn test_invalid_month_is_rejected() {
        let result = PayPeriod::new(2024, 13, PeriodType::MidMonth);
        assert!(matches!(
            result,
            Err(EngineError::InvalidPayPeriod { .. })
        ));
    }

    #[test]
    fn test_period_type_parsing() {
        assert_eq!("1".parse::<PeriodType>().unwrap(), PeriodType::MidMonth);
        assert_eq!("2".parse::<PeriodType>().unwrap(), PeriodType::EndMonth);
        assert_eq!(
            "mid_month".parse::<PeriodType>().unwrap(),
            PeriodType::MidMonth
        );
        assert_eq!(
            " END MONTH ".parse::<PeriodType>().unwrap(),
            PeriodType::EndMonth
        );
        match "quarterly".parse::<PeriodType>() {
            Err(EngineError::InvalidPayPeriod { message }) => {
                assert!(message.contains("quarterly"));
            }
            other => panic!("Expected InvalidPayPeriod, got {:?}", other),
        }
    }

    #[test]
    fn test_period_type_serialization() {
        assert_eq!(
            serde_json::to_string(&PeriodType::MidMonth).unwrap(),
            "\"mid_month\""
        );
        assert_eq!(
            serde_json::to_string(&PeriodType::EndMonth).unwrap(),
            "\"end_month\""
        );
    }

    #[test]
    fn test_serialize_pay_period() {
        let period = PayPeriod::new(2024, 6, PeriodType::MidMonth).unwrap();
        let json = serde_json::to_string(&period).unwrap();
        assert!(json.contains("\"start_date\":\"2024-05-27\""));
        assert!(json.contains("\"end_date\":\"2024-06-12\""));
        assert!(json.contains("\"payroll_date\":\"2024-06-15\""));
        assert!(json.contains("\"period_type\":\"mid_month\""));
    }
}
