//! Holiday model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The two classes of proclaimed holidays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayType {
    /// Regular holiday: paid even when not worked, 200% when worked.
    Regular,
    /// Special non-working day: no work no pay, 130% when worked.
    SpecialNonWorking,
}

impl HolidayType {
    /// Returns the base premium multiplier for work on this holiday.
    ///
    /// ```
    /// use payroll_engine::models::HolidayType;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(HolidayType::Regular.premium_rate(), Decimal::new(2, 0));
    /// assert_eq!(HolidayType::SpecialNonWorking.premium_rate(), Decimal::new(13, 1));
    /// ```
    pub fn premium_rate(self) -> Decimal {
        match self {
            Self::Regular => Decimal::from_parts(2, 0, 0, false, 0),
            Self::SpecialNonWorking => Decimal::from_parts(13, 0, 0, false, 1),
        }
    }
}

impl std::fmt::Display for HolidayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HolidayType::Regular => write!(f, "Regular Holiday"),
            HolidayType::SpecialNonWorking => write!(f, "Special Non-Working Holiday"),
        }
    }
}

/// A proclaimed holiday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The name of the holiday (e.g., "Independence Day").
    pub name: String,
    /// The date of the holiday.
    pub date: NaiveDate,
    /// Regular or special non-working.
    #[serde(rename = "type")]
    pub holiday_type: HolidayType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_holiday() {
        let json = r#"{
            "name": "Independence Day",
            "date": "2024-06-12",
            "type": "regular"
        }"#;
        let holiday: Holiday = serde_json::from_str(json).unwrap();
        assert_eq!(holiday.date, NaiveDate::from_ymd_opt(2024, 6, 12).unwrap());
        assert_eq!(holiday.holiday_type, HolidayType::Regular);
    }

    #[test]
    fn test_special_type_serialization() {
        assert_eq!(
            serde_json::to_string(&HolidayType::SpecialNonWorking).unwrap(),
            "\"special_non_working\""
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(HolidayType::Regular.to_string(), "Regular Holiday");
        assert_eq!(
            HolidayType::SpecialNonWorking.to_string(),
            "Special Non-Working Holiday"
        );
    }
}
