//! Holiday calendar lookups.
//!
//! The calendar is built from the versioned [`HolidayTable`] loaded from
//! configuration. It keeps regular and special non-working holidays in two
//! date-ordered lists and answers lookups by linear scan.

use chrono::{Datelike, NaiveDate};

use crate::config::HolidayTable;
use crate::error::{EngineError, EngineResult};
use crate::models::{Holiday, HolidayType};

/// A pure lookup structure over proclaimed holidays.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::HolidayCalendar;
/// use payroll_engine::models::{Holiday, HolidayType};
/// use chrono::NaiveDate;
///
/// let mut calendar = HolidayCalendar::default();
/// let date = NaiveDate::from_ymd_opt(2024, 6, 12).unwrap();
/// calendar
///     .add_holiday(Holiday {
///         name: "Independence Day".to_string(),
///         date,
///         holiday_type: HolidayType::Regular,
///     })
///     .unwrap();
///
/// assert!(calendar.is_regular_holiday(date));
/// assert_eq!(calendar.holiday_name(date), Some("Independence Day"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayCalendar {
    regular: Vec<Holiday>,
    special: Vec<Holiday>,
}

impl HolidayCalendar {
    /// Builds a calendar from a holiday table.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DuplicateHoliday`] if two holidays of the same
    /// type share a date.
    pub fn from_table(table: &HolidayTable) -> EngineResult<Self> {
        let mut calendar = Self::default();
        for holiday in table.holidays() {
            calendar.add_holiday(holiday.clone())?;
        }
        Ok(calendar)
    }

    fn list_for(&self, holiday_type: HolidayType) -> &[Holiday] {
        match holiday_type {
            HolidayType::Regular => &self.regular,
            HolidayType::SpecialNonWorking => &self.special,
        }
    }

    /// Adds a holiday, keeping its list in date order.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DuplicateHoliday`] if a holiday of the same
    /// type already exists on that date.
    pub fn add_holiday(&mut self, holiday: Holiday) -> EngineResult<()> {
        let list = match holiday.holiday_type {
            HolidayType::Regular => &mut self.regular,
            HolidayType::SpecialNonWorking => &mut self.special,
        };

        if list.iter().any(|h| h.date == holiday.date) {
            return Err(EngineError::DuplicateHoliday {
                date: holiday.date,
                name: holiday.name,
            });
        }

        let position = list.partition_point(|h| h.date < holiday.date);
        list.insert(position, holiday);
        Ok(())
    }

    /// Returns the holiday on `date`, regular holidays first.
    pub fn get_holiday(&self, date: NaiveDate) -> Option<&Holiday> {
        self.regular
            .iter()
            .chain(self.special.iter())
            .find(|h| h.date == date)
    }

    /// Returns true if `date` is any kind of holiday.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.get_holiday(date).is_some()
    }

    /// Returns true if `date` is a regular holiday.
    pub fn is_regular_holiday(&self, date: NaiveDate) -> bool {
        self.regular.iter().any(|h| h.date == date)
    }

    /// Returns true if `date` is a special non-working holiday.
    pub fn is_special_non_working_holiday(&self, date: NaiveDate) -> bool {
        self.special.iter().any(|h| h.date == date)
    }

    /// Returns the name of the holiday on `date`.
    pub fn holiday_name(&self, date: NaiveDate) -> Option<&str> {
        self.get_holiday(date).map(|h| h.name.as_str())
    }

    /// Returns the type of the holiday on `date`.
    pub fn holiday_type(&self, date: NaiveDate) -> Option<HolidayType> {
        self.get_holiday(date).map(|h| h.holiday_type)
    }

    /// Returns all holidays between `start` and `end` inclusive, in date order.
    pub fn holidays_in_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<&Holiday> {
        let mut holidays: Vec<&Holiday> = self
            .regular
            .iter()
            .chain(self.special.iter())
            .filter(|h| h.date >= start && h.date <= end)
            .collect();
        holidays.sort_by_key(|h| (h.date, h.holiday_type == HolidayType::SpecialNonWorking));
        holidays
    }

    /// Returns all holidays in a calendar year, in date order.
    pub fn holidays_for_year(&self, year: i32) -> Vec<&Holiday> {
        let mut holidays: Vec<&Holiday> = self
            .regular
            .iter()
            .chain(self.special.iter())
            .filter(|h| h.date.year() == year)
            .collect();
        holidays.sort_by_key(|h| (h.date, h.holiday_type == HolidayType::SpecialNonWorking));
        holidays
    }

    /// Returns the holidays of one type, in date order.
    pub fn holidays_of_type(&self, holiday_type: HolidayType) -> &[Holiday] {
        self.list_for(holiday_type)
    }

    /// Number of holidays in the calendar.
    pub fn len(&self) -> usize {
        self.regular.len() + self.special.len()
    }

    /// Returns true if the calendar has no holidays.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
