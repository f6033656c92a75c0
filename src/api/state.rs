//! Application state for the payroll API.

use std::sync::Arc;

use crate::calculation::HolidayCalendar;
use crate::config::{ConfigLoader, StatutoryTables};
use crate::error::EngineResult;

/// Shared application state.
///
/// Holds the loaded configuration and the holiday calendar built from it.
/// Handlers only ever read from it.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    calendar: Arc<HolidayCalendar>,
}

impl AppState {
    /// Creates the application state, building the holiday calendar once.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DuplicateHoliday`](crate::error::EngineError::DuplicateHoliday)
    /// if the configured holiday table cannot form a calendar.
    pub fn new(config: ConfigLoader) -> EngineResult<Self> {
        let calendar = config.calendar()?;
        Ok(Self {
            config: Arc::new(config),
            calendar: Arc::new(calendar),
        })
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the holiday calendar.
    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }

    /// Returns the statutory deduction tables.
    pub fn statutory(&self) -> &StatutoryTables {
        self.config.statutory()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_calendar_built_from_config() {
        let state = AppState::new(ConfigLoader::load("./config/ph").unwrap()).unwrap();
        let independence_day = NaiveDate::from_ymd_opt(2024, 6, 12).unwrap();
        assert!(state.calendar().is_regular_holiday(independence_day));
        assert!(!state.statutory().sss.brackets.is_empty());
    }
}
