//! Configuration loader for payroll tables.
//!
//! This module provides the [`ConfigLoader`] struct for loading the holiday
//! table and statutory tables from YAML files.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;

use crate::calculation::HolidayCalendar;
use crate::error::{EngineError, EngineResult};

use super::types::{ContributionTable, HolidayTable, PayrollConfig, StatutoryTables, TaxTable};

/// Loads and provides access to payroll configuration.
///
/// The loader reads the following files from the configuration directory:
/// - `holidays.yaml` - Proclaimed holidays keyed by year
/// - `statutory.yaml` - SSS, PhilHealth, Pag-IBIG and withholding tax tables
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/ph")?;
/// let calendar = loader.calendar()?;
/// let date = NaiveDate::from_ymd_opt(2024, 6, 12).unwrap();
/// assert!(calendar.is_regular_holiday(date));
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/ph")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - A statutory table is empty or its brackets are out of order
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let holidays_path = path.join("holidays.yaml");
        let holidays = Self::load_yaml::<HolidayTable>(&holidays_path)?;

        let statutory_path = path.join("statutory.yaml");
        let statutory = Self::load_yaml::<StatutoryTables>(&statutory_path)?;
        Self::validate_statutory(&statutory, &statutory_path.display().to_string())?;

        Ok(Self::from_config(PayrollConfig::new(holidays, statutory)))
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: PayrollConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate_statutory(tables: &StatutoryTables, path: &str) -> EngineResult<()> {
        Self::validate_contribution_table("sss", &tables.sss, path)?;
        Self::validate_contribution_table("philhealth", &tables.philhealth, path)?;
        Self::validate_contribution_table("pagibig", &tables.pagibig, path)?;
        Self::validate_tax_table(&tables.withholding_tax, path)
    }

    fn validate_contribution_table(
        name: &str,
        table: &ContributionTable,
        path: &str,
    ) -> EngineResult<()> {
        let parse_error = |message: String| EngineError::ConfigParseError {
            path: path.to_string(),
            message: format!("{}: {}", name, message),
        };

        if table.brackets.is_empty() {
            return Err(parse_error("no brackets defined".to_string()));
        }
        if table.minimum > table.maximum {
            return Err(parse_error(format!(
                "minimum {} exceeds maximum {}",
                table.minimum, table.maximum
            )));
        }
        if table.brackets[0].lower_bound > Decimal::ZERO {
            return Err(parse_error(format!(
                "first bracket starts at {} instead of 0",
                table.brackets[0].lower_bound
            )));
        }
        for pair in table.brackets.windows(2) {
            if pair[0].upper_bound != Some(pair[1].lower_bound) {
                return Err(parse_error(format!(
                    "bracket starting at {} does not continue the previous bracket",
                    pair[1].lower_bound
                )));
            }
        }
        Ok(())
    }

    fn validate_tax_table(table: &TaxTable, path: &str) -> EngineResult<()> {
        let parse_error = |message: &str| EngineError::ConfigParseError {
            path: path.to_string(),
            message: format!("withholding_tax: {}", message),
        };

        match table.brackets.last() {
            None => return Err(parse_error("no brackets defined")),
            Some(last) if last.upper_bound.is_some() => {
                return Err(parse_error("last bracket must be open-ended"));
            }
            Some(_) => {}
        }

        let bounds: Vec<Decimal> = table
            .brackets
            .iter()
            .filter_map(|bracket| bracket.upper_bound)
            .collect();
        if bounds.len() + 1 != table.brackets.len() {
            return Err(parse_error("only the last bracket may be open-ended"));
        }
        if bounds.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(parse_error("upper bounds must be strictly increasing"));
        }
        Ok(())
    }

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the holiday table.
    pub fn holidays(&self) -> &HolidayTable {
        self.config.holidays()
    }

    /// Returns the statutory tables.
    pub fn statutory(&self) -> &StatutoryTables {
        self.config.statutory()
    }

    /// Builds a holiday calendar from the loaded table.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DuplicateHoliday`] if a date appears twice in
    /// the same holiday list.
    pub fn calendar(&self) -> EngineResult<HolidayCalendar> {
        HolidayCalendar::from_table(self.holidays())
    }
}
