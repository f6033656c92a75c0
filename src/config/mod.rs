//! Configuration loading and management for the Payroll Engine.
//!
//! This module provides functionality to load payroll configuration from YAML
//! files: the versioned holiday table and the statutory contribution and
//! withholding tax tables.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/ph").unwrap();
//! println!("Holiday years: {:?}", config.holidays().supported_years());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    ContributionBracket, ContributionTable, HolidayTable, PayrollConfig, StatutoryTables,
    TaxBracket, TaxTable,
};
