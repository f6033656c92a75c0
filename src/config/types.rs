//! Configuration types for payroll calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files: the versioned holiday
//! table and the statutory contribution and tax tables.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Holiday;

/// Proclaimed holidays keyed by year.
///
/// Loaded from `holidays.yaml`:
///
/// ```yaml
/// years:
///   2024:
///     - name: New Year's Day
///       date: 2024-01-01
///       type: regular
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayTable {
    /// Holidays per year, in file order.
    #[serde(default)]
    pub years: BTreeMap<i32, Vec<Holiday>>,
}

impl HolidayTable {
    /// Creates a table from per-year holiday lists.
    pub fn new(years: BTreeMap<i32, Vec<Holiday>>) -> Self {
        Self { years }
    }

    /// Returns every holiday in the table, year by year.
    pub fn holidays(&self) -> impl Iterator<Item = &Holiday> {
        self.years.values().flatten()
    }

    /// Returns the years the table has data for.
    pub fn supported_years(&self) -> Vec<i32> {
        self.years.keys().copied().collect()
    }
}

/// One salary band of a contribution table.
///
/// A band covers `lower_bound <= salary < upper_bound` (no upper bound means
/// open-ended) and contributes `amount + rate × salary`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionBracket {
    /// Lowest monthly salary in the band (inclusive).
    pub lower_bound: Decimal,
    /// Salary where the next band starts (exclusive).
    #[serde(default)]
    pub upper_bound: Option<Decimal>,
    /// Fixed contribution for the band.
    #[serde(default)]
    pub amount: Decimal,
    /// Contribution rate applied to the salary.
    #[serde(default)]
    pub rate: Decimal,
}

impl ContributionBracket {
    /// Returns true if the salary falls inside this band.
    pub fn contains(&self, salary: Decimal) -> bool {
        salary >= self.lower_bound && self.upper_bound.is_none_or(|upper| salary < upper)
    }

    /// Returns the raw contribution for a salary in this band.
    pub fn contribution(&self, salary: Decimal) -> Decimal {
        self.amount + self.rate * salary
    }
}

/// A contribution table keyed on full monthly gross, with floor and cap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionTable {
    /// Reference to the circular or schedule the table comes from.
    #[serde(default)]
    pub reference: String,
    /// Smallest contribution ever withheld.
    pub minimum: Decimal,
    /// Largest contribution ever withheld.
    pub maximum: Decimal,
    /// Salary bands in ascending order.
    pub brackets: Vec<ContributionBracket>,
}

/// One band of the progressive withholding tax table.
///
/// A band applies when `income <= upper_bound` (the first such band wins);
/// tax is `base_tax + rate × max(0, income − excess_over)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Highest income in the band (inclusive); open-ended when absent.
    #[serde(default)]
    pub upper_bound: Option<Decimal>,
    /// Tax due on the portion below the band.
    #[serde(default)]
    pub base_tax: Decimal,
    /// Marginal rate for the band.
    #[serde(default)]
    pub rate: Decimal,
    /// Income above which the marginal rate applies.
    #[serde(default)]
    pub excess_over: Decimal,
}

/// The progressive withholding tax table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxTable {
    /// Reference to the revenue regulation the table comes from.
    #[serde(default)]
    pub reference: String,
    /// Bands in ascending order of `upper_bound`, open-ended band last.
    pub brackets: Vec<TaxBracket>,
}

/// All statutory tables, loaded from `statutory.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutoryTables {
    /// Social Security System employee share.
    pub sss: ContributionTable,
    /// PhilHealth employee share.
    pub philhealth: ContributionTable,
    /// Pag-IBIG employee share.
    pub pagibig: ContributionTable,
    /// Withholding tax.
    pub withholding_tax: TaxTable,
}

/// The complete payroll configuration loaded from a directory.
#[derive(Debug, Clone)]
pub struct PayrollConfig {
    holidays: HolidayTable,
    statutory: StatutoryTables,
}

impl PayrollConfig {
    /// Creates a new PayrollConfig from its component parts.
    pub fn new(holidays: HolidayTable, statutory: StatutoryTables) -> Self {
        Self {
            holidays,
            statutory,
        }
    }

    /// Returns the holiday table.
    pub fn holidays(&self) -> &HolidayTable {
        &self.holidays
    }

    /// Returns the statutory tables.
    pub fn statutory(&self) -> &StatutoryTables {
        &self.statutory
    }
}
