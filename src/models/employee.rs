//! Employee model and related types.
//!
//! This module defines the Employee struct, its government identifiers and
//! the canonical hourly/daily rate derivations used by every calculator.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PayRates;

/// Working days per month used to derive the daily rate.
pub const WORKING_DAYS_PER_MONTH: Decimal = Decimal::from_parts(22, 0, 0, false, 0);

/// Standard paid hours per working day.
pub const STANDARD_HOURS_PER_DAY: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Represents the employee's employment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    /// Regular (permanent) employee.
    Regular,
    /// Employee still within the probationary period.
    Probationary,
}

impl EmploymentStatus {
    /// Parses the status label used in the employee master file.
    ///
    /// ```
    /// use payroll_engine::models::EmploymentStatus;
    ///
    /// assert_eq!(EmploymentStatus::from_label(" Regular "), Some(EmploymentStatus::Regular));
    /// assert_eq!(EmploymentStatus::from_label("PROBATIONARY"), Some(EmploymentStatus::Probationary));
    /// assert_eq!(EmploymentStatus::from_label("contractual"), None);
    /// ```
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "regular" => Some(Self::Regular),
            "probationary" => Some(Self::Probationary),
            _ => None,
        }
    }
}

/// Government-issued identifiers carried on the employee record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovernmentIds {
    /// Social Security System number.
    #[serde(default)]
    pub sss: String,
    /// PhilHealth number.
    #[serde(default)]
    pub philhealth: String,
    /// Tax identification number.
    #[serde(default)]
    pub tin: String,
    /// Pag-IBIG (HDMF) number.
    #[serde(default)]
    pub pagibig: String,
}

/// Represents an employee on the payroll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Family name.
    pub last_name: String,
    /// Given name.
    pub first_name: String,
    /// Date of birth, when known.
    #[serde(default)]
    pub birthday: Option<NaiveDate>,
    /// Home address.
    #[serde(default)]
    pub address: String,
    /// Contact number.
    #[serde(default)]
    pub phone: String,
    /// Government identifiers.
    #[serde(default)]
    pub government_ids: GovernmentIds,
    /// Employment status.
    pub status: EmploymentStatus,
    /// Job title.
    pub position: String,
    /// Immediate supervisor, if any.
    #[serde(default)]
    pub supervisor: Option<String>,
    /// Monthly basic salary.
    pub basic_salary: Decimal,
    /// Monthly rice subsidy.
    #[serde(default)]
    pub rice_subsidy: Decimal,
    /// Monthly phone allowance.
    #[serde(default)]
    pub phone_allowance: Decimal,
    /// Monthly clothing allowance.
    #[serde(default)]
    pub clothing_allowance: Decimal,
    /// Gross semi-monthly rate as stated in the master file.
    #[serde(default)]
    pub gross_semi_monthly_rate: Decimal,
    /// Hourly rate as stated in the master file, if any.
    #[serde(default)]
    pub hourly_rate: Option<Decimal>,
}

impl Employee {
    /// Returns "First Last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns the hourly rate used for pay.
    ///
    /// The stated hourly rate wins when present and positive; otherwise the
    /// rate is derived as `basic_salary / (22 × 8)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{Employee, EmploymentStatus, GovernmentIds};
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: "10001".to_string(),
    ///     last_name: "Garcia".to_string(),
    ///     first_name: "Manuel III".to_string(),
    ///     birthday: None,
    ///     address: String::new(),
    ///     phone: String::new(),
    ///     government_ids: GovernmentIds::default(),
    ///     status: EmploymentStatus::Regular,
    ///     position: "Chief Executive Officer".to_string(),
    ///     supervisor: None,
    ///     basic_salary: Decimal::new(35200, 0),
    ///     rice_subsidy: Decimal::ZERO,
    ///     phone_allowance: Decimal::ZERO,
    ///     clothing_allowance: Decimal::ZERO,
    ///     gross_semi_monthly_rate: Decimal::ZERO,
    ///     hourly_rate: None,
    /// };
    /// assert_eq!(employee.hourly_rate(), Decimal::new(200, 0));
    /// assert_eq!(employee.daily_rate(), Decimal::new(1600, 0));
    /// ```
    pub fn hourly_rate(&self) -> Decimal {
        match self.hourly_rate {
            Some(rate) if rate > Decimal::ZERO => rate,
            _ => self.basic_salary / (WORKING_DAYS_PER_MONTH * STANDARD_HOURS_PER_DAY),
        }
    }

    /// Returns the daily rate, `basic_salary / 22`.
    pub fn daily_rate(&self) -> Decimal {
        self.basic_salary / WORKING_DAYS_PER_MONTH
    }

    /// Returns the per-minute rate, `hourly_rate / 60`.
    pub fn per_minute_rate(&self) -> Decimal {
        self.hourly_rate() / Decimal::from(60)
    }

    /// Returns the hourly, daily and per-minute rates together.
    pub fn pay_rates(&self) -> PayRates {
        PayRates {
            hourly_rate: self.hourly_rate(),
            daily_rate: self.daily_rate(),
            per_minute_rate: self.per_minute_rate(),
        }
    }

    /// Returns the sum of the fixed monthly allowances.
    pub fn monthly_allowances(&self) -> Decimal {
        self.rice_subsidy + self.phone_allowance + self.clothing_allowance
    }
}
