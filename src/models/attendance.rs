//! Attendance record model and absence categories.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Why an employee was away on a given day.
///
/// The category is assigned once, where attendance rows are loaded; the
/// calculators only ever match on these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsenceCategory {
    /// Paid sick leave.
    SickLeave,
    /// Paid vacation leave.
    VacationLeave,
    /// Paid emergency leave.
    EmergencyLeave,
    /// Approved leave without pay.
    Unpaid,
    /// Absence without authorization.
    Unauthorized,
}

impl AbsenceCategory {
    /// Returns true if the day is deducted at the daily rate.
    pub fn is_unpaid(self) -> bool {
        matches!(self, Self::Unpaid | Self::Unauthorized)
    }

    /// Maps an absence label from an attendance log to its category.
    ///
    /// Labels are compared after lower-casing and collapsing spaces,
    /// underscores and hyphens, so `"Sick Leave"`, `"sick_leave"` and
    /// `"SICK-LEAVE"` are the same label.
    ///
    /// ```
    /// use payroll_engine::models::AbsenceCategory;
    ///
    /// assert_eq!(AbsenceCategory::from_label("Sick Leave"), Some(AbsenceCategory::SickLeave));
    /// assert_eq!(AbsenceCategory::from_label("AWOL"), Some(AbsenceCategory::Unauthorized));
    /// assert_eq!(AbsenceCategory::from_label("lunch"), None);
    /// ```
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized: String = label
            .trim()
            .to_lowercase()
            .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        match normalized.as_str() {
            "sick leave" | "sick" | "sl" => Some(Self::SickLeave),
            "vacation leave" | "vacation" | "vl" => Some(Self::VacationLeave),
            "emergency leave" | "emergency" | "el" => Some(Self::EmergencyLeave),
            "unpaid" | "unpaid leave" | "leave without pay" | "lwop" => Some(Self::Unpaid),
            "unauthorized" | "unauthorized absence" | "absent" | "awol" => {
                Some(Self::Unauthorized)
            }
            _ => None,
        }
    }
}

/// One employee's attendance for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The employee this record belongs to.
    pub employee_id: String,
    /// The calendar date.
    pub date: NaiveDate,
    /// Clock-in time, if recorded.
    #[serde(default)]
    pub time_in: Option<NaiveTime>,
    /// Clock-out time, if recorded.
    #[serde(default)]
    pub time_out: Option<NaiveTime>,
    /// Absence category, if the day was a leave or absence.
    #[serde(default)]
    pub absence: Option<AbsenceCategory>,
}

impl AttendanceRecord {
    /// Returns true if both clock times are present.
    pub fn has_time_entries(&self) -> bool {
        self.time_in.is_some() && self.time_out.is_some()
    }

    /// Returns true if the day counts as an unpaid absence.
    pub fn is_unpaid_absence(&self) -> bool {
        self.absence.is_some_and(AbsenceCategory::is_unpaid)
    }
}
