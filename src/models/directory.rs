//! In-memory collections of employees and attendance.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{AttendanceRecord, Employee};

/// Employees keyed by id, iterated in id order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDirectory {
    employees: BTreeMap<String, Employee>,
}

impl EmployeeDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an employee.
    ///
    /// Returns the employee back if the id is already taken; the existing
    /// entry is left untouched.
    pub fn insert(&mut self, employee: Employee) -> Result<(), Employee> {
        if self.employees.contains_key(&employee.id) {
            return Err(employee);
        }
        self.employees.insert(employee.id.clone(), employee);
        Ok(())
    }

    /// Looks an employee up by id.
    pub fn get(&self, employee_id: &str) -> Option<&Employee> {
        self.employees.get(employee_id)
    }

    /// Returns true if an employee with this id exists.
    pub fn contains(&self, employee_id: &str) -> bool {
        self.employees.contains_key(employee_id)
    }

    /// Iterates employees in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Employee> {
        self.employees.values()
    }

    /// Number of employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

/// Attendance records, at most one per employee and date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceLog {
    records: BTreeMap<String, BTreeMap<NaiveDate, AttendanceRecord>>,
}

impl AttendanceLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record.
    ///
    /// Returns the record back if the employee already has one on that date.
    pub fn insert(&mut self, record: AttendanceRecord) -> Result<(), AttendanceRecord> {
        let days = self.records.entry(record.employee_id.clone()).or_default();
        if days.contains_key(&record.date) {
            return Err(record);
        }
        days.insert(record.date, record);
        Ok(())
    }

    /// Returns an employee's records between `start` and `end` inclusive,
    /// in date order.
    pub fn records_in_range(
        &self,
        employee_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<&AttendanceRecord> {
        if start > end {
            return Vec::new();
        }
        self.records
            .get(employee_id)
            .map(|days| days.range(start..=end).map(|(_, record)| record).collect())
            .unwrap_or_default()
    }

    /// Returns every record for an employee, in date order.
    pub fn records_for(&self, employee_id: &str) -> Vec<&AttendanceRecord> {
        self.records
            .get(employee_id)
            .map(|days| days.values().collect())
            .unwrap_or_default()
    }

    /// Total number of records.
    pub fn len(&self) -> usize {
        self.records.values().map(BTreeMap::len).sum()
    }

    /// Returns true if the log holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromIterator<AttendanceRecord> for AttendanceLog {
    /// Collects records, keeping the first record for each employee and date.
    ///
    /// Each later duplicate is logged and discarded.
    fn from_iter<I: IntoIterator<Item = AttendanceRecord>>(iter: I) -> Self {
        let mut log = Self::new();
        for record in iter {
            if let Err(duplicate) = log.insert(record) {
                warn!(
                    employee_id = %duplicate.employee_id,
                    date = %duplicate.date,
                    "Discarding duplicate attendance record"
                );
            }
        }
        log
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EmploymentStatus;
    use chrono::NaiveTime;
    use rust_decimal::Decimal;

    fn make_date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    fn create_employee(id: &str) -> Employee {
        Employee {
            id: id.to_string(),
            last_name: "Lim".to_string(),
            first_name: "Antonio".to_string(),
            birthday: None,
            address: String::new(),
            phone: String::new(),
            government_ids: Default::default(),
            status: EmploymentStatus::Regular,
            position: "Chief Operating Officer".to_string(),
            supervisor: None,
            basic_salary: Decimal::from(60000),
            rice_subsidy: Decimal::ZERO,
            phone_allowance: Decimal::ZERO,
            clothing_allowance: Decimal::ZERO,
            gross_semi_monthly_rate: Decimal::from(30000),
            hourly_rate: None,
        }
    }

    fn create_record(id: &str, d: u32) -> AttendanceRecord {
        AttendanceRecord {
            employee_id: id.to_string(),
            date: make_date(d),
            time_in: None,
            time_out: None,
            absence: None,
        }
    }

    #[test]
    fn test_directory_rejects_duplicate_id() {
        let mut directory = EmployeeDirectory::new();
        assert!(directory.insert(create_employee("10002")).is_ok());
        assert!(directory.insert(create_employee("10002")).is_err());
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn test_directory_iterates_in_id_order() {
        let mut directory = EmployeeDirectory::new();
        for id in ["10003", "10001", "10002"] {
            directory.insert(create_employee(id)).unwrap();
        }
        let ids: Vec<&str> = directory.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["10001", "10002", "10003"]);
        assert!(directory.contains("10001"));
        assert!(directory.get("99999").is_none());
    }

    #[test]
    fn test_log_rejects_duplicate_date() {
        let mut log = AttendanceLog::new();
        assert!(log.insert(create_record("10001", 3)).is_ok());
        assert!(log.insert(create_record("10001", 3)).is_err());
        assert!(log.insert(create_record("10002", 3)).is_ok());
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_collect_keeps_first_record_per_date() {
        let mut late = create_record("10001", 3);
        late.time_in = NaiveTime::from_hms_opt(9, 30, 0);

        let log: AttendanceLog = [create_record("10001", 3), late, create_record("10001", 4)]
            .into_iter()
            .collect();

        assert_eq!(log.len(), 2);
        let kept = log.records_for("10001");
        assert_eq!(kept[0].date, make_date(3));
        assert_eq!(kept[0].time_in, None);
    }

    #[test]
    fn test_range_is_inclusive_and_per_employee() {
        let log: AttendanceLog = [
            create_record("10001", 12),
            create_record("10001", 13),
            create_record("10001", 26),
            create_record("10001", 27),
            create_record("10002", 14),
        ]
        .into_iter()
        .collect();

        let dates: Vec<NaiveDate> = log
            .records_in_range("10001", make_date(13), make_date(26))
            .iter()
            .map(|r| r.date)
            .collect();
        assert_eq!(dates, vec![make_date(13), make_date(26)]);
        assert!(log.records_in_range("10003", make_date(1), make_date(30)).is_empty());
        assert!(log.records_in_range("10001", make_date(26), make_date(13)).is_empty());
        assert_eq!(log.records_for("10001").len(), 4);
    }
}
