//! Payroll service over loaded employees and attendance.
//!
//! [`PayrollService`] ties the loaded data to the calculation functions: it
//! looks employees up, derives the cutoff window, selects exactly the
//! attendance inside it and runs the payroll processor.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::calculation::{
    HolidayCalendar, calculate_daily_work_hours, process_payroll, summarize_attendance,
};
use crate::config::{ConfigLoader, StatutoryTables};
use crate::error::{EngineError, EngineResult};
use crate::loader::{SkippedRecord, load_attendance, load_employees};
use crate::models::{
    AttendanceLog, AttendanceRecord, AttendanceReport, DailyWorkHours, Employee,
    EmployeeDirectory, PayPeriod, PayrollResult, PeriodType,
};

/// Runs payroll for the employees and attendance it holds.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::models::PeriodType;
/// use payroll_engine::service::PayrollService;
///
/// let (service, skipped) = PayrollService::load(
///     "./config/ph",
///     "./data/employees.csv",
///     "./data/attendance.csv",
/// )?;
/// assert!(skipped.is_empty());
///
/// let result = service.run_payroll("10001", 2024, 6, PeriodType::EndMonth)?;
/// println!("Net pay: {}", result.net_pay);
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PayrollService {
    employees: EmployeeDirectory,
    attendance: AttendanceLog,
    calendar: HolidayCalendar,
    tables: StatutoryTables,
}

impl PayrollService {
    /// Creates a service from already-loaded data.
    pub fn new(
        employees: EmployeeDirectory,
        attendance: AttendanceLog,
        calendar: HolidayCalendar,
        tables: StatutoryTables,
    ) -> Self {
        Self {
            employees,
            attendance,
            calendar,
            tables,
        }
    }

    /// Loads configuration and both CSV files.
    ///
    /// Returns the service together with every row skipped by the loaders.
    pub fn load<C, E, A>(
        config_dir: C,
        employees_csv: E,
        attendance_csv: A,
    ) -> EngineResult<(Self, Vec<SkippedRecord>)>
    where
        C: AsRef<Path>,
        E: AsRef<Path>,
        A: AsRef<Path>,
    {
        let config = ConfigLoader::load(config_dir)?;
        let employees = load_employees(employees_csv)?;
        let attendance = load_attendance(attendance_csv)?;

        let mut skipped = employees.skipped;
        skipped.extend(attendance.skipped);

        let service = Self::new(
            employees.loaded,
            attendance.loaded,
            config.calendar()?,
            config.statutory().clone(),
        );
        Ok((service, skipped))
    }

    /// Returns the employee directory.
    pub fn employees(&self) -> &EmployeeDirectory {
        &self.employees
    }

    /// Returns the holiday calendar.
    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }

    fn employee(&self, employee_id: &str) -> EngineResult<&Employee> {
        self.employees
            .get(employee_id)
            .ok_or_else(|| EngineError::EmployeeNotFound {
                employee_id: employee_id.to_string(),
            })
    }

    /// Computes per-day breakdowns and their summary for a date range.
    ///
    /// # Errors
    ///
    /// - `EmployeeNotFound` if the id is unknown
    /// - `InvalidInput` if `start` is after `end`
    pub fn attendance_report(
        &self,
        employee_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<AttendanceReport> {
        self.employee(employee_id)?;
        build_attendance_report(&self.attendance, &self.calendar, employee_id, start, end)
    }

    /// Runs payroll for one employee and one semi-monthly run.
    ///
    /// # Errors
    ///
    /// - `EmployeeNotFound` if the id is unknown
    /// - `InvalidPayPeriod` if the month is out of range
    /// - `NoAttendanceData` if the employee has no records in the cutoff window
    /// - any error raised by the payroll processor
    pub fn run_payroll(
        &self,
        employee_id: &str,
        year: i32,
        month: u32,
        period_type: PeriodType,
    ) -> EngineResult<PayrollResult> {
        let employee = self.employee(employee_id)?;
        let pay_period = PayPeriod::new(year, month, period_type)?;

        let records =
            self.attendance
                .records_in_range(employee_id, pay_period.start_date, pay_period.end_date);
        if records.is_empty() {
            return Err(EngineError::NoAttendanceData {
                employee_id: employee_id.to_string(),
                start_date: pay_period.start_date,
                end_date: pay_period.end_date,
            });
        }

        let days = daily_breakdowns(&records);
        let summary = summarize_attendance(&days, &self.calendar);
        process_payroll(
            employee,
            &summary,
            &days,
            &pay_period,
            &self.calendar,
            &self.tables,
        )
    }

    /// Runs payroll for every employee, in id order.
    ///
    /// A failure for one employee is recorded against that employee and the
    /// batch carries on.
    pub fn run_payroll_for_all(
        &self,
        year: i32,
        month: u32,
        period_type: PeriodType,
    ) -> BTreeMap<String, EngineResult<PayrollResult>> {
        let results: BTreeMap<String, EngineResult<PayrollResult>> = self
            .employees
            .iter()
            .map(|employee| {
                let result = self.run_payroll(&employee.id, year, month, period_type);
                if let Err(e) = &result {
                    warn!(employee_id = %employee.id, error = %e, "Payroll failed for employee");
                }
                (employee.id.clone(), result)
            })
            .collect();

        let failed = results.values().filter(|r| r.is_err()).count();
        info!(
            year,
            month,
            period = %period_type,
            processed = results.len() - failed,
            failed,
            "Batch payroll complete"
        );
        results
    }
}

fn daily_breakdowns(records: &[&AttendanceRecord]) -> Vec<DailyWorkHours> {
    records
        .iter()
        .map(|record| calculate_daily_work_hours(record))
        .collect()
}

/// Builds an attendance report for one employee over `start..=end` from a log.
///
/// # Errors
///
/// Returns `InvalidInput` if `start` is after `end`.
pub fn build_attendance_report(
    attendance: &AttendanceLog,
    calendar: &HolidayCalendar,
    employee_id: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> EngineResult<AttendanceReport> {
    if start > end {
        return Err(EngineError::InvalidInput {
            field: "start_date".to_string(),
            message: format!("start date {} is after end date {}", start, end),
        });
    }

    let records = attendance.records_in_range(employee_id, start, end);
    let days = daily_breakdowns(&records);
    let summary = summarize_attendance(&days, calendar);
    debug!(
        employee_id,
        start = %start,
        end = %end,
        days = days.len(),
        "Attendance report built"
    );

    Ok(AttendanceReport {
        employee_id: employee_id.to_string(),
        start_date: start,
        end_date: end,
        days,
        summary,
    })
}
