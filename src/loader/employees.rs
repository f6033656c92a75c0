//! Employee master data loading.

use std::path::Path;

use csv::StringRecord;
use rust_decimal::Decimal;
use tracing::{info, warn};

use super::{LoadReport, SkippedRecord, cell, parse_date, parse_peso, parse_rows, read_file};
use crate::error::EngineResult;
use crate::models::{Employee, EmployeeDirectory, EmploymentStatus, GovernmentIds};

/// Number of columns in the employee file.
///
/// id, last name, first name, birthday, address, phone, SSS, PhilHealth, TIN,
/// Pag-IBIG, status, position, supervisor, basic salary, rice subsidy, phone
/// allowance, clothing allowance, gross semi-monthly rate, hourly rate.
pub const EMPLOYEE_COLUMNS: usize = 19;

fn required<'a>(record: &'a StringRecord, index: usize, field: &str) -> Result<&'a str, String> {
    cell(record, index).ok_or_else(|| format!("{} is missing", field))
}

fn amount(record: &StringRecord, index: usize, field: &str) -> Result<Decimal, String> {
    match cell(record, index) {
        Some(value) => parse_peso(value).map_err(|e| format!("{}: {}", field, e)),
        None => Ok(Decimal::ZERO),
    }
}

fn text(record: &StringRecord, index: usize) -> String {
    cell(record, index).unwrap_or_default().to_string()
}

fn parse_employee_row(record: &StringRecord) -> Result<Employee, String> {
    if record.len() != EMPLOYEE_COLUMNS {
        return Err(format!(
            "expected {} columns, found {}",
            EMPLOYEE_COLUMNS,
            record.len()
        ));
    }

    let id = required(record, 0, "employee id")?.to_string();
    let last_name = required(record, 1, "last name")?.to_string();
    let first_name = required(record, 2, "first name")?.to_string();

    let birthday = cell(record, 3)
        .map(parse_date)
        .transpose()
        .map_err(|e| format!("birthday: {}", e))?;

    let status_label = required(record, 10, "status")?;
    let status = EmploymentStatus::from_label(status_label)
        .ok_or_else(|| format!("unknown employment status '{}'", status_label))?;

    let supervisor = cell(record, 12)
        .filter(|s| !s.eq_ignore_ascii_case("N/A"))
        .map(str::to_string);

    let basic_salary = parse_peso(required(record, 13, "basic salary")?)
        .map_err(|e| format!("basic salary: {}", e))?;

    let hourly_rate = cell(record, 18)
        .map(parse_peso)
        .transpose()
        .map_err(|e| format!("hourly rate: {}", e))?;

    Ok(Employee {
        id,
        last_name,
        first_name,
        birthday,
        address: text(record, 4),
        phone: text(record, 5),
        government_ids: GovernmentIds {
            sss: text(record, 6),
            philhealth: text(record, 7),
            tin: text(record, 8),
            pagibig: text(record, 9),
        },
        status,
        position: text(record, 11),
        supervisor,
        basic_salary,
        rice_subsidy: amount(record, 14, "rice subsidy")?,
        phone_allowance: amount(record, 15, "phone allowance")?,
        clothing_allowance: amount(record, 16, "clothing allowance")?,
        gross_semi_monthly_rate: amount(record, 17, "gross semi-monthly rate")?,
        hourly_rate,
    })
}

/// Parses employee CSV content.
///
/// `source` names the content in skip reports and log events. Rows with a
/// duplicate employee id are skipped; the first occurrence wins.
///
/// # Examples
///
/// ```
/// use payroll_engine::loader::parse_employees;
///
/// let content = "\
/// Employee #,Last Name,First Name,Birthday,Address,Phone Number,SSS #,Philhealth #,TIN #,Pag-ibig #,Status,Position,Immediate Supervisor,Basic Salary,Rice Subsidy,Phone Allowance,Clothing Allowance,Gross Semi-monthly Rate,Hourly Rate
/// 10001,Garcia,Manuel III,10/11/1983,Valero Carpark Building,966-860-270,44-4506057-3,820126853951,442-605-657-000,691295330870,Regular,Chief Executive Officer,N/A,\"90,000\",\"1,500\",\"2,000\",\"1,000\",\"45,000\",535.71
/// ";
///
/// let report = parse_employees(content, "employees.csv").unwrap();
/// assert!(report.is_clean());
/// assert_eq!(report.loaded.get("10001").unwrap().full_name(), "Manuel III Garcia");
/// ```
pub fn parse_employees(content: &str, source: &str) -> EngineResult<LoadReport<EmployeeDirectory>> {
    let (employees, mut skipped) = parse_rows(content, source, parse_employee_row)?;

    let mut directory = EmployeeDirectory::new();
    for (line, employee) in employees {
        if let Err(duplicate) = directory.insert(employee) {
            let reason = format!("duplicate employee id '{}'", duplicate.id);
            warn!(source, line, reason = %reason, "Skipping CSV row");
            skipped.push(SkippedRecord { line, reason });
        }
    }
    skipped.sort_by_key(|record| record.line);

    info!(
        source,
        loaded = directory.len(),
        skipped = skipped.len(),
        "Employee data loaded"
    );

    Ok(LoadReport {
        loaded: directory,
        skipped,
    })
}

/// Loads employee master data from a CSV file.
///
/// # Errors
///
/// Returns [`EngineError::CsvReadError`](crate::error::EngineError::CsvReadError)
/// if the file cannot be read.
pub fn load_employees<P: AsRef<Path>>(path: P) -> EngineResult<LoadReport<EmployeeDirectory>> {
    let path = path.as_ref();
    let content = read_file(path)?;
    parse_employees(&content, &path.display().to_string())
}
