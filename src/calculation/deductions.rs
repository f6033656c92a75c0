//! Statutory deductions.
//!
//! SSS, PhilHealth and Pag-IBIG contributions are withheld on the mid-month
//! run from the full monthly gross. Withholding tax is withheld on the
//! end-month run from the period gross. All rates and brackets come from the
//! loaded [`StatutoryTables`].

use rust_decimal::Decimal;
use tracing::warn;

use super::round_money;
use crate::config::{ContributionTable, StatutoryTables, TaxTable};
use crate::models::{DeductionResult, PeriodType};

fn non_negative(field: &str, value: Decimal) -> Decimal {
    if value < Decimal::ZERO {
        warn!(field, value = %value, "Negative deduction input clamped to 0");
        Decimal::ZERO
    } else {
        value
    }
}

/// Looks up a contribution in a bracket table and clamps it to the table's
/// floor and cap.
///
/// A salary outside every bracket pays the table minimum.
pub fn calculate_contribution(table: &ContributionTable, monthly_gross: Decimal) -> Decimal {
    let salary = non_negative("monthly_gross", monthly_gross);
    let raw = table
        .brackets
        .iter()
        .find(|bracket| bracket.contains(salary))
        .map(|bracket| bracket.contribution(salary))
        .unwrap_or(table.minimum);
    round_money(raw.clamp(table.minimum, table.maximum))
}

/// SSS employee share for a monthly gross.
pub fn calculate_sss(tables: &StatutoryTables, monthly_gross: Decimal) -> Decimal {
    calculate_contribution(&tables.sss, monthly_gross)
}

/// PhilHealth employee share for a monthly gross.
pub fn calculate_philhealth(tables: &StatutoryTables, monthly_gross: Decimal) -> Decimal {
    calculate_contribution(&tables.philhealth, monthly_gross)
}

/// Pag-IBIG employee share for a monthly gross.
pub fn calculate_pagibig(tables: &StatutoryTables, monthly_gross: Decimal) -> Decimal {
    calculate_contribution(&tables.pagibig, monthly_gross)
}

/// Progressive withholding tax on a taxable income.
///
/// The first bracket whose upper bound is at or above the income applies;
/// tax is `base_tax + rate × (income − excess_over)` with the excess never
/// below zero.
///
/// # Examples
///
/// ```no_run
/// use payroll_engine::calculation::calculate_withholding_tax;
/// use payroll_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/ph").unwrap();
/// let table = &loader.statutory().withholding_tax;
///
/// assert_eq!(calculate_withholding_tax(table, Decimal::from(20000)), Decimal::ZERO);
/// assert_eq!(
///     calculate_withholding_tax(table, Decimal::from(25000)),
///     Decimal::new(83340, 2)
/// );
/// ```
pub fn calculate_withholding_tax(table: &TaxTable, taxable_income: Decimal) -> Decimal {
    let income = non_negative("taxable_income", taxable_income);
    let Some(bracket) = table
        .brackets
        .iter()
        .find(|bracket| bracket.upper_bound.is_none_or(|upper| income <= upper))
    else {
        return Decimal::ZERO;
    };

    let excess = (income - bracket.excess_over).max(Decimal::ZERO);
    round_money(bracket.base_tax + bracket.rate * excess)
}

/// Calculates the statutory deductions for one semi-monthly run.
///
/// # Arguments
///
/// * `tables` - The statutory tables
/// * `period_gross` - Gross pay for this run (the tax base)
/// * `period_type` - Which run is being processed
/// * `full_monthly_gross` - Monthly basic salary (the contribution base)
///
/// # Returns
///
/// On a mid-month run the three contributions are withheld and tax is zero.
/// On an end-month run the contributions are zero and tax is withheld on
/// the period gross.
pub fn calculate_deductions(
    tables: &StatutoryTables,
    period_gross: Decimal,
    period_type: PeriodType,
    full_monthly_gross: Decimal,
) -> DeductionResult {
    match period_type {
        PeriodType::MidMonth => DeductionResult::new(
            calculate_sss(tables, full_monthly_gross),
            calculate_philhealth(tables, full_monthly_gross),
            calculate_pagibig(tables, full_monthly_gross),
            Decimal::ZERO,
        ),
        PeriodType::EndMonth => DeductionResult::new(
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
            calculate_withholding_tax(&tables.withholding_tax, period_gross),
        ),
    }
}
