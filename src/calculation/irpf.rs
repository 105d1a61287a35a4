//! IRPF withholding calculation.
//!
//! This module computes the IRPF income-tax withholding from the base salary
//! using the configured bracket table. Like INSS, the matching bracket's rate
//! applies to the full calculation base once, with a flat deduction - the
//! ERP's payslips were never issued progressively and that behavior is
//! preserved.

use rust_decimal::Decimal;

use crate::config::TaxTables;

use super::inss::compute_inss;

/// Computes the IRPF withholding for a base salary.
///
/// The calculation base is the salary minus the INSS contribution minus the
/// per-dependent deduction. The first bracket (up to the exemption ceiling)
/// carries a zero rate, so exempt and negative bases both return zero.
///
/// # Arguments
///
/// * `base_salary` - The gross base salary
/// * `dependents` - Number of dependents for the deduction
/// * `tables` - The effective tax tables
///
/// # Examples
///
/// ```no_run
/// use grupo2s_engine::calculation::compute_irpf;
/// use grupo2s_engine::config::TaxTableLoader;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let loader = TaxTableLoader::load("./config/grupo2s").unwrap();
/// let tables = loader.latest();
///
/// // 3000 - 360 INSS = 2640 calc base, 7.5% bracket
/// let irpf = compute_irpf(Decimal::from_str("3000").unwrap(), 0, tables);
/// assert_eq!(irpf, Decimal::from_str("28.56").unwrap());
/// ```
pub fn compute_irpf(base_salary: Decimal, dependents: u32, tables: &TaxTables) -> Decimal {
    let inss = compute_inss(base_salary, tables);
    let dependent_deduction = tables.dependent_deduction * Decimal::from(dependents);
    let calc_base = base_salary - inss - dependent_deduction;

    for bracket in &tables.irpf.brackets {
        let matches = match bracket.ceiling {
            Some(ceiling) => calc_base <= ceiling,
            None => true,
        };
        if matches {
            return calc_base * bracket.rate - bracket.deduction;
        }
    }

    Decimal::ZERO
}
