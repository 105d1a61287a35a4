//! INSS contribution calculation.
//!
//! This module computes the INSS social-security contribution from the
//! contribution salary using the configured bracket table.
//!
//! ## Bracket semantics
//!
//! The matching bracket's rate applies to the WHOLE salary - brackets are not
//! accumulated progressively across boundaries. Real INSS is progressive, but
//! the ERP's historical payslips were issued under the single-bracket rule,
//! so it is preserved as-is. Above the last bracket ceiling the contribution
//! is the fixed cap `cap.ceiling * cap.rate`.

use rust_decimal::Decimal;

use crate::config::TaxTables;

/// Computes the INSS contribution for a contribution salary.
///
/// Negative salaries produce a zero contribution, keeping downstream
/// net-salary arithmetic total.
///
/// # Examples
///
/// ```no_run
/// use grupo2s_engine::calculation::compute_inss;
/// use grupo2s_engine::config::TaxTableLoader;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let loader = TaxTableLoader::load("./config/grupo2s").unwrap();
/// let tables = loader.latest();
///
/// // 1412.00 falls in the 7.5% bracket
/// let inss = compute_inss(Decimal::from_str("1412.00").unwrap(), tables);
/// assert_eq!(inss, Decimal::from_str("105.90").unwrap());
/// ```
pub fn compute_inss(base_salary: Decimal, tables: &TaxTables) -> Decimal {
    if base_salary <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    for bracket in &tables.inss.brackets {
        if base_salary <= bracket.ceiling {
            return base_salary * bracket.rate;
        }
    }

    tables.inss.cap.ceiling * tables.inss.cap.rate
}
