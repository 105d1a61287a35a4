//! Payroll models.
//!
//! This module defines the salary addition/deduction inputs and the full
//! salary computation breakdown returned by the payroll calculator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Salary additions for a pay period.
///
/// Every field defaults to zero when missing, matching the permissive
/// handling of optional form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Additions {
    /// Transport voucher (vale transporte).
    #[serde(default)]
    pub transport_voucher: Decimal,
    /// Meal voucher (vale refeicao).
    #[serde(default)]
    pub meal_voucher: Decimal,
    /// Discretionary bonus.
    #[serde(default)]
    pub bonus: Decimal,
    /// Any other addition.
    #[serde(default)]
    pub other: Decimal,
}

impl Additions {
    /// Returns the sum of all addition fields.
    pub fn total(&self) -> Decimal {
        self.transport_voucher + self.meal_voucher + self.bonus + self.other
    }
}

/// Manual salary deductions for a pay period.
///
/// These exclude INSS and IRPF, which the payroll calculator computes and
/// adds on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Deductions {
    /// Health plan contribution.
    #[serde(default)]
    pub health_plan: Decimal,
    /// Salary advances already paid out.
    #[serde(default)]
    pub advances: Decimal,
    /// Any other deduction.
    #[serde(default)]
    pub other: Decimal,
}

impl Deductions {
    /// Returns the sum of all manual deduction fields.
    pub fn total(&self) -> Decimal {
        self.health_plan + self.advances + self.other
    }
}

/// The complete breakdown of a net-salary computation.
///
/// Invariant: `net_salary = base_salary + total_additions - total_deductions`,
/// with `total_deductions` including both the manual deductions and the
/// computed INSS and IRPF.
///
/// # Example
///
/// ```
/// use grupo2s_engine::models::SalaryComputation;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// let computation = SalaryComputation {
///     base_salary: dec("3000.00"),
///     total_additions: dec("500.00"),
///     total_deductions: dec("800.00"),
///     inss: dec("270.00"),
///     irpf: dec("0.00"),
///     net_salary: dec("2700.00"),
/// };
/// assert_eq!(
///     computation.net_salary,
///     computation.base_salary + computation.total_additions - computation.total_deductions,
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryComputation {
    /// The contractual base salary the computation started from.
    pub base_salary: Decimal,
    /// Sum of all additions.
    pub total_additions: Decimal,
    /// Sum of all deductions, including INSS and IRPF.
    pub total_deductions: Decimal,
    /// The computed INSS contribution.
    pub inss: Decimal,
    /// The computed IRPF withholding.
    pub irpf: Decimal,
    /// The resulting net salary.
    pub net_salary: Decimal,
}
