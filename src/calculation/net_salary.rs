//! Net salary computation.
//!
//! This module combines the base salary, additions, manual deductions, and
//! the computed INSS/IRPF into the full salary breakdown.

use rust_decimal::Decimal;

use crate::config::TaxTables;
use crate::models::{Additions, Deductions, SalaryComputation};

use super::inss::compute_inss;
use super::irpf::compute_irpf;

/// Computes the full net-salary breakdown.
///
/// Additions are summed as-is; INSS and IRPF are computed from the base
/// salary and added to the manual deductions. The result satisfies
/// `net_salary = base_salary + total_additions - total_deductions`.
///
/// All inputs are handled permissively: missing addition/deduction fields
/// default to zero at the model level, and there are no error conditions.
///
/// # Examples
///
/// ```no_run
/// use grupo2s_engine::calculation::compute_net_salary;
/// use grupo2s_engine::config::TaxTableLoader;
/// use grupo2s_engine::models::{Additions, Deductions};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let loader = TaxTableLoader::load("./config/grupo2s").unwrap();
/// let tables = loader.latest();
///
/// let result = compute_net_salary(
///     Decimal::from_str("3000").unwrap(),
///     &Additions::default(),
///     &Deductions::default(),
///     0,
///     tables,
/// );
/// assert_eq!(
///     result.net_salary,
///     result.base_salary + result.total_additions - result.total_deductions,
/// );
/// ```
pub fn compute_net_salary(
    base_salary: Decimal,
    additions: &Additions,
    deductions: &Deductions,
    dependents: u32,
    tables: &TaxTables,
) -> SalaryComputation {
    let inss = compute_inss(base_salary, tables);
    let irpf = compute_irpf(base_salary, dependents, tables);

    let total_additions = additions.total();
    let total_deductions = deductions.total() + inss + irpf;

    SalaryComputation {
        base_salary,
        total_additions,
        total_deductions,
        inss,
        irpf,
        net_salary: base_salary + total_additions - total_deductions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::inss::tests::tables_2024;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// NS-001: base salary only
    #[test]
    fn test_base_salary_only() {
        let tables = tables_2024();
        let result = compute_net_salary(
            dec("3000"),
            &Additions::default(),
            &Deductions::default(),
            0,
            &tables,
        );

        assert_eq!(result.base_salary, dec("3000"));
        assert_eq!(result.inss, dec("360.00"));
        assert_eq!(result.irpf, dec("28.56"));
        assert_eq!(result.total_additions, Decimal::ZERO);
        assert_eq!(result.total_deductions, dec("388.56"));
        assert_eq!(result.net_salary, dec("2611.44"));
    }

    /// NS-002: additions raise the net without affecting taxes
    #[test]
    fn test_additions_do_not_affect_taxes() {
        let tables = tables_2024();
        let additions = Additions {
            transport_voucher: dec("150"),
            meal_voucher: dec("300"),
            bonus: dec("500"),
            other: Decimal::ZERO,
        };

        let result = compute_net_salary(
            dec("3000"),
            &additions,
            &Deductions::default(),
            0,
            &tables,
        );

        // Taxes computed on the base salary alone
        assert_eq!(result.inss, dec("360.00"));
        assert_eq!(result.irpf, dec("28.56"));
        assert_eq!(result.total_additions, dec("950"));
        assert_eq!(result.net_salary, dec("3561.44"));
    }

    /// NS-003: manual deductions stack with taxes
    #[test]
    fn test_manual_deductions_stack_with_taxes() {
        let tables = tables_2024();
        let deductions = Deductions {
            health_plan: dec("250"),
            advances: dec("100"),
            other: Decimal::ZERO,
        };

        let result = compute_net_salary(
            dec("3000"),
            &Additions::default(),
            &deductions,
            0,
            &tables,
        );

        assert_eq!(result.total_deductions, dec("738.56"));
        assert_eq!(result.net_salary, dec("2261.44"));
    }

    #[test]
    fn test_net_salary_invariant_holds() {
        let tables = tables_2024();
        let additions = Additions {
            bonus: dec("1234.56"),
            ..Additions::default()
        };
        let deductions = Deductions {
            health_plan: dec("432.10"),
            ..Deductions::default()
        };

        let result = compute_net_salary(dec("5000"), &additions, &deductions, 2, &tables);

        assert_eq!(
            result.net_salary,
            result.base_salary + result.total_additions - result.total_deductions
        );
    }

    #[test]
    fn test_exempt_salary_has_no_irpf() {
        let tables = tables_2024();
        let result = compute_net_salary(
            dec("1412.00"),
            &Additions::default(),
            &Deductions::default(),
            0,
            &tables,
        );

        assert_eq!(result.inss, dec("105.90"));
        assert_eq!(result.irpf, Decimal::ZERO);
        assert_eq!(result.net_salary, dec("1306.10"));
    }

    #[test]
    fn test_capped_inss_for_high_salary() {
        let tables = tables_2024();
        let result = compute_net_salary(
            dec("10000"),
            &Additions::default(),
            &Deductions::default(),
            0,
            &tables,
        );

        assert_eq!(result.inss, dec("7786.02") * dec("0.14"));
    }

    #[test]
    fn test_computation_is_pure() {
        let tables = tables_2024();
        let first = compute_net_salary(
            dec("3000"),
            &Additions::default(),
            &Deductions::default(),
            1,
            &tables,
        );
        let second = compute_net_salary(
            dec("3000"),
            &Additions::default(),
            &Deductions::default(),
            1,
            &tables,
        );
        assert_eq!(first, second);
    }
}
