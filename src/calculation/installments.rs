//! Installment schedule generation and validation.
//!
//! This module generates N monthly installments from a total amount and a
//! start date, and validates caller-supplied ("personalized") installment
//! lists against the plan total.

use chrono::{Months, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};
use crate::models::{CustomInstallment, Installment, InstallmentStatus};

/// Tolerance in currency units for the personalized-installment sum check.
pub const CUSTOM_INSTALLMENT_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 1);

/// Generates a monthly installment schedule.
///
/// The per-installment base is the total divided by the count, truncated to
/// cents; the last installment absorbs the remainder so the schedule sums to
/// the total exactly. Due dates advance by calendar months from the start
/// date (the first installment falls due on the start date itself), with
/// day-of-month clamping for shorter months. All installments start
/// `Pending`.
///
/// # Arguments
///
/// * `total_amount` - The total to split; must not be negative
/// * `count` - The number of installments; must be at least 1
/// * `start_date` - The due date of the first installment
///
/// # Returns
///
/// Returns the schedule on success, or an error if:
/// - `count` is zero (`InvalidInstallmentCount`)
/// - `total_amount` is negative (`NegativeAmount`)
///
/// # Examples
///
/// ```
/// use grupo2s_engine::calculation::generate_installments;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let installments =
///     generate_installments(Decimal::from_str("1000").unwrap(), 3, start).unwrap();
///
/// assert_eq!(installments[0].amount, Decimal::from_str("333.33").unwrap());
/// assert_eq!(installments[2].amount, Decimal::from_str("333.34").unwrap());
/// ```
pub fn generate_installments(
    total_amount: Decimal,
    count: u32,
    start_date: NaiveDate,
) -> EngineResult<Vec<Installment>> {
    if count == 0 {
        return Err(EngineError::InvalidInstallmentCount { count });
    }

    if total_amount.is_sign_negative() && !total_amount.is_zero() {
        return Err(EngineError::NegativeAmount {
            field: "total_amount".to_string(),
            value: total_amount,
        });
    }

    let count_dec = Decimal::from(count);
    let base = (total_amount / count_dec).round_dp_with_strategy(2, RoundingStrategy::ToZero);
    let last = total_amount - base * Decimal::from(count - 1);

    let mut installments = Vec::with_capacity(count as usize);
    for i in 0..count {
        let due_date = start_date
            .checked_add_months(Months::new(i))
            .ok_or_else(|| EngineError::CalculationError {
                message: format!("due date overflow at installment {}", i + 1),
            })?;

        installments.push(Installment {
            number: i + 1,
            amount: if i == count - 1 { last } else { base },
            due_date,
            status: InstallmentStatus::Pending,
        });
    }

    Ok(installments)
}

/// Checks that personalized installment amounts sum to the plan total.
///
/// The engine does not generate personalized installments; the UI collects
/// them, and this check is the only contract: the sum must match the total
/// within [`CUSTOM_INSTALLMENT_TOLERANCE`] currency units.
///
/// # Examples
///
/// ```
/// use grupo2s_engine::calculation::validate_custom_installments;
/// use grupo2s_engine::models::CustomInstallment;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let installments = vec![
///     CustomInstallment { amount: dec("600"), due_date: date },
///     CustomInstallment { amount: dec("400"), due_date: date },
/// ];
///
/// assert!(validate_custom_installments(dec("1000"), &installments));
/// assert!(!validate_custom_installments(dec("1100"), &installments));
/// ```
pub fn validate_custom_installments(
    total_amount: Decimal,
    installments: &[CustomInstallment],
) -> bool {
    check_custom_installments(total_amount, installments).is_ok()
}

/// Result-returning variant of [`validate_custom_installments`].
///
/// Returns `InstallmentSumMismatch` carrying the expected and actual sums,
/// so callers can report the discrepancy instead of a bare yes/no.
pub fn check_custom_installments(
    total_amount: Decimal,
    installments: &[CustomInstallment],
) -> EngineResult<()> {
    let sum: Decimal = installments.iter().map(|i| i.amount).sum();
    if (sum - total_amount).abs() < CUSTOM_INSTALLMENT_TOLERANCE {
        Ok(())
    } else {
        Err(EngineError::InstallmentSumMismatch {
            expected: total_amount,
            actual: sum,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    /// IN-001: 1000 over 3 installments
    #[test]
    fn test_1000_over_3_installments() {
        let installments = generate_installments(dec("1000"), 3, date("2024-01-01")).unwrap();

        assert_eq!(installments.len(), 3);
        assert_eq!(installments[0].amount, dec("333.33"));
        assert_eq!(installments[1].amount, dec("333.33"));
        assert_eq!(installments[2].amount, dec("333.34"));

        assert_eq!(installments[0].due_date, date("2024-01-01"));
        assert_eq!(installments[1].due_date, date("2024-02-01"));
        assert_eq!(installments[2].due_date, date("2024-03-01"));
    }

    /// IN-002: equal division leaves no remainder
    #[test]
    fn test_1200_over_12_installments() {
        let installments = generate_installments(dec("1200"), 12, date("2024-01-01")).unwrap();

        assert_eq!(installments.len(), 12);
        for (i, installment) in installments.iter().enumerate() {
            assert_eq!(installment.number, (i + 1) as u32);
            assert_eq!(installment.amount, dec("100.00"));
            assert_eq!(installment.status, InstallmentStatus::Pending);
        }
    }

    /// IN-003: sum is exact to the cent for awkward divisions
    #[test]
    fn test_sum_exact_for_awkward_division() {
        let total = dec("100");
        let installments = generate_installments(total, 7, date("2024-01-01")).unwrap();

        let sum: Decimal = installments.iter().map(|i| i.amount).sum();
        assert_eq!(sum, total);

        // base = floor(100/7 * 100) / 100 = 14.28
        assert_eq!(installments[0].amount, dec("14.28"));
        assert_eq!(installments[6].amount, dec("14.32"));
    }

    #[test]
    fn test_single_installment_gets_whole_total() {
        let installments = generate_installments(dec("999.99"), 1, date("2024-05-10")).unwrap();

        assert_eq!(installments.len(), 1);
        assert_eq!(installments[0].number, 1);
        assert_eq!(installments[0].amount, dec("999.99"));
        assert_eq!(installments[0].due_date, date("2024-05-10"));
    }

    #[test]
    fn test_day_of_month_preserved() {
        let installments = generate_installments(dec("300"), 3, date("2024-03-15")).unwrap();

        assert_eq!(installments[0].due_date, date("2024-03-15"));
        assert_eq!(installments[1].due_date, date("2024-04-15"));
        assert_eq!(installments[2].due_date, date("2024-05-15"));
    }

    #[test]
    fn test_day_31_clamps_in_shorter_months() {
        let installments = generate_installments(dec("400"), 4, date("2024-01-31")).unwrap();

        assert_eq!(installments[0].due_date, date("2024-01-31"));
        // 2024 is a leap year
        assert_eq!(installments[1].due_date, date("2024-02-29"));
        assert_eq!(installments[2].due_date, date("2024-03-31"));
        assert_eq!(installments[3].due_date, date("2024-04-30"));
    }

    #[test]
    fn test_schedule_crosses_year_boundary() {
        let installments = generate_installments(dec("200"), 2, date("2024-12-20")).unwrap();

        assert_eq!(installments[0].due_date, date("2024-12-20"));
        assert_eq!(installments[1].due_date, date("2025-01-20"));
    }

    #[test]
    fn test_zero_total_generates_zero_amounts() {
        let installments = generate_installments(Decimal::ZERO, 3, date("2024-01-01")).unwrap();
        assert!(installments.iter().all(|i| i.amount.is_zero()));
    }

    #[test]
    fn test_zero_count_rejected() {
        let result = generate_installments(dec("1000"), 0, date("2024-01-01"));
        assert!(matches!(
            result,
            Err(EngineError::InvalidInstallmentCount { count: 0 })
        ));
    }

    #[test]
    fn test_negative_total_rejected() {
        let result = generate_installments(dec("-500"), 3, date("2024-01-01"));
        assert!(matches!(result, Err(EngineError::NegativeAmount { .. })));
    }

    #[test]
    fn test_validate_custom_installments_exact_sum() {
        let installments = vec![
            CustomInstallment {
                amount: dec("600"),
                due_date: date("2024-01-01"),
            },
            CustomInstallment {
                amount: dec("400"),
                due_date: date("2024-02-01"),
            },
        ];

        assert!(validate_custom_installments(dec("1000"), &installments));
    }

    #[test]
    fn test_validate_custom_installments_within_tolerance() {
        let installments = vec![CustomInstallment {
            amount: dec("999.95"),
            due_date: date("2024-01-01"),
        }];

        // 0.05 off is inside the 0.1 tolerance
        assert!(validate_custom_installments(dec("1000"), &installments));
    }

    #[test]
    fn test_validate_custom_installments_beyond_tolerance() {
        let installments = vec![CustomInstallment {
            amount: dec("999.50"),
            due_date: date("2024-01-01"),
        }];

        assert!(!validate_custom_installments(dec("1000"), &installments));
    }

    #[test]
    fn test_validate_custom_installments_empty_list_fails_nonzero_total() {
        assert!(!validate_custom_installments(dec("1000"), &[]));
        assert!(validate_custom_installments(Decimal::ZERO, &[]));
    }

    #[test]
    fn test_check_custom_installments_reports_sums() {
        let installments = vec![CustomInstallment {
            amount: dec("999.50"),
            due_date: date("2024-01-01"),
        }];

        let result = check_custom_installments(dec("1000"), &installments);
        match result {
            Err(EngineError::InstallmentSumMismatch { expected, actual }) => {
                assert_eq!(expected, dec("1000"));
                assert_eq!(actual, dec("999.50"));
            }
            other => panic!("expected InstallmentSumMismatch, got {:?}", other),
        }
    }
}
