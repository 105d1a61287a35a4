//! Cost apportionment (rateio) calculation.
//!
//! This module splits a monetary total across N cost centers by percentage.
//! Each line is computed independently as `total * percent / 100`; no
//! remainder redistribution is applied, unlike installment generation.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{ShareAllocation, ShareSpec};

/// Tolerance for the strict percentage-sum check: `|sum - 100| < 0.01`.
pub const APPORTIONMENT_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Looser tolerance used for UI-entered percentages: `|sum - 100| < 0.5`.
///
/// The two tolerances are kept as distinct constants on purpose; different
/// call paths in the ERP rely on different strictness.
pub const FORM_APPORTIONMENT_TOLERANCE: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

const ONE_HUNDRED: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

fn percent_sum(shares: &[ShareSpec]) -> Decimal {
    shares.iter().map(|s| s.percent).sum()
}

/// Checks that share percentages sum to 100 within the strict tolerance.
///
/// # Examples
///
/// ```
/// use grupo2s_engine::calculation::validate_apportionment;
/// use grupo2s_engine::models::ShareSpec;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let share = |id: &str, p: &str| ShareSpec {
///     id: id.to_string(),
///     percent: Decimal::from_str(p).unwrap(),
/// };
///
/// assert!(validate_apportionment(&[share("1", "60"), share("2", "40")]));
/// assert!(!validate_apportionment(&[share("1", "50"), share("2", "40")]));
/// ```
pub fn validate_apportionment(shares: &[ShareSpec]) -> bool {
    validate_apportionment_within(shares, APPORTIONMENT_TOLERANCE)
}

/// Checks that share percentages sum to 100 within an explicit tolerance.
///
/// Form-level callers pass [`FORM_APPORTIONMENT_TOLERANCE`] to accept the
/// rounding slack of hand-entered percentages.
pub fn validate_apportionment_within(shares: &[ShareSpec], tolerance: Decimal) -> bool {
    (percent_sum(shares) - ONE_HUNDRED).abs() < tolerance
}

/// Splits a monetary total across shares by percentage.
///
/// Each allocation is computed independently as `total * percent / 100`,
/// preserving input order. Amounts are not rounded here; display rounding is
/// the caller's concern.
///
/// # Arguments
///
/// * `total_amount` - The total to split; must not be negative
/// * `shares` - The percentage shares; must be non-empty, each in 0-100,
///   summing to 100 within [`APPORTIONMENT_TOLERANCE`]
///
/// # Returns
///
/// Returns the allocations on success, or an error if:
/// - `shares` is empty (`EmptyShares`)
/// - `total_amount` is negative (`NegativeAmount`)
/// - any percentage is outside 0-100 (`InvalidSharePercent`)
/// - the percentages do not sum to 100 (`InvalidApportionment`)
///
/// # Examples
///
/// ```
/// use grupo2s_engine::calculation::apportion;
/// use grupo2s_engine::models::ShareSpec;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// let shares = vec![
///     ShareSpec { id: "1".to_string(), percent: dec("60") },
///     ShareSpec { id: "2".to_string(), percent: dec("40") },
/// ];
///
/// let allocations = apportion(dec("1000"), &shares).unwrap();
/// assert_eq!(allocations[0].amount, dec("600"));
/// assert_eq!(allocations[1].amount, dec("400"));
/// ```
pub fn apportion(total_amount: Decimal, shares: &[ShareSpec]) -> EngineResult<Vec<ShareAllocation>> {
    if shares.is_empty() {
        return Err(EngineError::EmptyShares);
    }

    if total_amount.is_sign_negative() && !total_amount.is_zero() {
        return Err(EngineError::NegativeAmount {
            field: "total_amount".to_string(),
            value: total_amount,
        });
    }

    for share in shares {
        if share.percent < Decimal::ZERO || share.percent > ONE_HUNDRED {
            return Err(EngineError::InvalidSharePercent {
                id: share.id.clone(),
                percent: share.percent,
            });
        }
    }

    if !validate_apportionment(shares) {
        return Err(EngineError::InvalidApportionment {
            percent_sum: percent_sum(shares),
        });
    }

    Ok(shares
        .iter()
        .map(|share| ShareAllocation {
            id: share.id.clone(),
            percent: share.percent,
            amount: total_amount * share.percent / ONE_HUNDRED,
        })
        .collect())
}
