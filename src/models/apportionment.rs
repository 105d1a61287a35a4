//! Apportionment (rateio) models.
//!
//! This module defines the share types used when splitting a monetary total
//! across cost centers or business units by percentage.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single share of an apportionment request.
///
/// The `id` identifies the cost center or company receiving the share;
/// `percent` is the share of the total in the 0-100 range.
///
/// # Example
///
/// ```
/// use grupo2s_engine::models::ShareSpec;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let share = ShareSpec {
///     id: "unidade_sp".to_string(),
///     percent: Decimal::from_str("60").unwrap(),
/// };
/// assert_eq!(share.id, "unidade_sp");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareSpec {
    /// Identifier of the cost center or company receiving this share.
    pub id: String,
    /// Percentage of the total allocated to this share (0-100).
    pub percent: Decimal,
}

/// A single line of an apportionment result.
///
/// Input order is preserved: the n-th allocation corresponds to the n-th
/// share of the request. The amount is computed independently per line;
/// no remainder redistribution is applied (unlike installment generation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareAllocation {
    /// Identifier of the cost center or company receiving this allocation.
    pub id: String,
    /// Percentage of the total allocated to this line (0-100).
    pub percent: Decimal,
    /// The monetary amount: `total * percent / 100`.
    pub amount: Decimal,
}
