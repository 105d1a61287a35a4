//! Installment (parcela) models.
//!
//! This module defines the installment types produced by the installment
//! scheduler and the custom installment input accepted by the personalized
//! mode.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The payment status of an installment.
///
/// The scheduler always emits `Pending`; status transitions are applied by
/// the persistence layer, never by this engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallmentStatus {
    /// Not yet paid and not past its due date.
    Pending,
    /// Paid in full.
    Paid,
    /// Past its due date without payment.
    Overdue,
}

/// A single installment of a payment plan.
///
/// # Example
///
/// ```
/// use grupo2s_engine::models::{Installment, InstallmentStatus};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let installment = Installment {
///     number: 1,
///     amount: Decimal::from_str("333.33").unwrap(),
///     due_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     status: InstallmentStatus::Pending,
/// };
/// assert_eq!(installment.number, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Installment {
    /// 1-based position of this installment in the plan.
    pub number: u32,
    /// The amount due for this installment.
    pub amount: Decimal,
    /// The date this installment falls due.
    pub due_date: NaiveDate,
    /// The payment status of this installment.
    pub status: InstallmentStatus,
}

/// A caller-supplied installment in the personalized mode.
///
/// The UI collects these values; the engine only validates that their sum
/// matches the plan total within tolerance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomInstallment {
    /// The amount due for this installment.
    pub amount: Decimal,
    /// The date this installment falls due.
    pub due_date: NaiveDate,
}
