//! Request types for the Grupo 2S financial engine API.
//!
//! This module defines the JSON request structures for the engine endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Additions, CustomInstallment, Deductions, ShareSpec};

/// Request body for the `/apportion` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApportionRequest {
    /// The total amount to split across the shares.
    pub total_amount: Decimal,
    /// The shares to apportion the total across.
    pub shares: Vec<ShareRequest>,
}

/// A single share in an apportionment request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareRequest {
    /// Identifier of the entity receiving this share (e.g. a cost center).
    pub id: String,
    /// The percentage of the total assigned to this share.
    pub percent: Decimal,
}

/// Request body for the `/installments/generate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateInstallmentsRequest {
    /// The total amount to split into installments.
    pub total_amount: Decimal,
    /// The number of installments to generate.
    pub count: u32,
    /// The due date of the first installment.
    pub start_date: NaiveDate,
}

/// Request body for the `/installments/validate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateInstallmentsRequest {
    /// The total the custom installments must add up to.
    pub total_amount: Decimal,
    /// The hand-edited installments to check.
    pub installments: Vec<CustomInstallmentRequest>,
}

/// A single hand-edited installment in a validation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomInstallmentRequest {
    /// The installment amount.
    pub amount: Decimal,
    /// The installment due date.
    pub due_date: NaiveDate,
}

/// Request body for the `/timeclock/hours` endpoint.
///
/// Punch times are `HH:MM` strings; any of the four may be omitted.
/// When `contracted_hours` is present the response also carries the
/// updated hours balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeClockRequest {
    /// Morning clock-in.
    #[serde(default)]
    pub morning_in: Option<String>,
    /// Clock-out for lunch.
    #[serde(default)]
    pub lunch_out: Option<String>,
    /// Clock-in after lunch.
    #[serde(default)]
    pub afternoon_in: Option<String>,
    /// End-of-day clock-out.
    #[serde(default)]
    pub evening_out: Option<String>,
    /// Contracted hours for the day, for balance tracking.
    #[serde(default)]
    pub contracted_hours: Option<Decimal>,
    /// Balance carried over from previous periods.
    #[serde(default)]
    pub previous_balance: Option<Decimal>,
}

/// Request body for the `/payroll/net-salary` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetSalaryRequest {
    /// The contractual base salary.
    pub base_salary: Decimal,
    /// Salary additions; omitted fields default to zero.
    #[serde(default)]
    pub additions: Additions,
    /// Manual deductions; omitted fields default to zero.
    #[serde(default)]
    pub deductions: Deductions,
    /// Number of IRPF dependents.
    #[serde(default)]
    pub dependents: u32,
    /// Date used to select the tax tables; defaults to the latest tables.
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
}

impl From<ShareRequest> for ShareSpec {
    fn from(req: ShareRequest) -> Self {
        ShareSpec {
            id: req.id,
            percent: req.percent,
        }
    }
}

impl From<CustomInstallmentRequest> for CustomInstallment {
    fn from(req: CustomInstallmentRequest) -> Self {
        CustomInstallment {
            amount: req.amount,
            due_date: req.due_date,
        }
    }
}

impl NetSalaryRequest {
    /// Splits the request into the calculator's input types.
    pub fn parts(&self) -> (Decimal, &Additions, &Deductions, u32) {
        (
            self.base_salary,
            &self.additions,
            &self.deductions,
            self.dependents,
        )
    }
}
