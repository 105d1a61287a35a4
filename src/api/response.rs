//! Response types for the Grupo 2S financial engine API.
//!
//! This module defines the success bodies for each endpoint and the
//! error response structures for the HTTP API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{HoursBalance, Installment, ShareAllocation};

/// Response body for the `/apportion` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApportionResponse {
    /// The total amount that was apportioned.
    pub total_amount: Decimal,
    /// The computed allocations, one per share.
    pub allocations: Vec<ShareAllocation>,
}

/// Response body for the `/installments/generate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallmentsResponse {
    /// The total the installments add up to.
    pub total_amount: Decimal,
    /// The generated installment schedule.
    pub installments: Vec<Installment>,
}

/// Response body for the `/installments/validate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResponse {
    /// Whether the submitted data passed validation.
    pub valid: bool,
}

/// Response body for the `/timeclock/hours` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeClockResponse {
    /// The worked hours computed from the punches.
    pub worked_hours: Decimal,
    /// The balance inputs, echoed back when contracted hours were supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<HoursBalance>,
    /// The updated balance, when contracted hours were supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_balance: Option<Decimal>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::TableNotFound { date } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "TABLE_NOT_FOUND",
                    format!("No tax tables in effect on {}", date),
                    "The requested reference date predates every loaded tax table",
                ),
            },
            EngineError::InvalidApportionment { percent_sum } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_APPORTIONMENT",
                    format!("Apportionment percentages sum to {}%, expected 100%", percent_sum),
                    "The share percentages must add up to 100",
                ),
            },
            EngineError::EmptyShares => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation_error("At least one share is required"),
            },
            EngineError::InvalidSharePercent { id, percent } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_SHARE_PERCENT",
                    format!("Share '{}' has invalid percentage {}", id, percent),
                    "Each share percentage must be between 0 and 100",
                ),
            },
            EngineError::InvalidInstallmentCount { count } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_INSTALLMENT_COUNT",
                    format!("Invalid installment count: {}", count),
                    "The installment count must be at least 1",
                ),
            },
            EngineError::InstallmentSumMismatch { expected, actual } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INSTALLMENT_SUM_MISMATCH",
                    format!("Installments sum to {}, expected {}", actual, expected),
                    "The installment amounts must add up to the total",
                ),
            },
            EngineError::NegativeAmount { field, value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "NEGATIVE_AMOUNT",
                    format!("Field '{}' must not be negative, got {}", field, value),
                    "Monetary inputs to this endpoint must be zero or positive",
                ),
            },
            EngineError::CalculationError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CALCULATION_ERROR", "Calculation failed", message),
            },
        }
    }
}
