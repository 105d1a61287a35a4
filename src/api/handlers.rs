//! HTTP request handlers for the Grupo 2S financial engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::NaiveTime;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    apportion, compute_hours_balance, compute_net_salary, compute_worked_hours,
    generate_installments, validate_custom_installments,
};
use crate::models::{CustomInstallment, HoursBalance, ShareSpec, TimeClockPunch};
use crate::validation::parse_time;

use super::request::{
    ApportionRequest, GenerateInstallmentsRequest, NetSalaryRequest, TimeClockRequest,
    ValidateInstallmentsRequest,
};
use super::response::{
    ApiError, ApiErrorResponse, ApportionResponse, InstallmentsResponse, TimeClockResponse,
    ValidationResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/apportion", post(apportion_handler))
        .route("/installments/generate", post(generate_installments_handler))
        .route("/installments/validate", post(validate_installments_handler))
        .route("/timeclock/hours", post(timeclock_hours_handler))
        .route("/payroll/net-salary", post(net_salary_handler))
        .with_state(state)
}

/// Maps a JSON extractor rejection to an API error body.
fn rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

fn bad_request(error: ApiError) -> Response {
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

fn ok_json<T: serde::Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(error: ApiErrorResponse) -> Response {
    (
        error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error.error),
    )
        .into_response()
}

/// Handler for the POST /apportion endpoint.
async fn apportion_handler(
    payload: Result<Json<ApportionRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing apportionment request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_error(correlation_id, rejection)),
    };

    let shares: Vec<ShareSpec> = request.shares.into_iter().map(Into::into).collect();

    match apportion(request.total_amount, &shares) {
        Ok(allocations) => {
            info!(
                correlation_id = %correlation_id,
                total_amount = %request.total_amount,
                shares_count = allocations.len(),
                "Apportionment completed"
            );
            ok_json(ApportionResponse {
                total_amount: request.total_amount,
                allocations,
            })
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Apportionment failed"
            );
            error_response(err.into())
        }
    }
}

/// Handler for the POST /installments/generate endpoint.
async fn generate_installments_handler(
    payload: Result<Json<GenerateInstallmentsRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing installment generation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_error(correlation_id, rejection)),
    };

    match generate_installments(request.total_amount, request.count, request.start_date) {
        Ok(installments) => {
            info!(
                correlation_id = %correlation_id,
                total_amount = %request.total_amount,
                count = request.count,
                "Installment schedule generated"
            );
            ok_json(InstallmentsResponse {
                total_amount: request.total_amount,
                installments,
            })
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Installment generation failed"
            );
            error_response(err.into())
        }
    }
}

/// Handler for the POST /installments/validate endpoint.
async fn validate_installments_handler(
    payload: Result<Json<ValidateInstallmentsRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing installment validation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_error(correlation_id, rejection)),
    };

    let installments: Vec<CustomInstallment> =
        request.installments.into_iter().map(Into::into).collect();

    let valid = validate_custom_installments(request.total_amount, &installments);
    info!(
        correlation_id = %correlation_id,
        total_amount = %request.total_amount,
        installments_count = installments.len(),
        valid,
        "Installment validation completed"
    );
    ok_json(ValidationResponse { valid })
}

/// Parses an optional `HH:MM` punch string.
fn parse_punch(field: &str, value: Option<&str>) -> Result<Option<NaiveTime>, ApiError> {
    match value {
        None => Ok(None),
        Some(raw) => parse_time(raw).map(Some).ok_or_else(|| {
            ApiError::with_details(
                "VALIDATION_ERROR",
                format!("Invalid time for '{}': {}", field, raw),
                "Punch times must use the HH:MM format",
            )
        }),
    }
}

/// Handler for the POST /timeclock/hours endpoint.
async fn timeclock_hours_handler(
    payload: Result<Json<TimeClockRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing time-clock request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_error(correlation_id, rejection)),
    };

    let punch = TimeClockPunch {
        morning_in: match parse_punch("morning_in", request.morning_in.as_deref()) {
            Ok(t) => t,
            Err(err) => return bad_request(err),
        },
        lunch_out: match parse_punch("lunch_out", request.lunch_out.as_deref()) {
            Ok(t) => t,
            Err(err) => return bad_request(err),
        },
        afternoon_in: match parse_punch("afternoon_in", request.afternoon_in.as_deref()) {
            Ok(t) => t,
            Err(err) => return bad_request(err),
        },
        evening_out: match parse_punch("evening_out", request.evening_out.as_deref()) {
            Ok(t) => t,
            Err(err) => return bad_request(err),
        },
    };

    let worked_hours = compute_worked_hours(
        punch.morning_in,
        punch.lunch_out,
        punch.afternoon_in,
        punch.evening_out,
    );

    let (balance, new_balance) = match request.contracted_hours {
        Some(contracted_hours) => {
            let inputs = HoursBalance {
                worked_hours,
                contracted_hours,
                previous_balance: request.previous_balance.unwrap_or(Decimal::ZERO),
            };
            let updated = compute_hours_balance(
                inputs.worked_hours,
                inputs.contracted_hours,
                inputs.previous_balance,
            );
            (Some(inputs), Some(updated))
        }
        None => (None, None),
    };

    info!(
        correlation_id = %correlation_id,
        worked_hours = %worked_hours,
        "Worked hours computed"
    );
    ok_json(TimeClockResponse {
        worked_hours,
        balance,
        new_balance,
    })
}

/// Handler for the POST /payroll/net-salary endpoint.
async fn net_salary_handler(
    State(state): State<AppState>,
    payload: Result<Json<NetSalaryRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing net-salary request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_error(correlation_id, rejection)),
    };

    let loader = state.tax_tables();
    let tables = match request.reference_date {
        Some(date) => match loader.tables_for(date) {
            Ok(tables) => tables,
            Err(err) => {
                warn!(
                    correlation_id = %correlation_id,
                    error = %err,
                    "Tax table lookup failed"
                );
                return error_response(err.into());
            }
        },
        None => loader.latest(),
    };

    let (base_salary, additions, deductions, dependents) = request.parts();
    let result = compute_net_salary(base_salary, additions, deductions, dependents, tables);

    info!(
        correlation_id = %correlation_id,
        base_salary = %result.base_salary,
        net_salary = %result.net_salary,
        "Net salary computed"
    );
    ok_json(result)
}
