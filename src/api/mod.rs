//! HTTP API module for the Grupo 2S financial engine.
//!
//! This module provides the REST API endpoints for apportionment,
//! installment scheduling, worked-hours computation, and payroll.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    ApportionRequest, GenerateInstallmentsRequest, NetSalaryRequest, TimeClockRequest,
    ValidateInstallmentsRequest,
};
pub use response::{
    ApiError, ApportionResponse, InstallmentsResponse, TimeClockResponse, ValidationResponse,
};
pub use state::AppState;
