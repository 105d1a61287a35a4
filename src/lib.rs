//! Financial calculation engine for the Grupo 2S ERP.
//!
//! This crate provides the deterministic numeric core shared by the ERP
//! front-ends: cost apportionment (rateio) across business units, installment
//! schedule generation, worked-hours computation from time-clock punches,
//! Brazilian payroll tax calculation (INSS/IRPF), and the form-level
//! validators that run before any of those.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod validation;
