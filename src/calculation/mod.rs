//! Calculation logic for the financial calculation engine.
//!
//! This module contains all the pure calculation functions: cost
//! apportionment across business units, installment schedule generation and
//! validation, worked-hours computation from time-clock punches, INSS and
//! IRPF tax calculation, and net-salary computation.

mod apportionment;
mod inss;
mod installments;
mod irpf;
mod net_salary;
mod worked_hours;

pub use apportionment::{
    APPORTIONMENT_TOLERANCE, FORM_APPORTIONMENT_TOLERANCE, apportion, validate_apportionment,
    validate_apportionment_within,
};
pub use inss::compute_inss;
pub use installments::{
    CUSTOM_INSTALLMENT_TOLERANCE, check_custom_installments, generate_installments,
    validate_custom_installments,
};
pub use irpf::compute_irpf;
pub use net_salary::compute_net_salary;
pub use worked_hours::{compute_hours_balance, compute_worked_hours};
