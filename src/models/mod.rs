//! Core data models for the financial calculation engine.
//!
//! This module contains all the domain value types used throughout the engine.
//! Every type here is a transient value passed into and returned from pure
//! functions; nothing carries identity or lifecycle.

mod apportionment;
mod installment;
mod payroll;
mod time_clock;

pub use apportionment::{ShareAllocation, ShareSpec};
pub use installment::{CustomInstallment, Installment, InstallmentStatus};
pub use payroll::{Additions, Deductions, SalaryComputation};
pub use time_clock::{HoursBalance, TimeClockPunch};
