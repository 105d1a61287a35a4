//! Form-level validators for the Grupo 2S ERP.
//!
//! Pure boolean predicates with no side effects and no errors; forms run
//! these before invoking the calculation functions. Formatting of valid
//! values for display lives in [`crate::format`].

mod contact;
mod document;
mod fields;
mod vehicle;

pub use contact::{is_valid_cep, is_valid_email, is_valid_phone};
pub use document::{is_valid_cnpj, is_valid_cpf};
pub use fields::{
    is_valid_date_range, is_valid_password, is_valid_percentage, is_valid_time, parse_time,
};
pub use vehicle::{is_valid_chassi, is_valid_placa, is_valid_renavam};
