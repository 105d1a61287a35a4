//! pt-BR display formatting helpers.
//!
//! The engine itself never formats values; these helpers exist for the UI
//! collaborators and their outputs are pinned by compatibility tests
//! (`R$ 1.234,56`, `dd/mm/yyyy`, punctuated CPF/CNPJ).

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

/// Groups an ASCII digit string into thousands separated by `.`.
fn group_thousands(digits: &str) -> String {
    let bytes = digits.as_bytes();
    let mut grouped = String::with_capacity(bytes.len() + bytes.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*b as char);
    }
    grouped
}

/// Formats a monetary value as Brazilian currency.
///
/// Two decimal places (half-away-from-zero), `.` thousands separator, `,`
/// decimal separator, and the sign before the currency symbol.
///
/// # Examples
///
/// ```
/// use grupo2s_engine::format::format_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// assert_eq!(format_currency(dec("1234.56")), "R$ 1.234,56");
/// assert_eq!(format_currency(dec("-1000")), "-R$ 1.000,00");
/// ```
pub fn format_currency(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let abs = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = match abs.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (abs.as_str(), "00"),
    };

    format!(
        "{}R$ {},{}",
        if negative { "-" } else { "" },
        group_thousands(int_part),
        frac_part,
    )
}

/// Formats a date as `dd/mm/yyyy`.
///
/// # Examples
///
/// ```
/// use grupo2s_engine::format::format_date;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
/// assert_eq!(format_date(date), "05/01/2024");
/// ```
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Formats a CPF as `000.000.000-00`.
///
/// Inputs without exactly 11 digits are returned unchanged.
pub fn format_cpf(cpf: &str) -> String {
    let digits: String = cpf.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() != 11 {
        return cpf.to_string();
    }

    format!(
        "{}.{}.{}-{}",
        &digits[..3],
        &digits[3..6],
        &digits[6..9],
        &digits[9..],
    )
}

/// Formats a CNPJ as `00.000.000/0000-00`.
///
/// Inputs without exactly 14 digits are returned unchanged.
pub fn format_cnpj(cnpj: &str) -> String {
    let digits: String = cnpj.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() != 14 {
        return cnpj.to_string();
    }

    format!(
        "{}.{}.{}/{}-{}",
        &digits[..2],
        &digits[2..5],
        &digits[5..8],
        &digits[8..12],
        &digits[12..],
    )
}
