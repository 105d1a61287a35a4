//! Error types for the Grupo 2S financial calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during calculation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the financial calculation engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use grupo2s_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No tax table is effective for the given date.
    #[error("No tax table effective on date {date}")]
    TableNotFound {
        /// The date for which a table was requested.
        date: NaiveDate,
    },

    /// Apportionment percentages do not sum to 100 within tolerance.
    #[error("Apportionment percentages sum to {percent_sum}, expected 100")]
    InvalidApportionment {
        /// The actual sum of the share percentages.
        percent_sum: Decimal,
    },

    /// An apportionment was requested with no shares.
    #[error("Apportionment requires at least one share")]
    EmptyShares,

    /// A share percentage was outside the 0-100 range.
    #[error("Share '{id}' has invalid percentage {percent}")]
    InvalidSharePercent {
        /// The ID of the offending share.
        id: String,
        /// The out-of-range percentage.
        percent: Decimal,
    },

    /// An installment plan was requested with zero installments.
    #[error("Installment count must be at least 1, got {count}")]
    InvalidInstallmentCount {
        /// The invalid count.
        count: u32,
    },

    /// Custom installment amounts do not sum to the plan total.
    #[error("Installments sum to {actual}, expected {expected}")]
    InstallmentSumMismatch {
        /// The plan total.
        expected: Decimal,
        /// The actual sum of the supplied installments.
        actual: Decimal,
    },

    /// A monetary input that must be non-negative was negative.
    #[error("Field '{field}' must not be negative, got {value}")]
    NegativeAmount {
        /// The name of the offending field.
        field: String,
        /// The negative value that was supplied.
        value: Decimal,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_table_not_found_displays_date() {
        let error = EngineError::TableNotFound {
            date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
        };
        assert_eq!(error.to_string(), "No tax table effective on date 2020-01-01");
    }

    #[test]
    fn test_invalid_apportionment_displays_sum() {
        let error = EngineError::InvalidApportionment {
            percent_sum: Decimal::from_str("90").unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Apportionment percentages sum to 90, expected 100"
        );
    }

    #[test]
    fn test_invalid_installment_count_displays_count() {
        let error = EngineError::InvalidInstallmentCount { count: 0 };
        assert_eq!(error.to_string(), "Installment count must be at least 1, got 0");
    }

    #[test]
    fn test_installment_sum_mismatch_displays_both_values() {
        let error = EngineError::InstallmentSumMismatch {
            expected: Decimal::from_str("1000.00").unwrap(),
            actual: Decimal::from_str("999.50").unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Installments sum to 999.50, expected 1000.00"
        );
    }

    #[test]
    fn test_negative_amount_displays_field_and_value() {
        let error = EngineError::NegativeAmount {
            field: "total_amount".to_string(),
            value: Decimal::from_str("-10").unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Field 'total_amount' must not be negative, got -10"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_empty_shares() -> EngineResult<()> {
            Err(EngineError::EmptyShares)
        }

        fn propagates_error() -> EngineResult<()> {
            returns_empty_shares()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
