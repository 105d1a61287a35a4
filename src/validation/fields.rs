//! Generic form-field validation: passwords, percentages, times, and date
//! ranges.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;

const ONE_HUNDRED: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Validates a password: at least 8 characters with an uppercase letter, a
/// lowercase letter, and a digit.
///
/// # Examples
///
/// ```
/// use grupo2s_engine::validation::is_valid_password;
///
/// assert!(is_valid_password("Grupo2s!"));
/// assert!(!is_valid_password("curta1A"));
/// assert!(!is_valid_password("semdigitos"));
/// ```
pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= 8
        && password.chars().any(|c| c.is_uppercase())
        && password.chars().any(|c| c.is_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
}

/// Validates a percentage: between 0 and 100 inclusive.
///
/// # Examples
///
/// ```
/// use grupo2s_engine::validation::is_valid_percentage;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert!(is_valid_percentage(Decimal::from_str("0").unwrap()));
/// assert!(is_valid_percentage(Decimal::from_str("100").unwrap()));
/// assert!(!is_valid_percentage(Decimal::from_str("100.01").unwrap()));
/// ```
pub fn is_valid_percentage(percent: Decimal) -> bool {
    percent >= Decimal::ZERO && percent <= ONE_HUNDRED
}

/// Validates an `HH:MM` time string: hours 00-23, minutes 00-59, both
/// two-digit.
///
/// # Examples
///
/// ```
/// use grupo2s_engine::validation::is_valid_time;
///
/// assert!(is_valid_time("08:00"));
/// assert!(is_valid_time("23:59"));
/// assert!(!is_valid_time("24:00"));
/// assert!(!is_valid_time("8:00"));
/// ```
pub fn is_valid_time(time: &str) -> bool {
    parse_time(time).is_some()
}

/// Parses a validated `HH:MM` string into a `NaiveTime`.
///
/// Returns `None` for anything [`is_valid_time`] would reject. API callers
/// use this to turn punch strings into the times the worked-hours
/// calculation expects.
pub fn parse_time(time: &str) -> Option<NaiveTime> {
    let bytes = time.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return None;
    }
    if !time[..2].bytes().all(|b| b.is_ascii_digit())
        || !time[3..].bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }

    let hours: u32 = time[..2].parse().ok()?;
    let minutes: u32 = time[3..].parse().ok()?;
    NaiveTime::from_hms_opt(hours, minutes, 0)
}

/// Validates that a date range is ordered: start on or before end.
///
/// # Examples
///
/// ```
/// use grupo2s_engine::validation::is_valid_date_range;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
/// assert!(is_valid_date_range(start, end));
/// assert!(!is_valid_date_range(end, start));
/// ```
pub fn is_valid_date_range(start: NaiveDate, end: NaiveDate) -> bool {
    start <= end
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_valid_passwords() {
        assert!(is_valid_password("Grupo2s!"));
        assert!(is_valid_password("Abcdefg1"));
    }

    #[test]
    fn test_password_too_short_rejected() {
        assert!(!is_valid_password("Abc1"));
        assert!(!is_valid_password("Abcdef1"));
    }

    #[test]
    fn test_password_missing_classes_rejected() {
        assert!(!is_valid_password("abcdefg1"));
        assert!(!is_valid_password("ABCDEFG1"));
        assert!(!is_valid_password("Abcdefgh"));
    }

    #[test]
    fn test_percentage_bounds_inclusive() {
        assert!(is_valid_percentage(Decimal::ZERO));
        assert!(is_valid_percentage(dec("100")));
        assert!(is_valid_percentage(dec("50.5")));
    }

    #[test]
    fn test_percentage_out_of_bounds() {
        assert!(!is_valid_percentage(dec("-0.01")));
        assert!(!is_valid_percentage(dec("100.01")));
    }

    #[test]
    fn test_valid_times() {
        assert!(is_valid_time("00:00"));
        assert!(is_valid_time("08:30"));
        assert!(is_valid_time("23:59"));
    }

    #[test]
    fn test_invalid_times() {
        assert!(!is_valid_time("24:00"));
        assert!(!is_valid_time("12:60"));
        assert!(!is_valid_time("8:00"));
        assert!(!is_valid_time("08:0"));
        assert!(!is_valid_time("0800"));
        assert!(!is_valid_time("ab:cd"));
        assert!(!is_valid_time(""));
    }

    #[test]
    fn test_parse_time_returns_expected_value() {
        assert_eq!(parse_time("08:30"), NaiveTime::from_hms_opt(8, 30, 0));
        assert_eq!(parse_time("25:00"), None);
    }

    #[test]
    fn test_date_range_same_day_is_valid() {
        let day = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert!(is_valid_date_range(day, day));
    }

    #[test]
    fn test_date_range_inverted_is_invalid() {
        let start = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert!(!is_valid_date_range(start, end));
    }
}
