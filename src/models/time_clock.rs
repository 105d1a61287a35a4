//! Time-clock models.
//!
//! This module defines the four-punch time-clock record and the hours-balance
//! ("banco de horas") accumulator input.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The four clock punches of a working day.
///
/// All punches are same-day wall-clock times; overnight shifts are not
/// supported. Any punch may be missing - the worked-hours calculation defines
/// the fallbacks.
///
/// # Example
///
/// ```
/// use grupo2s_engine::models::TimeClockPunch;
/// use chrono::NaiveTime;
///
/// let punch = TimeClockPunch {
///     morning_in: NaiveTime::from_hms_opt(8, 0, 0),
///     lunch_out: NaiveTime::from_hms_opt(12, 0, 0),
///     afternoon_in: NaiveTime::from_hms_opt(13, 0, 0),
///     evening_out: NaiveTime::from_hms_opt(17, 0, 0),
/// };
/// assert!(punch.morning_in.is_some());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeClockPunch {
    /// Clock-in at the start of the morning.
    pub morning_in: Option<NaiveTime>,
    /// Clock-out for lunch.
    pub lunch_out: Option<NaiveTime>,
    /// Clock-in after lunch.
    pub afternoon_in: Option<NaiveTime>,
    /// Clock-out at the end of the day.
    pub evening_out: Option<NaiveTime>,
}

/// Inputs for an hours-balance update.
///
/// The balance accumulates indefinitely; the caller persists `new_balance`
/// between periods and feeds it back as `previous_balance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursBalance {
    /// Hours actually worked in the period.
    pub worked_hours: Decimal,
    /// Hours contracted for the period.
    pub contracted_hours: Decimal,
    /// The balance carried over from previous periods.
    pub previous_balance: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_punch_serialization_with_nulls() {
        let punch = TimeClockPunch {
            morning_in: NaiveTime::from_hms_opt(8, 0, 0),
            lunch_out: None,
            afternoon_in: None,
            evening_out: NaiveTime::from_hms_opt(17, 0, 0),
        };

        let json = serde_json::to_string(&punch).unwrap();
        assert!(json.contains("\"morning_in\":\"08:00:00\""));
        assert!(json.contains("\"lunch_out\":null"));
    }

    #[test]
    fn test_punch_deserialization() {
        let json = r#"{
            "morning_in": "08:00:00",
            "lunch_out": "12:00:00",
            "afternoon_in": "13:00:00",
            "evening_out": "17:00:00"
        }"#;

        let punch: TimeClockPunch = serde_json::from_str(json).unwrap();
        assert_eq!(punch.lunch_out, NaiveTime::from_hms_opt(12, 0, 0));
    }

    #[test]
    fn test_hours_balance_round_trip() {
        let balance = HoursBalance {
            worked_hours: Decimal::from_str("9.5").unwrap(),
            contracted_hours: Decimal::from_str("8").unwrap(),
            previous_balance: Decimal::from_str("-2.5").unwrap(),
        };

        let json = serde_json::to_string(&balance).unwrap();
        let deserialized: HoursBalance = serde_json::from_str(&json).unwrap();
        assert_eq!(balance, deserialized);
    }
}
