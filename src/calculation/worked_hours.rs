//! Worked-hours and hours-balance calculation.
//!
//! This module computes hours worked from the four daily clock punches and
//! updates the "banco de horas" balance against contracted hours.

use chrono::NaiveTime;
use rust_decimal::Decimal;

const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

fn minutes_between(start: NaiveTime, end: NaiveTime) -> Decimal {
    Decimal::from((end - start).num_minutes())
}

/// Computes hours worked from the four daily clock punches.
///
/// Both anchor punches (`morning_in` and `evening_out`) are required; without
/// either the result is zero. When BOTH intermediate punches are missing, the
/// whole span between the anchors counts as a single block - a day registered
/// without a lunch break counts in full.
/// Otherwise each segment counts only when both of its punches are present:
/// morning needs `morning_in` and `lunch_out`, afternoon needs `afternoon_in`
/// and `evening_out`.
///
/// Times are same-day wall clock; overnight shifts are not supported.
///
/// # Examples
///
/// ```
/// use grupo2s_engine::calculation::compute_worked_hours;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let t = |h, m| NaiveTime::from_hms_opt(h, m, 0);
///
/// // Full day: 4h morning + 4h afternoon
/// assert_eq!(
///     compute_worked_hours(t(8, 0), t(12, 0), t(13, 0), t(17, 0)),
///     Decimal::from(8),
/// );
///
/// // No intermediate punches: the whole span counts
/// assert_eq!(
///     compute_worked_hours(t(8, 0), None, None, t(17, 0)),
///     Decimal::from(9),
/// );
/// ```
pub fn compute_worked_hours(
    morning_in: Option<NaiveTime>,
    lunch_out: Option<NaiveTime>,
    afternoon_in: Option<NaiveTime>,
    evening_out: Option<NaiveTime>,
) -> Decimal {
    let (Some(morning), Some(evening)) = (morning_in, evening_out) else {
        return Decimal::ZERO;
    };

    if lunch_out.is_none() && afternoon_in.is_none() {
        return minutes_between(morning, evening) / MINUTES_PER_HOUR;
    }

    let morning_minutes = lunch_out
        .map(|lunch| minutes_between(morning, lunch))
        .unwrap_or(Decimal::ZERO);
    let afternoon_minutes = afternoon_in
        .map(|afternoon| minutes_between(afternoon, evening))
        .unwrap_or(Decimal::ZERO);

    (morning_minutes + afternoon_minutes) / MINUTES_PER_HOUR
}

/// Updates the hours balance for a period.
///
/// Returns `previous_balance + (worked_hours - contracted_hours)`. The
/// balance accumulates indefinitely; persisting it between periods is the
/// caller's job.
///
/// # Examples
///
/// ```
/// use grupo2s_engine::calculation::compute_hours_balance;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// assert_eq!(
///     compute_hours_balance(dec("9"), dec("8"), dec("-0.5")),
///     dec("0.5"),
/// );
/// ```
pub fn compute_hours_balance(
    worked_hours: Decimal,
    contracted_hours: Decimal,
    previous_balance: Decimal,
) -> Decimal {
    previous_balance + (worked_hours - contracted_hours)
}
