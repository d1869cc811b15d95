//! Pay-cycle date arithmetic.
//!
//! This module aligns pay periods to the fixed fortnightly cycle: periods end
//! on Sundays, and the fortnight ordinal counts periods elapsed since the
//! start of the Australian financial year (July 1 – June 30).

use chrono::{Datelike, Duration, NaiveDate};

/// Returns the end date of the most recently completed pay period: the most
/// recent Sunday strictly before `reference_date`.
///
/// When the reference date is itself a Sunday, the previous Sunday is
/// returned, since that day's period has not yet completed.
///
/// # Example
///
/// ```
/// use payslip_engine::calculation::latest_period_end;
/// use chrono::NaiveDate;
///
/// // 2026-01-14 is a Wednesday
/// let wednesday = NaiveDate::from_ymd_opt(2026, 1, 14).unwrap();
/// assert_eq!(
///     latest_period_end(wednesday),
///     NaiveDate::from_ymd_opt(2026, 1, 11).unwrap()
/// );
/// ```
pub fn latest_period_end(reference_date: NaiveDate) -> NaiveDate {
    let days_back = reference_date.weekday().num_days_from_monday() as i64 + 1;
    reference_date - Duration::days(days_back)
}

/// Returns the start of the financial year for a run anchored at
/// `reference_date`: July 1 of the preceding calendar year.
pub fn financial_year_start(reference_date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(reference_date.year() - 1, 7, 1).expect("July 1 is a valid date")
}

/// Returns the 1-based fortnight ordinal of the period ending on
/// `period_end`, counted from `fy_start`.
///
/// Division is floored so period ends before the year start yield ordinals
/// of zero or below rather than truncating toward zero.
///
/// # Example
///
/// ```
/// use payslip_engine::calculation::fortnight_ordinal;
/// use chrono::NaiveDate;
///
/// let fy_start = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
/// let period_end = NaiveDate::from_ymd_opt(2026, 1, 11).unwrap();
/// assert_eq!(fortnight_ordinal(period_end, fy_start), 14);
/// ```
pub fn fortnight_ordinal(period_end: NaiveDate, fy_start: NaiveDate) -> i64 {
    (period_end - fy_start).num_days().div_euclid(14) + 1
}
