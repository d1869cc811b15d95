//! Pay period model.
//!
//! This module contains the [`PayPeriod`] value type describing one fortnight
//! of the payslip sequence.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single fortnightly pay period.
///
/// A period always spans exactly 14 days: the start date is 13 days before
/// the end date, both inclusive. The ordinal counts fortnights elapsed since
/// the start of the financial year, 1-based for the first full fortnight.
///
/// # Example
///
/// ```
/// use payslip_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let end = NaiveDate::from_ymd_opt(2026, 1, 11).unwrap(); // a Sunday
/// let period = PayPeriod::ending_at(end, 14);
///
/// assert_eq!(period.start_date, NaiveDate::from_ymd_opt(2025, 12, 29).unwrap());
/// assert_eq!(period.length_days(), 14);
/// assert_eq!(period.date_paid(), NaiveDate::from_ymd_opt(2026, 1, 12).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
    /// Fortnights elapsed since the financial year start, 1-based.
    ///
    /// May be zero or negative when a run walks past the start of the
    /// financial year under the `allow` backward-iteration policy.
    pub ordinal: i64,
}

impl PayPeriod {
    /// Builds the period ending on `end_date` with the given ordinal.
    ///
    /// The start date is derived as `end_date - 13 days` so the period
    /// always covers exactly one fortnight.
    pub fn ending_at(end_date: NaiveDate, ordinal: i64) -> Self {
        Self {
            start_date: end_date - Duration::days(13),
            end_date,
            ordinal,
        }
    }

    /// The date the pay lands, one day after the period ends.
    pub fn date_paid(&self) -> NaiveDate {
        self.end_date + Duration::days(1)
    }

    /// The number of days covered by the period, inclusive of both ends.
    pub fn length_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Checks if a given date falls within this pay period.
    ///
    /// The check is inclusive of both start and end dates.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}
