//! Payslip record and run envelope models.
//!
//! This module contains the [`Payslip`] type produced by one generation step
//! and the [`PayslipRun`] envelope returned by the HTTP API.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{EmployeeContext, PayPeriod};

/// The payroll figures for one fortnightly pay period.
///
/// Fortnightly amounts cover the single period; year-to-date amounts are
/// cumulative from the financial year start through this period's ordinal.
/// For every record, `fortnightly_net` equals `fortnightly_gross -
/// fortnightly_tax - fortnightly_super` exactly.
///
/// # Example
///
/// ```
/// use payslip_engine::models::{PayPeriod, Payslip};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let period = PayPeriod::ending_at(NaiveDate::from_ymd_opt(2026, 1, 11).unwrap(), 14);
/// let payslip = Payslip {
///     period,
///     date_paid: period.date_paid(),
///     fortnightly_gross: Decimal::from_str("4000.00").unwrap(),
///     fortnightly_tax: Decimal::from_str("6665.00").unwrap(),
///     fortnightly_super: Decimal::from_str("440.00").unwrap(),
///     fortnightly_net: Decimal::from_str("-3105.00").unwrap(),
///     ytd_gross: Decimal::from_str("56000.00").unwrap(),
///     ytd_tax: Decimal::from_str("8667.00").unwrap(),
///     ytd_super: Decimal::from_str("6160.00").unwrap(),
/// };
/// assert_eq!(
///     payslip.fortnightly_net,
///     payslip.fortnightly_gross - payslip.fortnightly_tax - payslip.fortnightly_super
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payslip {
    /// The pay period this record covers.
    pub period: PayPeriod,
    /// The date the pay lands, one day after the period ends.
    pub date_paid: NaiveDate,
    /// Gross pay for the fortnight.
    pub fortnightly_gross: Decimal,
    /// Tax withheld for the fortnight.
    pub fortnightly_tax: Decimal,
    /// Superannuation contribution for the fortnight.
    pub fortnightly_super: Decimal,
    /// Net pay for the fortnight.
    pub fortnightly_net: Decimal,
    /// Gross pay accumulated since the financial year start.
    pub ytd_gross: Decimal,
    /// Tax accumulated since the financial year start.
    pub ytd_tax: Decimal,
    /// Superannuation accumulated since the financial year start.
    pub ytd_super: Decimal,
}

impl Payslip {
    /// Total deductions for the fortnight (tax plus superannuation).
    pub fn total_deductions(&self) -> Decimal {
        self.fortnightly_tax + self.fortnightly_super
    }
}

/// The complete output of one generation run.
///
/// Wraps the ordered payslip records with identifying metadata for the run.
/// The envelope is assembled by the calling shell; the calculation core only
/// produces the record sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayslipRun {
    /// Unique identifier for this run.
    pub run_id: Uuid,
    /// When the run was generated.
    pub generated_at: DateTime<Utc>,
    /// The version of the engine that produced the run.
    pub engine_version: String,
    /// The employee and business context the run was generated for.
    pub employee: EmployeeContext,
    /// The annual income the figures were derived from.
    pub annual_income: Decimal,
    /// The payslip records, most recent period first.
    pub payslips: Vec<Payslip>,
}
