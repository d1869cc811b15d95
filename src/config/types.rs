//! Configuration types for payslip generation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;

/// One marginal tax bracket as written in the configuration file.
///
/// The threshold is the income level above which the marginal rate applies.
/// Cumulative offsets are never stored in the file; they are derived from
/// the thresholds and rates when the configuration is loaded.
#[derive(Debug, Clone, Deserialize)]
pub struct BracketEntry {
    /// The income level above which this bracket's rate applies.
    pub threshold: Decimal,
    /// The marginal rate applied to income above the threshold.
    pub rate: Decimal,
}

/// Tax bracket configuration file structure (brackets.yaml).
#[derive(Debug, Clone, Deserialize)]
pub struct BracketsConfig {
    /// The financial year these brackets apply to (e.g., "2023-24").
    pub financial_year: String,
    /// URL to the official rate documentation.
    pub source_url: String,
    /// The bracket table, ordered by ascending threshold.
    pub brackets: Vec<BracketEntry>,
}

/// Policy for runs that step backward past the financial year start.
///
/// The fortnight ordinal decreases by one per generated payslip; a long
/// enough run will walk it below 1. Which behavior applies is a deployment
/// decision, so it lives in configuration rather than in code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrdinalPolicy {
    /// Keep generating; ordinals may reach zero or below.
    #[default]
    Allow,
    /// Hold the ordinal at 1 for periods before the year start.
    Clamp,
    /// Reject the run once a period would fall before the year start.
    Fail,
}

/// Payroll rules configuration file structure (payroll.yaml).
#[derive(Debug, Clone, Deserialize)]
pub struct PayrollRules {
    /// The superannuation contribution rate as a fraction of gross pay.
    pub super_rate: Decimal,
    /// The number of pay periods in a year (26 for fortnightly pay).
    pub pay_periods_per_year: u32,
    /// Policy when a run steps past the financial year start.
    #[serde(default)]
    pub ordinal_floor: OrdinalPolicy,
}
