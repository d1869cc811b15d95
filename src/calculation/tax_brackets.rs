//! Progressive tax bracket calculation.
//!
//! This module provides the [`TaxSchedule`] type compiled from configured
//! marginal rates and the pure [`calculate_tax`] function mapping an income
//! amount to the tax payable on it.

use rust_decimal::Decimal;

/// One compiled tax bracket.
///
/// `threshold` is the income level above which `rate` applies; `base` is the
/// cumulative tax payable at exactly the threshold. Bases are always derived
/// from the thresholds and rates of the brackets below, so the schedule stays
/// internally consistent if the rates ever change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxBracket {
    /// The income level above which this bracket's rate applies.
    pub threshold: Decimal,
    /// The marginal rate applied to income above the threshold.
    pub rate: Decimal,
    /// Cumulative tax payable at the threshold.
    pub base: Decimal,
}

/// A compiled progressive tax schedule.
///
/// # Example
///
/// ```
/// use payslip_engine::calculation::{calculate_tax, TaxSchedule};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// let schedule = TaxSchedule::from_marginal_rates(&[
///     (dec("0"), dec("0")),
///     (dec("18200"), dec("0.19")),
///     (dec("45000"), dec("0.325")),
///     (dec("120000"), dec("0.37")),
///     (dec("180000"), dec("0.45")),
/// ]);
///
/// assert_eq!(calculate_tax(dec("30000"), &schedule), dec("2242.00"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxSchedule {
    brackets: Vec<TaxBracket>,
}

impl TaxSchedule {
    /// Compiles a schedule from `(threshold, marginal rate)` pairs.
    ///
    /// Pairs must be ordered by ascending threshold with the first threshold
    /// at zero; the configuration loader validates this before calling. Each
    /// bracket's cumulative base is computed as the base of the bracket below
    /// plus that bracket's rate applied to the span between the thresholds.
    pub fn from_marginal_rates(rates: &[(Decimal, Decimal)]) -> Self {
        let mut brackets: Vec<TaxBracket> = Vec::with_capacity(rates.len());

        for &(threshold, rate) in rates {
            let base = match brackets.last() {
                Some(prev) => prev.base + prev.rate * (threshold - prev.threshold),
                None => Decimal::ZERO,
            };
            brackets.push(TaxBracket {
                threshold,
                rate,
                base,
            });
        }

        Self { brackets }
    }

    /// Returns the compiled brackets, ordered by ascending threshold.
    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// Finds the bracket applying to `income`: the highest bracket whose
    /// threshold is strictly below the income.
    fn bracket_for(&self, income: Decimal) -> Option<&TaxBracket> {
        self.brackets.iter().rev().find(|b| income > b.threshold)
    }
}

/// Calculates the tax payable on `income` under the given schedule.
///
/// The function is pure and total: income at or below the lowest threshold
/// (including negative amounts) produces zero tax, and within each bracket
/// the tax is the bracket's cumulative base plus the marginal rate applied
/// to the income above the threshold. The result is continuous and
/// non-decreasing in `income`.
///
/// # Example
///
/// ```
/// use payslip_engine::calculation::{calculate_tax, TaxSchedule};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// let schedule = TaxSchedule::from_marginal_rates(&[
///     (dec("0"), dec("0")),
///     (dec("18200"), dec("0.19")),
/// ]);
///
/// assert_eq!(calculate_tax(dec("18200"), &schedule), dec("0"));
/// assert_eq!(calculate_tax(dec("20000"), &schedule), dec("342.00"));
/// ```
pub fn calculate_tax(income: Decimal, schedule: &TaxSchedule) -> Decimal {
    match schedule.bracket_for(income) {
        Some(bracket) => bracket.base + bracket.rate * (income - bracket.threshold),
        None => Decimal::ZERO,
    }
}
