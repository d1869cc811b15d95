//! Payslip sequence generation.
//!
//! This module contains [`generate_payslips`], the multi-period loop that
//! walks backward from the most recently completed pay period and produces
//! one payslip record per fortnight.

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;

use crate::config::{OrdinalPolicy, PayrollRules};
use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeContext, PayPeriod, Payslip};

use super::pay_cycle::{financial_year_start, fortnight_ordinal, latest_period_end};
use super::tax_brackets::{calculate_tax, TaxSchedule};

/// Generates `count` payslip records, most recent completed period first.
///
/// The period cursor is anchored at the most recent Sunday strictly before
/// `reference_date` and steps back 14 days per record, with the fortnight
/// ordinal decreasing by one each step.
///
/// Per-fortnight tax is withheld against an estimate of cumulative taxable
/// income for the year to date (gross less superannuation, scaled by the
/// fortnight ordinal), while the displayed year-to-date tax is computed from
/// year-to-date gross. The two figures deliberately use different bases;
/// downstream consumers depend on the resulting numbers.
///
/// # Arguments
///
/// * `count` - How many payslips to generate (must be at least 1)
/// * `employee` - Identifying fields printed on each payslip
/// * `annual_income` - Base annual gross earnings (must not be negative)
/// * `reference_date` - The date the run is anchored at, usually today
/// * `rules` - Superannuation rate, pay cycle, and iteration policy
/// * `schedule` - The compiled tax schedule
///
/// # Returns
///
/// Exactly `count` records on success, or:
/// - `InvalidPayslipCount` when `count` is zero
/// - `InvalidIncome` when `annual_income` is negative
/// - `InvalidEmployee` when a context field is empty
/// - `PeriodBeforeYearStart` when the run steps past the financial year
///   start under the `fail` policy
///
/// # Example
///
/// ```
/// use payslip_engine::calculation::{generate_payslips, TaxSchedule};
/// use payslip_engine::config::{OrdinalPolicy, PayrollRules};
/// use payslip_engine::models::EmployeeContext;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// let schedule = TaxSchedule::from_marginal_rates(&[
///     (dec("0"), dec("0")),
///     (dec("18200"), dec("0.19")),
///     (dec("45000"), dec("0.325")),
/// ]);
/// let rules = PayrollRules {
///     super_rate: dec("0.11"),
///     pay_periods_per_year: 26,
///     ordinal_floor: OrdinalPolicy::Allow,
/// };
/// let employee = EmployeeContext {
///     first_name: "Riley".to_string(),
///     last_name: "Hartmann".to_string(),
///     business_name: "Coastline Catering Pty Ltd".to_string(),
///     abn: "51824753556".to_string(),
///     address: "12 Marine Parade, Newcastle NSW 2300".to_string(),
/// };
///
/// let reference = NaiveDate::from_ymd_opt(2026, 1, 14).unwrap();
/// let payslips =
///     generate_payslips(2, &employee, dec("104000"), reference, &rules, &schedule).unwrap();
///
/// assert_eq!(payslips.len(), 2);
/// assert_eq!(payslips[0].fortnightly_gross, dec("4000"));
/// ```
pub fn generate_payslips(
    count: u32,
    employee: &EmployeeContext,
    annual_income: Decimal,
    reference_date: NaiveDate,
    rules: &PayrollRules,
    schedule: &TaxSchedule,
) -> EngineResult<Vec<Payslip>> {
    if count == 0 {
        return Err(EngineError::InvalidPayslipCount { count });
    }
    if annual_income < Decimal::ZERO {
        return Err(EngineError::InvalidIncome {
            income: annual_income,
        });
    }
    employee.validate()?;

    let periods_per_year = Decimal::from(rules.pay_periods_per_year);
    let fy_start = financial_year_start(reference_date);

    // Loop-local cursor: the period end date and its fortnight ordinal.
    let mut period_end = latest_period_end(reference_date);
    let mut ordinal = fortnight_ordinal(period_end, fy_start);

    let mut payslips = Vec::with_capacity(count as usize);

    for _ in 0..count {
        let effective_ordinal = match rules.ordinal_floor {
            OrdinalPolicy::Allow => ordinal,
            OrdinalPolicy::Clamp => ordinal.max(1),
            OrdinalPolicy::Fail => {
                if ordinal < 1 {
                    return Err(EngineError::PeriodBeforeYearStart { period_end });
                }
                ordinal
            }
        };

        let period = PayPeriod::ending_at(period_end, effective_ordinal);
        let ordinal_factor = Decimal::from(effective_ordinal);

        let fortnightly_gross = annual_income / periods_per_year;
        let ytd_taxable =
            annual_income * (Decimal::ONE - rules.super_rate) * ordinal_factor / periods_per_year;
        let fortnightly_tax = calculate_tax(ytd_taxable, schedule);
        let fortnightly_super = fortnightly_gross * rules.super_rate;
        let fortnightly_net = fortnightly_gross - fortnightly_tax - fortnightly_super;

        let ytd_gross = fortnightly_gross * ordinal_factor;
        let ytd_tax = calculate_tax(ytd_gross, schedule);
        let ytd_super = ytd_gross * rules.super_rate;

        payslips.push(Payslip {
            period,
            date_paid: period.date_paid(),
            fortnightly_gross,
            fortnightly_tax,
            fortnightly_super,
            fortnightly_net,
            ytd_gross,
            ytd_tax,
            ytd_super,
        });

        period_end -= Duration::days(14);
        ordinal -= 1;
    }

    Ok(payslips)
}
