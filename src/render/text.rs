//! Plain-text payslip rendering.

use rust_decimal::Decimal;
use std::fmt::Write;

use crate::models::{EmployeeContext, Payslip};

use super::PayslipRenderer;

/// Renders payslips as plain text.
///
/// The layout mirrors the printed payslip: a header with the employee and
/// business details, the pay period and payment date, an earnings and
/// deductions table, year-to-date totals, and the net pay. Dates use the
/// DD/MM/YYYY convention and amounts are shown to two decimal places.
///
/// # Example
///
/// ```
/// use payslip_engine::models::{EmployeeContext, PayPeriod, Payslip};
/// use payslip_engine::render::{PayslipRenderer, TextRenderer};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// let context = EmployeeContext {
///     first_name: "Riley".to_string(),
///     last_name: "Hartmann".to_string(),
///     business_name: "Coastline Catering Pty Ltd".to_string(),
///     abn: "51824753556".to_string(),
///     address: "12 Marine Parade, Newcastle NSW 2300".to_string(),
/// };
/// let period = PayPeriod::ending_at(NaiveDate::from_ymd_opt(2026, 1, 11).unwrap(), 14);
/// let payslip = Payslip {
///     period,
///     date_paid: period.date_paid(),
///     fortnightly_gross: dec("4000"),
///     fortnightly_tax: dec("600"),
///     fortnightly_super: dec("440"),
///     fortnightly_net: dec("2960"),
///     ytd_gross: dec("56000"),
///     ytd_tax: dec("8667"),
///     ytd_super: dec("6160"),
/// };
///
/// let page = TextRenderer.render_payslip(&context, &payslip);
/// assert!(page.contains("Payslip for Riley Hartmann"));
/// assert!(page.contains("Net Pay: $2960.00"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

/// Formats a currency amount to two decimal places with a dollar sign.
fn money(amount: Decimal) -> String {
    format!("${:.2}", amount.round_dp(2))
}

impl PayslipRenderer for TextRenderer {
    fn render_payslip(&self, context: &EmployeeContext, payslip: &Payslip) -> String {
        let mut page = String::new();

        let _ = writeln!(page, "Payslip for {}", context.full_name());
        let _ = writeln!(
            page,
            "{} - ABN: {}",
            context.business_name, context.abn
        );
        let _ = writeln!(page, "{}", context.address);
        let _ = writeln!(page);

        let _ = writeln!(
            page,
            "Pay Period: {} - {}",
            payslip.period.start_date.format("%d/%m/%Y"),
            payslip.period.end_date.format("%d/%m/%Y")
        );
        let _ = writeln!(page, "Date Paid: {}", payslip.date_paid.format("%d/%m/%Y"));
        let _ = writeln!(page);

        let _ = writeln!(page, "Earnings");
        let _ = writeln!(
            page,
            "  Gross Pay               {:>12}",
            money(payslip.fortnightly_gross)
        );
        let _ = writeln!(page, "Deductions");
        let _ = writeln!(
            page,
            "  Tax                     {:>12}",
            money(payslip.fortnightly_tax)
        );
        let _ = writeln!(
            page,
            "  Superannuation          {:>12}",
            money(payslip.fortnightly_super)
        );
        let _ = writeln!(
            page,
            "  Total Deductions        {:>12}",
            money(payslip.total_deductions())
        );
        let _ = writeln!(page);

        let _ = writeln!(page, "Year-To-Date Totals:");
        let _ = writeln!(page, "  YTD Gross               {:>12}", money(payslip.ytd_gross));
        let _ = writeln!(page, "  YTD Tax                 {:>12}", money(payslip.ytd_tax));
        let _ = writeln!(page, "  YTD Super               {:>12}", money(payslip.ytd_super));
        let _ = writeln!(page);

        let _ = writeln!(page, "Net Pay: {}", money(payslip.fortnightly_net));

        page
    }
}
