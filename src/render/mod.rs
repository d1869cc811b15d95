//! Payslip rendering.
//!
//! The calculation core returns plain structured records; turning them into
//! human-readable documents is the job of a [`PayslipRenderer`]. Keeping the
//! renderer behind a trait lets the core be tested without any document
//! dependency and lets shells swap document formats.

mod text;

pub use text::TextRenderer;

use crate::models::{EmployeeContext, Payslip};

/// Renders payslip records into a document format.
pub trait PayslipRenderer {
    /// Renders a single payslip for the given employee context.
    fn render_payslip(&self, context: &EmployeeContext, payslip: &Payslip) -> String;

    /// Renders a sequence of payslips into one document, most recent first.
    fn render_document(&self, context: &EmployeeContext, payslips: &[Payslip]) -> String {
        payslips
            .iter()
            .map(|p| self.render_payslip(context, p))
            .collect::<Vec<_>>()
            .join("\n========================================\n\n")
    }
}
