//! Request types for the Payslip Generation Engine API.
//!
//! This module defines the JSON request structures for the `/payslips`
//! endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::EmployeeContext;

/// Request body for the `/payslips` endpoints.
///
/// Contains all information needed to generate a payslip sequence for one
/// employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayslipRequest {
    /// How many fortnights of payslips to generate.
    pub num_payslips: u32,
    /// The employee and business details printed on each payslip.
    pub employee: EmployeeRequest,
    /// Average annual gross income.
    pub annual_income: Decimal,
    /// The date the run is anchored at. Defaults to today when omitted.
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
}

/// Employee information in a payslip request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// The employee's legal first name.
    pub first_name: String,
    /// The employee's legal last name.
    pub last_name: String,
    /// The registered business name of the employer.
    pub business_name: String,
    /// The Australian Business Number, kept as opaque text.
    pub abn: String,
    /// The business address.
    pub address: String,
}

impl From<EmployeeRequest> for EmployeeContext {
    fn from(req: EmployeeRequest) -> Self {
        EmployeeContext {
            first_name: req.first_name,
            last_name: req.last_name,
            business_name: req.business_name,
            abn: req.abn,
            address: req.address,
        }
    }
}
