//! Employee and business context model.
//!
//! This module defines the [`EmployeeContext`] struct holding the identifying
//! fields printed on every payslip in a generation run.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Identifying details for the employee and their employer.
///
/// The context is immutable for the duration of a generation run; every
/// payslip in the run carries the same names, business identifier, and
/// address. The ABN is treated as opaque text and is not validated beyond
/// being non-empty.
///
/// # Example
///
/// ```
/// use payslip_engine::models::EmployeeContext;
///
/// let context = EmployeeContext {
///     first_name: "Riley".to_string(),
///     last_name: "Hartmann".to_string(),
///     business_name: "Coastline Catering Pty Ltd".to_string(),
///     abn: "51824753556".to_string(),
///     address: "12 Marine Parade, Newcastle NSW 2300".to_string(),
/// };
/// assert_eq!(context.full_name(), "Riley Hartmann");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeContext {
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

impl EmployeeContext {
    /// Returns the employee's full name for display on payslips.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Validates that every field contains non-whitespace text.
    ///
    /// # Returns
    ///
    /// `Ok(())` when all fields are present, or `InvalidEmployee` naming the
    /// first empty field.
    ///
    /// # Example
    ///
    /// ```
    /// use payslip_engine::models::EmployeeContext;
    ///
    /// let mut context = EmployeeContext {
    ///     first_name: "Riley".to_string(),
    ///     last_name: "Hartmann".to_string(),
    ///     business_name: "Coastline Catering Pty Ltd".to_string(),
    ///     abn: "51824753556".to_string(),
    ///     address: "12 Marine Parade, Newcastle NSW 2300".to_string(),
    /// };
    /// assert!(context.validate().is_ok());
    ///
    /// context.abn = "  ".to_string();
    /// assert!(context.validate().is_err());
    /// ```
    pub fn validate(&self) -> EngineResult<()> {
        let fields = [
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("business_name", &self.business_name),
            ("abn", &self.abn),
            ("address", &self.address),
        ];

        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(EngineError::InvalidEmployee {
                    field: name.to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }

        Ok(())
    }
}
