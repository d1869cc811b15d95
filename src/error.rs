//! Error types for the Payslip Generation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payslip generation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Payslip Generation Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payslip_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The requested number of payslips was not a positive count.
    #[error("Invalid payslip count: {count} (must be at least 1)")]
    InvalidPayslipCount {
        /// The count that was rejected.
        count: u32,
    },

    /// The annual income was negative.
    #[error("Invalid annual income: {income} (must not be negative)")]
    InvalidIncome {
        /// The income amount that was rejected.
        income: Decimal,
    },

    /// An employee or business field was invalid or missing.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A requested pay period falls before the start of the financial year.
    ///
    /// Only raised when the configured backward-iteration policy is `fail`.
    #[error("Pay period ending {period_end} falls before the financial year start")]
    PeriodBeforeYearStart {
        /// The end date of the out-of-range pay period.
        period_end: NaiveDate,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
