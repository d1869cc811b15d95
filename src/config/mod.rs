//! Configuration loading for the Payslip Generation Engine.
//!
//! This module provides functionality for loading tax brackets and payroll
//! rules from YAML configuration files.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{BracketEntry, BracketsConfig, OrdinalPolicy, PayrollRules};
