//! Core data models for the Payslip Generation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod pay_period;
mod payslip;

pub use employee::EmployeeContext;
pub use pay_period::PayPeriod;
pub use payslip::{Payslip, PayslipRun};
