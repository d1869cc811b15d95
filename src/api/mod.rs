//! HTTP API module for the Payslip Generation Engine.
//!
//! This module provides the REST API endpoints for generating payslip
//! sequences and downloadable payslip documents.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EmployeeRequest, PayslipRequest};
pub use response::ApiError;
pub use state::AppState;
