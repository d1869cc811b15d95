//! HTTP request handlers for the Payslip Generation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use chrono::{NaiveDate, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::generate_payslips;
use crate::error::EngineResult;
use crate::models::{EmployeeContext, Payslip, PayslipRun};
use crate::render::{PayslipRenderer, TextRenderer};

use super::request::PayslipRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payslips", post(payslips_handler))
        .route("/payslips/document", post(document_handler))
        .with_state(state)
}

/// Parses the request body, handling JSON rejections in a uniform way.
fn parse_request(
    payload: Result<Json<PayslipRequest>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<PayslipRequest, ApiError> {
    match payload {
        Ok(Json(req)) => Ok(req),
        Err(rejection) => Err(match rejection {
            JsonRejection::JsonDataError(err) => {
                // Get the body text which contains the detailed error from serde
                let body_text = err.body_text();
                warn!(
                    correlation_id = %correlation_id,
                    error = %body_text,
                    "JSON data error"
                );
                if body_text.contains("missing field") {
                    ApiError::new("VALIDATION_ERROR", body_text)
                } else {
                    ApiError::malformed_json(body_text)
                }
            }
            JsonRejection::JsonSyntaxError(err) => {
                warn!(
                    correlation_id = %correlation_id,
                    error = %err,
                    "JSON syntax error"
                );
                ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
            }
            JsonRejection::MissingJsonContentType(_) => ApiError::new(
                "MISSING_CONTENT_TYPE",
                "Content-Type must be application/json",
            ),
            _ => ApiError::malformed_json("Failed to parse request body"),
        }),
    }
}

/// Runs the payslip generation for a parsed request.
fn run_generation(
    state: &AppState,
    request: &PayslipRequest,
    reference_date: NaiveDate,
) -> EngineResult<(EmployeeContext, Vec<Payslip>)> {
    let employee: EmployeeContext = request.employee.clone().into();
    let config = state.config();

    let payslips = generate_payslips(
        request.num_payslips,
        &employee,
        request.annual_income,
        reference_date,
        config.rules(),
        config.schedule(),
    )?;

    Ok((employee, payslips))
}

/// Handler for POST /payslips.
///
/// Generates a payslip sequence and returns it as a structured JSON run.
async fn payslips_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayslipRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payslip generation request");

    let request = match parse_request(payload, correlation_id) {
        Ok(req) => req,
        Err(error) => {
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    let reference_date = request
        .reference_date
        .unwrap_or_else(|| Utc::now().date_naive());

    match run_generation(&state, &request, reference_date) {
        Ok((employee, payslips)) => {
            info!(
                correlation_id = %correlation_id,
                employee = %employee.full_name(),
                payslip_count = payslips.len(),
                reference_date = %reference_date,
                "Payslip generation completed"
            );
            let run = PayslipRun {
                run_id: Uuid::new_v4(),
                generated_at: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                employee,
                annual_income: request.annual_income,
                payslips,
            };
            (StatusCode::OK, Json(run)).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Payslip generation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Handler for POST /payslips/document.
///
/// Generates a payslip sequence, renders it as a plain-text document, and
/// returns it as a downloadable attachment with a date-stamped filename.
async fn document_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayslipRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payslip document request");

    let request = match parse_request(payload, correlation_id) {
        Ok(req) => req,
        Err(error) => {
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    let reference_date = request
        .reference_date
        .unwrap_or_else(|| Utc::now().date_naive());

    match run_generation(&state, &request, reference_date) {
        Ok((employee, payslips)) => {
            let document = TextRenderer.render_document(&employee, &payslips);
            let filename = format!("payslips_{}.txt", reference_date.format("%Y-%m-%d"));
            info!(
                correlation_id = %correlation_id,
                employee = %employee.full_name(),
                payslip_count = payslips.len(),
                filename = %filename,
                "Payslip document rendered"
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", filename),
                    ),
                ],
                document,
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Payslip document generation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::request::EmployeeRequest;
    use crate::config::ConfigLoader;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/ato").expect("Failed to load config");
        AppState::new(config)
    }

    fn create_valid_request() -> PayslipRequest {
        PayslipRequest {
            num_payslips: 2,
            employee: EmployeeRequest {
                first_name: "Riley".to_string(),
                last_name: "Hartmann".to_string(),
                business_name: "Coastline Catering Pty Ltd".to_string(),
                abn: "51824753556".to_string(),
                address: "12 Marine Parade, Newcastle NSW 2300".to_string(),
            },
            annual_income: Decimal::from_str("104000").unwrap(),
            reference_date: Some(NaiveDate::from_ymd_opt(2026, 1, 14).unwrap()),
        }
    }

    async fn post_json(router: Router, uri: &str, body: String) -> (StatusCode, Vec<u8>) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_valid_request_returns_run() {
        let router = create_router(create_test_state());
        let body = serde_json::to_string(&create_valid_request()).unwrap();

        let (status, bytes) = post_json(router, "/payslips", body).await;
        assert_eq!(status, StatusCode::OK);

        let run: PayslipRun = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(run.payslips.len(), 2);
        assert_eq!(run.employee.first_name, "Riley");
        assert_eq!(
            run.payslips[0].fortnightly_gross,
            Decimal::from_str("4000").unwrap()
        );
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let (status, bytes) = post_json(router, "/payslips", "{invalid json".to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_field_returns_400() {
        let router = create_router(create_test_state());

        let body = r#"{
            "num_payslips": 2,
            "annual_income": "104000"
        }"#;

        let (status, bytes) = post_json(router, "/payslips", body.to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&bytes).unwrap();
        assert!(
            error.message.contains("missing field")
                || error.message.to_lowercase().contains("employee"),
            "Expected error message to mention the missing field, got: {}",
            error.message
        );
    }

    #[tokio::test]
    async fn test_zero_count_returns_400() {
        let router = create_router(create_test_state());

        let mut request = create_valid_request();
        request.num_payslips = 0;
        let body = serde_json::to_string(&request).unwrap();

        let (status, bytes) = post_json(router, "/payslips", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error.code, "INVALID_PAYSLIP_COUNT");
    }

    #[tokio::test]
    async fn test_negative_income_returns_400() {
        let router = create_router(create_test_state());

        let mut request = create_valid_request();
        request.annual_income = Decimal::from_str("-104000").unwrap();
        let body = serde_json::to_string(&request).unwrap();

        let (status, bytes) = post_json(router, "/payslips", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error.code, "INVALID_INCOME");
    }

    #[tokio::test]
    async fn test_empty_abn_returns_400() {
        let router = create_router(create_test_state());

        let mut request = create_valid_request();
        request.employee.abn = String::new();
        let body = serde_json::to_string(&request).unwrap();

        let (status, bytes) = post_json(router, "/payslips", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error.code, "INVALID_EMPLOYEE");
    }

    #[tokio::test]
    async fn test_document_endpoint_sets_attachment_filename() {
        let router = create_router(create_test_state());
        let body = serde_json::to_string(&create_valid_request()).unwrap();

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/payslips/document")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert_eq!(
            disposition,
            "attachment; filename=\"payslips_2026-01-14.txt\""
        );

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let document = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(document.contains("Payslip for Riley Hartmann"));
        assert!(document.contains("Pay Period: 29/12/2025 - 11/01/2026"));
    }
}
