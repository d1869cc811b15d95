//! Comprehensive integration tests for the Payslip Generation Engine.
//!
//! This test suite covers the full request path:
//! - Payslip sequence generation over the API
//! - Period alignment to the prior Sunday
//! - Year-to-date accumulation across the sequence
//! - Net pay reconciliation
//! - Document download with date-stamped filename
//! - Error cases

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use rust_decimal::Decimal;
use serde_json::{json, Value};
use std::str::FromStr;
use tower::ServiceExt;

use payslip_engine::api::{create_router, AppState};
use payslip_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/ato").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn amount(value: &Value) -> Decimal {
    Decimal::from_str(value.as_str().unwrap()).unwrap()
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn create_request(num_payslips: i64, annual_income: &str, reference_date: &str) -> Value {
    json!({
        "num_payslips": num_payslips,
        "employee": {
            "first_name": "Riley",
            "last_name": "Hartmann",
            "business_name": "Coastline Catering Pty Ltd",
            "abn": "51824753556",
            "address": "12 Marine Parade, Newcastle NSW 2300"
        },
        "annual_income": annual_income,
        "reference_date": reference_date
    })
}

// =============================================================================
// Sequence generation
// =============================================================================

#[tokio::test]
async fn test_known_scenario_two_fortnights() {
    let router = create_router_for_test();
    // 2026-01-14 is a Wednesday; the prior Sunday is 2026-01-11.
    let (status, body) = post_json(
        router,
        "/payslips",
        create_request(2, "104000", "2026-01-14"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);

    let payslips = body["payslips"].as_array().unwrap();
    assert_eq!(payslips.len(), 2);

    let first = &payslips[0];
    assert_eq!(first["period"]["end_date"], "2026-01-11");
    assert_eq!(first["period"]["start_date"], "2025-12-29");
    assert_eq!(first["date_paid"], "2026-01-12");
    assert_eq!(amount(&first["fortnightly_gross"]), decimal("4000"));
    assert_eq!(amount(&first["fortnightly_super"]), decimal("440"));

    let second = &payslips[1];
    assert_eq!(second["period"]["end_date"], "2025-12-28");
    assert_eq!(second["period"]["start_date"], "2025-12-15");
}

#[tokio::test]
async fn test_sequence_steps_back_fourteen_days() {
    let router = create_router_for_test();
    let (status, body) = post_json(
        router,
        "/payslips",
        create_request(6, "80000", "2026-01-14"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);

    let payslips = body["payslips"].as_array().unwrap();
    assert_eq!(payslips.len(), 6);

    let expected_ends = [
        "2026-01-11",
        "2025-12-28",
        "2025-12-14",
        "2025-11-30",
        "2025-11-16",
        "2025-11-02",
    ];
    for (slip, expected) in payslips.iter().zip(expected_ends) {
        assert_eq!(slip["period"]["end_date"], expected);
    }
}

#[tokio::test]
async fn test_ordinals_decrease_by_one() {
    let router = create_router_for_test();
    let (_, body) = post_json(
        router,
        "/payslips",
        create_request(4, "80000", "2026-01-14"),
    )
    .await;

    let payslips = body["payslips"].as_array().unwrap();
    let ordinals: Vec<i64> = payslips
        .iter()
        .map(|s| s["period"]["ordinal"].as_i64().unwrap())
        .collect();
    assert_eq!(ordinals, vec![14, 13, 12, 11]);
}

#[tokio::test]
async fn test_net_reconciles_on_every_record() {
    let router = create_router_for_test();
    let (_, body) = post_json(
        router,
        "/payslips",
        create_request(8, "97531.24", "2026-01-14"),
    )
    .await;

    for slip in body["payslips"].as_array().unwrap() {
        let gross = amount(&slip["fortnightly_gross"]);
        let tax = amount(&slip["fortnightly_tax"]);
        let superannuation = amount(&slip["fortnightly_super"]);
        let net = amount(&slip["fortnightly_net"]);

        assert_eq!(net, gross - tax - superannuation);
        assert_eq!(superannuation, gross * decimal("0.11"));
    }
}

#[tokio::test]
async fn test_ytd_totals_scale_with_ordinal() {
    let router = create_router_for_test();
    let (_, body) = post_json(
        router,
        "/payslips",
        create_request(2, "104000", "2026-01-14"),
    )
    .await;

    let payslips = body["payslips"].as_array().unwrap();

    // Fortnight 14: YTD gross 4000 * 14, taxed as 5092 + 0.325 * 11000.
    let first = &payslips[0];
    assert_eq!(amount(&first["ytd_gross"]), decimal("56000"));
    assert_eq!(amount(&first["ytd_tax"]), decimal("8667"));
    assert_eq!(amount(&first["ytd_super"]), decimal("6160"));

    // Fortnight 13: one fortnight less of everything.
    let second = &payslips[1];
    assert_eq!(amount(&second["ytd_gross"]), decimal("52000"));
    assert_eq!(amount(&second["ytd_tax"]), decimal("7367"));
    assert_eq!(amount(&second["ytd_super"]), decimal("5720"));
}

#[tokio::test]
async fn test_fortnightly_tax_uses_cumulative_estimate() {
    let router = create_router_for_test();
    let (_, body) = post_json(
        router,
        "/payslips",
        create_request(1, "104000", "2026-01-14"),
    )
    .await;

    // The withheld amount is taxed on 104000 * 0.89 * 14 / 26 = 49840,
    // not on the 4000 fortnightly gross.
    let slip = &body["payslips"].as_array().unwrap()[0];
    assert_eq!(amount(&slip["fortnightly_tax"]), decimal("6665"));
}

#[tokio::test]
async fn test_run_envelope_metadata() {
    let router = create_router_for_test();
    let (_, body) = post_json(
        router,
        "/payslips",
        create_request(1, "104000", "2026-01-14"),
    )
    .await;

    assert!(body["run_id"].as_str().is_some());
    assert!(body["generated_at"].as_str().is_some());
    assert_eq!(body["engine_version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["employee"]["first_name"], "Riley");
    assert_eq!(amount(&body["annual_income"]), decimal("104000"));
}

#[tokio::test]
async fn test_sunday_reference_uses_previous_sunday() {
    let router = create_router_for_test();
    // 2026-01-11 is itself a Sunday; that day's period has not completed.
    let (_, body) = post_json(
        router,
        "/payslips",
        create_request(1, "80000", "2026-01-11"),
    )
    .await;

    let slip = &body["payslips"].as_array().unwrap()[0];
    assert_eq!(slip["period"]["end_date"], "2026-01-04");
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn test_zero_payslips_rejected() {
    let router = create_router_for_test();
    let (status, body) = post_json(
        router,
        "/payslips",
        create_request(0, "80000", "2026-01-14"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_PAYSLIP_COUNT");
}

#[tokio::test]
async fn test_negative_payslip_count_rejected() {
    let router = create_router_for_test();
    let (status, body) = post_json(
        router,
        "/payslips",
        create_request(-1, "80000", "2026-01-14"),
    )
    .await;

    // A negative count never reaches the generator; it fails JSON validation.
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["code"] == "MALFORMED_JSON" || body["code"] == "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_negative_income_rejected() {
    let router = create_router_for_test();
    let (status, body) = post_json(
        router,
        "/payslips",
        create_request(1, "-80000", "2026-01-14"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_INCOME");
}

#[tokio::test]
async fn test_blank_business_name_rejected() {
    let router = create_router_for_test();
    let body = json!({
        "num_payslips": 1,
        "employee": {
            "first_name": "Riley",
            "last_name": "Hartmann",
            "business_name": "   ",
            "abn": "51824753556",
            "address": "12 Marine Parade, Newcastle NSW 2300"
        },
        "annual_income": "80000",
        "reference_date": "2026-01-14"
    });

    let (status, body) = post_json(router, "/payslips", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_EMPLOYEE");
    assert!(body["message"].as_str().unwrap().contains("business_name"));
}

#[tokio::test]
async fn test_unparseable_income_rejected() {
    let router = create_router_for_test();
    let (status, body) = post_json(
        router,
        "/payslips",
        create_request(1, "eighty thousand", "2026-01-14"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["code"] == "MALFORMED_JSON" || body["code"] == "VALIDATION_ERROR");
}

// =============================================================================
// Document download
// =============================================================================

#[tokio::test]
async fn test_document_download_with_datestamped_filename() {
    let router = create_router_for_test();
    let request = create_request(2, "104000", "2026-01-14");

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/payslips/document")
                .header("Content-Type", "application/json")
                .body(Body::from(request.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("content-disposition")
            .unwrap()
            .to_str()
            .unwrap(),
        "attachment; filename=\"payslips_2026-01-14.txt\""
    );

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let document = String::from_utf8(bytes.to_vec()).unwrap();

    assert_eq!(document.matches("Payslip for Riley Hartmann").count(), 2);
    assert!(document.contains("Coastline Catering Pty Ltd - ABN: 51824753556"));
    assert!(document.contains("Pay Period: 29/12/2025 - 11/01/2026"));
    assert!(document.contains("Date Paid: 12/01/2026"));
    assert!(document.contains("$4000.00"));
}

#[tokio::test]
async fn test_document_endpoint_rejects_bad_input() {
    let router = create_router_for_test();
    let (status, body) = post_json(
        router,
        "/payslips/document",
        create_request(0, "80000", "2026-01-14"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_PAYSLIP_COUNT");
}
