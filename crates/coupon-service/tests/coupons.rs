//! Coupon API integration tests.

mod common;

use axum::http::StatusCode;
use common::{FixedCode, TestHarness};
use serde_json::{json, Value};

fn assert_error(body: &Value, code: &str, url: &str) {
    assert_eq!(body["errorCode"], code, "{body}");
    assert_eq!(body["url"], url, "{body}");
    assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));
}

// ============================================================================
// Create
// ============================================================================

#[tokio::test]
async fn create_coupon_success() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .post("/api/v1/coupon")
        .json(&json!({ "email": "jimin.joo@example.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["id"], 1);
    assert_eq!(body["email"], "jimin.joo@example.com");
    let code = body["code"].as_str().unwrap();
    assert_eq!(code.len(), 10);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[tokio::test]
async fn create_coupon_assigns_increasing_ids() {
    let harness = TestHarness::new();

    let first = harness.create("a@example.com").await;
    let second = harness.create("b@example.com").await;

    assert_eq!(first["id"], 1);
    assert_eq!(second["id"], 2);
    assert_ne!(first["code"], second["code"]);
}

#[tokio::test]
async fn create_coupon_duplicate_email_fails() {
    let harness = TestHarness::new();
    harness.create("dup@example.com").await;

    let response = harness
        .server
        .post("/api/v1/coupon")
        .json(&json!({ "email": "dup@example.com" }))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_error(&body, "duplicate.email", "/api/v1/coupon");
    assert_eq!(
        body["message"],
        "Fail to create Coupon. Already coupon issued for this mail."
    );
}

#[tokio::test]
async fn create_coupon_empty_email_fails() {
    let harness = TestHarness::new();

    for payload in [json!({ "email": "" }), json!({ "email": "   " }), json!({})] {
        let response = harness.server.post("/api/v1/coupon").json(&payload).await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_error(&body, "empty.email", "/api/v1/coupon");
    }
}

#[tokio::test]
async fn create_coupon_invalid_email_fails() {
    let harness = TestHarness::new();

    for email in ["not-an-email", "a@b", "@example.com", "a..b@example.com"] {
        let response = harness
            .server
            .post("/api/v1/coupon")
            .json(&json!({ "email": email }))
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_error(&body, "invalid.email", "/api/v1/coupon");
    }
}

#[tokio::test]
async fn create_coupon_missing_body_fails() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .post("/api/v1/coupon")
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_error(&body, "null.body", "/api/v1/coupon");
}

#[tokio::test]
async fn create_coupon_malformed_json_fails() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .post("/api/v1/coupon")
        .content_type("application/json")
        .bytes("{\"email\":".into())
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_error(&body, "null.body", "/api/v1/coupon");
}

#[tokio::test]
async fn create_coupon_non_json_fails() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .post("/api/v1/coupon")
        .text("email=a@example.com")
        .await;

    response.assert_status(StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let body: Value = response.json();
    assert_error(&body, "not.json", "/api/v1/coupon");
}

#[tokio::test]
async fn create_coupon_collision_exhaustion_fails() {
    let harness = TestHarness::with_generator(FixedCode("SAMECODE01"));
    harness.create("first@example.com").await;

    let response = harness
        .server
        .post("/api/v1/coupon")
        .json(&json!({ "email": "second@example.com" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_error(&body, "code.collision", "/api/v1/coupon");
    assert_eq!(
        body["message"],
        "Fail to create Coupon. Collision occur more than 5 in code generator."
    );
}

#[tokio::test]
async fn create_coupon_empty_code_fails() {
    let harness = TestHarness::with_generator(FixedCode(""));

    let response = harness
        .server
        .post("/api/v1/coupon")
        .json(&json!({ "email": "a@example.com" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_error(&body, "empty.code", "/api/v1/coupon");
}

// ============================================================================
// Get
// ============================================================================

#[tokio::test]
async fn get_coupon_success() {
    let harness = TestHarness::new();
    let created = harness.create("get@example.com").await;

    let response = harness.server.get("/api/v1/coupon/1").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body, created);
}

#[tokio::test]
async fn get_coupon_not_found() {
    let harness = TestHarness::new();

    let response = harness.server.get("/api/v1/coupon/42").await;

    response.assert_status_not_found();
    let body: Value = response.json();
    assert_error(&body, "not.exist.coupon", "/api/v1/coupon/42");
    assert!(body["message"].as_str().unwrap().contains("42"));
}

#[tokio::test]
async fn get_coupon_non_numeric_id_fails() {
    let harness = TestHarness::new();

    let response = harness.server.get("/api/v1/coupon/abc").await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_error(&body, "argument.type.mismatch", "/api/v1/coupon/abc");
}

// ============================================================================
// List
// ============================================================================

#[tokio::test]
async fn list_coupons_empty() {
    let harness = TestHarness::new();

    let response = harness.server.get("/api/v1/coupon").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["content"], json!([]));
    assert_eq!(body["totalElements"], 0);
    assert_eq!(body["empty"], true);
}

#[tokio::test]
async fn list_coupons_newest_first() {
    let harness = TestHarness::new();
    for email in ["a@example.com", "b@example.com", "c@example.com"] {
        harness.create(email).await;
    }

    let response = harness
        .server
        .get("/api/v1/coupon")
        .add_query_param("page", 0)
        .add_query_param("size", 2)
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["totalElements"], 3);
    assert_eq!(body["totalPages"], 2);
    assert_eq!(body["numberOfElements"], 2);
    assert_eq!(body["first"], true);
    assert_eq!(body["content"][0]["email"], "c@example.com");
    assert_eq!(body["content"][1]["email"], "b@example.com");

    let response = harness
        .server
        .get("/api/v1/coupon")
        .add_query_param("page", 1)
        .add_query_param("size", 2)
        .await;

    let body: Value = response.json();
    assert_eq!(body["numberOfElements"], 1);
    assert_eq!(body["last"], true);
    assert_eq!(body["content"][0]["email"], "a@example.com");
}

#[tokio::test]
async fn list_coupons_sorted_by_email() {
    let harness = TestHarness::new();
    for email in ["m@example.com", "a@example.com", "z@example.com"] {
        harness.create(email).await;
    }

    let response = harness
        .server
        .get("/api/v1/coupon")
        .add_query_param("sort", "email,asc")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    let emails: Vec<_> = body["content"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["email"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(emails, ["a@example.com", "m@example.com", "z@example.com"]);
}

#[tokio::test]
async fn list_coupons_invalid_pagination_fails() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .get("/api/v1/coupon")
        .add_query_param("sort", "name")
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_error(&body, "invalid.pagination", "/api/v1/coupon?sort=name");

    let response = harness
        .server
        .get("/api/v1/coupon")
        .add_query_param("page", "first")
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["errorCode"], "invalid.pagination");
}
