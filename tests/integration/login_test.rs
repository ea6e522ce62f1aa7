//! Integration tests for the login flow.

use chrono::{DateTime, Utc};
use http::StatusCode;
use serde_json::json;

use ems_auth::TokenVerifier;

use crate::helpers::{TestApp, jane_doe};

#[tokio::test]
async fn test_enrolled_staff_can_log_in() {
    let app = TestApp::new();
    let token = app.operator_token();
    let enrolled = app
        .request("POST", "/api/staffs/add", Some(jane_doe()), Some(&token))
        .await;
    assert_eq!(enrolled.status, StatusCode::OK);

    let response = app
        .request(
            "POST",
            "/api/login/login",
            Some(json!({ "email": "jane@bikes.shop", "password": "S3cret!" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let token = response.body["data"]["token"].as_str().unwrap();
    assert!(!token.is_empty());

    let expiration: DateTime<Utc> =
        serde_json::from_value(response.body["data"]["expiration"].clone()).unwrap();
    assert!(expiration > Utc::now());

    let claims = TokenVerifier::new(&app.config.auth)
        .unwrap()
        .verify(token)
        .unwrap();
    assert_eq!(claims.sub, "jane@bikes.shop");
    assert_eq!(claims.aud, app.config.auth.jwt_audience);
}

#[tokio::test]
async fn test_login_token_unlocks_protected_routes() {
    let app = TestApp::new();
    let staff = app.seed_staff("mike@bikes.shop", "pedal-power", None).await;

    let login = app
        .request(
            "POST",
            "/api/login/login",
            Some(json!({ "email": "mike@bikes.shop", "password": "pedal-power" })),
            None,
        )
        .await;
    let token = login.body["data"]["token"].as_str().unwrap().to_string();

    let response = app
        .request(
            "GET",
            &format!("/api/staffs/{}", staff.staff_id),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["email"], "mike@bikes.shop");
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::new();
    app.seed_staff("jane@bikes.shop", "S3cret!", Some(2)).await;

    let response = app
        .request(
            "POST",
            "/api/login/login",
            Some(json!({ "email": "jane@bikes.shop", "password": "wrong" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Invalid email or password");
    assert!(response.body.get("data").is_none());
}

#[tokio::test]
async fn test_login_unknown_email() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/login/login",
            Some(json!({ "email": "ghost@bikes.shop", "password": "S3cret!" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Invalid email or password");
}

#[tokio::test]
async fn test_login_requires_both_fields() {
    let app = TestApp::new();

    let empty = app
        .request(
            "POST",
            "/api/login/login",
            Some(json!({ "email": "", "password": "" })),
            None,
        )
        .await;
    assert_eq!(empty.status, StatusCode::BAD_REQUEST);

    let missing = app
        .request(
            "POST",
            "/api/login/login",
            Some(json!({ "email": "jane@bikes.shop" })),
            None,
        )
        .await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);
    assert_eq!(missing.body["error"], "VALIDATION_ERROR");
}
