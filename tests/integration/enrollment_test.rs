//! Integration tests for staff enrollment.

use http::StatusCode;
use serde_json::json;

use ems_core::types::StaffId;
use ems_database::StaffRepository;

use crate::helpers::{RecordingPublisher, TestApp, jane_doe};

#[tokio::test]
async fn test_enroll_persists_archives_and_publishes() {
    let app = TestApp::new();
    let token = app.operator_token();

    let response = app
        .request("POST", "/api/staffs/add", Some(jane_doe()), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    let data = &response.body["data"];
    assert_eq!(data["staffId"], 1);
    assert_eq!(data["email"], "jane@bikes.shop");
    assert_eq!(data["managerId"], 2);
    assert!(data.get("passwordHash").is_none());
    assert!(!response.body.to_string().contains("S3cret!"));

    let stored = app
        .repo
        .find_by_email("jane@bikes.shop")
        .await
        .unwrap()
        .expect("record persisted");
    assert_ne!(stored.password_hash, "S3cret!");
    assert!(stored.password_hash.starts_with("$argon2id$"));

    let paths = app.store.paths().await;
    assert_eq!(paths.len(), 1);
    let key = data["archiveKey"].as_str().unwrap();
    assert!(key.starts_with("ems.Staff.") && key.ends_with(".json"));
    assert_eq!(paths[0], format!("{}/{}", app.config.storage.container, key));

    let events = app.publisher.published();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].subject, "EMS");
    assert_eq!(events[0].event_type, "EMS.StaffEvent");
    assert_eq!(events[0].data["staff_id"], 1);
    assert_eq!(events[0].data["email"], "jane@bikes.shop");
}

#[tokio::test]
async fn test_enroll_requires_bearer_token() {
    let app = TestApp::new();

    let response = app
        .request("POST", "/api/staffs/add", Some(jane_doe()), None)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHORIZED");
    assert_eq!(app.repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_enroll_rejects_token_from_another_issuer() {
    let app = TestApp::new();
    let forged = jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &json!({
            "sub": "intruder@bikes.shop",
            "email": "intruder@bikes.shop",
            "iss": "bikestore-ems",
            "aud": "bikestore-staff",
            "iat": chrono::Utc::now().timestamp(),
            "exp": chrono::Utc::now().timestamp() + 600,
        }),
        &jsonwebtoken::EncodingKey::from_secret(b"some-other-secret-entirely"),
    )
    .unwrap();

    let response = app
        .request("POST", "/api/staffs/add", Some(jane_doe()), Some(&forged))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(app.repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_enroll_reports_every_missing_field() {
    let app = TestApp::new();
    let token = app.operator_token();

    let response = app
        .request(
            "POST",
            "/api/staffs/add",
            Some(json!({ "firstName": "Jane", "storeId": 0 })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    let message = response.body["message"].as_str().unwrap();
    for field in ["lastName", "email", "active", "storeId", "managerId", "password"] {
        assert!(message.contains(field), "{field} missing from {message}");
    }
    assert!(!message.contains("firstName"));
    assert_eq!(app.repo.count().await.unwrap(), 0);
    assert!(app.store.is_empty().await);
    assert!(app.publisher.published().is_empty());
}

#[tokio::test]
async fn test_enroll_rejects_malformed_json() {
    let app = TestApp::new();
    let token = app.operator_token();

    let response = app
        .send("POST", "/api/staffs/add", "{\"firstName\": ".to_string(), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_enroll_duplicate_email_conflicts() {
    let app = TestApp::new();
    let token = app.operator_token();

    let first = app
        .request("POST", "/api/staffs/add", Some(jane_doe()), Some(&token))
        .await;
    assert_eq!(first.status, StatusCode::OK);

    let mut again = jane_doe();
    again["email"] = json!("JANE@Bikes.Shop");
    let second = app
        .request("POST", "/api/staffs/add", Some(again), Some(&token))
        .await;

    assert_eq!(second.status, StatusCode::CONFLICT);
    assert_eq!(second.body["message"], "Email already in use");
    assert_eq!(app.repo.count().await.unwrap(), 1);
    assert_eq!(app.store.len().await, 1);
    assert_eq!(app.publisher.published().len(), 1);
}

#[tokio::test]
async fn test_archive_failure_keeps_persisted_record() {
    let app = TestApp::new();
    let token = app.operator_token();
    app.store.fail_next_writes(app.config.retry.max_attempts);

    let response = app
        .request("POST", "/api/staffs/add", Some(jane_doe()), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_GATEWAY);
    assert_eq!(response.body["error"], "EXTERNAL_SERVICE_ERROR");
    assert_eq!(
        response.body["message"],
        "Staff member 1 was created but archival failed"
    );

    assert!(app.repo.find_by_id(StaffId::new(1)).await.unwrap().is_some());
    assert!(app.store.is_empty().await);
    assert_eq!(
        app.store.write_attempts(),
        app.config.retry.max_attempts as usize
    );
    assert!(app.publisher.published().is_empty());
}

#[tokio::test]
async fn test_transient_archive_failure_is_absorbed() {
    let app = TestApp::new();
    let token = app.operator_token();
    app.store.fail_next_writes(1);

    let response = app
        .request("POST", "/api/staffs/add", Some(jane_doe()), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(app.store.write_attempts(), 2);
    assert_eq!(app.store.len().await, 1);
    assert_eq!(app.publisher.published().len(), 1);
}

#[tokio::test]
async fn test_publish_failure_after_archive() {
    let app = TestApp::with_publisher(RecordingPublisher::failing(usize::MAX));
    let token = app.operator_token();

    let response = app
        .request("POST", "/api/staffs/add", Some(jane_doe()), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_GATEWAY);
    assert_eq!(
        response.body["message"],
        "Staff member 1 was created but publication failed"
    );
    assert_eq!(app.repo.count().await.unwrap(), 1);
    assert_eq!(app.store.len().await, 1);
    assert_eq!(app.store.write_attempts(), 1);
}
