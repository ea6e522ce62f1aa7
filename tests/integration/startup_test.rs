//! Integration tests for the startup wiring shared with the server binary.

use std::sync::Arc;

use http::StatusCode;
use serde_json::json;

use ems_api::{build_app, build_state};
use ems_core::config::AppConfig;
use ems_core::error::ErrorKind;
use ems_database::{InMemoryStaffRepository, StaffRepository};

use crate::helpers::{request_router, test_config};

fn with_initial_account(mut config: AppConfig) -> AppConfig {
    config.bootstrap.email = "admin@bikes.shop".to_string();
    config.bootstrap.password = "first-login".to_string();
    config
}

#[tokio::test]
async fn test_built_state_serves_health() {
    let repo = Arc::new(InMemoryStaffRepository::new());

    let state = build_state(test_config(), repo.clone()).await.unwrap();
    assert_eq!(state.object_store.provider_type(), "memory");
    let router = build_app(state);

    let response = request_router(&router, "GET", "/api/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_built_state_opens_local_storage() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = test_config();
    config.storage.provider = "local".to_string();
    config.storage.local.root_path = dir.path().join("archive").display().to_string();

    let state = build_state(config, Arc::new(InMemoryStaffRepository::new()))
        .await
        .unwrap();

    assert_eq!(state.object_store.provider_type(), "local");
    assert!(dir.path().join("archive").is_dir());
}

#[tokio::test]
async fn test_initial_account_can_log_in_and_enroll() {
    let repo = Arc::new(InMemoryStaffRepository::new());
    let state = build_state(with_initial_account(test_config()), repo.clone())
        .await
        .unwrap();
    let router = build_app(state);

    let login = request_router(
        &router,
        "POST",
        "/api/login/login",
        Some(json!({ "email": "admin@bikes.shop", "password": "first-login" })),
        None,
    )
    .await;
    assert_eq!(login.status, StatusCode::OK);
    let token = login.body["data"]["token"].as_str().unwrap().to_string();

    let enrolled = request_router(
        &router,
        "POST",
        "/api/staffs/add",
        Some(crate::helpers::jane_doe()),
        Some(&token),
    )
    .await;
    assert_eq!(enrolled.status, StatusCode::OK);
    assert_eq!(repo.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_initial_account_not_reseeded() {
    let repo = Arc::new(InMemoryStaffRepository::new());

    build_state(with_initial_account(test_config()), repo.clone())
        .await
        .unwrap();
    build_state(with_initial_account(test_config()), repo.clone())
        .await
        .unwrap();

    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_bad_token_lifetime_fails_startup() {
    let mut config = test_config();
    config.auth.jwt_expire_minutes = 0;

    let err = build_state(config, Arc::new(InMemoryStaffRepository::new()))
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Configuration);
}

#[tokio::test]
async fn test_unknown_storage_provider_fails_startup() {
    let mut config = test_config();
    config.storage.provider = "floppy".to_string();

    let result = build_state(config, Arc::new(InMemoryStaffRepository::new())).await;

    assert!(result.is_err());
}
