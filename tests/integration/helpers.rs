//! Shared test helpers for integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use ems_api::{AppState, build_app};
use ems_auth::{Argon2CredentialHasher, CredentialHasher, TokenIssuer, TokenVerifier};
use ems_core::config::AppConfig;
use ems_core::events::DomainEvent;
use ems_core::traits::{EventPublisher, ObjectStore, PublishError};
use ems_core::types::{StaffId, StoreId};
use ems_database::{InMemoryStaffRepository, StaffRepository};
use ems_entity::staff::{NewStaff, StaffRecord};
use ems_service::{AuthenticationService, EnrollmentService, RetryPolicy, StaffService};
use ems_storage::StaffArchiver;
use ems_storage::providers::MemoryObjectStore;

/// Publisher that keeps every event it accepts.
#[derive(Debug, Default)]
pub struct RecordingPublisher {
    events: Mutex<Vec<DomainEvent>>,
    failures_left: AtomicUsize,
}

impl RecordingPublisher {
    /// A publisher whose first `times` calls fail.
    pub fn failing(times: usize) -> Self {
        Self {
            failures_left: AtomicUsize::new(times),
            ..Default::default()
        }
    }

    /// Events accepted so far.
    pub fn published(&self) -> Vec<DomainEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventPublisher for RecordingPublisher {
    fn name(&self) -> &str {
        "recording"
    }

    async fn publish(&self, event: &DomainEvent) -> Result<(), PublishError> {
        let failing = self
            .failures_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if failing {
            return Err(PublishError::Rejected {
                status: 503,
                body: "topic unavailable".to_string(),
            });
        }
        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
    /// Staff repository behind the router
    pub repo: Arc<InMemoryStaffRepository>,
    /// Archive object store behind the router
    pub store: Arc<MemoryObjectStore>,
    /// Event sink behind the router
    pub publisher: Arc<RecordingPublisher>,
    /// Issuer sharing the router's signing configuration
    pub issuer: Arc<TokenIssuer>,
    hasher: Arc<dyn CredentialHasher>,
}

impl TestApp {
    /// Create a new test application
    pub fn new() -> Self {
        Self::with_publisher(RecordingPublisher::default())
    }

    /// Create a test application with a specific publisher
    pub fn with_publisher(publisher: RecordingPublisher) -> Self {
        let config = test_config();

        let repo = Arc::new(InMemoryStaffRepository::new());
        let store = Arc::new(MemoryObjectStore::new());
        let publisher = Arc::new(publisher);

        let hasher: Arc<dyn CredentialHasher> = Arc::new(
            Argon2CredentialHasher::new(&config.auth.argon2).expect("Failed to build hasher"),
        );
        let issuer = Arc::new(TokenIssuer::new(&config.auth).expect("Failed to build issuer"));
        let verifier =
            Arc::new(TokenVerifier::new(&config.auth).expect("Failed to build verifier"));

        let repo_dyn: Arc<dyn StaffRepository> = repo.clone();
        let store_dyn: Arc<dyn ObjectStore> = store.clone();
        let publisher_dyn: Arc<dyn EventPublisher> = publisher.clone();

        let archiver = Arc::new(StaffArchiver::new(
            Arc::clone(&store_dyn),
            config.storage.container.clone(),
        ));
        let retry = RetryPolicy::new(
            config.retry.max_attempts,
            std::time::Duration::from_millis(1),
            std::time::Duration::from_millis(2),
        );

        let state = AppState {
            config: Arc::new(config.clone()),
            object_store: store_dyn,
            token_verifier: verifier,
            enrollment_service: Arc::new(EnrollmentService::new(
                Arc::clone(&repo_dyn),
                Arc::clone(&hasher),
                archiver,
                publisher_dyn,
                retry,
                config.events.topic.clone(),
            )),
            authentication_service: Arc::new(AuthenticationService::new(
                Arc::clone(&repo_dyn),
                Arc::clone(&hasher),
                Arc::clone(&issuer),
            )),
            staff_service: Arc::new(StaffService::new(repo_dyn)),
        };

        Self {
            router: build_app(state),
            config,
            repo,
            store,
            publisher,
            issuer,
            hasher,
        }
    }

    /// A valid bearer token for an operator account.
    pub fn operator_token(&self) -> String {
        self.issuer
            .issue_default("operator@bikes.shop")
            .expect("Failed to issue token")
            .token
    }

    /// Insert a staff member directly into the repository
    pub async fn seed_staff(
        &self,
        email: &str,
        password: &str,
        manager_id: Option<i32>,
    ) -> StaffRecord {
        let password_hash = self.hasher.hash(password).expect("Failed to hash");
        self.repo
            .create(NewStaff {
                first_name: "Seed".to_string(),
                last_name: "Staff".to_string(),
                email: email.to_string(),
                phone: None,
                active: 1,
                store_id: StoreId::new(1),
                manager_id: manager_id.map(StaffId::new),
                password_hash,
            })
            .await
            .expect("Failed to seed staff")
    }

    /// Make a request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        request_router(&self.router, method, path, body, token).await
    }

    /// Make a request with a raw (possibly malformed) body
    pub async fn send(
        &self,
        method: &str,
        path: &str,
        body: String,
        token: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req.body(Body::from(body)).expect("Failed to build request");
        dispatch(&self.router, req).await
    }
}

/// Send a JSON request to any router.
pub async fn request_router(
    router: &Router,
    method: &str,
    path: &str,
    body: Option<Value>,
    token: Option<&str>,
) -> TestResponse {
    let mut req = Request::builder()
        .method(method)
        .uri(path)
        .header("Content-Type", "application/json");
    if let Some(token) = token {
        req = req.header("Authorization", format!("Bearer {}", token));
    }
    let body = body
        .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
        .unwrap_or_default();
    let req = req.body(Body::from(body)).expect("Failed to build request");
    dispatch(router, req).await
}

async fn dispatch(router: &Router, req: Request<Body>) -> TestResponse {
    let response = router
        .clone()
        .oneshot(req)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("Failed to read body");

    let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

    TestResponse { status, body }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

/// Enrollment body for Jane Doe, the running example.
pub fn jane_doe() -> Value {
    json!({
        "firstName": "Jane",
        "lastName": "Doe",
        "email": "jane@bikes.shop",
        "phone": "555-0100",
        "active": 1,
        "storeId": 1,
        "managerId": 2,
        "password": "S3cret!"
    })
}

/// Configuration with fast hashing and in-memory storage.
pub fn test_config() -> AppConfig {
    serde_json::from_value(json!({
        "database": { "url": "postgres://unused" },
        "auth": {
            "jwt_issuer": "bikestore-ems",
            "jwt_audience": "bikestore-staff",
            "jwt_secret": "integration-test-secret-0123456789abcdef",
            "argon2": { "memory_kib": 8, "iterations": 1, "parallelism": 1 }
        },
        "storage": { "provider": "memory" },
        "events": { "topic": "ems-staff-test" }
    }))
    .expect("Failed to build test config")
}
