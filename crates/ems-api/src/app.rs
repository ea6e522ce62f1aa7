//! Application builder: wires services, router, middleware and state into an Axum app.

use std::sync::Arc;

use axum::Router;

use ems_auth::{Argon2CredentialHasher, CredentialHasher, TokenIssuer, TokenVerifier};
use ems_core::config::AppConfig;
use ems_core::error::AppError;
use ems_database::StaffRepository;
use ems_service::{
    AuthenticationService, EnrollmentService, RetryPolicy, StaffService, seed_initial_staff,
};
use ems_storage::{StaffArchiver, build_object_store};

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Construct every service from `config` on top of `repo`.
///
/// Fails fast on bad signing or hashing configuration, opens the archive
/// store, selects the event publisher and finally enrolls the configured
/// initial account if the staff table is empty.
pub async fn build_state(
    config: AppConfig,
    repo: Arc<dyn StaffRepository>,
) -> Result<AppState, AppError> {
    // ── Token signing and password hashing ───────────────────────
    let issuer = Arc::new(TokenIssuer::new(&config.auth)?);
    let verifier = Arc::new(TokenVerifier::new(&config.auth)?);
    let hasher: Arc<dyn CredentialHasher> =
        Arc::new(Argon2CredentialHasher::new(&config.auth.argon2)?);

    // ── Archive storage ──────────────────────────────────────────
    tracing::info!(
        "Initializing archive storage (provider: {})...",
        config.storage.provider
    );
    let object_store = build_object_store(&config.storage).await?;
    if !object_store.health_check().await? {
        tracing::warn!(
            provider = object_store.provider_type(),
            "Archive storage health check failed; enrollments will fail at archival"
        );
    }
    let archiver = Arc::new(StaffArchiver::new(
        Arc::clone(&object_store),
        config.storage.container.clone(),
    ));

    // ── Event publisher ──────────────────────────────────────────
    let publisher = ems_events::build_publisher(&config.events)?;
    tracing::info!(publisher = publisher.name(), "Event publisher ready");

    // ── Services ─────────────────────────────────────────────────
    let enrollment_service = Arc::new(EnrollmentService::new(
        Arc::clone(&repo),
        Arc::clone(&hasher),
        archiver,
        publisher,
        RetryPolicy::from_config(&config.retry),
        config.events.topic.clone(),
    ));
    let authentication_service = Arc::new(AuthenticationService::new(
        Arc::clone(&repo),
        Arc::clone(&hasher),
        issuer,
    ));
    let staff_service = Arc::new(StaffService::new(repo));

    seed_initial_staff(&enrollment_service, &staff_service, &config.bootstrap).await?;

    Ok(AppState {
        config: Arc::new(config),
        object_store,
        token_verifier: verifier,
        enrollment_service,
        authentication_service,
        staff_service,
    })
}

/// Binds the configured address and serves `app` until `shutdown` resolves.
pub async fn serve(
    app: Router,
    bind_address: &str,
    shutdown: impl std::future::Future<Output = ()> + Send + 'static,
) -> Result<(), AppError> {
    let listener = tokio::net::TcpListener::bind(bind_address)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {bind_address}: {e}")))?;

    tracing::info!("Staff service listening on {}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    Ok(())
}
