//! Route definitions for the staff HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's `State` extractor.

use std::time::Duration;

use axum::{
    Router,
    http::StatusCode,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::compression::CompressionLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let timeout = Duration::from_secs(state.config.server.request_timeout_seconds);
    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    let api_routes = Router::new()
        .merge(staff_routes())
        .merge(login_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(timeout_layer(timeout))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Requests running longer than `timeout` are answered with 408.
fn timeout_layer(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout)
}

/// Staff enrollment, lookup and removal
fn staff_routes() -> Router<AppState> {
    Router::new()
        .route("/staffs", get(handlers::staff::list_staff))
        .route("/staffs/add", post(handlers::staff::add_staff))
        .route(
            "/staffs/{id}",
            get(handlers::staff::get_staff).delete(handlers::staff::delete_staff),
        )
        .route(
            "/staffs/managerdetails/{id}",
            get(handlers::staff::manager_details),
        )
}

/// Login (no auth required)
fn login_routes() -> Router<AppState> {
    Router::new().route("/login/login", post(handlers::login::login))
}

/// Health check endpoints (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::health_detailed))
}
