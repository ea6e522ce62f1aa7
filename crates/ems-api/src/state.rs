//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use ems_auth::TokenVerifier;
use ems_core::config::AppConfig;
use ems_core::traits::ObjectStore;
use ems_service::{AuthenticationService, EnrollmentService, StaffService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// Archive object store, probed by the detailed health check
    pub object_store: Arc<dyn ObjectStore>,

    // ── Auth ─────────────────────────────────────────────────
    /// Bearer token verifier
    pub token_verifier: Arc<TokenVerifier>,

    // ── Services ─────────────────────────────────────────────
    /// Staff enrollment pipeline
    pub enrollment_service: Arc<EnrollmentService>,
    /// Email/password login
    pub authentication_service: Arc<AuthenticationService>,
    /// Staff lookups and removal
    pub staff_service: Arc<StaffService>,
}
