//! # ems-api
//!
//! HTTP API layer for the staff service built on Axum.
//!
//! Provides the staff and login endpoints, middleware (CORS, request
//! logging, timeouts), extractors, DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state};
pub use error::ApiError;
pub use state::AppState;
