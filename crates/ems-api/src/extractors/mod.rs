//! Custom Axum extractors.

pub mod auth;
pub mod json;
pub mod path;

pub use auth::AuthStaff;
pub use json::ApiJson;
pub use path::parse_staff_id;
