//! Request DTOs with validation.
//!
//! The enrollment body lives in `ems-service` as
//! [`EnrollStaffRequest`](ems_service::EnrollStaffRequest) since it carries
//! its own field-level validation.

use std::fmt;

use serde::Deserialize;
use validator::Validate;

/// Login request body.
#[derive(Clone, Deserialize, Validate)]
pub struct LoginRequest {
    /// Staff email.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_fields_fail_validation() {
        let req = LoginRequest {
            email: String::new(),
            password: String::new(),
        };
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn test_debug_hides_password() {
        let req = LoginRequest {
            email: "jane@bikes.shop".to_string(),
            password: "hunter2".to_string(),
        };
        assert!(!format!("{req:?}").contains("hunter2"));
    }
}
