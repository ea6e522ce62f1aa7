//! Typed path parameter helpers.

use ems_core::error::AppError;
use ems_core::types::StaffId;

/// Parses a staff id from a path segment.
pub fn parse_staff_id(s: &str) -> Result<StaffId, AppError> {
    s.parse::<StaffId>()
        .map_err(|_| AppError::validation(format!("Invalid staff id: {s}")))
}
