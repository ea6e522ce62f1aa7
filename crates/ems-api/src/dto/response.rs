//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ems_entity::staff::StaffRecord;
use ems_service::EnrolledStaff;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Public view of a staff record. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffResponse {
    pub staff_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub active: i16,
    pub store_id: i32,
    pub manager_id: Option<i32>,
}

impl From<StaffRecord> for StaffResponse {
    fn from(record: StaffRecord) -> Self {
        Self {
            staff_id: record.staff_id.get(),
            first_name: record.first_name,
            last_name: record.last_name,
            email: record.email,
            phone: record.phone,
            active: record.active,
            store_id: record.store_id.get(),
            manager_id: record.manager_id.map(|id| id.get()),
        }
    }
}

/// Result of a successful enrollment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollResponse {
    #[serde(flatten)]
    pub staff: StaffResponse,
    /// Key of the archived snapshot inside the archive container.
    pub archive_key: String,
}

impl From<EnrolledStaff> for EnrollResponse {
    fn from(enrolled: EnrolledStaff) -> Self {
        Self {
            staff: enrolled.staff.into(),
            archive_key: enrolled.archive.key,
        }
    }
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Signed bearer token.
    pub token: String,
    /// Token expiration.
    pub expiration: DateTime<Utc>,
}

/// Deletion acknowledgement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Liveness response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Readiness response with dependency probes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedHealthResponse {
    pub status: String,
    pub repository: String,
    pub storage: String,
    pub staff_count: Option<u64>,
}
