//! Staff entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use ems_core::events::DomainEvent;
use ems_core::types::{StaffId, StoreId};

/// A staff member of the bike store chain.
///
/// Serializes in full, hash included: this is the shape written to the
/// archive and carried by staff events. HTTP responses use a separate DTO.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct StaffRecord {
    /// Repository-assigned identifier.
    pub staff_id: StaffId,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Login email, unique across staff (case-insensitive).
    pub email: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Active flag; non-zero for staff that may work.
    pub active: i16,
    /// Store the staff member works at.
    pub store_id: StoreId,
    /// Direct manager, if any.
    pub manager_id: Option<StaffId>,
    /// Argon2 PHC string. Never empty once persisted.
    pub password_hash: String,
}

impl StaffRecord {
    /// Build the staff-created event carrying this record as its payload.
    pub fn to_created_event(&self, topic: &str) -> Result<DomainEvent, serde_json::Error> {
        let data = serde_json::to_value(self)?;
        Ok(DomainEvent::staff(topic, data))
    }
}

/// Data required to insert a new staff record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewStaff {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Login email.
    pub email: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Active flag.
    pub active: i16,
    /// Store the staff member works at.
    pub store_id: StoreId,
    /// Direct manager, if any.
    pub manager_id: Option<StaffId>,
    /// Pre-computed password hash.
    pub password_hash: String,
}

impl NewStaff {
    /// Materialize the record once the repository has assigned an id.
    pub fn into_record(self, staff_id: StaffId) -> StaffRecord {
        StaffRecord {
            staff_id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            active: self.active,
            store_id: self.store_id,
            manager_id: self.manager_id,
            password_hash: self.password_hash,
        }
    }
}
