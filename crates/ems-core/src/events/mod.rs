//! Domain events emitted by staff operations.
//!
//! Events use the Event Grid schema so they can be posted to a topic as-is:
//! a batch is a JSON array of [`DomainEvent`] values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Subject carried by every staff event.
pub const STAFF_EVENT_SUBJECT: &str = "EMS";

/// Event type of the staff-created event.
pub const STAFF_EVENT_TYPE: &str = "EMS.StaffEvent";

/// Schema version of the staff event payload.
pub const STAFF_EVENT_DATA_VERSION: &str = "1.0";

/// Immutable event envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainEvent {
    /// Unique event ID.
    pub id: Uuid,
    /// Publisher-defined path to the event subject.
    pub subject: String,
    /// Event type used by subscribers for filtering.
    pub event_type: String,
    /// Schema version of `data`.
    pub data_version: String,
    /// When the event was created.
    pub event_time: DateTime<Utc>,
    /// Topic name the event is addressed to.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub topic: String,
    /// Event payload.
    pub data: serde_json::Value,
}

impl DomainEvent {
    /// Create a new event with a fresh id stamped at the current instant.
    pub fn new(
        subject: impl Into<String>,
        event_type: impl Into<String>,
        data_version: impl Into<String>,
        topic: impl Into<String>,
        data: serde_json::Value,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            subject: subject.into(),
            event_type: event_type.into(),
            data_version: data_version.into(),
            event_time: Utc::now(),
            topic: topic.into(),
            data,
        }
    }

    /// Create a staff event (`EMS` / `EMS.StaffEvent` / `1.0`).
    pub fn staff(topic: impl Into<String>, data: serde_json::Value) -> Self {
        Self::new(
            STAFF_EVENT_SUBJECT,
            STAFF_EVENT_TYPE,
            STAFF_EVENT_DATA_VERSION,
            topic,
            data,
        )
    }
}
