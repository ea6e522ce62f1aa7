//! Request context carrying the authenticated staff member.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Context for the current authenticated request.
///
/// Built from verified token claims by the API layer and passed into
/// service methods so operations can log *who* is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// Email of the authenticated staff member.
    pub email: String,
    /// When the presented token expires.
    pub token_expires_at: DateTime<Utc>,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(email: String, token_expires_at: DateTime<Utc>) -> Self {
        Self {
            email,
            token_expires_at,
            request_time: Utc::now(),
        }
    }
}
