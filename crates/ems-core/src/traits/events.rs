//! Event publishing trait.

use async_trait::async_trait;
use thiserror::Error;

use crate::error::{AppError, ErrorKind};
use crate::events::DomainEvent;

/// Failure to hand an event to the topic.
#[derive(Debug, Error)]
pub enum PublishError {
    /// The event could not be serialized.
    #[error("failed to serialize event: {0}")]
    Serialize(#[from] serde_json::Error),
    /// The topic endpoint could not be reached.
    #[error("event transport failed: {0}")]
    Transport(String),
    /// The topic answered with a non-success status.
    #[error("event rejected with status {status}: {body}")]
    Rejected {
        /// HTTP status code returned by the topic.
        status: u16,
        /// Response body, truncated.
        body: String,
    },
}

impl From<PublishError> for AppError {
    fn from(err: PublishError) -> Self {
        let message = format!("Event publication failed: {err}");
        AppError::with_source(ErrorKind::ExternalService, message, err)
    }
}

/// Sink for domain events.
///
/// Delivery is at-least-once from the caller's perspective; implementations
/// do not retry and do not deduplicate.
#[async_trait]
pub trait EventPublisher: Send + Sync + std::fmt::Debug + 'static {
    /// Publisher name for logs (e.g., "event-grid", "log").
    fn name(&self) -> &str;

    /// Send a single event.
    async fn publish(&self, event: &DomainEvent) -> Result<(), PublishError>;
}
