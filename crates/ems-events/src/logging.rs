//! Log-only publisher for development.

use async_trait::async_trait;
use tracing::info;

use ems_core::events::DomainEvent;
use ems_core::traits::events::{EventPublisher, PublishError};

/// Records each event at INFO and reports success.
#[derive(Debug, Default, Clone)]
pub struct LogEventPublisher;

impl LogEventPublisher {
    /// Create a new log publisher.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EventPublisher for LogEventPublisher {
    fn name(&self) -> &str {
        "log"
    }

    async fn publish(&self, event: &DomainEvent) -> Result<(), PublishError> {
        info!(
            event_id = %event.id,
            event_type = %event.event_type,
            subject = %event.subject,
            topic = %event.topic,
            "Domain event (not sent: no topic endpoint configured)"
        );
        Ok(())
    }
}
