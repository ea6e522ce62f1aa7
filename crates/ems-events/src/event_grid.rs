//! Event Grid topic publisher.
//!
//! Posts events as a single-element batch in the Event Grid schema,
//! authenticated with the topic access key.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use ems_core::config::events::EventsConfig;
use ems_core::error::AppError;
use ems_core::events::DomainEvent;
use ems_core::traits::events::{EventPublisher, PublishError};

/// Header carrying the topic access key.
pub const ACCESS_KEY_HEADER: &str = "aeg-sas-key";

const MAX_ERROR_BODY: usize = 512;

/// HTTP client for one Event Grid topic.
#[derive(Debug, Clone)]
pub struct EventGridPublisher {
    client: reqwest::Client,
    endpoint: String,
    access_key: String,
}

impl EventGridPublisher {
    /// Create a publisher for the configured topic endpoint.
    pub fn new(config: &EventsConfig) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::configuration(format!("Failed to build event HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            endpoint: config.topic_endpoint.clone(),
            access_key: config.access_key.clone(),
        })
    }
}

#[async_trait]
impl EventPublisher for EventGridPublisher {
    fn name(&self) -> &str {
        "event-grid"
    }

    async fn publish(&self, event: &DomainEvent) -> Result<(), PublishError> {
        let batch = serde_json::to_vec(&[event])?;

        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCESS_KEY_HEADER, &self.access_key)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(batch)
            .send()
            .await
            .map_err(|e: reqwest::Error| PublishError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let mut body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            if body.len() > MAX_ERROR_BODY {
                let mut cut = MAX_ERROR_BODY;
                while !body.is_char_boundary(cut) {
                    cut -= 1;
                }
                body.truncate(cut);
            }
            return Err(PublishError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        debug!(event_id = %event.id, status = status.as_u16(), "Event accepted by topic");
        Ok(())
    }
}
