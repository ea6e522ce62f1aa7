//! # ems-events
//!
//! Implementations of [`EventPublisher`](ems_core::traits::EventPublisher):
//! an Event Grid topic client and a log-only publisher used when no topic
//! endpoint is configured.

pub mod event_grid;
pub mod logging;

use std::sync::Arc;

use ems_core::config::events::EventsConfig;
use ems_core::result::AppResult;
use ems_core::traits::events::EventPublisher;

pub use event_grid::EventGridPublisher;
pub use logging::LogEventPublisher;

/// Create the publisher selected by the events configuration.
pub fn build_publisher(config: &EventsConfig) -> AppResult<Arc<dyn EventPublisher>> {
    if config.is_remote() {
        Ok(Arc::new(EventGridPublisher::new(config)?))
    } else {
        tracing::warn!("events.topic_endpoint is empty; staff events will only be logged");
        Ok(Arc::new(LogEventPublisher::new()))
    }
}
