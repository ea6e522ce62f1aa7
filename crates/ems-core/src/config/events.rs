//! Domain event topic configuration.

use serde::{Deserialize, Serialize};

/// Event Grid topic settings.
///
/// With an empty `topic_endpoint` events are written to the log instead of
/// being sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventsConfig {
    /// Full topic endpoint URL (`https://<topic>.<region>.eventgrid.azure.net/api/events`).
    #[serde(default)]
    pub topic_endpoint: String,
    /// Topic access key sent in the `aeg-sas-key` header.
    #[serde(default)]
    pub access_key: String,
    /// Topic name recorded in each event envelope.
    #[serde(default = "default_topic")]
    pub topic: String,
    /// HTTP timeout per publish attempt in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            topic_endpoint: String::new(),
            access_key: String::new(),
            topic: default_topic(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl EventsConfig {
    /// Whether a remote topic endpoint is configured.
    pub fn is_remote(&self) -> bool {
        !self.topic_endpoint.trim().is_empty()
    }
}

fn default_topic() -> String {
    "ems-staff".to_string()
}

fn default_timeout() -> u64 {
    10
}
