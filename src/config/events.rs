//! Event channel configuration (Redis pub/sub)

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Where submission events are published.
#[derive(Debug, Clone, Deserialize)]
pub struct EventsConfig {
    /// Redis connection URL
    pub url: String,

    /// Pub/sub channel name
    #[serde(default = "default_channel")]
    pub channel: String,

    /// Connection timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

impl EventsConfig {
    /// Get connect timeout as Duration
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Validate event channel configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.url.is_empty() {
            return Err(ValidationError::MissingRequired("FEEDBACK_PORTAL__EVENTS__URL"));
        }
        if !self.url.starts_with("redis://") && !self.url.starts_with("rediss://") {
            return Err(ValidationError::InvalidRedisUrl);
        }
        if self.channel.trim().is_empty() {
            return Err(ValidationError::EmptyChannel);
        }
        if self.connect_timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            channel: default_channel(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

fn default_channel() -> String {
    "feedback-submitted".to_string()
}

fn default_connect_timeout() -> u64 {
    5
}
