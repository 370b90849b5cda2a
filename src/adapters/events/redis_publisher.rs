//! Redis pub/sub event publisher for production deployments.
//!
//! Sends each envelope's payload as JSON with `PUBLISH` on a single channel.
//! Delivery is whatever Redis pub/sub gives: subscribers that are not
//! connected at publish time never see the message.

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;

use crate::domain::foundation::{DomainError, ErrorCode, EventEnvelope};
use crate::ports::EventPublisher;

/// Redis-backed event publisher.
#[derive(Clone)]
pub struct RedisEventPublisher {
    conn: MultiplexedConnection,
    channel: String,
}

impl RedisEventPublisher {
    /// Create a publisher over an existing multiplexed connection.
    pub fn new(conn: MultiplexedConnection, channel: impl Into<String>) -> Self {
        Self {
            conn,
            channel: channel.into(),
        }
    }

    /// Open a multiplexed connection to `url` and wrap it.
    pub async fn connect(url: &str, channel: impl Into<String>) -> Result<Self, redis::RedisError> {
        let client = redis::Client::open(url)?;
        let conn = client.get_multiplexed_tokio_connection().await?;
        Ok(Self::new(conn, channel))
    }

    /// Channel this publisher sends to.
    pub fn channel(&self) -> &str {
        &self.channel
    }
}

fn publish_error(event: &EventEnvelope, reason: impl std::fmt::Display) -> DomainError {
    DomainError::new(
        ErrorCode::EventPublishFailed,
        format!("Failed to publish {}: {}", event.event_type, reason),
    )
    .with_detail("aggregate_id", event.aggregate_id.clone())
}

#[async_trait]
impl EventPublisher for RedisEventPublisher {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        let body = serde_json::to_string(&event.payload).map_err(|e| publish_error(&event, e))?;

        let mut conn = self.conn.clone();
        let receivers: i64 = conn
            .publish(&self.channel, body)
            .await
            .map_err(|e: redis::RedisError| publish_error(&event, e))?;

        tracing::debug!(
            channel = %self.channel,
            event_id = %event.event_id,
            event_type = %event.event_type,
            aggregate_id = %event.aggregate_id,
            receivers,
            "Event published"
        );
        Ok(())
    }
}
