//! EventPublisher port - Interface for sending domain events to a channel.
//!
//! This port defines how the application hands events to a transport
//! without knowing about the underlying mechanism (Redis, in-memory, etc.).

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Port for publishing domain events.
///
/// Delivery is best-effort: no retry, no acknowledgement beyond the
/// transport's own send. Callers that must not fail on a publish error
/// (feedback submission) log and drop the returned error.
///
/// # Example
///
/// ```ignore
/// let envelope = EventEnvelope::from_event(&event)?;
/// publisher.publish(envelope).await?;
/// ```
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish a single event.
    ///
    /// # Errors
    ///
    /// - `EventPublishFailed` when the transport rejects or cannot reach
    ///   the channel
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_publisher_is_object_safe() {
        fn _accepts_dyn(_publisher: &dyn EventPublisher) {}
    }
}
