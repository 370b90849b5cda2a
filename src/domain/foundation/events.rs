//! Event infrastructure for domain event publishing.
//!
//! This module provides the core types for event-driven notification:
//! - `EventId` - Unique identifier for events (deduplication by consumers)
//! - `EventEnvelope` - Transport wrapper for domain events
//! - `DomainEvent` - Trait that all domain events implement
//! - `domain_event!` - Macro to simplify DomainEvent implementations

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;
use uuid::Uuid;

use super::Timestamp;

/// Trait that all domain events must implement.
///
/// Provides the contract for event identification, routing and versioning.
pub trait DomainEvent: Send + Sync {
    /// Returns the event type string (e.g., "feedback.submitted.v1").
    fn event_type(&self) -> &'static str;

    /// Returns the ID of the aggregate that emitted this event.
    fn aggregate_id(&self) -> String;

    /// Returns the type of aggregate (e.g., "Feedback").
    fn aggregate_type(&self) -> &'static str;

    /// Returns when the event occurred.
    fn occurred_at(&self) -> Timestamp;
}

/// Macro to implement DomainEvent trait with minimal boilerplate.
///
/// # Example
///
/// ```ignore
/// domain_event!(
///     FeedbackSubmitted,
///     event_type = "feedback.submitted.v1",
///     aggregate_id = id,
///     aggregate_type = "Feedback",
///     occurred_at = submitted_at
/// );
/// ```
#[macro_export]
macro_rules! domain_event {
    (
        $event_name:ident,
        event_type = $event_type:expr,
        aggregate_id = $agg_id_field:ident,
        aggregate_type = $agg_type:expr,
        occurred_at = $occurred_field:ident
    ) => {
        impl $crate::domain::foundation::DomainEvent for $event_name {
            fn event_type(&self) -> &'static str {
                $event_type
            }

            fn aggregate_id(&self) -> String {
                self.$agg_id_field.to_string()
            }

            fn aggregate_type(&self) -> &'static str {
                $agg_type
            }

            fn occurred_at(&self) -> $crate::domain::foundation::Timestamp {
                self.$occurred_field
            }
        }
    };
}

/// Unique identifier for events (used for deduplication).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// Creates a new random EventId using UUID v4.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What the submission flow hands to an `EventPublisher`.
///
/// Transports decide how much of it goes on the wire; Redis sends only
/// `payload`, the rest is for logs and in-process assertions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    /// Unique ID for this event instance.
    pub event_id: EventId,

    /// Event type for routing (e.g., "feedback.submitted.v1").
    pub event_type: String,

    /// Schema version number (extracted from event_type).
    pub schema_version: u32,

    /// ID of the aggregate that emitted this event. Transports use it as
    /// the partition key.
    pub aggregate_id: String,

    /// Type of aggregate (e.g., "Feedback").
    pub aggregate_type: String,

    /// When the event occurred.
    pub occurred_at: Timestamp,

    /// Event-specific payload as JSON. The only part Redis subscribers see.
    pub payload: JsonValue,
}

impl EventEnvelope {
    /// Creates a new EventEnvelope with required fields.
    ///
    /// Schema version is taken from the event_type suffix (e.g.
    /// "feedback.submitted.v2" → 2), defaulting to 1.
    pub fn new(
        event_type: impl Into<String>,
        aggregate_id: impl Into<String>,
        aggregate_type: impl Into<String>,
        payload: JsonValue,
    ) -> Self {
        let event_type = event_type.into();
        let schema_version = Self::extract_version(&event_type);

        Self {
            event_id: EventId::new(),
            event_type,
            schema_version,
            aggregate_id: aggregate_id.into(),
            aggregate_type: aggregate_type.into(),
            occurred_at: Timestamp::now(),
            payload,
        }
    }

    pub(crate) fn extract_version(event_type: &str) -> u32 {
        event_type
            .rsplit_once(".v")
            .and_then(|(_, version_str)| version_str.parse::<u32>().ok())
            .unwrap_or(1)
    }

    /// Creates an envelope from a domain event, serializing it as the payload.
    pub fn from_event<T>(event: &T) -> Result<Self, serde_json::Error>
    where
        T: DomainEvent + Serialize,
    {
        let event_type = event.event_type().to_string();
        let schema_version = Self::extract_version(&event_type);

        Ok(Self {
            event_id: EventId::new(),
            event_type,
            schema_version,
            aggregate_id: event.aggregate_id(),
            aggregate_type: event.aggregate_type().to_string(),
            occurred_at: event.occurred_at(),
            payload: serde_json::to_value(event)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Sample {
        id: String,
        at: Timestamp,
    }

    domain_event!(
        Sample,
        event_type = "sample.happened.v3",
        aggregate_id = id,
        aggregate_type = "Sample",
        occurred_at = at
    );

    #[test]
    fn event_id_generates_unique_values() {
        assert_ne!(EventId::new(), EventId::new());
    }

    #[test]
    fn extract_version_reads_suffix() {
        assert_eq!(EventEnvelope::extract_version("feedback.submitted.v2"), 2);
        assert_eq!(EventEnvelope::extract_version("feedback.submitted.v10"), 10);
        assert_eq!(EventEnvelope::extract_version("legacy.event"), 1);
    }

    #[test]
    fn new_envelope_assigns_fresh_identity() {
        let first = EventEnvelope::new("a.b.v1", "agg-1", "Thing", json!({"k": 1}));
        let second = EventEnvelope::new("a.b.v1", "agg-1", "Thing", json!({"k": 1}));
        assert_eq!(first.schema_version, 1);
        assert_eq!(first.aggregate_id, "agg-1");
        assert_ne!(first.event_id, second.event_id);
    }

    #[test]
    fn from_event_uses_domain_event_fields() {
        let sample = Sample {
            id: "p-1".to_string(),
            at: Timestamp::now(),
        };

        let envelope = EventEnvelope::from_event(&sample).unwrap();

        assert_eq!(envelope.event_type, "sample.happened.v3");
        assert_eq!(envelope.schema_version, 3);
        assert_eq!(envelope.aggregate_id, "p-1");
        assert_eq!(envelope.aggregate_type, "Sample");
        assert_eq!(envelope.occurred_at, sample.at);
        let payload: Sample = serde_json::from_value(envelope.payload).unwrap();
        assert_eq!(payload, sample);
    }
}
