//! Notification emitted after a feedback record has been persisted.

use serde::{Deserialize, Serialize};

use super::record::FeedbackRecord;
use crate::domain::foundation::Timestamp;

/// Event type routed to the analytics channel.
pub const FEEDBACK_SUBMITTED: &str = "feedback.submitted.v1";

/// Flat mirror of a persisted record, shaped for the analytics consumer.
///
/// `id` and `submittedAt` travel as strings; `comment` is `null` when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSubmitted {
    pub id: String,
    pub member_id: String,
    pub provider_name: String,
    pub rating: u8,
    pub comment: Option<String>,
    pub submitted_at: String,
    #[serde(skip)]
    pub occurred_at: Timestamp,
}

impl From<&FeedbackRecord> for FeedbackSubmitted {
    fn from(record: &FeedbackRecord) -> Self {
        Self {
            id: record.id.to_string(),
            member_id: record.member_id.clone(),
            provider_name: record.provider_name.clone(),
            rating: record.rating,
            comment: record.comment.clone(),
            submitted_at: record.submitted_at.to_rfc3339(),
            occurred_at: record.submitted_at,
        }
    }
}

crate::domain_event!(
    FeedbackSubmitted,
    event_type = FEEDBACK_SUBMITTED,
    aggregate_id = id,
    aggregate_type = "Feedback",
    occurred_at = occurred_at
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainEvent, EventEnvelope, FeedbackId};
    use chrono::{DateTime, Utc};
    use serde_json::json;

    fn record(comment: Option<&str>) -> FeedbackRecord {
        let at = DateTime::parse_from_rfc3339("2025-11-10T20:23:00Z")
            .unwrap()
            .with_timezone(&Utc);
        FeedbackRecord {
            id: "550e8400-e29b-41d4-a716-446655440000".parse::<FeedbackId>().unwrap(),
            member_id: "m-123456".to_string(),
            provider_name: "Dr. Sarah Johnson".to_string(),
            rating: 4,
            comment: comment.map(str::to_string),
            submitted_at: Timestamp::from_datetime(at),
        }
    }

    #[test]
    fn payload_matches_consumer_format() {
        let event = FeedbackSubmitted::from(&record(Some("Great bedside manner!")));
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(
            json,
            json!({
                "id": "550e8400-e29b-41d4-a716-446655440000",
                "memberId": "m-123456",
                "providerName": "Dr. Sarah Johnson",
                "rating": 4,
                "comment": "Great bedside manner!",
                "submittedAt": "2025-11-10T20:23:00Z"
            })
        );
    }

    #[test]
    fn absent_comment_is_sent_as_null() {
        let json = serde_json::to_value(FeedbackSubmitted::from(&record(None))).unwrap();
        assert!(json["comment"].is_null());
    }

    #[test]
    fn envelope_is_keyed_by_record_id() {
        let event = FeedbackSubmitted::from(&record(None));
        let envelope = EventEnvelope::from_event(&event).unwrap();

        assert_eq!(event.event_type(), FEEDBACK_SUBMITTED);
        assert_eq!(envelope.aggregate_id, "550e8400-e29b-41d4-a716-446655440000");
        assert_eq!(envelope.aggregate_type, "Feedback");
        assert_eq!(envelope.schema_version, 1);
        assert_eq!(envelope.occurred_at, record(None).submitted_at);
    }
}
