//! HTTP DTOs for feedback endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::application::ProviderSummary;
use crate::domain::feedback::{
    FeedbackRecord, FeedbackSubmission, COMMENT_MAX_LEN, MEMBER_ID_MAX_LEN,
    PROVIDER_NAME_MAX_LEN, RATING_MAX, RATING_MIN,
};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to submit feedback.
///
/// Every field is optional so that a missing value produces a field error
/// rather than a body parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitFeedbackRequest {
    #[serde(default)]
    pub member_id: Option<String>,
    #[serde(default)]
    pub provider_name: Option<String>,
    #[serde(default)]
    pub rating: Option<i32>,
    #[serde(default)]
    pub comment: Option<String>,
}

impl SubmitFeedbackRequest {
    /// Request-shape checks. Reports every violation, not just the first.
    pub fn field_errors(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        check_text(
            &mut errors,
            "memberId",
            self.member_id.as_deref(),
            MEMBER_ID_MAX_LEN,
            "Member ID is required",
            "Member ID must be 36 characters or less",
        );
        check_text(
            &mut errors,
            "providerName",
            self.provider_name.as_deref(),
            PROVIDER_NAME_MAX_LEN,
            "Provider name is required",
            "Provider name must be 80 characters or less",
        );

        match self.rating {
            None => errors.push(FieldError::new("rating", "Rating is required")),
            Some(r) if r < RATING_MIN => {
                errors.push(FieldError::new("rating", "Rating must be at least 1"))
            }
            Some(r) if r > RATING_MAX => {
                errors.push(FieldError::new("rating", "Rating must be at most 5"))
            }
            Some(_) => {}
        }

        if let Some(comment) = &self.comment {
            if comment.chars().count() > COMMENT_MAX_LEN {
                errors.push(FieldError::new(
                    "comment",
                    "Comment must be 200 characters or less",
                ));
            }
        }

        errors
    }
}

fn check_text(
    errors: &mut Vec<FieldError>,
    field: &str,
    value: Option<&str>,
    max_len: usize,
    required: &str,
    too_long: &str,
) {
    match value {
        Some(v) if !v.trim().is_empty() => {
            if v.chars().count() > max_len {
                errors.push(FieldError::new(field, too_long));
            }
        }
        _ => errors.push(FieldError::new(field, required)),
    }
}

impl From<SubmitFeedbackRequest> for FeedbackSubmission {
    fn from(req: SubmitFeedbackRequest) -> Self {
        FeedbackSubmission {
            member_id: req.member_id,
            provider_name: req.provider_name,
            rating: req.rating,
            comment: req.comment,
        }
    }
}

/// Query parameters for listing feedback.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListFeedbackParams {
    #[serde(default)]
    pub member_id: Option<String>,
}

/// Query parameters for a provider's feedback.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderFeedbackParams {
    #[serde(default)]
    pub min_rating: Option<i32>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A stored feedback record. `comment` is `null` when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackResponse {
    pub id: String,
    pub member_id: String,
    pub provider_name: String,
    pub rating: u8,
    pub comment: Option<String>,
    pub submitted_at: String,
}

impl From<FeedbackRecord> for FeedbackResponse {
    fn from(record: FeedbackRecord) -> Self {
        Self {
            id: record.id.to_string(),
            member_id: record.member_id,
            provider_name: record.provider_name,
            rating: record.rating,
            comment: record.comment,
            submitted_at: record.submitted_at.to_rfc3339(),
        }
    }
}

/// Feedback received by one provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderSummaryResponse {
    pub provider_name: String,
    pub total_feedback: u64,
    pub items: Vec<FeedbackResponse>,
}

impl From<ProviderSummary> for ProviderSummaryResponse {
    fn from(summary: ProviderSummary) -> Self {
        Self {
            provider_name: summary.provider_name,
            total_feedback: summary.total_feedback,
            items: summary.items.into_iter().map(Into::into).collect(),
        }
    }
}

/// One reported problem, tied to the request field that caused it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Standard error response: `{"errors":[{"field":..,"message":..}]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub errors: Vec<FieldError>,
}

impl ErrorResponse {
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            errors: vec![FieldError::new(field, message)],
        }
    }

    pub fn from_fields(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{FeedbackId, Timestamp};
    use crate::domain::feedback::NewFeedback;

    fn request(member: Option<&str>, provider: Option<&str>, rating: Option<i32>) -> SubmitFeedbackRequest {
        SubmitFeedbackRequest {
            member_id: member.map(str::to_string),
            provider_name: provider.map(str::to_string),
            rating,
            comment: None,
        }
    }

    fn fields(errors: &[FieldError]) -> Vec<&str> {
        errors.iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn deserializes_camel_case_body() {
        let req: SubmitFeedbackRequest = serde_json::from_str(
            r#"{"memberId":"m-1","providerName":"Dr. X","rating":4,"comment":"ok"}"#,
        )
        .unwrap();

        assert_eq!(req.member_id.as_deref(), Some("m-1"));
        assert_eq!(req.provider_name.as_deref(), Some("Dr. X"));
        assert_eq!(req.rating, Some(4));
        assert_eq!(req.comment.as_deref(), Some("ok"));
        assert!(req.field_errors().is_empty());
    }

    #[test]
    fn empty_body_reports_every_required_field() {
        let errors = SubmitFeedbackRequest::default().field_errors();

        assert_eq!(fields(&errors), vec!["memberId", "providerName", "rating"]);
        assert_eq!(errors[0].message, "Member ID is required");
        assert_eq!(errors[1].message, "Provider name is required");
        assert_eq!(errors[2].message, "Rating is required");
    }

    #[test]
    fn length_limits_are_reported_per_field() {
        let mut req = request(Some(&"m".repeat(37)), Some(&"p".repeat(81)), Some(3));
        req.comment = Some("c".repeat(201));

        let errors = req.field_errors();

        assert_eq!(
            errors,
            vec![
                FieldError::new("memberId", "Member ID must be 36 characters or less"),
                FieldError::new("providerName", "Provider name must be 80 characters or less"),
                FieldError::new("comment", "Comment must be 200 characters or less"),
            ]
        );
    }

    #[test]
    fn limits_are_inclusive() {
        let mut req = request(Some(&"m".repeat(36)), Some(&"p".repeat(80)), Some(5));
        req.comment = Some("c".repeat(200));
        assert!(req.field_errors().is_empty());
    }

    #[test]
    fn rating_bounds_have_distinct_messages() {
        let low = request(Some("m"), Some("p"), Some(0)).field_errors();
        assert_eq!(low, vec![FieldError::new("rating", "Rating must be at least 1")]);

        let high = request(Some("m"), Some("p"), Some(6)).field_errors();
        assert_eq!(high, vec![FieldError::new("rating", "Rating must be at most 5")]);
    }

    #[test]
    fn blank_text_counts_as_missing() {
        let errors = request(Some("   "), Some(""), Some(3)).field_errors();
        assert_eq!(fields(&errors), vec!["memberId", "providerName"]);
    }

    #[test]
    fn response_serializes_null_comment() {
        let record = NewFeedback {
            member_id: "m-1".to_string(),
            provider_name: "Dr. X".to_string(),
            rating: 3,
            comment: None,
        }
        .into_record(FeedbackId::new(), Timestamp::now());

        let json = serde_json::to_value(FeedbackResponse::from(record.clone())).unwrap();

        assert_eq!(json["id"], record.id.to_string());
        assert_eq!(json["memberId"], "m-1");
        assert_eq!(json["providerName"], "Dr. X");
        assert_eq!(json["rating"], 3);
        assert!(json["comment"].is_null());
        assert_eq!(json["submittedAt"], record.submitted_at.to_rfc3339());
    }

    #[test]
    fn error_response_shape() {
        let json = serde_json::to_value(ErrorResponse::single("business", "nope")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"errors": [{"field": "business", "message": "nope"}]})
        );
    }
}
