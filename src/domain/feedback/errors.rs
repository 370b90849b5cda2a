//! Feedback error taxonomy surfaced at the orchestrator boundary.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Field name attached to every service-layer rejection.
pub const BUSINESS_FIELD: &str = "business";

/// Errors returned by feedback submission and queries.
///
/// Publish failures have no variant: they are logged and dropped by the
/// event publisher and never reach a caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    /// One of the ordered submission rules failed.
    #[error("{0}")]
    Validation(String),

    /// The member already has feedback for this provider.
    #[error("You have already submitted feedback for {provider_name}")]
    Duplicate { provider_name: String },

    /// No record with the requested id.
    #[error("Feedback not found with id: {0}")]
    NotFound(String),

    /// The requested id is not a well-formed identifier.
    #[error("Invalid feedback id: {0}")]
    InvalidId(String),

    /// The store could not be read or written.
    #[error("Persistence failure: {0}")]
    Persistence(String),
}

impl FeedbackError {
    pub fn validation(message: impl Into<String>) -> Self {
        FeedbackError::Validation(message.into())
    }

    pub fn duplicate(provider_name: impl Into<String>) -> Self {
        FeedbackError::Duplicate {
            provider_name: provider_name.into(),
        }
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        FeedbackError::NotFound(id.into())
    }

    pub fn persistence(message: impl Into<String>) -> Self {
        FeedbackError::Persistence(message.into())
    }

    /// Field name reported to API clients alongside the message.
    pub fn field(&self) -> &'static str {
        match self {
            FeedbackError::Validation(_) | FeedbackError::Duplicate { .. } => BUSINESS_FIELD,
            FeedbackError::NotFound(_) | FeedbackError::InvalidId(_) => "id",
            FeedbackError::Persistence(_) => "server",
        }
    }
}

impl From<DomainError> for FeedbackError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::DuplicateFeedback => FeedbackError::Duplicate {
                provider_name: err
                    .details
                    .get("provider_name")
                    .cloned()
                    .unwrap_or(err.message),
            },
            _ => FeedbackError::Persistence(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_message_names_provider() {
        let err = FeedbackError::duplicate("Dr. Smith");
        assert_eq!(err.to_string(), "You have already submitted feedback for Dr. Smith");
    }

    #[test]
    fn validation_message_is_the_rule_text() {
        let err = FeedbackError::validation("Rating must be between 1 and 5");
        assert_eq!(err.to_string(), "Rating must be between 1 and 5");
    }

    #[test]
    fn rejections_report_business_field() {
        assert_eq!(FeedbackError::validation("x").field(), "business");
        assert_eq!(FeedbackError::duplicate("x").field(), "business");
        assert_eq!(FeedbackError::not_found("x").field(), "id");
        assert_eq!(FeedbackError::persistence("x").field(), "server");
    }

    #[test]
    fn database_errors_become_persistence_failures() {
        let err: FeedbackError =
            DomainError::new(ErrorCode::DatabaseError, "connection refused").into();
        assert!(matches!(err, FeedbackError::Persistence(msg) if msg.contains("connection refused")));
    }

    #[test]
    fn store_conflict_becomes_duplicate() {
        let err: FeedbackError = DomainError::new(ErrorCode::DuplicateFeedback, "conflict")
            .with_detail("provider_name", "Dr. X")
            .into();
        assert_eq!(err, FeedbackError::duplicate("Dr. X"));
    }
}
