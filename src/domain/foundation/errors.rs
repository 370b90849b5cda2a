//! Error types shared by ports and adapters.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Conflict errors
    DuplicateFeedback,

    // Infrastructure errors
    DatabaseError,
    EventPublishFailed,

    // Stored data that breaks a domain invariant
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::DuplicateFeedback => "DUPLICATE_FEEDBACK",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::EventPublishFailed => "EVENT_PUBLISH_FAILED",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard port-level error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a database error wrapping an underlying failure.
    pub fn database(context: &str, err: impl fmt::Display) -> Self {
        Self::new(ErrorCode::DatabaseError, format!("{}: {}", context, err))
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::DatabaseError, "pool timed out");
        assert_eq!(format!("{}", err), "[DATABASE_ERROR] pool timed out");
    }

    #[test]
    fn database_helper_prefixes_context() {
        let err = DomainError::database("Failed to insert feedback", "connection reset");
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(err.message, "Failed to insert feedback: connection reset");
    }

    #[test]
    fn domain_error_with_detail_adds_detail() {
        let err = DomainError::new(ErrorCode::DuplicateFeedback, "duplicate")
            .with_detail("member_id", "m-1")
            .with_detail("provider_name", "Dr. X");

        assert_eq!(err.details.get("member_id"), Some(&"m-1".to_string()));
        assert_eq!(err.details.get("provider_name"), Some(&"Dr. X".to_string()));
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::DuplicateFeedback), "DUPLICATE_FEEDBACK");
        assert_eq!(format!("{}", ErrorCode::EventPublishFailed), "EVENT_PUBLISH_FAILED");
        assert_eq!(format!("{}", ErrorCode::InternalError), "INTERNAL_ERROR");
    }
}
