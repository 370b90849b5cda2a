//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a feedback record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedbackId(Uuid);

impl FeedbackId {
    /// Creates a new random FeedbackId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a FeedbackId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for FeedbackId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FeedbackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FeedbackId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_id_generates_unique_values() {
        assert_ne!(FeedbackId::new(), FeedbackId::new());
    }

    #[test]
    fn feedback_id_parses_from_display() {
        let id = FeedbackId::new();
        let parsed: FeedbackId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn feedback_id_rejects_malformed_input() {
        assert!("not-a-uuid".parse::<FeedbackId>().is_err());
        assert!("".parse::<FeedbackId>().is_err());
    }

    #[test]
    fn feedback_id_serializes_as_plain_string() {
        let uuid = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap();
        let json = serde_json::to_string(&FeedbackId::from_uuid(uuid)).unwrap();
        assert_eq!(json, r#""550e8400-e29b-41d4-a716-446655440000""#);
    }
}
