//! Incoming feedback payload and the ordered business rules applied to it.

use super::errors::FeedbackError;
use super::record::{NewFeedback, COMMENT_MAX_LEN, RATING_MAX, RATING_MIN};

/// Feedback as submitted by a client, before any rule has been applied.
///
/// Every field is optional so that missing values reach the validator
/// instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackSubmission {
    pub member_id: Option<String>,
    pub provider_name: Option<String>,
    pub rating: Option<i32>,
    pub comment: Option<String>,
}

impl FeedbackSubmission {
    pub fn new(
        member_id: impl Into<String>,
        provider_name: impl Into<String>,
        rating: i32,
        comment: Option<String>,
    ) -> Self {
        Self {
            member_id: Some(member_id.into()),
            provider_name: Some(provider_name.into()),
            rating: Some(rating),
            comment,
        }
    }

    /// Applies the submission rules in order and reports the first failure.
    ///
    /// 1. member id present and not blank
    /// 2. provider name present and not blank
    /// 3. rating present
    /// 4. rating within 1..=5
    /// 5. comment, when present, at most 200 characters
    pub fn validate(&self) -> Result<(), FeedbackError> {
        if is_blank(self.member_id.as_deref()) {
            return Err(FeedbackError::validation("Member ID is required"));
        }

        if is_blank(self.provider_name.as_deref()) {
            return Err(FeedbackError::validation("Provider name is required"));
        }

        let rating = self
            .rating
            .ok_or_else(|| FeedbackError::validation("Rating is required"))?;

        if !(RATING_MIN..=RATING_MAX).contains(&rating) {
            return Err(FeedbackError::validation("Rating must be between 1 and 5"));
        }

        if let Some(comment) = &self.comment {
            if comment.chars().count() > COMMENT_MAX_LEN {
                return Err(FeedbackError::validation(
                    "Comment must be 200 characters or less",
                ));
            }
        }

        Ok(())
    }

    /// Member id with surrounding whitespace removed, if present.
    pub fn trimmed_member_id(&self) -> Option<&str> {
        self.member_id.as_deref().map(str::trim)
    }

    /// Provider name with surrounding whitespace removed, if present.
    pub fn trimmed_provider_name(&self) -> Option<&str> {
        self.provider_name.as_deref().map(str::trim)
    }

    /// Validates, then trims every text field into an insertable payload.
    ///
    /// The trimmed member id and provider name must also fit the stored
    /// column limits.
    pub fn into_new_feedback(self) -> Result<NewFeedback, FeedbackError> {
        self.validate()?;

        let new_feedback = match (self.member_id, self.provider_name, self.rating) {
            (Some(member_id), Some(provider_name), Some(rating)) => NewFeedback {
                member_id: member_id.trim().to_string(),
                provider_name: provider_name.trim().to_string(),
                rating: u8::try_from(rating)
                    .map_err(|_| FeedbackError::validation("Rating must be between 1 and 5"))?,
                comment: self.comment.map(|c| c.trim().to_string()),
            },
            _ => return Err(FeedbackError::validation("Member ID is required")),
        };

        new_feedback.check_limits()?;
        Ok(new_feedback)
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}
