//! Persisted feedback record and the insert payload handed to stores.

use super::errors::FeedbackError;
use crate::domain::foundation::{FeedbackId, Timestamp};

/// Maximum member id length, in characters.
pub const MEMBER_ID_MAX_LEN: usize = 36;
/// Maximum provider name length, in characters.
pub const PROVIDER_NAME_MAX_LEN: usize = 80;
/// Maximum comment length, in characters.
pub const COMMENT_MAX_LEN: usize = 200;
/// Lowest accepted rating.
pub const RATING_MIN: i32 = 1;
/// Highest accepted rating.
pub const RATING_MAX: i32 = 5;

/// One patient's feedback about one provider, as stored.
///
/// Records are immutable once created: there is no update or delete path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackRecord {
    pub id: FeedbackId,
    pub member_id: String,
    pub provider_name: String,
    pub rating: u8,
    pub comment: Option<String>,
    pub submitted_at: Timestamp,
}

/// Validated, trimmed feedback ready to be persisted.
///
/// Carries no id or timestamp; the store assigns both atomically with the
/// insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFeedback {
    pub member_id: String,
    pub provider_name: String,
    pub rating: u8,
    pub comment: Option<String>,
}

impl NewFeedback {
    /// Column limits of the stored record, checked on the trimmed values.
    pub fn check_limits(&self) -> Result<(), FeedbackError> {
        if self.member_id.chars().count() > MEMBER_ID_MAX_LEN {
            return Err(FeedbackError::validation(
                "Member ID must be 36 characters or less",
            ));
        }
        if self.provider_name.chars().count() > PROVIDER_NAME_MAX_LEN {
            return Err(FeedbackError::validation(
                "Provider name must be 80 characters or less",
            ));
        }
        Ok(())
    }

    /// Completes the record with a freshly generated id and timestamp.
    pub fn into_record(self, id: FeedbackId, submitted_at: Timestamp) -> FeedbackRecord {
        FeedbackRecord {
            id,
            member_id: self.member_id,
            provider_name: self.provider_name,
            rating: self.rating,
            comment: self.comment,
            submitted_at,
        }
    }
}
