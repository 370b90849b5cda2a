//! Stages a single submission passes through.

use std::fmt;

/// Progress of one create attempt.
///
/// `Received → Validated → DuplicateChecked → Persisted → Published → Completed`.
/// Only stages before `Persisted` may end in a rejection; once the record is
/// stored the submission succeeds whatever happens to the notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SubmissionStage {
    Received,
    Validated,
    DuplicateChecked,
    Persisted,
    Published,
    Completed,
}

impl SubmissionStage {
    /// Whether a submission at this stage can still be rejected.
    pub fn can_reject(&self) -> bool {
        *self < SubmissionStage::Persisted
    }

    /// The stage that follows this one, if any.
    pub fn next(&self) -> Option<SubmissionStage> {
        match self {
            SubmissionStage::Received => Some(SubmissionStage::Validated),
            SubmissionStage::Validated => Some(SubmissionStage::DuplicateChecked),
            SubmissionStage::DuplicateChecked => Some(SubmissionStage::Persisted),
            SubmissionStage::Persisted => Some(SubmissionStage::Published),
            SubmissionStage::Published => Some(SubmissionStage::Completed),
            SubmissionStage::Completed => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStage::Received => "received",
            SubmissionStage::Validated => "validated",
            SubmissionStage::DuplicateChecked => "duplicate_checked",
            SubmissionStage::Persisted => "persisted",
            SubmissionStage::Published => "published",
            SubmissionStage::Completed => "completed",
        }
    }
}

impl fmt::Display for SubmissionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
