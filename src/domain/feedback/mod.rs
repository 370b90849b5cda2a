//! Feedback domain: records, submission rules, errors and events.

mod errors;
mod events;
mod record;
mod stage;
mod submission;

pub use errors::{FeedbackError, BUSINESS_FIELD};
pub use events::{FeedbackSubmitted, FEEDBACK_SUBMITTED};
pub use record::{
    FeedbackRecord, NewFeedback, COMMENT_MAX_LEN, MEMBER_ID_MAX_LEN, PROVIDER_NAME_MAX_LEN,
    RATING_MAX, RATING_MIN,
};
pub use stage::SubmissionStage;
pub use submission::FeedbackSubmission;
