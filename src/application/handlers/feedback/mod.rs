//! Feedback command and query handlers.

mod duplicate_guard;
mod event_publisher;
mod get_feedback;
mod list_feedback;
mod provider_summary;
mod submit_feedback;

#[cfg(test)]
pub(crate) mod testing;

pub use duplicate_guard::DuplicateGuard;
pub use event_publisher::SubmissionEventPublisher;
pub use get_feedback::GetFeedbackHandler;
pub use list_feedback::{ListFeedbackHandler, ListFeedbackQuery};
pub use provider_summary::{ProviderSummary, ProviderSummaryHandler, ProviderSummaryQuery};
pub use submit_feedback::SubmitFeedbackHandler;
