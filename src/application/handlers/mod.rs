//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod feedback;

pub use feedback::{
    // Collaborators
    DuplicateGuard,
    SubmissionEventPublisher,
    // Command
    SubmitFeedbackHandler,
    // Queries
    GetFeedbackHandler,
    ListFeedbackHandler,
    ListFeedbackQuery,
    ProviderSummary,
    ProviderSummaryHandler,
    ProviderSummaryQuery,
};
