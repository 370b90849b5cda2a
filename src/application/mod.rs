//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handling (submission) is kept apart from the read-side queries.

pub mod handlers;
mod orchestrator;

pub use handlers::{
    DuplicateGuard, GetFeedbackHandler, ListFeedbackHandler, ListFeedbackQuery, ProviderSummary,
    ProviderSummaryHandler, ProviderSummaryQuery, SubmissionEventPublisher, SubmitFeedbackHandler,
};
pub use orchestrator::SubmissionOrchestrator;
