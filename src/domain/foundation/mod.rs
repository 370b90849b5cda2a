//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, event infrastructure and error types
//! that form the vocabulary of the feedback domain.

mod errors;
mod events;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode};
pub use events::{DomainEvent, EventEnvelope, EventId};
pub use ids::FeedbackId;
pub use timestamp::Timestamp;
