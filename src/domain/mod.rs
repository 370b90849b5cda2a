//! Domain layer containing business rules and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (IDs, timestamps, events, errors)
//! - `feedback` - Feedback records, submission rules and notifications

pub mod feedback;
pub mod foundation;
