//! HTTP adapters - REST API implementations.

pub mod feedback;

pub use feedback::{api_router, FeedbackHandlers};
