//! Storage Adapters
//!
//! In-process implementation of the FeedbackStore port.
//!
//! ## Available Adapters
//!
//! - **InMemoryFeedbackStore** - Stores records in memory (testing/development)
//!
//! The durable store lives in `adapters::postgres`.

mod in_memory_feedback_store;

pub use in_memory_feedback_store::InMemoryFeedbackStore;
