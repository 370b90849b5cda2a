//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application and the outside world. Adapters implement these ports.
//!
//! - `FeedbackStore` - Durable feedback record repository
//! - `EventPublisher` - Best-effort event channel

mod event_publisher;
mod feedback_store;

pub use event_publisher::EventPublisher;
pub use feedback_store::FeedbackStore;
