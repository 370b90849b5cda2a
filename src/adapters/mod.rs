//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `events` - Event publishers (in-memory, Redis pub/sub)
//! - `http` - REST API (axum)
//! - `postgres` - Durable feedback store (sqlx)
//! - `storage` - In-memory feedback store

pub mod events;
pub mod http;
pub mod postgres;
pub mod storage;

pub use events::{InMemoryEventPublisher, RedisEventPublisher};
pub use postgres::PostgresFeedbackStore;
pub use storage::InMemoryFeedbackStore;
