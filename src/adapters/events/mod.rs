//! Event publisher adapters.
//!
//! Adapters implement the event publishing port for different environments:
//!
//! - `InMemoryEventPublisher` - In-process capture for testing
//! - `RedisEventPublisher` - Redis pub/sub channel for deployments

mod in_memory;
mod redis_publisher;

pub use in_memory::InMemoryEventPublisher;
pub use redis_publisher::RedisEventPublisher;
