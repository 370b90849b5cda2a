//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresFeedbackStore` - Durable feedback records
//! - `connect_pool` / `run_migrations` - Pool setup from `DatabaseConfig`

mod feedback_store;
mod pool;

pub use feedback_store::PostgresFeedbackStore;
pub use pool::{connect_pool, run_migrations};
