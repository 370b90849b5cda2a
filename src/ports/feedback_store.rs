//! Feedback store port.
//!
//! Defines the contract for persisting and reading feedback records.
//! Implementations handle the actual database operations.
//!
//! # Design
//!
//! - **Append-only**: records are created, never updated or deleted
//! - **Server-assigned identity**: `create` generates id and timestamp
//! - **Newest first**: every list operation orders by `submitted_at` descending

use async_trait::async_trait;

use crate::domain::feedback::{FeedbackRecord, NewFeedback};
use crate::domain::foundation::{DomainError, FeedbackId};

/// Repository port for feedback records.
///
/// Implementations must ensure:
/// - An acknowledged `create` is durable
/// - At most one record per (member_id, provider_name), enforced at insert
///   time and reported as `ErrorCode::DuplicateFeedback` with a
///   `provider_name` detail
#[async_trait]
pub trait FeedbackStore: Send + Sync {
    /// Assign id and timestamp, then durably persist the record.
    ///
    /// # Errors
    ///
    /// - `DuplicateFeedback` if the pair already has a record
    /// - `DatabaseError` on persistence failure
    async fn create(&self, feedback: NewFeedback) -> Result<FeedbackRecord, DomainError>;

    /// All records, newest first.
    async fn list_all(&self) -> Result<Vec<FeedbackRecord>, DomainError>;

    /// Records for an exact member id, newest first.
    async fn list_by_member(&self, member_id: &str) -> Result<Vec<FeedbackRecord>, DomainError>;

    /// Find a record by its ID.
    ///
    /// Returns `None` if not found.
    async fn get_by_id(&self, id: &FeedbackId) -> Result<Option<FeedbackRecord>, DomainError>;

    /// Exact, case-sensitive match on both fields.
    async fn exists_by_member_and_provider(
        &self,
        member_id: &str,
        provider_name: &str,
    ) -> Result<bool, DomainError>;

    /// Records for an exact provider name, newest first, optionally limited
    /// to ratings at or above `min_rating`.
    async fn list_by_provider(
        &self,
        provider_name: &str,
        min_rating: Option<u8>,
    ) -> Result<Vec<FeedbackRecord>, DomainError>;

    /// Number of records for an exact provider name.
    async fn count_by_provider(&self, provider_name: &str) -> Result<u64, DomainError>;
}
