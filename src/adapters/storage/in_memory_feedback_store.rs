//! In-Memory Feedback Store Adapter
//!
//! Stores feedback records in memory.
//! Useful for testing and local development without PostgreSQL.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::feedback::{FeedbackRecord, NewFeedback};
use crate::domain::foundation::{DomainError, ErrorCode, FeedbackId, Timestamp};
use crate::ports::FeedbackStore;

/// In-memory storage for feedback records.
///
/// The uniqueness check and the insert happen under one write lock, matching
/// the unique index the PostgreSQL adapter relies on.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFeedbackStore {
    records: Arc<RwLock<Vec<FeedbackRecord>>>,
}

impl InMemoryFeedbackStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    async fn select<F>(&self, predicate: F) -> Vec<FeedbackRecord>
    where
        F: Fn(&FeedbackRecord) -> bool,
    {
        let records = self.records.read().await;
        // Reverse insertion order first so equal timestamps still list newest first.
        let mut matching: Vec<FeedbackRecord> =
            records.iter().rev().filter(|r| predicate(r)).cloned().collect();
        matching.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        matching
    }
}

#[async_trait]
impl FeedbackStore for InMemoryFeedbackStore {
    async fn create(&self, feedback: NewFeedback) -> Result<FeedbackRecord, DomainError> {
        let mut records = self.records.write().await;

        let duplicate = records.iter().any(|r| {
            r.member_id == feedback.member_id && r.provider_name == feedback.provider_name
        });
        if duplicate {
            return Err(DomainError::new(
                ErrorCode::DuplicateFeedback,
                "Feedback already exists for member and provider",
            )
            .with_detail("member_id", feedback.member_id)
            .with_detail("provider_name", feedback.provider_name));
        }

        let record = feedback.into_record(FeedbackId::new(), Timestamp::now());
        records.push(record.clone());
        Ok(record)
    }

    async fn list_all(&self) -> Result<Vec<FeedbackRecord>, DomainError> {
        Ok(self.select(|_| true).await)
    }

    async fn list_by_member(&self, member_id: &str) -> Result<Vec<FeedbackRecord>, DomainError> {
        Ok(self.select(|r| r.member_id == member_id).await)
    }

    async fn get_by_id(&self, id: &FeedbackId) -> Result<Option<FeedbackRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| &r.id == id).cloned())
    }

    async fn exists_by_member_and_provider(
        &self,
        member_id: &str,
        provider_name: &str,
    ) -> Result<bool, DomainError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .any(|r| r.member_id == member_id && r.provider_name == provider_name))
    }

    async fn list_by_provider(
        &self,
        provider_name: &str,
        min_rating: Option<u8>,
    ) -> Result<Vec<FeedbackRecord>, DomainError> {
        let min_rating = min_rating.unwrap_or(0);
        Ok(self
            .select(|r| r.provider_name == provider_name && r.rating >= min_rating)
            .await)
    }

    async fn count_by_provider(&self, provider_name: &str) -> Result<u64, DomainError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|r| r.provider_name == provider_name)
            .count() as u64)
    }
}
