//! Mock store shared by the feedback handler tests.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::feedback::{FeedbackRecord, NewFeedback};
use crate::domain::foundation::{DomainError, ErrorCode, FeedbackId, Timestamp};
use crate::ports::FeedbackStore;

pub(crate) struct MockFeedbackStore {
    records: Mutex<Vec<FeedbackRecord>>,
    create_calls: Mutex<usize>,
    fail_reads: bool,
    fail_create: bool,
    hide_existing: bool,
}

impl MockFeedbackStore {
    pub(crate) fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            create_calls: Mutex::new(0),
            fail_reads: false,
            fail_create: false,
            hide_existing: false,
        }
    }

    pub(crate) fn failing_reads() -> Self {
        Self {
            fail_reads: true,
            ..Self::new()
        }
    }

    pub(crate) fn failing_create() -> Self {
        Self {
            fail_create: true,
            ..Self::new()
        }
    }

    /// Existence checks always miss, as if a concurrent insert landed
    /// between the check and the write.
    pub(crate) fn hiding_existing() -> Self {
        Self {
            hide_existing: true,
            ..Self::new()
        }
    }

    pub(crate) fn seed(&self, member_id: &str, provider_name: &str, rating: u8) -> FeedbackRecord {
        let record = NewFeedback {
            member_id: member_id.to_string(),
            provider_name: provider_name.to_string(),
            rating,
            comment: None,
        }
        .into_record(FeedbackId::new(), Timestamp::now());
        self.records.lock().unwrap().push(record.clone());
        record
    }

    pub(crate) fn records(&self) -> Vec<FeedbackRecord> {
        self.records.lock().unwrap().clone()
    }

    pub(crate) fn create_calls(&self) -> usize {
        *self.create_calls.lock().unwrap()
    }

    fn check_reads(&self) -> Result<(), DomainError> {
        if self.fail_reads {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                "Simulated read failure",
            ));
        }
        Ok(())
    }

    fn newest_first(&self, predicate: impl Fn(&FeedbackRecord) -> bool) -> Vec<FeedbackRecord> {
        let mut matching: Vec<_> = self
            .records
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|r| predicate(r))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        matching
    }
}

#[async_trait]
impl FeedbackStore for MockFeedbackStore {
    async fn create(&self, feedback: NewFeedback) -> Result<FeedbackRecord, DomainError> {
        *self.create_calls.lock().unwrap() += 1;
        if self.fail_create {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                "Simulated insert failure",
            ));
        }

        let mut records = self.records.lock().unwrap();
        if records
            .iter()
            .any(|r| r.member_id == feedback.member_id && r.provider_name == feedback.provider_name)
        {
            return Err(
                DomainError::new(ErrorCode::DuplicateFeedback, "unique violation")
                    .with_detail("provider_name", feedback.provider_name),
            );
        }

        let record = feedback.into_record(FeedbackId::new(), Timestamp::now());
        records.push(record.clone());
        Ok(record)
    }

    async fn list_all(&self) -> Result<Vec<FeedbackRecord>, DomainError> {
        self.check_reads()?;
        Ok(self.newest_first(|_| true))
    }

    async fn list_by_member(&self, member_id: &str) -> Result<Vec<FeedbackRecord>, DomainError> {
        self.check_reads()?;
        Ok(self.newest_first(|r| r.member_id == member_id))
    }

    async fn get_by_id(&self, id: &FeedbackId) -> Result<Option<FeedbackRecord>, DomainError> {
        self.check_reads()?;
        Ok(self.records().into_iter().find(|r| &r.id == id))
    }

    async fn exists_by_member_and_provider(
        &self,
        member_id: &str,
        provider_name: &str,
    ) -> Result<bool, DomainError> {
        self.check_reads()?;
        if self.hide_existing {
            return Ok(false);
        }
        Ok(self
            .records()
            .iter()
            .any(|r| r.member_id == member_id && r.provider_name == provider_name))
    }

    async fn list_by_provider(
        &self,
        provider_name: &str,
        min_rating: Option<u8>,
    ) -> Result<Vec<FeedbackRecord>, DomainError> {
        self.check_reads()?;
        let floor = min_rating.unwrap_or(0);
        Ok(self.newest_first(|r| r.provider_name == provider_name && r.rating >= floor))
    }

    async fn count_by_provider(&self, provider_name: &str) -> Result<u64, DomainError> {
        self.check_reads()?;
        Ok(self
            .records()
            .iter()
            .filter(|r| r.provider_name == provider_name)
            .count() as u64)
    }
}
