//! SubmissionOrchestrator - Single entry point for feedback operations.
//!
//! Wires the feedback handlers around one store and one event transport so
//! that inbound adapters depend on a single type.

use std::sync::Arc;

use crate::domain::feedback::{FeedbackError, FeedbackRecord, FeedbackSubmission};
use crate::ports::{EventPublisher, FeedbackStore};

use super::handlers::{
    DuplicateGuard, GetFeedbackHandler, ListFeedbackHandler, ListFeedbackQuery, ProviderSummary,
    ProviderSummaryHandler, ProviderSummaryQuery, SubmissionEventPublisher, SubmitFeedbackHandler,
};

/// Feedback service facade.
///
/// # Example
///
/// ```ignore
/// let orchestrator = SubmissionOrchestrator::new(store, publisher);
///
/// let record = orchestrator
///     .submit(FeedbackSubmission::new("member-123", "Dr. Smith", 4, None))
///     .await?;
/// let mine = orchestrator.query(Some("member-123")).await?;
/// ```
#[derive(Clone)]
pub struct SubmissionOrchestrator {
    submit: SubmitFeedbackHandler,
    list: ListFeedbackHandler,
    get: GetFeedbackHandler,
    provider_summary: ProviderSummaryHandler,
}

impl SubmissionOrchestrator {
    pub fn new(store: Arc<dyn FeedbackStore>, transport: Arc<dyn EventPublisher>) -> Self {
        let submit = SubmitFeedbackHandler::new(
            Arc::clone(&store),
            DuplicateGuard::new(Arc::clone(&store)),
            SubmissionEventPublisher::new(transport),
        );

        Self {
            submit,
            list: ListFeedbackHandler::new(Arc::clone(&store)),
            get: GetFeedbackHandler::new(Arc::clone(&store)),
            provider_summary: ProviderSummaryHandler::new(store),
        }
    }

    /// Validate, de-duplicate, persist and announce a submission.
    pub async fn submit(
        &self,
        submission: FeedbackSubmission,
    ) -> Result<FeedbackRecord, FeedbackError> {
        self.submit.handle(submission).await
    }

    /// All feedback, or one member's feedback when `member_id` is present
    /// and not blank. Newest first.
    pub async fn query(&self, member_id: Option<&str>) -> Result<Vec<FeedbackRecord>, FeedbackError> {
        let query = match member_id {
            Some(member_id) => ListFeedbackQuery::for_member(member_id),
            None => ListFeedbackQuery::all(),
        };
        self.list.handle(query).await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<FeedbackRecord, FeedbackError> {
        self.get.handle(id).await
    }

    pub async fn provider_summary(
        &self,
        provider_name: &str,
        min_rating: Option<i32>,
    ) -> Result<ProviderSummary, FeedbackError> {
        self.provider_summary
            .handle(ProviderSummaryQuery {
                provider_name: provider_name.to_string(),
                min_rating,
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::events::InMemoryEventPublisher;
    use crate::adapters::storage::InMemoryFeedbackStore;
    use std::time::Duration;

    fn orchestrator() -> (SubmissionOrchestrator, Arc<InMemoryEventPublisher>) {
        let events = Arc::new(InMemoryEventPublisher::new());
        let orchestrator =
            SubmissionOrchestrator::new(Arc::new(InMemoryFeedbackStore::new()), events.clone());
        (orchestrator, events)
    }

    #[tokio::test]
    async fn submitted_record_is_queryable_every_way() {
        let (orchestrator, events) = orchestrator();

        let record = orchestrator
            .submit(FeedbackSubmission::new("member-123", "Dr. Smith", 4, None))
            .await
            .unwrap();

        assert_eq!(orchestrator.get_by_id(&record.id.to_string()).await.unwrap(), record);
        assert_eq!(orchestrator.query(None).await.unwrap(), vec![record.clone()]);
        assert_eq!(
            orchestrator.query(Some("member-123")).await.unwrap(),
            vec![record.clone()]
        );

        let summary = orchestrator.provider_summary("Dr. Smith", None).await.unwrap();
        assert_eq!(summary.total_feedback, 1);
        assert_eq!(summary.items, vec![record]);

        assert!(events.wait_for_events(1, Duration::from_secs(2)).await);
    }

    #[tokio::test]
    async fn second_submission_for_same_pair_is_duplicate() {
        let (orchestrator, _) = orchestrator();
        orchestrator
            .submit(FeedbackSubmission::new("member-123", "Dr. Smith", 4, None))
            .await
            .unwrap();

        let err = orchestrator
            .submit(FeedbackSubmission::new("member-123", "Dr. Smith", 2, None))
            .await
            .unwrap_err();

        assert_eq!(err, FeedbackError::duplicate("Dr. Smith"));
        assert_eq!(orchestrator.query(None).await.unwrap().len(), 1);
    }
}
