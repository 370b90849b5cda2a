//! SubmitFeedbackHandler - Command handler for new feedback.

use std::sync::Arc;

use crate::domain::feedback::{FeedbackError, FeedbackRecord, FeedbackSubmission, SubmissionStage};
use crate::ports::FeedbackStore;

use super::{DuplicateGuard, SubmissionEventPublisher};

/// Handler for feedback submissions.
///
/// Runs validation, the duplicate check, the insert and the event hand-off
/// in that order. Nothing after the insert can turn the call into a failure.
#[derive(Clone)]
pub struct SubmitFeedbackHandler {
    store: Arc<dyn FeedbackStore>,
    guard: DuplicateGuard,
    publisher: SubmissionEventPublisher,
}

impl SubmitFeedbackHandler {
    pub fn new(
        store: Arc<dyn FeedbackStore>,
        guard: DuplicateGuard,
        publisher: SubmissionEventPublisher,
    ) -> Self {
        Self {
            store,
            guard,
            publisher,
        }
    }

    pub async fn handle(
        &self,
        submission: FeedbackSubmission,
    ) -> Result<FeedbackRecord, FeedbackError> {
        let mut stage = SubmissionStage::Received;
        trace_stage(stage);

        // 1. Ordered business rules
        if let Err(err) = submission.validate() {
            tracing::debug!(stage = %stage, reason = %err, "Feedback rejected");
            return Err(reject(stage, err));
        }
        stage = advance(stage);

        // 2. Duplicate fast path, keyed on the trimmed pair that would be stored
        let submitted_provider = submission.provider_name.clone().unwrap_or_default();
        let member_id = submission.trimmed_member_id().unwrap_or_default().to_string();
        let provider_name = submission.trimmed_provider_name().unwrap_or_default().to_string();

        let exists = match self.guard.check_duplicate(&member_id, &provider_name).await {
            Ok(exists) => exists,
            Err(err) => return Err(reject(stage, persistence_failure(stage, err.into()))),
        };
        if exists {
            tracing::debug!(
                stage = %stage,
                member_id = %member_id,
                provider_name = %provider_name,
                "Duplicate feedback rejected"
            );
            return Err(reject(stage, FeedbackError::duplicate(submitted_provider)));
        }
        stage = advance(stage);

        // 3. Durable insert; the store's uniqueness rule is authoritative
        let new_feedback = match submission.into_new_feedback() {
            Ok(new_feedback) => new_feedback,
            Err(err) => return Err(reject(stage, err)),
        };
        let record = match self.store.create(new_feedback).await {
            Ok(record) => record,
            Err(err) => {
                let err = match FeedbackError::from(err) {
                    FeedbackError::Duplicate { .. } => {
                        tracing::debug!(
                            stage = %stage,
                            member_id = %member_id,
                            provider_name = %provider_name,
                            "Concurrent duplicate feedback rejected"
                        );
                        FeedbackError::duplicate(submitted_provider)
                    }
                    other => persistence_failure(stage, other),
                };
                return Err(reject(stage, err));
            }
        };
        stage = advance(stage);

        // 4. Fire-and-forget notification
        self.publisher.publish(&record);
        advance(stage);

        tracing::info!(
            feedback_id = %record.id,
            member_id = %record.member_id,
            provider_name = %record.provider_name,
            rating = record.rating,
            "Feedback submitted"
        );
        trace_stage(SubmissionStage::Completed);

        Ok(record)
    }
}

fn trace_stage(stage: SubmissionStage) {
    tracing::debug!(stage = %stage, "Feedback submission stage");
}

fn advance(stage: SubmissionStage) -> SubmissionStage {
    let next = stage.next().unwrap_or(stage);
    trace_stage(next);
    next
}

fn reject(stage: SubmissionStage, err: FeedbackError) -> FeedbackError {
    debug_assert!(stage.can_reject(), "Cannot reject a persisted submission");
    err
}

fn persistence_failure(stage: SubmissionStage, err: FeedbackError) -> FeedbackError {
    tracing::error!(stage = %stage, error = %err, "Feedback store failure during submission");
    err
}
