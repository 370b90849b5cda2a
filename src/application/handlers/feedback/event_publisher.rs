//! SubmissionEventPublisher - Fire-and-forget notification of new feedback.

use std::sync::{Arc, OnceLock};

use tokio::sync::mpsc;

use crate::domain::feedback::{FeedbackRecord, FeedbackSubmitted};
use crate::domain::foundation::{DomainError, ErrorCode, EventEnvelope};
use crate::ports::EventPublisher;

/// Hands a `feedback.submitted.v1` event to the transport without making the
/// caller wait.
///
/// Events queue on an unbounded channel drained by a single worker task, so
/// the transport sees them in `publish` call order. Failures are logged and
/// dropped. There is no retry, no timeout and no cancellation; a submission
/// whose event is lost is still a success.
///
/// The worker starts on the first `publish` and lives on that call's
/// runtime. Clones share the same worker.
#[derive(Clone)]
pub struct SubmissionEventPublisher {
    transport: Arc<dyn EventPublisher>,
    sender: Arc<OnceLock<mpsc::UnboundedSender<FeedbackSubmitted>>>,
}

impl SubmissionEventPublisher {
    pub fn new(transport: Arc<dyn EventPublisher>) -> Self {
        Self {
            transport,
            sender: Arc::new(OnceLock::new()),
        }
    }

    /// Queue the event for `record` and return immediately.
    ///
    /// Must be called from within a tokio runtime.
    pub fn publish(&self, record: &FeedbackRecord) {
        let sender = self
            .sender
            .get_or_init(|| start_worker(Arc::clone(&self.transport)));

        if let Err(mpsc::error::SendError(event)) = sender.send(FeedbackSubmitted::from(record)) {
            tracing::error!(
                feedback_id = %event.id,
                "Event worker stopped, dropping feedback submitted event"
            );
        }
    }
}

fn start_worker(transport: Arc<dyn EventPublisher>) -> mpsc::UnboundedSender<FeedbackSubmitted> {
    let (sender, mut receiver) = mpsc::unbounded_channel::<FeedbackSubmitted>();

    tokio::spawn(async move {
        while let Some(event) = receiver.recv().await {
            if let Err(err) = deliver(transport.as_ref(), &event).await {
                tracing::error!(
                    feedback_id = %event.id,
                    error = %err,
                    "Failed to publish feedback submitted event"
                );
            }
        }
        tracing::debug!("Feedback event worker stopped");
    });

    sender
}

async fn deliver(transport: &dyn EventPublisher, event: &FeedbackSubmitted) -> Result<(), DomainError> {
    let envelope = EventEnvelope::from_event(event).map_err(|e| {
        DomainError::new(
            ErrorCode::EventPublishFailed,
            format!("Failed to serialize event payload: {}", e),
        )
    })?;
    transport.publish(envelope).await
}
