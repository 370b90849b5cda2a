//! GetFeedbackHandler - Query handler for a single record.

use std::sync::Arc;

use crate::domain::feedback::{FeedbackError, FeedbackRecord};
use crate::domain::foundation::FeedbackId;
use crate::ports::FeedbackStore;

#[derive(Clone)]
pub struct GetFeedbackHandler {
    store: Arc<dyn FeedbackStore>,
}

impl GetFeedbackHandler {
    pub fn new(store: Arc<dyn FeedbackStore>) -> Self {
        Self { store }
    }

    /// Look up a record by its textual id.
    ///
    /// # Errors
    ///
    /// - `InvalidId` if `id` is not a UUID
    /// - `NotFound` if no record has that id
    /// - `Persistence` if the store fails
    pub async fn handle(&self, id: &str) -> Result<FeedbackRecord, FeedbackError> {
        let feedback_id: FeedbackId = id
            .trim()
            .parse()
            .map_err(|_| FeedbackError::InvalidId(id.to_string()))?;

        let record = self.store.get_by_id(&feedback_id).await.map_err(|err| {
            tracing::error!(feedback_id = %feedback_id, error = %err, "Failed to load feedback");
            FeedbackError::from(err)
        })?;

        record.ok_or_else(|| FeedbackError::not_found(feedback_id.to_string()))
    }
}
