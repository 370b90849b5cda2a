//! ProviderSummaryHandler - Feedback received by one provider.

use std::sync::Arc;

use crate::domain::feedback::{FeedbackError, FeedbackRecord, RATING_MAX, RATING_MIN};
use crate::domain::foundation::DomainError;
use crate::ports::FeedbackStore;

/// Query for a provider's feedback.
#[derive(Debug, Clone)]
pub struct ProviderSummaryQuery {
    pub provider_name: String,
    /// Only include ratings at or above this value.
    pub min_rating: Option<i32>,
}

/// A provider's feedback, newest first.
///
/// `total_feedback` counts every record for the provider and ignores the
/// rating filter applied to `items`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSummary {
    pub provider_name: String,
    pub total_feedback: u64,
    pub items: Vec<FeedbackRecord>,
}

#[derive(Clone)]
pub struct ProviderSummaryHandler {
    store: Arc<dyn FeedbackStore>,
}

impl ProviderSummaryHandler {
    pub fn new(store: Arc<dyn FeedbackStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: ProviderSummaryQuery) -> Result<ProviderSummary, FeedbackError> {
        let provider_name = query.provider_name.trim();
        if provider_name.is_empty() {
            return Err(FeedbackError::validation("Provider name is required"));
        }

        let min_rating = match query.min_rating {
            None => None,
            Some(r) if (RATING_MIN..=RATING_MAX).contains(&r) => u8::try_from(r).ok(),
            Some(_) => {
                return Err(FeedbackError::validation(
                    "Minimum rating must be between 1 and 5",
                ))
            }
        };

        let store_failure = |err: DomainError| {
            tracing::error!(provider_name = %provider_name, error = %err, "Failed to load provider feedback");
            FeedbackError::from(err)
        };

        let items = self
            .store
            .list_by_provider(provider_name, min_rating)
            .await
            .map_err(store_failure)?;
        let total_feedback = self
            .store
            .count_by_provider(provider_name)
            .await
            .map_err(store_failure)?;

        Ok(ProviderSummary {
            provider_name: provider_name.to_string(),
            total_feedback,
            items,
        })
    }
}
