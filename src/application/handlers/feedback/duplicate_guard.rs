//! DuplicateGuard - Fast-path check for an existing (member, provider) pair.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::ports::FeedbackStore;

/// Answers whether a member already left feedback for a provider.
///
/// Store uniqueness is authoritative; this check only spares the common
/// duplicate case a failed write.
#[derive(Clone)]
pub struct DuplicateGuard {
    store: Arc<dyn FeedbackStore>,
}

impl DuplicateGuard {
    pub fn new(store: Arc<dyn FeedbackStore>) -> Self {
        Self { store }
    }

    /// Exact, case-sensitive match on both values.
    pub async fn check_duplicate(
        &self,
        member_id: &str,
        provider_name: &str,
    ) -> Result<bool, DomainError> {
        self.store
            .exists_by_member_and_provider(member_id, provider_name)
            .await
    }
}
