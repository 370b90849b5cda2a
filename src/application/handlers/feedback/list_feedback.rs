//! ListFeedbackHandler - Query handler for feedback lists.

use std::sync::Arc;

use crate::domain::feedback::{FeedbackError, FeedbackRecord};
use crate::ports::FeedbackStore;

/// Query for feedback, optionally narrowed to one member.
#[derive(Debug, Clone, Default)]
pub struct ListFeedbackQuery {
    pub member_id: Option<String>,
}

impl ListFeedbackQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn for_member(member_id: impl Into<String>) -> Self {
        Self {
            member_id: Some(member_id.into()),
        }
    }

    /// The member filter, if one is present and not blank.
    fn member_filter(&self) -> Option<&str> {
        self.member_id
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
    }
}

/// Handler for listing feedback, newest first.
#[derive(Clone)]
pub struct ListFeedbackHandler {
    store: Arc<dyn FeedbackStore>,
}

impl ListFeedbackHandler {
    pub fn new(store: Arc<dyn FeedbackStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: ListFeedbackQuery) -> Result<Vec<FeedbackRecord>, FeedbackError> {
        let result = match query.member_filter() {
            Some(member_id) => self.store.list_by_member(member_id).await,
            None => self.store.list_all().await,
        };

        result.map_err(|err| {
            tracing::error!(error = %err, "Failed to list feedback");
            FeedbackError::from(err)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::feedback::testing::MockFeedbackStore;

    #[tokio::test]
    async fn absent_member_lists_everything() {
        let store = Arc::new(MockFeedbackStore::new());
        store.seed("m-1", "Dr. A", 5);
        store.seed("m-2", "Dr. B", 4);
        let handler = ListFeedbackHandler::new(store);

        let all = handler.handle(ListFeedbackQuery::all()).await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn blank_member_lists_everything() {
        let store = Arc::new(MockFeedbackStore::new());
        store.seed("m-1", "Dr. A", 5);
        store.seed("m-2", "Dr. B", 4);
        let handler = ListFeedbackHandler::new(store);

        let all = handler.handle(ListFeedbackQuery::for_member("   ")).await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn member_filter_is_trimmed_and_exact() {
        let store = Arc::new(MockFeedbackStore::new());
        store.seed("m-1", "Dr. A", 5);
        store.seed("m-2", "Dr. B", 4);
        store.seed("m-1", "Dr. C", 3);
        let handler = ListFeedbackHandler::new(store);

        let mine = handler.handle(ListFeedbackQuery::for_member(" m-1 ")).await.unwrap();
        assert_eq!(mine.len(), 2);
        assert!(mine.iter().all(|r| r.member_id == "m-1"));

        let none = handler.handle(ListFeedbackQuery::for_member("M-1")).await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn store_failure_is_persistence_error() {
        let handler = ListFeedbackHandler::new(Arc::new(MockFeedbackStore::failing_reads()));

        let err = handler.handle(ListFeedbackQuery::all()).await.unwrap_err();
        assert!(matches!(err, FeedbackError::Persistence(_)));
    }
}
