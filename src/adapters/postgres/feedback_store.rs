//! PostgreSQL implementation of FeedbackStore.
//!
//! The `feedback` table carries a unique index on (member_id, provider_name);
//! a violation on insert is reported as `DuplicateFeedback`.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::feedback::{FeedbackRecord, NewFeedback};
use crate::domain::foundation::{DomainError, ErrorCode, FeedbackId, Timestamp};
use crate::ports::FeedbackStore;

const SELECT_COLUMNS: &str = "id, member_id, provider_name, rating, comment, submitted_at";

/// PostgreSQL implementation of the FeedbackStore port.
///
/// # Usage
///
/// ```rust,ignore
/// let pool = connect_pool(&config.database).await?;
/// let store = PostgresFeedbackStore::new(pool);
///
/// let record = store.create(new_feedback).await?;
/// ```
#[derive(Clone)]
pub struct PostgresFeedbackStore {
    pool: PgPool,
}

impl std::fmt::Debug for PostgresFeedbackStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresFeedbackStore")
            .field("pool", &"PgPool")
            .finish()
    }
}

impl PostgresFeedbackStore {
    /// Creates a new store instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_records(
        &self,
        query: sqlx::query::QueryAs<'_, sqlx::Postgres, FeedbackRow, sqlx::postgres::PgArguments>,
        context: &str,
    ) -> Result<Vec<FeedbackRecord>, DomainError> {
        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database(context, e))?;

        rows.into_iter().map(row_to_record).collect()
    }
}

/// Internal row type for sqlx query mapping.
#[derive(Debug, sqlx::FromRow)]
struct FeedbackRow {
    id: uuid::Uuid,
    member_id: String,
    provider_name: String,
    rating: i16,
    comment: Option<String>,
    submitted_at: chrono::DateTime<chrono::Utc>,
}

/// Maps a database row to a FeedbackRecord.
fn row_to_record(row: FeedbackRow) -> Result<FeedbackRecord, DomainError> {
    let rating = u8::try_from(row.rating).map_err(|_| {
        DomainError::new(
            ErrorCode::InternalError,
            format!("Invalid rating {} stored for feedback {}", row.rating, row.id),
        )
    })?;

    Ok(FeedbackRecord {
        id: FeedbackId::from_uuid(row.id),
        member_id: row.member_id,
        provider_name: row.provider_name,
        rating,
        comment: row.comment,
        submitted_at: Timestamp::from_datetime(row.submitted_at),
    })
}

#[async_trait]
impl FeedbackStore for PostgresFeedbackStore {
    async fn create(&self, feedback: NewFeedback) -> Result<FeedbackRecord, DomainError> {
        let id = FeedbackId::new();
        let submitted_at = Timestamp::now();

        let result = sqlx::query_as::<_, FeedbackRow>(&format!(
            r#"
            INSERT INTO feedback (id, member_id, provider_name, rating, comment, submitted_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {SELECT_COLUMNS}
            "#
        ))
        .bind(id.as_uuid())
        .bind(&feedback.member_id)
        .bind(&feedback.provider_name)
        .bind(i16::from(feedback.rating))
        .bind(&feedback.comment)
        .bind(submitted_at.as_datetime())
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(row) => row_to_record(row),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(DomainError::new(
                    ErrorCode::DuplicateFeedback,
                    "Feedback already exists for member and provider",
                )
                .with_detail("member_id", feedback.member_id)
                .with_detail("provider_name", feedback.provider_name))
            }
            Err(e) => Err(DomainError::database("Failed to insert feedback", e)),
        }
    }

    async fn list_all(&self) -> Result<Vec<FeedbackRecord>, DomainError> {
        let sql = format!("SELECT {SELECT_COLUMNS} FROM feedback ORDER BY submitted_at DESC");
        self.fetch_records(sqlx::query_as(&sql), "Failed to list feedback")
            .await
    }

    async fn list_by_member(&self, member_id: &str) -> Result<Vec<FeedbackRecord>, DomainError> {
        let sql = format!(
            "SELECT {SELECT_COLUMNS} FROM feedback WHERE member_id = $1 ORDER BY submitted_at DESC"
        );
        self.fetch_records(
            sqlx::query_as(&sql).bind(member_id),
            "Failed to list feedback by member",
        )
        .await
    }

    async fn get_by_id(&self, id: &FeedbackId) -> Result<Option<FeedbackRecord>, DomainError> {
        let sql = format!("SELECT {SELECT_COLUMNS} FROM feedback WHERE id = $1");
        let row = sqlx::query_as::<_, FeedbackRow>(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to load feedback", e))?;

        row.map(row_to_record).transpose()
    }

    async fn exists_by_member_and_provider(
        &self,
        member_id: &str,
        provider_name: &str,
    ) -> Result<bool, DomainError> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM feedback WHERE member_id = $1 AND provider_name = $2
            )
            "#,
        )
        .bind(member_id)
        .bind(provider_name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to check existing feedback", e))?;

        Ok(exists)
    }

    async fn list_by_provider(
        &self,
        provider_name: &str,
        min_rating: Option<u8>,
    ) -> Result<Vec<FeedbackRecord>, DomainError> {
        let sql = format!(
            r#"
            SELECT {SELECT_COLUMNS} FROM feedback
            WHERE provider_name = $1 AND ($2::SMALLINT IS NULL OR rating >= $2)
            ORDER BY submitted_at DESC
            "#
        );
        self.fetch_records(
            sqlx::query_as(&sql)
                .bind(provider_name)
                .bind(min_rating.map(i16::from)),
            "Failed to list feedback by provider",
        )
        .await
    }

    async fn count_by_provider(&self, provider_name: &str) -> Result<u64, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM feedback WHERE provider_name = $1")
            .bind(provider_name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to count feedback by provider", e))?;

        Ok(count.max(0) as u64)
    }
}
