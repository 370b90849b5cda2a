//! HTTP handlers for feedback endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::SubmissionOrchestrator;
use crate::domain::feedback::FeedbackError;

use super::dto::{
    ErrorResponse, FeedbackResponse, ListFeedbackParams, ProviderFeedbackParams,
    ProviderSummaryResponse, SubmitFeedbackRequest,
};

/// Body returned for any store failure; details stay in the logs.
const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred";

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct FeedbackHandlers {
    orchestrator: Arc<SubmissionOrchestrator>,
}

impl FeedbackHandlers {
    pub fn new(orchestrator: Arc<SubmissionOrchestrator>) -> Self {
        Self { orchestrator }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/v1/feedback - Submit feedback
pub async fn submit_feedback(
    State(handlers): State<FeedbackHandlers>,
    body: Result<Json<SubmitFeedbackRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "Malformed feedback request body");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::single("body", rejection.body_text())),
            )
                .into_response();
        }
    };

    let field_errors = req.field_errors();
    if !field_errors.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::from_fields(field_errors)),
        )
            .into_response();
    }

    match handlers.orchestrator.submit(req.into()).await {
        Ok(record) => (StatusCode::CREATED, Json(FeedbackResponse::from(record))).into_response(),
        Err(e) => handle_feedback_error(e),
    }
}

/// GET /api/v1/feedback?memberId= - List feedback, newest first
pub async fn list_feedback(
    State(handlers): State<FeedbackHandlers>,
    Query(params): Query<ListFeedbackParams>,
) -> Response {
    match handlers.orchestrator.query(params.member_id.as_deref()).await {
        Ok(records) => {
            let response: Vec<FeedbackResponse> = records.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_feedback_error(e),
    }
}

/// GET /api/v1/feedback/:id - Get one record
pub async fn get_feedback(
    State(handlers): State<FeedbackHandlers>,
    Path(id): Path<String>,
) -> Response {
    match handlers.orchestrator.get_by_id(&id).await {
        Ok(record) => (StatusCode::OK, Json(FeedbackResponse::from(record))).into_response(),
        Err(e) => handle_feedback_error(e),
    }
}

/// GET /api/v1/providers/:provider_name/feedback?minRating= - Provider summary
pub async fn provider_feedback(
    State(handlers): State<FeedbackHandlers>,
    Path(provider_name): Path<String>,
    params: Result<Query<ProviderFeedbackParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(params) => params,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::single(
                    "minRating",
                    "Minimum rating must be between 1 and 5",
                )),
            )
                .into_response();
        }
    };

    match handlers
        .orchestrator
        .provider_summary(&provider_name, params.min_rating)
        .await
    {
        Ok(summary) => {
            (StatusCode::OK, Json(ProviderSummaryResponse::from(summary))).into_response()
        }
        Err(e) => handle_feedback_error(e),
    }
}

/// GET /api/v1/health - Liveness probe
pub async fn health() -> &'static str {
    "Feedback API is healthy!"
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

pub(crate) fn handle_feedback_error(error: FeedbackError) -> Response {
    let field = error.field();
    match error {
        FeedbackError::Validation(_)
        | FeedbackError::Duplicate { .. }
        | FeedbackError::InvalidId(_) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::single(field, error.to_string())),
        )
            .into_response(),
        FeedbackError::NotFound(_) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::single(field, error.to_string())),
        )
            .into_response(),
        FeedbackError::Persistence(msg) => {
            tracing::error!(error = %msg, "Feedback request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::single(field, INTERNAL_ERROR_MESSAGE)),
            )
                .into_response()
        }
    }
}
