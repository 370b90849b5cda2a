//! HTTP routes for feedback endpoints.

use std::time::Duration;

use axum::{routing::get, Router};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{
    get_feedback, health, list_feedback, provider_feedback, submit_feedback, FeedbackHandlers,
};

/// Creates the feedback router. Paths are relative to the API prefix.
pub fn feedback_routes(handlers: FeedbackHandlers) -> Router {
    Router::new()
        .route("/feedback", get(list_feedback).post(submit_feedback))
        .route("/feedback/:id", get(get_feedback))
        .route("/providers/:provider_name/feedback", get(provider_feedback))
        .route("/health", get(health))
        .with_state(handlers)
}

/// Full API under `/api/v1` with request tracing and a per-request timeout.
pub fn api_router(handlers: FeedbackHandlers, request_timeout: Duration) -> Router {
    Router::new()
        .nest("/api/v1", feedback_routes(handlers))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
}
