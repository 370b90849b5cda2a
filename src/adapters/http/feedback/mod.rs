//! HTTP adapter for feedback endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ErrorResponse, FeedbackResponse, FieldError, ListFeedbackParams, ProviderFeedbackParams,
    ProviderSummaryResponse, SubmitFeedbackRequest,
};
pub use handlers::FeedbackHandlers;
pub use routes::{api_router, feedback_routes};
