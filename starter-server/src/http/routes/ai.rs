//! Reasoning endpoint placeholder
//!
//! This backend has no model client; the route exists so frontends get a
//! structured answer instead of a bare 404.

use axum::{routing::post, Router};

use crate::http::error::ApiError;

const NOT_IMPLEMENTED_MESSAGE: &str =
    "AI reasoning is not available in the Rust backend. Use the Node or Python backend to call OpenRouter.";

/// POST /ai/reason - body is never read
async fn reason() -> ApiError {
    ApiError::NotImplemented {
        message: NOT_IMPLEMENTED_MESSAGE,
    }
}

/// AI routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/ai/reason", post(reason))
}
