//! Greeting endpoint

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// Hello response
#[derive(Serialize)]
pub struct HelloResponse {
    pub message: &'static str,
    pub backend: &'static str,
}

/// GET /hello
async fn hello() -> Json<HelloResponse> {
    Json(HelloResponse {
        message: "hello",
        backend: "rust",
    })
}

/// Hello routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/hello", get(hello))
}
