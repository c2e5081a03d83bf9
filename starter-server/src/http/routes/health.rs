//! Health check endpoint

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::http::server::AppState;

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub ts: DateTime<Utc>,
}

/// GET /healthz - always 200; `ok` reflects database reachability
async fn healthz(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let ok = state.users.ping().await;
    if !ok {
        tracing::warn!("Health check: database unreachable");
    }

    Json(HealthResponse { ok, ts: Utc::now() })
}

/// Health routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/healthz", get(healthz))
}
