//! Admin user endpoints
//!
//! Follows the list-view contract of React-Admin's simple REST provider:
//! `range`/`sort` in, `{data, total}` plus `Content-Range` out.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{content_range, ItemEnvelope, ListEnvelope, ListQuery, User};

/// Resource name used in `Content-Range`
const RESOURCE: &str = "users";

/// GET /admin/users - one page of users with the total count
async fn list_users(
    State(state): State<Arc<AppState>>,
    query: ListQuery,
) -> Result<impl IntoResponse, ApiError> {
    let total = state
        .users
        .count()
        .await
        .map_err(|e| ApiError::from_db(e, "Failed to count users"))?;

    let users = state
        .users
        .list(&query)
        .await
        .map_err(|e| ApiError::from_db(e, "Failed to fetch users"))?;

    let range = content_range(RESOURCE, query.offset, users.len(), total);
    tracing::debug!(content_range = %range, ?query, "Listed users");

    Ok((
        [
            (header::CONTENT_RANGE, range),
            (
                header::ACCESS_CONTROL_EXPOSE_HEADERS,
                "Content-Range".to_string(),
            ),
        ],
        Json(ListEnvelope { data: users, total }),
    ))
}

/// GET /admin/users/{id} - a single user
async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ItemEnvelope<User>>, ApiError> {
    let user = state
        .users
        .get_by_id(&id)
        .await
        .map_err(|e| ApiError::from_db(e, "Failed to fetch user"))?;

    Ok(Json(ItemEnvelope { data: user }))
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/admin/users", get(list_users))
        .route("/admin/users/{id}", get(get_user))
}
