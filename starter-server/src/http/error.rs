//! API error types with IntoResponse
//!
//! Every failure leaves the server in the same envelope:
//! `{"code": "...", "message": "...", "details": ...}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::db::repos::DbError;

/// Wire shape of every error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// Data access failed (500, logged)
    Database { message: &'static str, source: DbError },

    /// Feature not available in this backend (501)
    NotImplemented { message: &'static str },

    /// No route matches the request (404)
    RouteNotFound { path: String },

    /// Handler panicked (500)
    Internal,
}

impl ApiError {
    /// Map a repository error, keeping not-found distinct from failures.
    pub fn from_db(err: DbError, message: &'static str) -> Self {
        match err {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            source => Self::Database { message, source },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } | Self::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            Self::Database { .. } | Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotImplemented { .. } => StatusCode::NOT_IMPLEMENTED,
        }
    }

    pub fn body(&self) -> ErrorBody {
        let (code, message) = match self {
            Self::NotFound { resource, id } => ("NOT_FOUND", format!("{} {} not found", resource, id)),
            Self::RouteNotFound { path } => ("NOT_FOUND", format!("Route {} not found", path)),
            Self::Database { message, .. } => ("DB_ERROR", message.to_string()),
            Self::NotImplemented { message } => ("NOT_IMPLEMENTED", message.to_string()),
            Self::Internal => ("INTERNAL_ERROR", "an internal error occurred".to_string()),
        };

        ErrorBody {
            code: code.to_string(),
            message,
            details: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Database { message, source } = &self {
            // Log the actual error, return generic message
            tracing::error!(error = %source, "{}", message);
        }

        (self.status(), Json(self.body())).into_response()
    }
}
