//! HTTP server layer
//!
//! Axum server with:
//! - CORS (localhost only by default)
//! - Request tracing and panic recovery
//! - Graceful shutdown
//! - JSON error envelopes

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::{ApiError, ErrorBody};
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError, DEFAULT_PORT};
