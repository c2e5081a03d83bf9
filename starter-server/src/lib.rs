//! starter-server: HTTP JSON API for project-starter
//!
//! Health and greeting endpoints plus a read-only, admin-UI compatible
//! view of the `users` table.

pub mod db;
pub mod http;
pub mod models;

pub use db::{wait_for_db, BootstrapConfig, BootstrapError};
pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};
