//! Database layer - connection bootstrap and repositories
//!
//! # Design Principles
//!
//! - One pool per process, created at startup and closed on shutdown
//! - Startup retries; request handling never does
//! - Every user-supplied value is a bound parameter

pub mod pool;
pub mod repos;

pub use pool::{create_pool, ensure_sslmode, wait_for_db, BootstrapConfig, BootstrapError};
pub use repos::*;
