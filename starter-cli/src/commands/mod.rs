//! Command implementations for the starter-api binary

pub mod check_db;
pub mod serve;

pub use check_db::run_check_db;
pub use serve::run_serve;

use std::time::Duration;

use clap::Args;
use starter_server::db::pool::{DEFAULT_DATABASE_URL, DEFAULT_MAX_ATTEMPTS};
use starter_server::BootstrapConfig;

/// Database connection arguments shared by every command
#[derive(Args, Debug, Clone)]
pub struct DbArgs {
    /// PostgreSQL connection URL
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    /// Connection attempts before giving up at startup
    #[arg(long, env = "DB_MAX_ATTEMPTS", default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: u32,

    /// Milliseconds to wait between connection attempts
    #[arg(long, env = "DB_RETRY_DELAY_MS", default_value_t = 1000)]
    pub retry_delay_ms: u64,

    /// Maximum connections in the pool
    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = 5)]
    pub max_connections: u32,

    /// Milliseconds a query waits for a pooled connection
    #[arg(long, env = "DB_ACQUIRE_TIMEOUT_MS", default_value_t = 3000)]
    pub acquire_timeout_ms: u64,
}

impl From<DbArgs> for BootstrapConfig {
    fn from(args: DbArgs) -> Self {
        Self {
            database_url: args.database_url,
            max_connections: args.max_connections,
            max_attempts: args.max_attempts,
            retry_delay: Duration::from_millis(args.retry_delay_ms),
            acquire_timeout: Duration::from_millis(args.acquire_timeout_ms),
        }
    }
}
