//! starter-api - HTTP JSON API for project-starter
//!
//! Entry point for the API process:
//! - `serve` waits for PostgreSQL, then serves health, hello, and admin user routes
//! - `check-db` runs the startup database probe and exits

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "starter-api",
    author,
    version,
    about = "HTTP JSON API with health checks and admin user listing"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Export traces via OpenTelemetry (requires the telemetry feature)
    #[arg(long, global = true)]
    otel: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Wait for the database and serve HTTP until shutdown
    Serve(commands::serve::ServeArgs),

    /// Check database readiness using the startup retry policy
    CheckDb(commands::check_db::CheckDbArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Missing .env is fine; the environment may already be configured
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig {
        debug: cli.debug,
        otel: cli.otel,
    })?;

    let result = match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await,
        Commands::CheckDb(args) => commands::run_check_db(args).await,
    };

    tracing_setup::shutdown_otel();
    result
}
