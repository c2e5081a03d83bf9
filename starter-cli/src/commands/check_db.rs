//! Database readiness probe
//!
//! Runs the same bootstrap as `serve` and exits without serving.

use anyhow::{Context, Result};
use clap::Parser;

use starter_server::{wait_for_db, BootstrapConfig};

use super::DbArgs;

/// Arguments for the check-db command
#[derive(Parser, Debug)]
pub struct CheckDbArgs {
    #[command(flatten)]
    pub db: DbArgs,
}

/// Wait for the database, report, and close the pool.
pub async fn run_check_db(args: CheckDbArgs) -> Result<()> {
    let bootstrap = BootstrapConfig::from(args.db);

    let pool = wait_for_db(&bootstrap)
        .await
        .context("Database is not ready")?;
    pool.close().await;

    println!("database ready");
    Ok(())
}
