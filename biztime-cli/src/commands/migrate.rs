//! Schema migration command

use anyhow::{Context, Result};
use biztime_server::db::{migrations, BizStore};
use clap::Parser;

use super::DatabaseArgs;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Also insert the sample companies, invoices and industries
    #[arg(long)]
    pub seed: bool,

    #[command(flatten)]
    pub db: DatabaseArgs,
}

pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let store = args.db.connect().await?;

    migrations::run(store.pool())
        .await
        .context("Failed to run migrations")?;

    if args.seed {
        migrations::seed(store.pool())
            .await
            .context("Failed to seed sample data")?;
    }

    store.close().await;
    Ok(())
}
