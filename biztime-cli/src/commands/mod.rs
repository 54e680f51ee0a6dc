pub mod migrate;
pub mod serve;

pub use migrate::{run_migrate, MigrateArgs};
pub use serve::{run_serve, ServeArgs};

use anyhow::{Context, Result};
use biztime_server::db::pool::DEFAULT_MAX_CONNECTIONS;
use biztime_server::db::{create_pool_with_options, PgStore};
use clap::Args;

/// Database options shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// Database URL
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "postgres://localhost/biztime"
    )]
    pub database_url: String,

    /// Maximum pooled connections
    #[arg(long, env = "BIZTIME_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

impl DatabaseArgs {
    pub async fn connect(&self) -> Result<PgStore> {
        let pool = create_pool_with_options(&self.database_url, self.max_connections)
            .await
            .context("Failed to create database pool")?;
        Ok(PgStore::new(pool))
    }
}
