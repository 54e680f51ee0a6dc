//! HTTP server command
//!
//! Opens the pool, optionally migrates, then serves until shutdown.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use biztime_server::db::migrations;
use biztime_server::http::{run_server, ServerConfig};
use clap::Parser;

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "BIZTIME_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// Port to listen on; overrides the port in --bind
    #[arg(long, short = 'p', env = "PORT")]
    pub port: Option<u16>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Create missing tables before listening
    #[arg(long)]
    pub migrate: bool,

    #[command(flatten)]
    pub db: DatabaseArgs,
}

impl ServeArgs {
    /// Bind address with the `--port`/`PORT` override applied
    pub fn bind_addr(&self) -> SocketAddr {
        match self.port {
            Some(port) => SocketAddr::new(self.bind.ip(), port),
            None => self.bind,
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let bind_addr = args.bind_addr();
    tracing::info!("Starting biztime server on {}", bind_addr);

    let store = args.db.connect().await?;

    if args.migrate {
        migrations::run(store.pool())
            .await
            .context("Failed to run migrations")?;
    }

    let config = ServerConfig {
        bind_addr,
        cors_permissive: args.cors_permissive,
        request_timeout: Duration::from_secs(args.timeout),
    };

    // Blocks until shutdown; the pool is closed on the way out
    run_server(Arc::new(store), config)
        .await
        .context("Server error")?;

    Ok(())
}
