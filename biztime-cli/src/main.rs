mod commands;
mod tracing_setup;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{MigrateArgs, ServeArgs};
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(name = "biztime", version, about = "Companies, invoices and industries over HTTP")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API
    Serve(ServeArgs),
    /// Create the database tables
    Migrate(MigrateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; real environment variables still apply
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug })?;

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Migrate(args) => commands::run_migrate(args).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::net::SocketAddr;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_defaults() {
        let cli = Cli::try_parse_from(["biztime", "serve"]).unwrap();
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(args.bind_addr().port(), 3000);
        assert_eq!(args.timeout, 30);
        assert!(!args.migrate);
    }

    #[test]
    fn port_overrides_bind_port() {
        let cli = Cli::try_parse_from([
            "biztime", "serve", "--bind", "0.0.0.0:8080", "--port", "4000",
        ])
        .unwrap();
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(args.bind_addr(), SocketAddr::from(([0, 0, 0, 0], 4000)));
    }

    #[test]
    fn migrate_with_seed() {
        let cli = Cli::try_parse_from([
            "biztime",
            "--debug",
            "migrate",
            "--seed",
            "--database-url",
            "postgres://example/biztime_test",
        ])
        .unwrap();
        assert!(cli.debug);
        let Commands::Migrate(args) = cli.command else {
            panic!("expected migrate");
        };
        assert!(args.seed);
        assert_eq!(args.db.database_url, "postgres://example/biztime_test");
    }
}
