//! Backup Organizer CLI
//!
//! This binary provides the command-line interface for the backup organizer
//! REST service.

#![deny(warnings)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

use anyhow::{Context, Result};
use backup_organizer_core::config::Config;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "backup-organizer")]
#[command(about = "In-memory catalog of data collections and their backups")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the REST server
    Serve {
        /// Address to bind, overrides `server.host`
        #[arg(long)]
        host: Option<String>,
        /// Port to bind, overrides `server.port`
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    match cli.command {
        Some(Commands::Serve { host, port }) => serve(cli.config.as_deref(), host, port).await,
        None => {
            println!(
                "Run 'backup-organizer serve' to start the REST server, or --help for more options"
            );
            Ok(())
        }
    }
}

/// Initialize logging system
fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "backup_organizer={level},backup_organizer_core={level},backup_organizer_server={level},tower_http={level}"
        ))
        .init();

    Ok(())
}

/// Load the configuration and apply command-line overrides
fn resolve_config(
    config_path: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
) -> Result<Config> {
    let mut config = Config::load(config_path).context("Failed to load configuration")?;

    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Start the REST server
async fn serve(config_path: Option<&Path>, host: Option<String>, port: Option<u16>) -> Result<()> {
    let config = resolve_config(config_path, host, port)?;

    info!(
        "Starting backup organizer REST server on {}",
        config.server.bind_address()
    );

    backup_organizer_server::run_server(config).await
}
