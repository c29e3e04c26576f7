//! Catalogo server entry point

use anyhow::Result;
use catalogo_server::{app, config, logging};
use clap::{Parser, Subcommand};
use productos::ProductosModule;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "catalogo-server", version, about = "Product catalog web server")]
struct Cli {
    /// YAML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the listen port
    #[arg(short, long, global = true)]
    port: Option<u16>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Clone, Copy, Subcommand)]
enum Command {
    /// Serve the pages and API (default)
    Serve,
    /// Apply pending migrations and exit
    Migrate,
    /// Insert the demo catalog if the table is empty
    Seed,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut cfg = config::load(cli.config.as_deref())?;
    if let Some(port) = cli.port {
        cfg.server.port = port;
    }
    logging::init(&cfg.logging)?;

    let db = app::connect(&cfg.database).await?;
    let module = ProductosModule::new(cfg.catalog.clone());

    match cli.command.unwrap_or(Command::Serve) {
        Command::Migrate => app::migrate(&db, &module).await?,
        Command::Seed => {
            let inserted = app::seed(&cfg, db, &module).await?;
            tracing::info!(inserted, "Seed finished");
        }
        Command::Serve => app::serve(&cfg, db, &module).await?,
    }

    Ok(())
}
