//! Boutique CLI - Data file seeding and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Seed the data file with sample products (no-op if already populated)
//! boutique-cli seed
//!
//! # Replace the catalog with the sample products
//! boutique-cli seed --force
//! ```
//!
//! # Commands
//!
//! - `seed` - Populate the catalog with sample products

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "boutique-cli")]
#[command(version, about = "Boutique CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the catalog with sample products
    Seed {
        /// Replace the catalog even if it already has products
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Seed { force } => commands::seed::run(force).await?,
    }
    Ok(())
}
