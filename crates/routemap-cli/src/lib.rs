//! routemap CLI - write `sitemap.xml` from a generated route tree
//!
//! The binary in `main.rs` is a thin wrapper around [`run`]; command
//! implementations live in separate modules.
use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
pub mod error;
mod output;
mod utils;

use crate::cli::{Cli, Commands};
use crate::utils::initialize_logging;

/// Execute the routemap CLI with the current process arguments.
///
/// # Errors
///
/// Returns an error if logging cannot be initialized or the command fails.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    initialize_logging(&cli)?;

    execute_command(cli).await
}

async fn execute_command(cli: Cli) -> Result<()> {
    let quiet = cli.quiet;
    match cli.command {
        Commands::Generate(args) => commands::generate_sitemap(&args, quiet).await,
        Commands::Routes(args) => commands::list_routes(&args).await,
    }
}
