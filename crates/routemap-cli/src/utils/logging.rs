//! Logging initialization and configuration.
//!
//! This module handles setting up the tracing subscriber and color control
//! based on CLI flags and environment variables.

use anyhow::Result;
use colored::control as color_control;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::cli::Cli;
use crate::output::OutputFormat;

/// Pick the maximum log level for the given flags.
///
/// JSON output drops to `ERROR` unless verbose/debug was explicitly requested,
/// so that scripts reading stdout see nothing but the document.
pub fn log_level(cli: &Cli) -> Level {
    if cli.verbose || cli.debug {
        Level::DEBUG
    } else if cli.quiet || cli.format() == OutputFormat::Json {
        Level::ERROR
    } else {
        Level::WARN
    }
}

/// Initialize the logging subsystem based on CLI flags.
///
/// # Errors
///
/// Returns an error if the global tracing subscriber cannot be set.
pub fn initialize_logging(cli: &Cli) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level(cli))
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let env_no_color = std::env::var_os("NO_COLOR").is_some();
    if cli.no_color || env_no_color || cli.format() == OutputFormat::Json {
        color_control::set_override(false);
    }
    Ok(())
}
