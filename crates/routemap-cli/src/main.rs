//! Entry point for the `routemap` binary.

use std::process::ExitCode;

use colored::Colorize;
use routemap_cli::error::exit_code_from_error;

#[tokio::main]
async fn main() -> ExitCode {
    match routemap_cli::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            ExitCode::from(exit_code_from_error(&err))
        },
    }
}
