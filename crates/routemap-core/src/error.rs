//! Error types and handling for routemap-core operations.
//!
//! Every fallible operation in this crate returns [`Result<T>`]. The close-hook
//! entry point ([`crate::SitemapGenerator::run_close_hook`]) is the only place
//! where errors are deliberately swallowed; everything below it reports typed
//! failures so callers can tell "no manifest" apart from "malformed manifest".
//!
//! ## Error Categories
//!
//! - **I/O Errors**: reading the route tree, creating the output directory,
//!   writing `sitemap.xml`
//! - **Parse Errors**: manifest block present but not valid JSON, or missing
//!   its `routes` object
//! - **Configuration Errors**: unreadable or invalid `routemap.toml`, bad
//!   priorities, empty hostname
//! - **Not Found**: none of the probed route tree locations could be read

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for routemap-core operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation failed.
    ///
    /// Covers directory creation and writing the rendered sitemap. The
    /// underlying `std::io::Error` is preserved.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The route manifest block could not be parsed.
    ///
    /// ## Common Causes
    ///
    /// - Truncated or hand-edited generated file
    /// - Manifest JSON without a `routes` object
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration is invalid or inaccessible.
    #[error("Configuration error: {0}")]
    Config(String),

    /// None of the candidate route tree paths could be read.
    #[error("Could not find route tree file. Tried the following paths:\n{}", format_paths(.tried))]
    ManifestNotFound {
        /// Every path that was probed, in probing order.
        tried: Vec<PathBuf>,
    },
}

fn format_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

impl Error {
    /// Get the error category as a string identifier.
    ///
    /// Used as a structured field when failures are logged by the close hook.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::Parse(_) => "parse",
            Self::Config(_) => "config",
            Self::ManifestNotFound { .. } => "not_found",
        }
    }
}

/// Convenience type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
