//! CLI error handling with semantic exit codes.
//!
//! `routemap generate` exits 0 even when generation fails, because a sitemap
//! problem must never break the surrounding build. The codes below apply to
//! `routemap generate --strict` and to `routemap routes`.
//!
//! # Exit Code Categories
//!
//! | Code | Category | Description |
//! |------|----------|-------------|
//! | 0 | Success | Command completed successfully |
//! | 1 | `Internal` | Unexpected/internal error |
//! | 2 | `Usage` | Invalid arguments or configuration |
//! | 3 | `NotFound` | No route tree at any probed location |
//! | 4 | `Malformed` | Route manifest present but unparseable |
//! | 5 | `Io` | Output directory or file could not be written |
//!
//! # Usage
//!
//! ```bash
//! routemap generate --strict --hostname https://example.com
//! case $? in
//!     0) echo "Sitemap written" ;;
//!     3) echo "Route tree not generated yet" ;;
//!     *) echo "Other error" ;;
//! esac
//! ```

use std::fmt;

use routemap_core::Error as CoreError;

/// Semantic error category determining the exit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCategory {
    /// Unexpected or internal error (exit code 1).
    Internal = 1,

    /// Invalid arguments or configuration (exit code 2).
    ///
    /// Missing hostname, unreadable `routemap.toml`, out-of-range priority.
    Usage = 2,

    /// Route tree not found (exit code 3).
    NotFound = 3,

    /// Route manifest could not be parsed (exit code 4).
    Malformed = 4,

    /// Filesystem write failure (exit code 5).
    Io = 5,
}

impl ErrorCategory {
    /// Get the exit code for this category.
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        self as u8
    }

    /// Get a short description of this error category.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Internal => "internal error",
            Self::Usage => "usage error",
            Self::NotFound => "not found",
            Self::Malformed => "malformed manifest",
            Self::Io => "io error",
        }
    }

    /// Map a core error onto its category.
    #[must_use]
    pub const fn from_core(err: &CoreError) -> Self {
        match err {
            CoreError::Config(_) => Self::Usage,
            CoreError::ManifestNotFound { .. } => Self::NotFound,
            CoreError::Parse(_) => Self::Malformed,
            CoreError::Io(_) => Self::Io,
        }
    }

    /// Infer the error category from an error message.
    ///
    /// Fallback for errors that were never explicitly categorized.
    #[must_use]
    pub fn infer_from_message(msg: &str) -> Self {
        let msg_lower = msg.to_lowercase();

        if msg_lower.contains("could not find route tree")
            || msg_lower.contains("not found")
            || msg_lower.contains("no such")
        {
            return Self::NotFound;
        }

        if msg_lower.contains("route manifest") || msg_lower.contains("parse error") {
            return Self::Malformed;
        }

        if msg_lower.contains("configuration error")
            || msg_lower.contains("invalid value")
            || msg_lower.contains("missing required")
        {
            return Self::Usage;
        }

        if msg_lower.contains("io error") || msg_lower.contains("permission denied") {
            return Self::Io;
        }

        Self::Internal
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// A CLI error with a semantic category for exit code mapping.
///
/// Wraps an `anyhow::Error` with an `ErrorCategory` to enable proper
/// exit codes while preserving full error context and chains.
#[derive(Debug)]
pub struct CliError {
    /// The semantic category of this error.
    pub category: ErrorCategory,
    /// The underlying error with full context.
    pub source: anyhow::Error,
}

impl CliError {
    /// Create a new CLI error with explicit category.
    pub fn new(category: ErrorCategory, source: impl Into<anyhow::Error>) -> Self {
        Self {
            category,
            source: source.into(),
        }
    }

    /// Create a usage error.
    pub fn usage(source: impl Into<anyhow::Error>) -> Self {
        Self::new(ErrorCategory::Usage, source)
    }

    /// Get the exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.category.exit_code()
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        Self::new(ErrorCategory::from_core(&err), err)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

/// Determine the exit code from an `anyhow::Error`.
///
/// If the error is a `CliError`, returns its category's exit code. Bare core
/// errors map by variant. Anything else is inferred from the message.
#[must_use]
pub fn exit_code_from_error(err: &anyhow::Error) -> u8 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }
    if let Some(core_err) = err.downcast_ref::<CoreError>() {
        return ErrorCategory::from_core(core_err).exit_code();
    }

    ErrorCategory::infer_from_message(&err.to_string()).exit_code()
}
