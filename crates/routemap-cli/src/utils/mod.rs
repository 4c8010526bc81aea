//! Shared helpers for the CLI commands.
//!
//! - [`logging`]: tracing subscriber and color control from global flags
//! - [`options`]: layering defaults, `routemap.toml`, environment and flags

pub mod logging;
pub mod options;

pub use logging::initialize_logging;
pub use options::{resolve_options, resolve_route_tree};
