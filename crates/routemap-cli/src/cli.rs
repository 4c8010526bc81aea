//! # CLI Structure and Argument Parsing
//!
//! `routemap` runs as the last step of a web application build:
//!
//! ```bash
//! # Typical build script
//! vite build && routemap generate --hostname https://example.com
//!
//! # Settings from routemap.toml in the project root
//! routemap generate
//!
//! # Fail the pipeline when the sitemap cannot be produced
//! routemap generate --strict
//!
//! # Inspect what the manifest contains
//! routemap routes --format json
//! ```
//!
//! ## Precedence
//!
//! Built-in defaults < `routemap.toml` < environment variables < flags.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use routemap_core::ChangeFrequency;

use crate::output::OutputFormat;

/// Main CLI structure for the `routemap` command
#[derive(Parser, Clone, Debug)]
#[command(name = "routemap")]
#[command(version)]
#[command(about = "routemap - Generate sitemap.xml from a generated route tree", long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress informational messages (only show errors)
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Show debug logging, including every probed route tree location
    #[arg(long, global = true)]
    pub debug: bool,

    /// Disable all ANSI colors in output (also respects `NO_COLOR` env)
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,
}

/// Available subcommands for the `routemap` CLI
#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Write sitemap.xml for the project
    Generate(GenerateArgs),

    /// Print the routes found in the route manifest
    Routes(RoutesArgs),
}

/// Where the project and its route tree live.
#[derive(Args, Clone, Debug, Default)]
pub struct ProjectArgs {
    /// Path to routemap.toml (defaults to `<root>/routemap.toml` when present)
    #[arg(long, value_name = "FILE", env = "ROUTEMAP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Project root; root-relative probes and the output directory hang off it
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Generated route tree (default: app/routeTree.gen.ts)
    #[arg(long = "route-tree", value_name = "PATH", env = "ROUTEMAP_ROUTE_TREE")]
    pub route_tree: Option<PathBuf>,
}

/// Arguments for `routemap generate`
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Prefix for every <loc>, e.g. <https://example.com>
    #[arg(long, value_name = "URL", env = "ROUTEMAP_HOSTNAME")]
    pub hostname: Option<String>,

    /// Directory to write sitemap.xml into, relative to the root (default: public)
    #[arg(long = "out-dir", value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Change frequency for routes without an override
    #[arg(long = "default-changefreq", value_name = "FREQ", value_parser = parse_changefreq)]
    pub default_changefreq: Option<ChangeFrequency>,

    /// Priority for routes without an override (0.0 to 1.0)
    #[arg(long = "default-priority", value_name = "P")]
    pub default_priority: Option<f64>,

    /// Exit non-zero when the sitemap cannot be generated
    #[arg(long)]
    pub strict: bool,

    /// Output format for the generation summary
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Arguments for `routemap routes`
#[derive(Args, Clone, Debug)]
pub struct RoutesArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl Cli {
    /// Output format of the selected command.
    pub const fn format(&self) -> OutputFormat {
        match &self.command {
            Commands::Generate(args) => args.format,
            Commands::Routes(args) => args.format,
        }
    }
}

fn parse_changefreq(value: &str) -> Result<ChangeFrequency, String> {
    value.parse().map_err(|e: routemap_core::Error| e.to_string())
}
