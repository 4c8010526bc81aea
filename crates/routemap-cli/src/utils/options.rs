//! Resolve [`SitemapOptions`] from every configuration layer.
//!
//! Built-in defaults < `routemap.toml` < environment < flags. Environment
//! variables reach us through clap's `env = ...` attributes, so by the time
//! we get here an env value and a flag value look the same.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use routemap_core::{CONFIG_FILE_NAME, DEFAULT_ROUTE_TREE_PATH, Error as CoreError, SitemapOptions};
use serde::Deserialize;
use tracing::debug;

use crate::cli::{GenerateArgs, ProjectArgs};
use crate::error::CliError;

/// Project root from `--root`, falling back to the working directory.
pub fn project_root(project: &ProjectArgs) -> PathBuf {
    project.root.clone().unwrap_or_else(|| {
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    })
}

/// Config file to read: `--config` if given, else `<root>/routemap.toml` if it exists.
pub fn config_path(project: &ProjectArgs, root: &Path) -> Option<PathBuf> {
    if let Some(path) = &project.config {
        return Some(path.clone());
    }
    let candidate = root.join(CONFIG_FILE_NAME);
    candidate.is_file().then_some(candidate)
}

/// Build validated options for `routemap generate`.
///
/// # Errors
///
/// Returns a usage [`CliError`] when no hostname is available from any layer,
/// when the config file cannot be read or parsed, or when a value is out of range.
pub fn resolve_options(args: &GenerateArgs, root: &Path) -> Result<SitemapOptions> {
    let hostname = args.hostname.as_deref();
    let mut options = match config_path(&args.project, root) {
        Some(path) => {
            debug!("Loading config from {}", path.display());
            SitemapOptions::load_with_hostname(&path, hostname).map_err(CliError::from)?
        },
        None => {
            let hostname = hostname.ok_or_else(|| {
                CliError::usage(anyhow!(
                    "missing required hostname: pass --hostname or set ROUTEMAP_HOSTNAME \
                     (or add `hostname` to {CONFIG_FILE_NAME})"
                ))
            })?;
            SitemapOptions::new(hostname)
        },
    };

    if let Some(route_tree) = &args.project.route_tree {
        options = options.with_route_tree_path(route_tree);
    }
    if let Some(changefreq) = args.default_changefreq {
        options = options.with_default_changefreq(changefreq);
    }
    if let Some(priority) = args.default_priority {
        options = options.with_default_priority(priority);
    }

    options.validate().map_err(CliError::from)?;
    Ok(options)
}

/// The slice of `routemap.toml` that `routemap routes` cares about.
#[derive(Debug, Default, Deserialize)]
struct RouteTreeSetting {
    #[serde(default, alias = "routeTreePath")]
    route_tree_path: Option<PathBuf>,
}

/// Route tree path for `routemap routes`, which needs no hostname.
///
/// # Errors
///
/// Returns a usage [`CliError`] if the config file exists but cannot be read or parsed.
pub fn resolve_route_tree(project: &ProjectArgs, root: &Path) -> Result<PathBuf> {
    if let Some(route_tree) = &project.route_tree {
        return Ok(route_tree.clone());
    }

    if let Some(path) = config_path(project, root) {
        let content = fs::read_to_string(&path).map_err(|e| {
            CliError::from(CoreError::Config(format!(
                "Failed to read config {}: {e}",
                path.display()
            )))
        })?;
        let setting: RouteTreeSetting = toml::from_str(&content).map_err(|e| {
            CliError::from(CoreError::Config(format!("Failed to parse config: {e}")))
        })?;
        if let Some(route_tree) = setting.route_tree_path {
            return Ok(route_tree);
        }
    }

    Ok(PathBuf::from(DEFAULT_ROUTE_TREE_PATH))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use crate::error::{ErrorCategory, exit_code_from_error};
    use clap::Parser;
    use routemap_core::ChangeFrequency;
    use tempfile::TempDir;

    fn generate_args(extra: &[&str]) -> GenerateArgs {
        let mut argv = vec!["routemap", "generate"];
        argv.extend_from_slice(extra);
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Generate(args) => args,
            Commands::Routes(_) => panic!("expected generate"),
        }
    }

    #[test]
    fn test_hostname_flag_without_config() {
        let dir = TempDir::new().unwrap();
        let args = generate_args(&["--hostname", "https://example.com"]);

        let options = resolve_options(&args, dir.path()).unwrap();
        assert_eq!(options, SitemapOptions::new("https://example.com"));
    }

    #[test]
    fn test_missing_hostname_is_usage_error() {
        let dir = TempDir::new().unwrap();
        let args = GenerateArgs {
            hostname: None,
            ..generate_args(&[])
        };

        let err = resolve_options(&args, dir.path()).unwrap_err();
        assert_eq!(exit_code_from_error(&err), ErrorCategory::Usage.exit_code());
    }

    #[test]
    fn test_config_file_in_root_is_picked_up() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "hostname = \"https://site.example\"\ndefault_priority = 0.3\n",
        )
        .unwrap();
        let args = GenerateArgs {
            hostname: None,
            ..generate_args(&[])
        };

        let options = resolve_options(&args, dir.path()).unwrap();
        assert_eq!(options.hostname, "https://site.example");
        assert!((options.default_priority - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "hostname = \"https://site.example\"\n\
             route_tree_path = \"app/one.gen.ts\"\n\
             default_changefreq = \"monthly\"\n",
        )
        .unwrap();
        let args = generate_args(&[
            "--hostname",
            "https://override.example",
            "--route-tree",
            "app/two.gen.ts",
            "--default-changefreq",
            "hourly",
            "--default-priority",
            "0.0",
        ]);

        let options = resolve_options(&args, dir.path()).unwrap();
        assert_eq!(options.hostname, "https://override.example");
        assert_eq!(options.route_tree_path, PathBuf::from("app/two.gen.ts"));
        assert_eq!(options.default_changefreq, ChangeFrequency::Hourly);
        assert!(options.default_priority.abs() < f64::EPSILON);
    }

    #[test]
    fn test_out_of_range_priority_flag_is_usage_error() {
        let dir = TempDir::new().unwrap();
        let args = generate_args(&["--hostname", "https://example.com", "--default-priority", "2"]);

        let err = resolve_options(&args, dir.path()).unwrap_err();
        assert_eq!(exit_code_from_error(&err), 2);
    }

    #[test]
    fn test_route_tree_from_config_without_hostname() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "routeTreePath = \"src/routeTree.gen.ts\"\n",
        )
        .unwrap();
        let path = resolve_route_tree(&ProjectArgs::default(), dir.path()).unwrap();
        assert_eq!(path, PathBuf::from("src/routeTree.gen.ts"));
    }

    #[test]
    fn test_route_tree_defaults() {
        let dir = TempDir::new().unwrap();
        let path = resolve_route_tree(&ProjectArgs::default(), dir.path()).unwrap();
        assert_eq!(path, PathBuf::from(DEFAULT_ROUTE_TREE_PATH));
    }
}
