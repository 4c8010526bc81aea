//! Sitemap configuration.
//!
//! [`SitemapOptions`] is built once (from defaults, an optional TOML file and
//! command-line overrides) and then passed by reference to the renderer and
//! the generator. Nothing mutates it after construction.
//!
//! ## Example Configuration File
//!
//! ```toml
//! hostname = "https://example.com"
//! route_tree_path = "app/routeTree.gen.ts"
//! default_changefreq = "weekly"
//! default_priority = 0.5
//!
//! [routes."/about"]
//! changefreq = "daily"
//! priority = 0.9
//!
//! [routes."/legal"]
//! lastmod = "2024-01-15"
//! ```
//!
//! The camelCase keys `routeTreePath`, `defaultChangefreq` and
//! `defaultPriority` are accepted as aliases.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::{ChangeFrequency, RouteConfig};
use crate::{Error, Result};

/// Conventional location of the generated route tree.
pub const DEFAULT_ROUTE_TREE_PATH: &str = "app/routeTree.gen.ts";

/// Priority used when neither the route nor the config sets one.
pub const DEFAULT_PRIORITY: f64 = 0.5;

/// Conventional name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "routemap.toml";

/// Immutable sitemap configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SitemapOptions {
    /// Prefix for every `<loc>`, concatenated verbatim with the route.
    pub hostname: String,

    /// Where the generated route tree lives, relative to the project root.
    #[serde(default = "default_route_tree_path", alias = "routeTreePath")]
    pub route_tree_path: PathBuf,

    /// Per-route metadata overrides, keyed by normalized route.
    #[serde(default)]
    pub routes: BTreeMap<String, RouteConfig>,

    /// Fallback change frequency.
    #[serde(default, alias = "defaultChangefreq")]
    pub default_changefreq: ChangeFrequency,

    /// Fallback priority.
    #[serde(default = "default_priority", alias = "defaultPriority")]
    pub default_priority: f64,
}

fn default_route_tree_path() -> PathBuf {
    PathBuf::from(DEFAULT_ROUTE_TREE_PATH)
}

const fn default_priority() -> f64 {
    DEFAULT_PRIORITY
}

impl SitemapOptions {
    /// Options for `hostname` with every other field at its default.
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            route_tree_path: default_route_tree_path(),
            routes: BTreeMap::new(),
            default_changefreq: ChangeFrequency::default(),
            default_priority: DEFAULT_PRIORITY,
        }
    }

    /// Set the route tree path using builder pattern.
    #[must_use]
    pub fn with_route_tree_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.route_tree_path = path.into();
        self
    }

    /// Add or replace the override for one route.
    #[must_use]
    pub fn with_route(mut self, route: impl Into<String>, config: RouteConfig) -> Self {
        self.routes.insert(route.into(), config);
        self
    }

    /// Set the fallback change frequency.
    #[must_use]
    pub const fn with_default_changefreq(mut self, changefreq: ChangeFrequency) -> Self {
        self.default_changefreq = changefreq;
        self
    }

    /// Set the fallback priority.
    #[must_use]
    pub const fn with_default_priority(mut self, priority: f64) -> Self {
        self.default_priority = priority;
        self
    }

    /// Look up the override record for a route, if any.
    pub fn route_config(&self, route: &str) -> Option<&RouteConfig> {
        self.routes.get(route)
    }

    /// Load options from a TOML file.
    ///
    /// The result is validated before it is returned.
    pub fn load(path: &Path) -> Result<Self> {
        Self::load_with_hostname(path, None)
    }

    /// Load options from a TOML file, letting `hostname` stand in for (or
    /// replace) the file's own `hostname` key.
    pub fn load_with_hostname(path: &Path, hostname: Option<&str>) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read config {}: {e}", path.display()))
        })?;
        Self::parse_toml(&content, hostname)
    }

    /// Parse and validate options from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        Self::parse_toml(content, None)
    }

    fn parse_toml(content: &str, hostname: Option<&str>) -> Result<Self> {
        let mut table: toml::Table = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {e}")))?;
        if let Some(hostname) = hostname {
            table.insert("hostname".into(), toml::Value::String(hostname.into()));
        }
        let options: Self = toml::Value::Table(table)
            .try_into()
            .map_err(|e| Error::Config(format!("Failed to parse config: {e}")))?;
        options.validate()?;
        Ok(options)
    }

    /// Check the invariants the renderer relies on.
    ///
    /// - `hostname` is not blank
    /// - every priority is a finite number in `0.0..=1.0`
    pub fn validate(&self) -> Result<()> {
        if self.hostname.trim().is_empty() {
            return Err(Error::Config("hostname must not be empty".into()));
        }

        check_priority("default_priority", self.default_priority)?;
        for (route, config) in &self.routes {
            if let Some(priority) = config.priority {
                check_priority(&format!("routes.\"{route}\".priority"), priority)?;
            }
        }
        Ok(())
    }
}

fn check_priority(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::Config(format!(
            "{field} must be between 0.0 and 1.0, got {value}"
        )))
    }
}
