//! Core data types shared by the manifest extractor, renderer and config layer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Change frequency hints written into `<changefreq>`.
///
/// These values indicate how frequently a page is likely to change,
/// though search engines may not follow these hints strictly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    /// The page changes every time it is accessed.
    Always,
    /// The page changes hourly.
    Hourly,
    /// The page changes daily.
    Daily,
    /// The page changes weekly.
    #[default]
    Weekly,
    /// The page changes monthly.
    Monthly,
    /// The page changes yearly.
    Yearly,
    /// The page is archived and will not change.
    Never,
}

impl ChangeFrequency {
    /// Lowercase protocol spelling, as it appears in the sitemap.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChangeFrequency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "always" => Ok(Self::Always),
            "hourly" => Ok(Self::Hourly),
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            "never" => Ok(Self::Never),
            _ => Err(Error::Config(format!("Invalid changefreq value: {s}"))),
        }
    }
}

/// Sparse per-route override record.
///
/// Any field left as `None` falls back to the global default at render time.
/// A priority of `0.0` is a real override, not "unset".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteConfig {
    /// Change frequency for this route.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changefreq: Option<ChangeFrequency>,
    /// Priority relative to other URLs on the site (0.0 to 1.0).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<f64>,
    /// Last modification date, written verbatim (conventionally `YYYY-MM-DD`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastmod: Option<String>,
}

impl RouteConfig {
    /// Set the change frequency using builder pattern.
    #[must_use]
    pub const fn with_changefreq(mut self, changefreq: ChangeFrequency) -> Self {
        self.changefreq = Some(changefreq);
        self
    }

    /// Set the priority using builder pattern.
    #[must_use]
    pub const fn with_priority(mut self, priority: f64) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set the last modification date using builder pattern.
    #[must_use]
    pub fn with_lastmod(mut self, lastmod: impl Into<String>) -> Self {
        self.lastmod = Some(lastmod.into());
        self
    }
}
