//! End-of-build sitemap generation.
//!
//! [`SitemapGenerator`] ties the pieces together: probe for the route tree,
//! extract routes, render with a single `today`, make sure the output
//! directory exists, and overwrite `sitemap.xml`.
//!
//! Two entry points are offered:
//!
//! - [`SitemapGenerator::generate`] returns typed errors.
//! - [`SitemapGenerator::run_close_hook`] logs every failure and returns
//!   `None` instead, so the surrounding build never fails because of the
//!   sitemap.
//!
//! ## Example
//!
//! ```rust,no_run
//! use routemap_core::{SitemapGenerator, SitemapOptions};
//!
//! # async fn example() {
//! let options = SitemapOptions::new("https://example.com");
//! if let Some(report) = SitemapGenerator::new(options).run_close_hook().await {
//!     println!("{} routes -> {}", report.routes, report.output_path.display());
//! }
//! # }
//! ```

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{error, info, warn};

use crate::config::SitemapOptions;
use crate::manifest::parse_manifest;
use crate::probe::{CandidateResolver, candidate_paths, default_resolvers, find_first_readable};
use crate::sitemap::{render_sitemap, today};
use crate::{Error, Result};

/// Fixed output file name.
pub const SITEMAP_FILE_NAME: &str = "sitemap.xml";

/// Output directory, relative to the project root, unless overridden.
pub const DEFAULT_OUTPUT_DIR: &str = "public";

/// What was found inside the route tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ManifestStatus {
    /// Manifest block parsed.
    Parsed,
    /// No manifest markers in the file.
    Missing,
    /// Markers present but the block could not be parsed.
    Malformed,
}

/// Summary of one successful generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReport {
    /// Route tree that was read.
    pub manifest_path: PathBuf,
    /// State of the manifest block inside it.
    pub manifest: ManifestStatus,
    /// Number of `<url>` entries written.
    pub routes: usize,
    /// Sitemap file that was written.
    pub output_path: PathBuf,
}

/// Generates `sitemap.xml` for one project.
#[derive(Debug, Clone)]
pub struct SitemapGenerator {
    options: SitemapOptions,
    root: PathBuf,
    output_dir: PathBuf,
    resolvers: Vec<CandidateResolver>,
}

impl SitemapGenerator {
    /// Generator rooted at the process working directory, writing to `public/`.
    pub fn new(options: SitemapOptions) -> Self {
        let root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            options,
            root,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            resolvers: default_resolvers().to_vec(),
        }
    }

    /// Set the project root used for root-relative candidates and output.
    #[must_use]
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Set the output directory. Relative paths are resolved against the root.
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Replace the candidate resolver list.
    #[must_use]
    pub fn with_resolvers(mut self, resolvers: Vec<CandidateResolver>) -> Self {
        self.resolvers = resolvers;
        self
    }

    /// The options this generator renders with.
    pub const fn options(&self) -> &SitemapOptions {
        &self.options
    }

    /// Route tree locations, in probing order.
    pub fn candidates(&self) -> Vec<PathBuf> {
        candidate_paths(&self.options.route_tree_path, &self.root, &self.resolvers)
    }

    /// Directory the sitemap is written into.
    pub fn output_dir(&self) -> PathBuf {
        self.root.join(&self.output_dir)
    }

    /// Full path of the sitemap file.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir().join(SITEMAP_FILE_NAME)
    }

    /// Generate the sitemap, dating unspecified entries with today's UTC date.
    pub async fn generate(&self) -> Result<GenerateReport> {
        self.generate_on(today()).await
    }

    /// Generate the sitemap with an explicit `lastmod` fallback date.
    pub async fn generate_on(&self, date: NaiveDate) -> Result<GenerateReport> {
        let candidates = self.candidates();
        let Some(found) = find_first_readable(&candidates).await else {
            return Err(Error::ManifestNotFound { tried: candidates });
        };
        info!("Found route tree at: {}", found.path.display());

        let (manifest, routes) = match parse_manifest(&found.content) {
            Ok(Some(manifest)) => (ManifestStatus::Parsed, manifest.routes()),
            Ok(None) => {
                warn!(
                    path = %found.path.display(),
                    "route tree has no ROUTE_MANIFEST_START/END block; writing empty sitemap"
                );
                (ManifestStatus::Missing, Vec::new())
            },
            Err(e) => {
                error!("Error parsing route manifest: {e}");
                (ManifestStatus::Malformed, Vec::new())
            },
        };

        let xml = render_sitemap(&routes, &self.options, date);
        let output_path = self.write_sitemap(&xml).await?;

        info!(routes = routes.len(), "✓ Sitemap generated successfully");
        Ok(GenerateReport {
            manifest_path: found.path,
            manifest,
            routes: routes.len(),
            output_path,
        })
    }

    /// Run as the final step of a build: failures are logged, never returned.
    pub async fn run_close_hook(&self) -> Option<GenerateReport> {
        match self.generate().await {
            Ok(report) => Some(report),
            Err(e) => {
                error!(category = e.category(), "Error generating sitemap: {e}");
                None
            },
        }
    }

    async fn write_sitemap(&self, xml: &str) -> Result<PathBuf> {
        let dir = self.output_dir();
        ensure_dir(&dir).await?;
        let path = dir.join(SITEMAP_FILE_NAME);
        tokio::fs::write(&path, xml).await?;
        Ok(path)
    }
}

/// Create `dir` and its parents, tolerating an existing directory.
async fn ensure_dir(dir: &Path) -> Result<()> {
    if tokio::fs::metadata(dir).await.is_ok_and(|m| m.is_dir()) {
        return Ok(());
    }
    tokio::fs::create_dir_all(dir).await?;
    Ok(())
}
