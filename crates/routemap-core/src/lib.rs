//! # routemap-core
//!
//! Core functionality for routemap: turn a generated route tree into a
//! `sitemap.xml` at the end of a web application's build.
//!
//! ## Architecture
//!
//! - **Manifest extraction** ([`manifest`]): find the
//!   `ROUTE_MANIFEST_START`/`ROUTE_MANIFEST_END` block and list its routes
//! - **Rendering** ([`sitemap`]): resolve per-route overrides against defaults
//!   and serialize sitemaps.org XML
//! - **Configuration** ([`config`]): immutable [`SitemapOptions`], loadable
//!   from TOML
//! - **Discovery** ([`probe`]): ordered candidate paths for the route tree
//! - **Generation** ([`generate`]): read, extract, render, write
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use routemap_core::{RouteConfig, SitemapOptions, extract_routes, render_sitemap};
//!
//! let content = r#"/* ROUTE_MANIFEST_START
//! {"routes":{"__root__":{},"/":{},"/about/":{}}}
//! ROUTE_MANIFEST_END */"#;
//!
//! let routes = extract_routes(content);
//! let options = SitemapOptions::new("https://example.com")
//!     .with_route("/about", RouteConfig::default().with_priority(0.9));
//! let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
//!
//! let xml = render_sitemap(&routes, &options, date);
//! assert!(xml.contains("<loc>https://example.com/about</loc>"));
//! assert!(xml.contains("<priority>0.9</priority>"));
//! ```

/// Sitemap configuration and TOML loading
pub mod config;
/// Error types and result aliases
pub mod error;
/// End-of-build orchestration
pub mod generate;
/// Route manifest extraction
pub mod manifest;
/// Route tree discovery
pub mod probe;
/// Sitemap XML rendering
pub mod sitemap;
/// Core data types
pub mod types;

pub use config::{CONFIG_FILE_NAME, DEFAULT_PRIORITY, DEFAULT_ROUTE_TREE_PATH, SitemapOptions};
pub use error::{Error, Result};
pub use generate::{
    DEFAULT_OUTPUT_DIR, GenerateReport, ManifestStatus, SITEMAP_FILE_NAME, SitemapGenerator,
};
pub use manifest::{RouteManifest, extract_routes, normalize_route, parse_manifest};
pub use probe::{CandidateResolver, FoundManifest, candidate_paths, find_first_readable};
pub use sitemap::{SitemapDocument, SitemapEntry, render_sitemap, today};
pub use types::{ChangeFrequency, RouteConfig};
