//! Sitemap XML rendering.
//!
//! Rendering is a pure function of the route list, the options and a date.
//! The caller supplies "today" so a whole document shares one `lastmod`
//! fallback and repeated renders are byte-identical.
//!
//! ## Output
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/about</loc>
//!     <lastmod>2024-01-15</lastmod>
//!     <changefreq>daily</changefreq>
//!     <priority>0.9</priority>
//!   </url>
//! </urlset>
//! ```
//!
//! `loc` is `hostname + route` verbatim. Nothing is escaped or encoded.
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use routemap_core::{SitemapOptions, render_sitemap};
//!
//! let options = SitemapOptions::new("https://example.com");
//! let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
//! let xml = render_sitemap(&["/".to_string()], &options, today);
//!
//! assert!(xml.contains("<loc>https://example.com/</loc>"));
//! assert!(xml.contains("<lastmod>2024-01-15</lastmod>"));
//! ```

use std::fmt::Write as _;

use chrono::{NaiveDate, Utc};
use serde::Serialize;
use tracing::instrument;

use crate::config::SitemapOptions;
use crate::types::ChangeFrequency;

/// Namespace of the sitemaps.org 0.9 schema.
pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// `lastmod` date format.
pub const LASTMOD_FORMAT: &str = "%Y-%m-%d";

/// One resolved `<url>` entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SitemapEntry {
    /// Absolute location of the page.
    pub loc: String,
    /// Last modification date.
    pub lastmod: String,
    /// How frequently the page changes.
    pub changefreq: ChangeFrequency,
    /// Priority relative to other URLs on the site.
    pub priority: f64,
}

/// An ordered list of resolved entries, ready to serialize.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SitemapDocument {
    entries: Vec<SitemapEntry>,
}

impl SitemapDocument {
    /// Resolve every route against its override record and the defaults.
    ///
    /// Routes keep their order; duplicates become duplicate entries.
    pub fn build(routes: &[String], options: &SitemapOptions, today: NaiveDate) -> Self {
        let today = today.format(LASTMOD_FORMAT).to_string();
        let entries = routes
            .iter()
            .map(|route| {
                let overrides = options.route_config(route);
                SitemapEntry {
                    loc: format!("{}{route}", options.hostname),
                    lastmod: overrides
                        .and_then(|c| c.lastmod.clone())
                        .unwrap_or_else(|| today.clone()),
                    changefreq: overrides
                        .and_then(|c| c.changefreq)
                        .unwrap_or(options.default_changefreq),
                    priority: overrides
                        .and_then(|c| c.priority)
                        .unwrap_or(options.default_priority),
                }
            })
            .collect();
        Self { entries }
    }

    /// Resolved entries in output order.
    pub fn entries(&self) -> &[SitemapEntry] {
        &self.entries
    }

    /// Number of `<url>` entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the document has no `<url>` entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize to sitemap XML.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(128 + self.entries.len() * 192);
        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        let _ = writeln!(xml, "<urlset xmlns=\"{SITEMAP_NAMESPACE}\">");
        for entry in &self.entries {
            let _ = write!(
                xml,
                "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    <changefreq>{}</changefreq>\n    <priority>{}</priority>\n  </url>\n",
                entry.loc, entry.lastmod, entry.changefreq, entry.priority
            );
        }
        xml.push_str("</urlset>\n");
        xml
    }
}

/// Build and serialize a sitemap in one step.
#[instrument(skip(routes, options), fields(routes = routes.len(), hostname = %options.hostname))]
pub fn render_sitemap(routes: &[String], options: &SitemapOptions, today: NaiveDate) -> String {
    SitemapDocument::build(routes, options, today).to_xml()
}

/// Current UTC date, the `lastmod` fallback for one generation.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}
