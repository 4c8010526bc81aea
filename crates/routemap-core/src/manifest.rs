//! Route manifest extraction.
//!
//! Generated route trees carry a comment block of the form
//!
//! ```text
//! /* ROUTE_MANIFEST_START
//! {
//!   "routes": {
//!     "__root__": { "children": ["/", "/about/"] },
//!     "/": { "filePath": "index.tsx" },
//!     "/about/": { "filePath": "about.tsx" }
//!   }
//! }
//! ROUTE_MANIFEST_END */
//! ```
//!
//! Only the keys of `routes` are consumed. Key order is preserved, so the
//! sitemap lists routes in the order the generator wrote them.
//!
//! ## Example
//!
//! ```rust
//! use routemap_core::manifest::extract_routes;
//!
//! let content = r#"ROUTE_MANIFEST_START
//! {"routes":{"/":{}, "/about/":{}, "__root__":{}}}
//! ROUTE_MANIFEST_END"#;
//!
//! assert_eq!(extract_routes(content), vec!["/", "/about"]);
//! ```

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, error, instrument};

use crate::{Error, Result};

/// Opening marker of the embedded manifest block.
pub const MANIFEST_START: &str = "ROUTE_MANIFEST_START";
/// Closing marker of the embedded manifest block.
pub const MANIFEST_END: &str = "ROUTE_MANIFEST_END";
/// Synthetic key the route generator uses for the layout root.
pub const ROOT_ROUTE_KEY: &str = "__root__";

/// Non-greedy match between the markers, across newlines.
///
/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static MANIFEST_BLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)ROUTE_MANIFEST_START(.*?)ROUTE_MANIFEST_END").unwrap());

#[derive(Deserialize)]
struct RawManifest {
    routes: Map<String, Value>,
}

/// A parsed route manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteManifest {
    keys: Vec<String>,
}

impl RouteManifest {
    /// Raw route keys in manifest order, `__root__` included.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Sitemap routes: keys minus `__root__`, normalized, in manifest order.
    ///
    /// Duplicates produced by normalization (`/a` and `/a/`) are kept.
    pub fn routes(&self) -> Vec<String> {
        self.keys
            .iter()
            .filter(|key| key.as_str() != ROOT_ROUTE_KEY)
            .map(|key| normalize_route(key))
            .collect()
    }
}

/// Strip one trailing slash, leaving the root route `/` untouched.
///
/// ```rust
/// use routemap_core::manifest::normalize_route;
///
/// assert_eq!(normalize_route("/"), "/");
/// assert_eq!(normalize_route("/about/"), "/about");
/// assert_eq!(normalize_route("/docs//"), "/docs/");
/// ```
pub fn normalize_route(key: &str) -> String {
    if key == "/" {
        return key.to_string();
    }
    key.strip_suffix('/').unwrap_or(key).to_string()
}

/// Locate and parse the manifest block in `content`.
///
/// Returns `Ok(None)` when the markers are absent and [`Error::Parse`] when
/// the block is present but is not JSON with an object-valued `routes` field.
#[instrument(skip(content), fields(content_len = content.len()))]
pub fn parse_manifest(content: &str) -> Result<Option<RouteManifest>> {
    let Some(captures) = MANIFEST_BLOCK_RE.captures(content) else {
        debug!("no route manifest markers found");
        return Ok(None);
    };
    let block = captures.get(1).map_or("", |m| m.as_str());

    let raw: RawManifest = serde_json::from_str(block)
        .map_err(|e| Error::Parse(format!("invalid route manifest: {e}")))?;

    let keys: Vec<String> = raw.routes.into_iter().map(|(key, _)| key).collect();
    debug!(route_keys = keys.len(), "parsed route manifest");
    Ok(Some(RouteManifest { keys }))
}

/// Extract sitemap routes from `content`, never failing.
///
/// Missing markers yield no routes. A malformed manifest is logged and also
/// yields no routes, so an empty sitemap still gets written.
pub fn extract_routes(content: &str) -> Vec<String> {
    match parse_manifest(content) {
        Ok(Some(manifest)) => manifest.routes(),
        Ok(None) => Vec::new(),
        Err(e) => {
            error!("Error parsing route manifest: {e}");
            Vec::new()
        },
    }
}
