//! Route tree discovery.
//!
//! The generated route tree may sit at the configured path, under `src/`, or
//! relative to the project root when the build runs from elsewhere. Each
//! location is described by a [`CandidateResolver`]; the resolved paths are
//! tried in order and the first readable one wins.
//!
//! ## Probe Order
//!
//! For `route_tree_path = "app/routeTree.gen.ts"` and root `/work/site`:
//!
//! 1. `app/routeTree.gen.ts`
//! 2. `src/app/routeTree.gen.ts`
//! 3. `/work/site/app/routeTree.gen.ts`
//! 4. `/work/site/src/app/routeTree.gen.ts`
//!
//! Candidates 1 and 2 are relative to the process working directory and are
//! only probed when the root *is* the working directory. With any other root
//! a route tree lying around in the working directory must not win over the
//! project's own.

use std::path::{Path, PathBuf};

use tracing::debug;

/// Conventional source directory tried as a prefix.
pub const SOURCE_DIR: &str = "src";

/// One way of turning the configured route tree path into a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateResolver {
    /// The configured path, unchanged.
    AsConfigured,
    /// The configured path under `src/`.
    UnderSourceDir,
    /// The configured path resolved against the project root.
    WorkingDir,
    /// The configured path under `src/`, resolved against the project root.
    WorkingDirUnderSourceDir,
}

impl CandidateResolver {
    /// Resolve `path` for a project rooted at `root`.
    pub fn resolve(self, path: &Path, root: &Path) -> PathBuf {
        match self {
            Self::AsConfigured => path.to_path_buf(),
            Self::UnderSourceDir => Path::new(SOURCE_DIR).join(path),
            Self::WorkingDir => root.join(path),
            Self::WorkingDirUnderSourceDir => root.join(SOURCE_DIR).join(path),
        }
    }

    /// Whether the resolved path hangs off the project root rather than the
    /// process working directory.
    pub const fn is_root_relative(self) -> bool {
        matches!(self, Self::WorkingDir | Self::WorkingDirUnderSourceDir)
    }
}

/// The standard resolver list, in probing order.
pub const fn default_resolvers() -> &'static [CandidateResolver] {
    &[
        CandidateResolver::AsConfigured,
        CandidateResolver::UnderSourceDir,
        CandidateResolver::WorkingDir,
        CandidateResolver::WorkingDirUnderSourceDir,
    ]
}

/// Expand `path` into candidate locations, one per resolver, in order.
///
/// Working-directory resolvers are skipped unless `root` is the process
/// working directory. Candidates are not deduplicated; when `root` is the
/// working directory the absolute variants point at the same files as the
/// relative ones.
pub fn candidate_paths(path: &Path, root: &Path, resolvers: &[CandidateResolver]) -> Vec<PathBuf> {
    let root_is_cwd = is_working_dir(root);
    resolvers
        .iter()
        .filter(|r| root_is_cwd || r.is_root_relative())
        .map(|r| r.resolve(path, root))
        .collect()
}

/// Whether `root` names the process working directory.
fn is_working_dir(root: &Path) -> bool {
    let Ok(cwd) = std::env::current_dir() else {
        return false;
    };
    if root.as_os_str().is_empty() || root == Path::new(".") || root == cwd {
        return true;
    }
    match (std::fs::canonicalize(root), std::fs::canonicalize(&cwd)) {
        (Ok(root), Ok(cwd)) => root == cwd,
        _ => false,
    }
}

/// A route tree that was found and read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundManifest {
    /// The candidate that succeeded.
    pub path: PathBuf,
    /// Its full text.
    pub content: String,
}

/// Read the first candidate that exists and is valid UTF-8 text.
///
/// Returns `None` when every candidate fails to read.
pub async fn find_first_readable(candidates: &[PathBuf]) -> Option<FoundManifest> {
    for path in candidates {
        match tokio::fs::read_to_string(path).await {
            Ok(content) => {
                return Some(FoundManifest {
                    path: path.clone(),
                    content,
                });
            },
            Err(e) => debug!(path = %path.display(), "route tree candidate unreadable: {e}"),
        }
    }
    None
}
