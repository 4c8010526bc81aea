//! `routemap routes`: show what the manifest contains.

use anyhow::Result;
use routemap_core::probe::default_resolvers;
use routemap_core::{Error as CoreError, candidate_paths, find_first_readable, parse_manifest};
use tracing::{info, warn};

use crate::cli::RoutesArgs;
use crate::error::CliError;
use crate::output::print_routes;
use crate::utils::options::{project_root, resolve_route_tree};

/// Print the normalized routes of the project's route manifest.
///
/// A route tree without manifest markers prints nothing and succeeds.
///
/// # Errors
///
/// Returns [`CliError`] when no route tree is found or its manifest is malformed.
pub async fn execute(args: &RoutesArgs) -> Result<()> {
    let root = project_root(&args.project);
    let route_tree = resolve_route_tree(&args.project, &root)?;

    let candidates = candidate_paths(&route_tree, &root, default_resolvers());
    let Some(found) = find_first_readable(&candidates).await else {
        return Err(CliError::from(CoreError::ManifestNotFound { tried: candidates }).into());
    };
    info!("Found route tree at: {}", found.path.display());

    let routes = match parse_manifest(&found.content).map_err(CliError::from)? {
        Some(manifest) => manifest.routes(),
        None => {
            warn!(
                path = %found.path.display(),
                "route tree has no ROUTE_MANIFEST_START/END block"
            );
            Vec::new()
        },
    };

    print_routes(&routes, args.format)
}
