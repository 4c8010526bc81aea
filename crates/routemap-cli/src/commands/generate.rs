//! `routemap generate`: the end-of-build step.

use std::io::{self, Write};

use anyhow::Result;
use routemap_core::{GenerateReport, SitemapGenerator};
use tracing::{error, warn};

use crate::cli::GenerateArgs;
use crate::error::CliError;
use crate::output::write_report;
use crate::utils::options::{project_root, resolve_options};

/// Generate `sitemap.xml`.
///
/// Without `--strict`, every failure is logged and the command still
/// succeeds, so a build script chaining `routemap generate` keeps going.
/// That includes failing to print the summary once the sitemap is written.
///
/// # Errors
///
/// Only with `--strict`: configuration, discovery and write failures are
/// returned as categorized [`CliError`]s.
pub async fn execute(args: &GenerateArgs, quiet: bool) -> Result<()> {
    let report = run(args).await?;
    finish(&mut io::stdout().lock(), report.as_ref(), args, quiet)
}

async fn run(args: &GenerateArgs) -> Result<Option<GenerateReport>> {
    let root = project_root(&args.project);

    let options = match resolve_options(args, &root) {
        Ok(options) => options,
        Err(e) if args.strict => return Err(e),
        Err(e) => {
            error!("Error generating sitemap: {e}");
            return Ok(None);
        },
    };

    let mut generator = SitemapGenerator::new(options).with_root(&root);
    if let Some(out_dir) = &args.out_dir {
        generator = generator.with_output_dir(out_dir);
    }

    if args.strict {
        let report = generator.generate().await.map_err(CliError::from)?;
        Ok(Some(report))
    } else {
        Ok(generator.run_close_hook().await)
    }
}

/// Report the outcome; output failures only count under `--strict`.
fn finish<W: Write>(
    out: &mut W,
    report: Option<&GenerateReport>,
    args: &GenerateArgs,
    quiet: bool,
) -> Result<()> {
    match write_report(out, report, args.format, quiet) {
        Err(e) if !args.strict => {
            warn!("Failed to print generation summary: {e}");
            Ok(())
        },
        other => other,
    }
}
