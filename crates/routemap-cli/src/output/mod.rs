//! # Output Formatting
//!
//! Commands print either human-readable text or JSON for scripts:
//!
//! ```bash
//! routemap routes
//! routemap routes --format json | jq length
//! routemap generate --hostname https://example.com --format json
//! ```
//!
//! Diagnostics go to stderr through `tracing`; only results go to stdout.

use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;
use routemap_core::GenerateReport;

/// Output format options supported by the CLI
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    #[default]
    Text,
    /// Single JSON document
    Json,
}

/// Print a route list, one per line or as a JSON array.
pub fn print_routes(routes: &[String], format: OutputFormat) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Text => {
            for route in routes {
                writeln!(out, "{route}")?;
            }
        },
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, routes)?;
            writeln!(out)?;
        },
    }
    Ok(())
}

/// Write the outcome of a generation run.
///
/// `None` means nothing was generated: text mode stays silent (the failure
/// was already logged) and JSON mode writes `null` so readers always get a
/// document.
pub fn write_report<W: Write>(
    out: &mut W,
    report: Option<&GenerateReport>,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    match (format, report) {
        (OutputFormat::Text, None) => {},
        (OutputFormat::Text, Some(_)) if quiet => {},
        (OutputFormat::Text, Some(report)) => {
            writeln!(
                out,
                "{} Sitemap generated: {} ({} {} from {})",
                "✓".green(),
                report.output_path.display(),
                report.routes,
                if report.routes == 1 { "route" } else { "routes" },
                report.manifest_path.display()
            )?;
        },
        (OutputFormat::Json, report) => {
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        },
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use routemap_core::ManifestStatus;
    use std::path::PathBuf;

    fn report() -> GenerateReport {
        GenerateReport {
            manifest_path: PathBuf::from("app/routeTree.gen.ts"),
            manifest: ManifestStatus::Parsed,
            routes: 1,
            output_path: PathBuf::from("public/sitemap.xml"),
        }
    }

    fn written(report: Option<&GenerateReport>, format: OutputFormat, quiet: bool) -> String {
        let mut out = Vec::new();
        write_report(&mut out, report, format, quiet).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_summary_uses_singular_route() {
        colored::control::set_override(false);
        let text = written(Some(&report()), OutputFormat::Text, false);
        assert_eq!(
            text,
            "✓ Sitemap generated: public/sitemap.xml (1 route from app/routeTree.gen.ts)\n"
        );
    }

    #[test]
    fn test_quiet_text_and_missing_report_are_silent() {
        assert!(written(Some(&report()), OutputFormat::Text, true).is_empty());
        assert!(written(None, OutputFormat::Text, false).is_empty());
    }

    #[test]
    fn test_json_report_fields() {
        let json: serde_json::Value =
            serde_json::from_str(&written(Some(&report()), OutputFormat::Json, true)).unwrap();
        assert_eq!(json["manifestPath"], "app/routeTree.gen.ts");
        assert_eq!(json["manifest"], "parsed");
        assert_eq!(json["routes"], 1);
    }

    #[test]
    fn test_json_without_report_is_null() {
        assert_eq!(written(None, OutputFormat::Json, false), "null\n");
    }
}
