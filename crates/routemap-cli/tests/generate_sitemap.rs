#![allow(clippy::unwrap_used)]

mod common;

use common::{MANIFEST, project, project_with, routemap_cmd};
use predicates::prelude::*;
use std::fs;

#[test]
fn generate_writes_sitemap_into_public() {
    let dir = project();

    routemap_cmd(dir.path())
        .args(["generate", "--hostname", "https://example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sitemap generated"))
        .stdout(predicate::str::contains("3 routes"));

    let xml = fs::read_to_string(dir.path().join("public/sitemap.xml")).unwrap();
    assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert!(xml.contains(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#));
    assert!(xml.contains("<loc>https://example.com/</loc>"));
    assert!(xml.contains("<loc>https://example.com/about</loc>"));
    assert!(xml.contains("<loc>https://example.com/posts/$postId</loc>"));
    assert!(xml.contains("<changefreq>weekly</changefreq>"));
    assert!(xml.contains("<priority>0.5</priority>"));
    assert!(!xml.contains("__root__"));
}

#[test]
fn hostname_from_environment() {
    let dir = project();

    routemap_cmd(dir.path())
        .env("ROUTEMAP_HOSTNAME", "https://env.example")
        .args(["generate", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let xml = fs::read_to_string(dir.path().join("public/sitemap.xml")).unwrap();
    assert!(xml.contains("<loc>https://env.example/about</loc>"));
}

#[test]
fn config_file_overrides_apply() {
    let dir = project();
    fs::write(
        dir.path().join("routemap.toml"),
        r#"
hostname = "https://example.com"
default_changefreq = "monthly"

[routes."/about"]
changefreq = "daily"
priority = 0.9
lastmod = "2024-01-15"

[routes."/posts/$postId"]
priority = 0.0
"#,
    )
    .unwrap();

    routemap_cmd(dir.path()).arg("generate").assert().success();

    let xml = fs::read_to_string(dir.path().join("public/sitemap.xml")).unwrap();
    assert!(xml.contains(
        "    <loc>https://example.com/about</loc>\n    <lastmod>2024-01-15</lastmod>\n    \
         <changefreq>daily</changefreq>\n    <priority>0.9</priority>"
    ));
    assert!(xml.contains("<changefreq>monthly</changefreq>"));
    assert!(xml.contains("<priority>0</priority>"));
}

#[test]
fn custom_route_tree_and_out_dir() {
    let dir = project_with(Some("src/routeTree.gen.ts"), MANIFEST);

    routemap_cmd(dir.path())
        .args([
            "generate",
            "--hostname",
            "https://example.com",
            "--route-tree",
            "routeTree.gen.ts",
            "--out-dir",
            "dist",
        ])
        .assert()
        .success();

    assert!(dir.path().join("dist/sitemap.xml").exists());
    assert!(!dir.path().join("public").exists());
}

#[test]
fn missing_route_tree_does_not_fail_the_build() {
    let dir = project_with(None, "");

    routemap_cmd(dir.path())
        .args(["generate", "--hostname", "https://example.com"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Could not find route tree file"));

    assert!(!dir.path().join("public/sitemap.xml").exists());
}

#[test]
fn missing_route_tree_with_strict_exits_not_found() {
    let dir = project_with(None, "");

    routemap_cmd(dir.path())
        .args(["generate", "--strict", "--hostname", "https://example.com"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("app/routeTree.gen.ts"));
}

#[test]
fn missing_hostname_is_usage_error_only_when_strict() {
    let dir = project();

    routemap_cmd(dir.path()).arg("generate").assert().success();
    assert!(!dir.path().join("public/sitemap.xml").exists());

    routemap_cmd(dir.path())
        .args(["generate", "--strict"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("hostname"));
}

#[test]
fn malformed_manifest_writes_empty_sitemap() {
    let dir = project_with(
        Some("app/routeTree.gen.ts"),
        "/* ROUTE_MANIFEST_START {\"routes\": ROUTE_MANIFEST_END */",
    );

    routemap_cmd(dir.path())
        .args(["generate", "--strict", "--hostname", "https://example.com"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Error parsing route manifest"));

    let xml = fs::read_to_string(dir.path().join("public/sitemap.xml")).unwrap();
    assert!(xml.contains("<urlset"));
    assert!(!xml.contains("<url>"));
}

#[test]
fn json_report() {
    let dir = project();

    let output = routemap_cmd(dir.path())
        .args(["generate", "--hostname", "https://example.com", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["routes"], 3);
    assert_eq!(report["manifest"], "parsed");
    assert!(
        report["outputPath"]
            .as_str()
            .unwrap()
            .ends_with("sitemap.xml")
    );
}

#[test]
fn root_flag_reads_the_project_route_tree() {
    let cwd = project_with(
        Some("app/routeTree.gen.ts"),
        r#"ROUTE_MANIFEST_START {"routes":{"/wrong-project":{}}} ROUTE_MANIFEST_END"#,
    );
    let site = project_with(
        Some("app/routeTree.gen.ts"),
        r#"ROUTE_MANIFEST_START {"routes":{"/site-page":{}}} ROUTE_MANIFEST_END"#,
    );

    routemap_cmd(cwd.path())
        .args(["generate", "--hostname", "https://example.com", "--root"])
        .arg(site.path())
        .assert()
        .success();

    let xml = fs::read_to_string(site.path().join("public/sitemap.xml")).unwrap();
    assert!(xml.contains("<loc>https://example.com/site-page</loc>"));
    assert!(!xml.contains("/wrong-project"));
    assert!(!cwd.path().join("public").exists());
}

#[test]
fn root_flag_without_project_route_tree_is_not_found() {
    let cwd = project();
    let site = project_with(None, "");

    routemap_cmd(cwd.path())
        .args(["generate", "--strict", "--hostname", "https://example.com", "--root"])
        .arg(site.path())
        .assert()
        .code(3);

    assert!(!site.path().join("public/sitemap.xml").exists());
}

#[test]
fn failed_json_run_prints_null() {
    let dir = project_with(None, "");

    routemap_cmd(dir.path())
        .args(["generate", "--hostname", "https://example.com", "--format", "json"])
        .assert()
        .success()
        .stdout("null\n");
}
