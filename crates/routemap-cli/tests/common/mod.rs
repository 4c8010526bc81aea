#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;

#[allow(dead_code)]
pub const CMD_TIMEOUT: Duration = Duration::from_secs(15);

#[allow(dead_code)]
pub const MANIFEST: &str = r#"/* eslint-disable */
// This file was automatically generated by the router.
export const routeTree = rootRoute._addFileChildren(rootRouteChildren)

/* ROUTE_MANIFEST_START
{
  "routes": {
    "__root__": {
      "filePath": "__root.tsx",
      "children": ["/", "/about/", "/posts/$postId"]
    },
    "/": { "filePath": "index.tsx" },
    "/about/": { "filePath": "about.tsx" },
    "/posts/$postId": { "filePath": "posts.$postId.tsx" }
  }
}
ROUTE_MANIFEST_END */
"#;

/// Create a configured `routemap` command suitable for integration tests.
///
/// Runs inside `root` with routemap environment variables cleared so the
/// host environment cannot leak into the assertions.
#[allow(dead_code)]
pub fn routemap_cmd(root: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("routemap"));
    cmd.timeout(CMD_TIMEOUT);
    cmd.current_dir(root);
    cmd.env_remove("ROUTEMAP_HOSTNAME");
    cmd.env_remove("ROUTEMAP_ROUTE_TREE");
    cmd.env_remove("ROUTEMAP_CONFIG");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// A temporary project with `content` written to `rel` (when given).
#[allow(dead_code)]
pub fn project_with(rel: Option<&str>, content: &str) -> TempDir {
    let dir = tempfile::tempdir().expect("failed to create project dir");
    if let Some(rel) = rel {
        let path = dir.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
    dir
}

/// A temporary project with the standard manifest at `app/routeTree.gen.ts`.
#[allow(dead_code)]
pub fn project() -> TempDir {
    project_with(Some("app/routeTree.gen.ts"), MANIFEST)
}
