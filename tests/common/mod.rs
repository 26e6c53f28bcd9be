//! Shared fixtures for gopkg-pin integration tests.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A realistic Gopkg.toml with comments, a prune table, and three pinned
/// dependencies across constraint and override blocks.
#[allow(unused)]
pub const SAMPLE_MANIFEST: &str = r#"# Gopkg.toml example
#
# Refer to https://golang.github.io/dep/docs/Gopkg.toml.html
# for detailed Gopkg.toml documentation.

[[constraint]]
  name = "github.com/user/alpha"
  version = "1.0.0"

[[constraint]]
  name = "github.com/user/beta"
  branch = "master"

[[override]]
  name = "github.com/user/gamma"
  revision = "4d2f0bd0b0a3d1e9c8f7a6b5c4d3e2f1a0b9c8d7"

[prune]
  go-tests = true
  unused-packages = true
"#;

/// Writes the sample manifest into a fresh temp dir, returning the dir and
/// the manifest path.
#[allow(unused)]
pub fn sample_workspace() -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let manifest = temp.path().join("Gopkg.toml");
    fs::write(&manifest, SAMPLE_MANIFEST).unwrap();
    (temp, manifest)
}
