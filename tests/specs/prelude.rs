//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for building `.noi` template trees in scratch
//! directories and invoking the noi binary against them.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;

use std::path::{Path, PathBuf};

use assert_cmd::Command;

use tempfile::TempDir;

/// Returns a Command configured to run the noi binary
pub fn noi_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("noi"))
}

/// A scratch project that owns `.noi` template trees.
///
/// Scaffolding mutates the tree, so every spec builds its own project
/// instead of sharing a checked-in fixture.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create a nested directory and return its absolute path.
    pub fn subdir(&self, rel: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        std::fs::create_dir_all(&path).unwrap();
        path
    }

    /// Write `.noi/<segments>/config.toml` under `at` (`""` for the
    /// project root).
    pub fn command(&self, at: &str, segments: &[&str], config: &str) -> &Self {
        let dir = self.command_dir(at, segments);
        std::fs::write(dir.join("config.toml"), config).unwrap();
        self
    }

    /// Write a template file next to a command's descriptor.
    pub fn template(&self, at: &str, segments: &[&str], name: &str, content: &str) -> &Self {
        let dir = self.command_dir(at, segments);
        std::fs::write(dir.join(name), content).unwrap();
        self
    }

    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(rel)).unwrap()
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.dir.path().join(rel).exists()
    }

    fn command_dir(&self, at: &str, segments: &[&str]) -> PathBuf {
        let mut dir = self.dir.path().join(at).join(".noi");
        for segment in segments {
            dir.push(segment);
        }
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }
}

/// Get path to a read-only test fixture directory
pub fn fixture(name: &str) -> PathBuf {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR should be set");
    PathBuf::from(manifest_dir)
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("grandparent should exist")
        .join("tests")
        .join("fixtures")
        .join(name)
}
