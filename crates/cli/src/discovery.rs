// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration discovery along the directory ancestor chain.
//!
//! Commands live under a reserved `.noi` folder. Running `noi a,b` looks
//! for `.noi/a/b/config.toml` in the starting directory, then in each
//! parent, and stops at the first match. The filesystem root itself is
//! never searched, so a `/.noi` folder is invisible.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Error;

/// Reserved configuration folder name.
pub const NOI_DIR: &str = ".noi";

/// Scaffold descriptor file name inside a command directory.
pub const CONFIG_FILE: &str = "config.toml";

/// A discovered command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Located {
    /// Ancestor directory containing the `.noi` folder. Scaffold output
    /// is created relative to this root, not to where `noi` was invoked.
    pub root: PathBuf,
    /// The command's directory under `.noi`, where its templates live.
    pub command_dir: PathBuf,
    /// Full path of the descriptor file.
    pub config_path: PathBuf,
}

/// Split a comma-separated command name into its path segments.
///
/// Empty segments are dropped, so `a,,b` and `a,b` are the same command.
/// Segments that would escape the `.noi` folder are rejected.
pub fn command_segments(command: &str) -> Result<Vec<String>, Error> {
    let segments: Vec<String> = command
        .split(',')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect();
    if segments.is_empty() {
        return Err(Error::InvalidCommand {
            command: command.to_string(),
        });
    }
    for segment in &segments {
        if segment == "." || segment == ".." || segment.contains(['/', '\\']) {
            return Err(Error::InvalidCommand {
                command: command.to_string(),
            });
        }
    }
    Ok(segments)
}

/// Walk upward from `start_dir` looking for the command's descriptor.
///
/// `start_dir` should be absolute. Returns the nearest match, or `None`
/// when no ancestor holds a configuration for this command.
pub fn locate(start_dir: &Path, segments: &[String]) -> Option<Located> {
    let mut current = start_dir.to_path_buf();
    while let Some(parent) = current.parent().map(Path::to_path_buf) {
        let mut command_dir = current.join(NOI_DIR);
        for segment in segments {
            command_dir.push(segment);
        }
        let config_path = command_dir.join(CONFIG_FILE);
        debug!(path = %config_path.display(), "checking for configuration");
        if config_path.is_file() {
            debug!(root = %current.display(), "configuration found");
            return Some(Located {
                root: current,
                command_dir,
                config_path,
            });
        }
        current = parent;
    }
    None
}

/// Collect the command names present in any `.noi` folder along the
/// ancestor chain of `start_dir`.
///
/// Unlike [`locate`], the walk always continues to the top, and results
/// aggregate across the whole chain. Names are deduplicated and sorted.
pub fn list_commands(start_dir: &Path) -> BTreeSet<String> {
    let mut commands = BTreeSet::new();
    let mut current = start_dir.to_path_buf();
    while let Some(parent) = current.parent().map(Path::to_path_buf) {
        let noi_dir = current.join(NOI_DIR);
        if let Ok(entries) = std::fs::read_dir(&noi_dir) {
            for entry in entries.flatten() {
                if entry.file_type().is_ok_and(|kind| kind.is_dir()) {
                    commands.insert(entry.file_name().to_string_lossy().into_owned());
                }
            }
        }
        current = parent;
    }
    commands
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
