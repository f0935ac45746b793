// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error taxonomy and process exit codes.
//!
//! Expected absence (no configuration found) is distinguished from I/O
//! failure and from subprocess failure so callers can react to each.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by discovery, rendering, and scaffold execution.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// No ancestor directory holds a configuration for the command.
    /// Expected and recoverable: callers print guidance, not a backtrace.
    #[error("no configuration found for command `{command}`")]
    ConfigNotFound { command: String },

    /// The command name cannot be mapped to directories under `.noi`.
    #[error(
        "invalid command name `{command}`: segments must be non-empty and \
         must not be `.`, `..`, or contain path separators"
    )]
    InvalidCommand { command: String },

    /// A template file could not be read. Fatal; no partial render exists.
    #[error("failed to load template {}", .path.display())]
    TemplateLoad {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A shell command exited non-zero or could not be started.
    #[error("command `{command}` failed: {}", failure_detail(.status, .stderr))]
    CommandExecution {
        command: String,
        status: Option<i32>,
        stderr: String,
    },

    /// A scaffold descriptor could not be parsed.
    #[error("failed to parse {}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: Box<toml::de::Error>,
    },

    /// Any other filesystem failure, tagged with the path it concerns.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Exit code the process should terminate with for this error.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Error::ConfigNotFound { .. } => ExitCode::NotFound,
            _ => ExitCode::Failure,
        }
    }
}

/// Process exit codes: 0 success, 1 expected absence, 2 failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success,
    NotFound,
    Failure,
}

impl ExitCode {
    pub fn code(self) -> i32 {
        match self {
            ExitCode::Success => 0,
            ExitCode::NotFound => 1,
            ExitCode::Failure => 2,
        }
    }
}

fn failure_detail(status: &Option<i32>, stderr: &str) -> String {
    match (status, stderr) {
        (Some(code), "") => format!("exit status {code}"),
        (Some(code), stderr) => format!("exit status {code}: {stderr}"),
        (None, "") => "terminated without exit status".to_string(),
        (None, stderr) => stderr.to_string(),
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
