// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Blocking shell command execution.
//!
//! Commands run through the platform shell (`sh -c`, or `cmd /C` on
//! Windows) and suspend the caller until the subprocess exits. There is no
//! timeout and no cancellation.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::Error;

/// Run `command` in `cwd`, capturing output.
///
/// Returns captured stdout. A non-zero exit, or a failure to start the
/// shell at all, is a `CommandExecution` error carrying the captured
/// stderr.
pub fn run(command: &str, cwd: &Path) -> Result<String, Error> {
    let (shell, flag) = if cfg!(windows) {
        ("cmd", "/C")
    } else {
        ("sh", "-c")
    };
    debug!(%command, cwd = %cwd.display(), "running shell command");
    let output = Command::new(shell)
        .arg(flag)
        .arg(command)
        .current_dir(cwd)
        .output()
        .map_err(|err| Error::CommandExecution {
            command: command.to_string(),
            status: None,
            stderr: err.to_string(),
        })?;
    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    } else {
        Err(Error::CommandExecution {
            command: command.to_string(),
            status: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}

/// Quote `path` for interpolation into a shell command line.
pub(crate) fn quote(path: &Path) -> String {
    let raw = path.display().to_string();
    format!("'{}'", raw.replace('\'', r"'\''"))
}

#[cfg(test)]
#[path = "shell_tests.rs"]
mod tests;
