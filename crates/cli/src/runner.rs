// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Executes a scaffold descriptor against a capability object.
//!
//! Steps run strictly in order; the first fatal error aborts the scaffold
//! and already-materialized files stay behind. Every string field is
//! passed through the renderer first, so paths, contents, and commands may
//! all carry placeholders.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::{ScaffoldConfig, Step};
use crate::error::Error;
use crate::params::TemplateParams;
use crate::template::render_str;
use crate::workspace::Capabilities;

/// Feedback line produced by one executed step, for the caller to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepReport {
    Created(PathBuf),
    Updated(PathBuf),
    Copied { src: PathBuf, dest: PathBuf },
    Output(String),
}

impl std::fmt::Display for StepReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StepReport::Created(path) => write!(f, "created {}", path.display()),
            StepReport::Updated(path) => write!(f, "updated {}", path.display()),
            StepReport::Copied { src, dest } => {
                write!(f, "copied {} -> {}", src.display(), dest.display())
            }
            StepReport::Output(text) => f.write_str(text),
        }
    }
}

/// Run every step of `config` in order.
///
/// `command_dir` is the command's directory under `.noi`; template `src`
/// paths resolve against it. `report` receives one line per visible
/// effect.
pub fn execute(
    config: &ScaffoldConfig,
    params: &TemplateParams,
    command_dir: &Path,
    caps: &mut dyn Capabilities,
    mut report: impl FnMut(StepReport),
) -> Result<(), Error> {
    for (index, step) in config.steps.iter().enumerate() {
        debug!(index, ?step, "running step");
        run_step(step, params, command_dir, caps, &mut report)?;
    }
    Ok(())
}

fn run_step(
    step: &Step,
    params: &TemplateParams,
    command_dir: &Path,
    caps: &mut dyn Capabilities,
    report: &mut impl FnMut(StepReport),
) -> Result<(), Error> {
    match step {
        Step::File { dest, content } => {
            let dest = rendered_path(dest, params);
            caps.file(&dest, &render_str(content, params))?;
            report(StepReport::Created(dest));
        }
        Step::Template { src, dest } => {
            let src = template_path(src, params, command_dir);
            let dest = rendered_path(dest, params);
            caps.file_from_template(&dest, &src, params)?;
            report(StepReport::Created(dest));
        }
        Step::Line { dest, line } => {
            let dest = rendered_path(dest, params);
            caps.line(&dest, &render_str(line, params))?;
            report(StepReport::Updated(dest));
        }
        Step::Dir { path } => {
            let path = rendered_path(path, params);
            if caps.dir(&path) {
                report(StepReport::Created(path));
            }
        }
        Step::Exec { command } => {
            let command = render_str(command, params);
            let stdout = caps.exec(&command)?;
            let stdout = stdout.trim_end();
            if !stdout.is_empty() {
                report(StepReport::Output(stdout.to_string()));
            }
        }
        Step::Copy { src, dest } => {
            let src = rendered_path(src, params);
            let dest = rendered_path(dest, params);
            if caps.cp(&src, &dest) {
                report(StepReport::Copied { src, dest });
            }
        }
        Step::Cd { path } => {
            caps.cd(&rendered_path(path, params))?;
        }
    }
    Ok(())
}

fn rendered_path(raw: &str, params: &TemplateParams) -> PathBuf {
    PathBuf::from(render_str(raw, params))
}

/// Template sources are looked up next to the descriptor, not in the
/// workspace.
fn template_path(raw: &str, params: &TemplateParams, command_dir: &Path) -> PathBuf {
    let path = rendered_path(raw, params);
    if path.is_absolute() {
        path
    } else {
        command_dir.join(path)
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
