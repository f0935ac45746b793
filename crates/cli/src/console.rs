// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Debug console over the capability surface.
//!
//! Each input line is one named command against [`Capabilities`] — there
//! is no expression evaluator, so a session can poke at templates and the
//! filesystem without being handed arbitrary code execution. Evaluation
//! errors are returned to the caller, which prints them and keeps the
//! session alive.

use std::path::Path;

use anyhow::{Result, bail};

use crate::params::{self, TemplateParams};
use crate::workspace::Capabilities;

/// Result of evaluating one console line.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Keep reading, printing `Some` output first.
    Continue(Option<String>),
    /// End the session.
    Quit,
}

/// Listing printed by the `help` command.
pub const HELP: &str = "\
commands:
  render <template> [name=value ...]      render a template and print it
  template <dest> <src> [name=value ...]  render a template into a file
  file <dest> <content>                   write a file
  line <dest> <text>                      append a line to a file
  dir <path>                              create a directory tree
  mkdir <path>                            create a directory via the shell
  exists <path>                           report whether a path exists
  exec <command>                          run a shell command
  cd <dir>                                move the working directory
  cp <src> <dest>                         copy recursively
  pwd                                     print the working directory
  help                                    show this help
  exit | quit                             leave the console";

/// Evaluate one line against the capability object.
pub fn eval_line(line: &str, caps: &mut dyn Capabilities) -> Result<Outcome> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(Outcome::Continue(None));
    }
    let (command, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim_start()),
        None => (trimmed, ""),
    };

    let outcome = match command {
        "exit" | "quit" => return Ok(Outcome::Quit),
        "help" => Some(HELP.to_string()),
        "pwd" => Some(caps.cwd().display().to_string()),
        "render" => {
            let mut args = rest.split_whitespace();
            let Some(src) = args.next() else {
                bail!("usage: render <template> [name=value ...]");
            };
            let params = parse_params(args)?;
            Some(caps.render(Path::new(src), &params)?)
        }
        "template" => {
            let mut args = rest.split_whitespace();
            let (Some(dest), Some(src)) = (args.next(), args.next()) else {
                bail!("usage: template <dest> <src> [name=value ...]");
            };
            let params = parse_params(args)?;
            caps.file_from_template(Path::new(dest), Path::new(src), &params)?;
            None
        }
        "file" => {
            let Some((dest, content)) = rest.split_once(char::is_whitespace) else {
                bail!("usage: file <dest> <content>");
            };
            caps.file(Path::new(dest), content.trim_start())?;
            None
        }
        "line" => {
            let Some((dest, text)) = rest.split_once(char::is_whitespace) else {
                bail!("usage: line <dest> <text>");
            };
            caps.line(Path::new(dest), text.trim_start())?;
            None
        }
        "dir" => {
            let path = single_path(rest, "usage: dir <path>")?;
            caps.dir(path);
            None
        }
        "mkdir" => {
            let path = single_path(rest, "usage: mkdir <path>")?;
            caps.mkdir(path)?;
            None
        }
        "exists" => {
            let path = single_path(rest, "usage: exists <path>")?;
            Some(caps.exists(path).to_string())
        }
        "exec" => {
            if rest.is_empty() {
                bail!("usage: exec <command>");
            }
            let stdout = caps.exec(rest)?;
            let stdout = stdout.trim_end();
            (!stdout.is_empty()).then(|| stdout.to_string())
        }
        "cd" => {
            let dir = single_path(rest, "usage: cd <dir>")?;
            caps.cd(dir)?;
            None
        }
        "cp" => {
            let mut args = rest.split_whitespace();
            let (Some(src), Some(dest), None) = (args.next(), args.next(), args.next()) else {
                bail!("usage: cp <src> <dest>");
            };
            caps.cp(Path::new(src), Path::new(dest));
            None
        }
        unknown => bail!("unknown command `{unknown}` (try `help`)"),
    };
    Ok(Outcome::Continue(outcome))
}

fn single_path<'a>(rest: &'a str, usage: &str) -> Result<&'a Path> {
    let mut args = rest.split_whitespace();
    match (args.next(), args.next()) {
        (Some(path), None) => Ok(Path::new(path)),
        _ => bail!("{usage}"),
    }
}

/// Parse trailing `name=value` arguments into template parameters, with
/// case variants derived the same way `noi <command>` derives them.
fn parse_params<'a>(args: impl Iterator<Item = &'a str>) -> Result<TemplateParams> {
    let mut collected = TemplateParams::new();
    for arg in args {
        let Some((name, value)) = arg.split_once('=') else {
            bail!("expected name=value, got `{arg}`");
        };
        collected.insert(name.to_string(), value.to_string());
    }
    Ok(params::with_case_variants(&collected))
}

#[cfg(test)]
#[path = "console_tests.rs"]
mod tests;
