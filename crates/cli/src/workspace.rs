// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The capability surface scaffold steps run against.
//!
//! [`Capabilities`] is the fixed set of filesystem and shell operations a
//! scaffold may perform; [`Workspace`] is the real implementation, rooted
//! at the discovered project root. The working directory is a field, not
//! process state: relative paths resolve against it, and `cd` moves it for
//! every operation that follows.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Error;
use crate::params::TemplateParams;
use crate::shell;
use crate::template;

/// Operations available to a running scaffold.
///
/// Best-effort operations (`dir`, `cp`) report failures on stderr and
/// return whether they took effect; everything else is fatal on error.
pub trait Capabilities: std::fmt::Debug {
    /// Write `content` to `dest`, truncating any existing file.
    fn file(&mut self, dest: &Path, content: &str) -> Result<(), Error>;

    /// Render the template at `src` and write the result to `dest`.
    fn file_from_template(
        &mut self,
        dest: &Path,
        src: &Path,
        params: &TemplateParams,
    ) -> Result<(), Error>;

    /// Append `text` to `dest` as a line, creating the file if needed.
    fn line(&mut self, dest: &Path, text: &str) -> Result<(), Error>;

    /// Create a directory tree. Returns whether the directory exists
    /// afterwards; failure is reported, not raised.
    fn dir(&mut self, path: &Path) -> bool;

    /// Whether `path` exists.
    fn exists(&self, path: &Path) -> bool;

    /// Render the template at `src` without writing anything.
    fn render(&self, src: &Path, params: &TemplateParams) -> Result<String, Error>;

    /// Run a shell command in the working directory, blocking until it
    /// exits. Returns captured stdout.
    fn exec(&mut self, command: &str) -> Result<String, Error>;

    /// Move the working directory for subsequent operations. The target
    /// must already exist. Returns the capability object for chaining.
    fn cd(&mut self, dir: &Path) -> Result<&mut dyn Capabilities, Error>;

    /// Create a directory through the shell (`mkdir -p`).
    fn mkdir(&mut self, path: &Path) -> Result<(), Error>;

    /// Copy `src` to `dest` recursively through the shell. Returns whether
    /// the copy succeeded; failure is reported, not raised.
    fn cp(&mut self, src: &Path, dest: &Path) -> bool;

    /// Current working directory.
    fn cwd(&self) -> &Path;
}

/// Filesystem-backed capability object.
#[derive(Debug, Clone)]
pub struct Workspace {
    cwd: PathBuf,
}

impl Workspace {
    /// Root the workspace at `root`. Relative paths resolve there until
    /// `cd` moves the working directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { cwd: root.into() }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }
}

impl Capabilities for Workspace {
    fn file(&mut self, dest: &Path, content: &str) -> Result<(), Error> {
        let dest = self.resolve(dest);
        std::fs::write(&dest, content).map_err(|source| Error::Io {
            path: dest.clone(),
            source,
        })?;
        debug!(path = %dest.display(), bytes = content.len(), "wrote file");
        Ok(())
    }

    fn file_from_template(
        &mut self,
        dest: &Path,
        src: &Path,
        params: &TemplateParams,
    ) -> Result<(), Error> {
        let content = self.render(src, params)?;
        self.file(dest, &content)
    }

    fn line(&mut self, dest: &Path, text: &str) -> Result<(), Error> {
        let dest = self.resolve(dest);
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&dest)
            .map_err(|source| Error::Io {
                path: dest.clone(),
                source,
            })?;
        let mut line = text.to_string();
        if !line.ends_with('\n') {
            line.push('\n');
        }
        file.write_all(line.as_bytes()).map_err(|source| Error::Io {
            path: dest.clone(),
            source,
        })?;
        debug!(path = %dest.display(), "appended line");
        Ok(())
    }

    fn dir(&mut self, path: &Path) -> bool {
        let path = self.resolve(path);
        if path.is_dir() {
            return true;
        }
        match std::fs::create_dir_all(&path) {
            Ok(()) => {
                debug!(path = %path.display(), "created directory");
                true
            }
            Err(err) => {
                eprintln!("warning: could not create {}: {err}", path.display());
                false
            }
        }
    }

    fn exists(&self, path: &Path) -> bool {
        self.resolve(path).exists()
    }

    fn render(&self, src: &Path, params: &TemplateParams) -> Result<String, Error> {
        template::render_file(self.resolve(src), params)
    }

    fn exec(&mut self, command: &str) -> Result<String, Error> {
        shell::run(command, &self.cwd)
    }

    fn cd(&mut self, dir: &Path) -> Result<&mut dyn Capabilities, Error> {
        let target = self.resolve(dir);
        if !target.is_dir() {
            return Err(Error::Io {
                path: target,
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"),
            });
        }
        debug!(path = %target.display(), "moved working directory");
        self.cwd = target;
        Ok(self)
    }

    fn mkdir(&mut self, path: &Path) -> Result<(), Error> {
        let path = self.resolve(path);
        self.exec(&format!("mkdir -p {}", shell::quote(&path)))?;
        Ok(())
    }

    fn cp(&mut self, src: &Path, dest: &Path) -> bool {
        let src = self.resolve(src);
        let dest = self.resolve(dest);
        let command = format!("cp -r {} {}", shell::quote(&src), shell::quote(&dest));
        match self.exec(&command) {
            Ok(_) => true,
            Err(err) => {
                eprintln!("warning: {err}");
                false
            }
        }
    }

    fn cwd(&self) -> &Path {
        &self.cwd
    }
}

#[cfg(test)]
#[path = "workspace_tests.rs"]
mod tests;
