// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Template loading and placeholder substitution.
//!
//! A template is plain text carrying `{% name %}` tokens. Rendering
//! replaces every occurrence of each supplied parameter, one key at a time
//! in mapping order; tokens without a supplied value stay verbatim.

use std::path::{Path, PathBuf};

use regex::{NoExpand, Regex};
use tracing::debug;

use crate::error::Error;
use crate::params::TemplateParams;

/// A template loaded from disk together with its parameters.
///
/// The loaded text is kept verbatim and never mutated; `render` produces a
/// fresh string each call.
#[derive(Debug, Clone)]
pub struct FileTemplate {
    path: PathBuf,
    text: String,
    params: TemplateParams,
}

impl FileTemplate {
    /// Load the template file once. An unreadable path is fatal.
    pub fn load(path: impl AsRef<Path>, params: TemplateParams) -> Result<Self, Error> {
        let path = path.as_ref().to_path_buf();
        let text = std::fs::read_to_string(&path).map_err(|source| Error::TemplateLoad {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), bytes = text.len(), "loaded template");
        Ok(Self { path, text, params })
    }

    /// Path this template was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Substitute every parameter into the loaded text.
    pub fn render(&self) -> String {
        render_str(&self.text, &self.params)
    }
}

/// Load the template at `path` and render it with `params` in one call.
pub fn render_file(path: impl AsRef<Path>, params: &TemplateParams) -> Result<String, Error> {
    Ok(FileTemplate::load(path, params.clone())?.render())
}

/// Replace `{% name %}` tokens in `text` for every entry of `params`.
///
/// Entries are applied sequentially in mapping order, each pass replacing
/// every occurrence in the text the previous pass produced. Values are
/// inserted literally, so `$` and `{%` in a value are not re-interpreted
/// within the same pass. Tokens tolerate any number of spaces (not tabs)
/// around the name.
pub fn render_str(text: &str, params: &TemplateParams) -> String {
    let mut rendered = text.to_string();
    for (name, value) in params {
        let pattern = format!(r"\{{% *{} *%\}}", regex::escape(name));
        // escape() output is always a valid pattern
        let Ok(token) = Regex::new(&pattern) else {
            continue;
        };
        rendered = token
            .replace_all(&rendered, NoExpand(value.as_str()))
            .into_owned();
    }
    rendered
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
