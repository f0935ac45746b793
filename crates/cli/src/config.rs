// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scaffold descriptors.
//!
//! A command's `config.toml` declares the parameters to collect and the
//! ordered steps that materialize the scaffold. Every string field of a
//! step may carry `{% name %}` placeholders; they are substituted with the
//! collected parameters before the step runs.

use std::path::Path;

use serde::Deserialize;

use crate::error::Error;

/// A command's parsed descriptor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScaffoldConfig {
    /// One-line description, shown before prompting.
    #[serde(default)]
    pub description: Option<String>,

    /// Parameters to collect, in prompt order.
    #[serde(default)]
    pub params: Vec<ParamSpec>,

    /// Steps to execute, in order.
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl ScaffoldConfig {
    /// Load and parse a descriptor file.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source: Box::new(source),
        })
    }
}

/// A declared parameter: a bare placeholder name, or a table with a prompt
/// label and a default applied when the answer is empty.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ParamSpec {
    Name(String),
    Full {
        name: String,
        #[serde(default)]
        prompt: Option<String>,
        #[serde(default)]
        default: Option<String>,
    },
}

impl ParamSpec {
    /// Placeholder name this parameter fills.
    pub fn name(&self) -> &str {
        match self {
            ParamSpec::Name(name) => name,
            ParamSpec::Full { name, .. } => name,
        }
    }

    /// Label shown when prompting. Falls back to the name.
    pub fn label(&self) -> &str {
        match self {
            ParamSpec::Name(name) => name,
            ParamSpec::Full { prompt, name, .. } => prompt.as_deref().unwrap_or(name),
        }
    }

    /// Value used when the collected answer is empty.
    pub fn default_value(&self) -> Option<&str> {
        match self {
            ParamSpec::Name(_) => None,
            ParamSpec::Full { default, .. } => default.as_deref(),
        }
    }
}

/// One scaffold step, tagged by `action`.
///
/// `src` paths resolve against the command's directory under `.noi`;
/// `dest` and other paths resolve against the workspace's working
/// directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    /// Write `content` to `dest`, truncating an existing file.
    File { dest: String, content: String },
    /// Render the template at `src` into `dest`.
    Template { src: String, dest: String },
    /// Append a line to `dest`, creating it if needed.
    Line { dest: String, line: String },
    /// Create a directory tree. Failure is logged, not fatal.
    Dir { path: String },
    /// Run a shell command. Non-zero exit aborts the scaffold.
    Exec { command: String },
    /// Copy `src` to `dest` recursively. Failure is logged, not fatal.
    Copy { src: String, dest: String },
    /// Move the working directory for all following steps.
    Cd { path: String },
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
