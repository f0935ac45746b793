// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Interactive parameter collection.
//!
//! One free-text answer per declared parameter, in declaration order, with
//! no validation beyond presence. On a terminal the prompt is a dialoguer
//! input; with piped stdin, answers are read silently one per line so
//! scaffolds stay scriptable.

use std::io::{BufRead, IsTerminal};

use anyhow::{Context, Result, bail};
use dialoguer::Input;
use dialoguer::theme::ColorfulTheme;

use crate::config::ParamSpec;
use crate::params::TemplateParams;

/// Source of parameter answers.
pub trait Prompter {
    /// Collect the answer for one declared parameter.
    fn ask(&mut self, param: &ParamSpec) -> Result<String>;
}

/// Collect answers for every declared parameter, in declaration order.
///
/// A later declaration of the same name overwrites the earlier answer but
/// keeps its original position in the mapping.
pub fn collect(specs: &[ParamSpec], prompter: &mut dyn Prompter) -> Result<TemplateParams> {
    let mut params = TemplateParams::new();
    for spec in specs {
        let answer = prompter.ask(spec)?;
        params.insert(spec.name().to_string(), answer);
    }
    Ok(params)
}

/// Pick the prompter matching how stdin is connected.
pub fn for_stdin() -> Box<dyn Prompter> {
    if std::io::stdin().is_terminal() {
        Box::new(TtyPrompter)
    } else {
        Box::new(LinePrompter::new(std::io::stdin().lock()))
    }
}

/// Terminal prompter backed by dialoguer.
pub struct TtyPrompter;

impl Prompter for TtyPrompter {
    fn ask(&mut self, param: &ParamSpec) -> Result<String> {
        let theme = ColorfulTheme::default();
        let mut input = Input::<String>::with_theme(&theme)
            .with_prompt(param.label())
            .allow_empty(true);
        if let Some(default) = param.default_value() {
            input = input.default(default.to_string());
        }
        input
            .interact_text()
            .with_context(|| format!("prompt for `{}` cancelled", param.name()))
    }
}

/// Line-oriented prompter for piped stdin: one answer per line, empty
/// answers fall back to the declared default.
pub struct LinePrompter<R> {
    input: R,
}

impl<R: BufRead> LinePrompter<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> Prompter for LinePrompter<R> {
    fn ask(&mut self, param: &ParamSpec) -> Result<String> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .with_context(|| format!("failed to read the answer for `{}`", param.name()))?;
        if read == 0 {
            bail!("input ended before `{}` was answered", param.name());
        }
        let answer = line.trim_end_matches(['\r', '\n']);
        if answer.is_empty() {
            if let Some(default) = param.default_value() {
                return Ok(default.to_string());
            }
        }
        Ok(answer.to_string())
    }
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod tests;
