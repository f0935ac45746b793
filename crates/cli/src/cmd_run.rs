// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `noi <command>` implementation: discover, prompt, scaffold.

use anyhow::Context;
use console::style;

use noi::config::ScaffoldConfig;
use noi::discovery;
use noi::error::ExitCode;
use noi::params::with_case_variants;
use noi::prompt;
use noi::runner;
use noi::workspace::Workspace;

/// Guidance printed when no ancestor holds the requested command.
const NOT_FOUND: &str = "No configuration file found for the requested command. \
     Make sure you have noi templates defined and that you are in the right directory.";

/// Run a template command named by its comma-separated segments.
pub fn run(args: &[String]) -> anyhow::Result<ExitCode> {
    let [command] = args else {
        anyhow::bail!(
            "expected a single template command, got {} arguments (flags go before the command)",
            args.len()
        );
    };
    let segments = discovery::command_segments(command)?;
    let start = std::env::current_dir().context("failed to resolve the current directory")?;

    let Some(found) = discovery::locate(&start, &segments) else {
        println!("{NOT_FOUND}");
        return Ok(ExitCode::NotFound);
    };

    let config = ScaffoldConfig::load(&found.config_path)?;
    if let Some(description) = &config.description {
        println!("{}", style(description).bold());
    }

    let mut prompter = prompt::for_stdin();
    let answers = prompt::collect(&config.params, prompter.as_mut())?;
    let params = with_case_variants(&answers);

    let mut workspace = Workspace::new(found.root.clone());
    runner::execute(&config, &params, &found.command_dir, &mut workspace, |report| {
        println!("{report}");
    })?;
    Ok(ExitCode::Success)
}
