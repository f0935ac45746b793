// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `noi ls` implementation: list commands visible from here.

use anyhow::Context;

use noi::discovery;
use noi::error::ExitCode;

/// List the template commands available along the ancestor chain.
pub fn run() -> anyhow::Result<ExitCode> {
    let start = std::env::current_dir().context("failed to resolve the current directory")?;
    let commands = discovery::list_commands(&start);
    if commands.is_empty() {
        println!("No templates found");
    } else {
        println!("Available templates:");
        for name in &commands {
            println!("{name}");
        }
    }
    Ok(ExitCode::Success)
}
