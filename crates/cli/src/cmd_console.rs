// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `noi console` implementation: a line-oriented session over the
//! scaffold operations.

use std::io::{BufRead, IsTerminal, Write};

use anyhow::Context;

use noi::console::{Outcome, eval_line};
use noi::error::ExitCode;
use noi::workspace::Workspace;

/// Run the debug console until `exit`, `quit`, or end of input.
///
/// Evaluation errors are printed and the session continues; only I/O on
/// the console's own streams ends it early.
pub fn run() -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir().context("failed to resolve the current directory")?;
    let mut workspace = Workspace::new(cwd);

    let interactive = std::io::stdin().is_terminal();
    if interactive {
        println!("noi console (type `help` for commands, `exit` to leave)");
    }

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("> ");
            std::io::stdout().flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("failed to read console input")?;
        match eval_line(&line, &mut workspace) {
            Ok(Outcome::Quit) => break,
            Ok(Outcome::Continue(Some(output))) => println!("{output}"),
            Ok(Outcome::Continue(None)) => {}
            Err(err) => eprintln!("error: {err:#}"),
        }
    }
    Ok(ExitCode::Success)
}
