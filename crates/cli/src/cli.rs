//! CLI argument parsing with clap derive.

use clap::{Parser, Subcommand};

/// Scaffold files and directories from templates kept in `.noi` folders
/// along the directory ancestor chain
#[derive(Debug, Parser)]
#[command(name = "noi")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable diagnostic output
    #[arg(short = 'v', long = "verbose", global = true, env = "NOI_VERBOSE")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List template commands available from the current directory
    Ls,
    /// Open the debug console over the scaffold operations
    Console,
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
    /// Run a template command (segments separated by commas, flags first)
    #[command(external_subcommand)]
    Run(Vec<String>),
}

#[derive(Debug, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
