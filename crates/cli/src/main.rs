use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use noi::cli::{Cli, Command};
use noi::error::ExitCode;

mod cmd_console;
mod cmd_ls;
mod cmd_run;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.command {
        Command::Ls => cmd_ls::run(),
        Command::Console => cmd_console::run(),
        Command::Completions(args) => {
            let mut command = Cli::command();
            clap_complete::generate(args.shell, &mut command, "noi", &mut std::io::stdout());
            Ok(ExitCode::Success)
        }
        Command::Run(args) => cmd_run::run(args),
    };

    let code = match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            err.downcast_ref::<noi::error::Error>()
                .map_or(ExitCode::Failure, noi::error::Error::exit_code)
        }
    };
    std::process::exit(code.code());
}

/// Diagnostics go to stderr; `NOI_LOG` overrides the level picked by
/// `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "noi=debug" } else { "noi=warn" };
    let filter = EnvFilter::try_from_env("NOI_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
