//! clex CLI.
//!
//! Copies, lists and inspects files from a read-only directory.
//!
//! # Examples
//!
//! ```bash
//! # Copy a file out of ./testdata
//! clex --root ./testdata cp test /tmp/test
//!
//! # List the first ten entries as JSON
//! clex --root ./testdata --format json ls -n 10
//!
//! # Show metadata
//! clex --root ./testdata stat test
//! ```

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clex_cli::commands;
use clex_cli::{Cli, ExitCode};
use clex_files::{DirSource, FileSystem};
use colored::Colorize;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let exit_code = run(cli).unwrap_or_else(|err| {
        eprintln!("{} {err:#}", "error:".red().bold());
        ExitCode::from_error(&err)
    });

    std::process::exit(exit_code.as_i32());
}

fn run(cli: Cli) -> Result<ExitCode> {
    let fs = FileSystem::new(DirSource::new(cli.root));
    tracing::debug!(root = %fs.source().root().display(), format = %cli.format, "starting");

    commands::execute(cli.command, &fs, cli.format, &mut Cli::command())
}

/// Initializes logging infrastructure.
///
/// Logs go to stderr so they never mix with command output. `RUST_LOG`
/// controls the filter unless `--verbose` forces debug level.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
