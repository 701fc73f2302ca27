//! Command implementations for the `clex` CLI.
//!
//! Each command module exposes the operation itself, returning a value that
//! can be rendered, and a `run` function that prints it in the requested
//! format and returns the exit code.

pub mod completions;
pub mod copy;
pub mod list;
pub mod stat;

use crate::cli::Commands;
use crate::output::{ExitCode, OutputFormat};
use anyhow::Result;
use clap::Command;
use clex_files::{DirSource, FileSystem};

/// Dispatches a parsed subcommand against `fs`.
///
/// `cmd` is the full command definition, needed for completions.
///
/// # Errors
///
/// Returns the failing command's error with context attached.
pub fn execute(
    command: Commands,
    fs: &FileSystem<DirSource>,
    format: OutputFormat,
    cmd: &mut Command,
) -> Result<ExitCode> {
    match command {
        Commands::Cp { src, dst } => copy::run(fs, &src, &dst, format),
        Commands::Ls { path, count } => list::run(fs, &path, count, format),
        Commands::Stat { path } => stat::run(fs, &path, format),
        Commands::Completions { shell } => Ok(completions::run(shell, cmd)),
    }
}
