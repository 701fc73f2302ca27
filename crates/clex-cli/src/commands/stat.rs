//! `clex stat`: show metadata for a path.

use crate::formatters::format_output;
use crate::output::{ExitCode, OutputFormat};
use anyhow::{Context, Result};
use clex_files::{FileInfo, FileSource, FileSystem};

/// Returns the metadata of `path`.
///
/// # Errors
///
/// Returns the [`clex_files::FilesError`] from the lookup.
pub fn stat<S: FileSource>(fs: &FileSystem<S>, path: &str) -> Result<FileInfo> {
    fs.stats(path).with_context(|| format!("cannot stat {path}"))
}

/// Runs the stat command.
///
/// # Errors
///
/// Returns an error if the lookup or output formatting fails.
pub fn run<S: FileSource>(fs: &FileSystem<S>, path: &str, format: OutputFormat) -> Result<ExitCode> {
    let info = stat(fs, path)?;
    println!("{}", format_output(&info, format)?);
    Ok(ExitCode::SUCCESS)
}
