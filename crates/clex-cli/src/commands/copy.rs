//! `clex cp`: copy a source file onto the local file system.

use crate::formatters::{CopyReport, format_output};
use crate::output::{ExitCode, OutputFormat};
use anyhow::{Context, Result};
use clex_files::{FileSource, FileSystem};
use std::path::Path;

/// Copies `src` to `dst` and reports the destination size.
///
/// # Errors
///
/// Returns the [`clex_files::FilesError`] from the copy, or an I/O error if
/// the destination cannot be inspected afterwards.
pub fn copy<S: FileSource>(fs: &FileSystem<S>, src: &str, dst: &Path) -> Result<CopyReport> {
    fs.copy(dst, src)
        .with_context(|| format!("cannot copy {src} to {}", dst.display()))?;

    let bytes = std::fs::metadata(dst)
        .with_context(|| format!("cannot read copied file {}", dst.display()))?
        .len();

    Ok(CopyReport {
        src: src.to_string(),
        dst: dst.to_path_buf(),
        bytes,
    })
}

/// Runs the copy command.
///
/// # Errors
///
/// Returns an error if the copy or output formatting fails.
pub fn run<S: FileSource>(
    fs: &FileSystem<S>,
    src: &str,
    dst: &Path,
    format: OutputFormat,
) -> Result<ExitCode> {
    let report = copy(fs, src, dst)?;
    tracing::info!(src, dst = %dst.display(), bytes = report.bytes, "copy complete");
    println!("{}", format_output(&report, format)?);
    Ok(ExitCode::SUCCESS)
}
