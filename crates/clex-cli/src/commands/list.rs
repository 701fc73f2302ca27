//! `clex ls`: list directory entries.

use crate::formatters::{Listing, format_output};
use crate::output::{ExitCode, OutputFormat};
use anyhow::{Context, Result};
use clex_files::{FileSource, FileSystem};

/// Lists up to `count` entries of `path`; `count <= 0` lists everything.
///
/// # Errors
///
/// Returns the [`clex_files::FilesError`] from the listing.
pub fn list<S: FileSource>(fs: &FileSystem<S>, path: &str, count: isize) -> Result<Listing> {
    let entries = fs
        .readdir(path, count)
        .with_context(|| format!("cannot list {path}"))?;

    Ok(Listing {
        path: path.to_string(),
        entries,
    })
}

/// Runs the list command.
///
/// # Errors
///
/// Returns an error if the listing or output formatting fails.
pub fn run<S: FileSource>(
    fs: &FileSystem<S>,
    path: &str,
    count: isize,
    format: OutputFormat,
) -> Result<ExitCode> {
    let listing = list(fs, path, count)?;
    let output = format_output(&listing, format)?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clex_files::MemorySourceBuilder;

    fn fixture() -> FileSystem<clex_files::MemorySource> {
        FileSystem::new(
            MemorySourceBuilder::new()
                .add_files([("/a", "1"), ("/b", "22"), ("/dir/c", "333")])
                .add_dir("/empty")
                .build()
                .unwrap(),
        )
    }

    #[test]
    fn test_list_all() {
        let listing = list(&fixture(), ".", 0).unwrap();
        let names: Vec<_> = listing.entries.iter().map(|e| e.name()).collect();
        assert_eq!(names, ["a", "b", "dir", "empty"]);
        assert_eq!(listing.path, ".");
    }

    #[test]
    fn test_list_count() {
        assert_eq!(list(&fixture(), "/", 2).unwrap().entries.len(), 2);
    }

    #[test]
    fn test_list_empty_with_count_is_error() {
        let err = list(&fixture(), "empty", 1).unwrap_err();
        assert_eq!(ExitCode::from_error(&err), ExitCode::IO_ERROR);
    }

    #[test]
    fn test_list_file_is_error() {
        let err = list(&fixture(), "a", 0).unwrap_err();
        assert!(err.to_string().contains("cannot list a"));
    }
}
