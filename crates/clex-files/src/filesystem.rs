//! Copy, list and stat over any [`FileSource`].
//!
//! [`FileSystem`] owns no state besides the wrapped source. Each operation
//! opens its own handles and drops them before returning, on success and on
//! every error path.
//!
//! # Examples
//!
//! ```
//! use clex_files::{FileSystem, MemorySourceBuilder};
//! # use tempfile::TempDir;
//!
//! # let temp = TempDir::new().unwrap();
//! let source = MemorySourceBuilder::new()
//!     .add_file("/test", "hello")
//!     .build()
//!     .unwrap();
//! let fs = FileSystem::new(source);
//!
//! let dst = temp.path().join("copy");
//! fs.copy(&dst, "test").unwrap();
//! assert_eq!(std::fs::read_to_string(&dst).unwrap(), "hello");
//!
//! assert_eq!(fs.readdir(".", 0).unwrap().len(), 1);
//! assert_eq!(fs.stats("test").unwrap().name(), "test");
//! ```

use crate::error::{FilesError, Result};
use crate::source::{FileSource, SourceFile};
use crate::types::FileInfo;
use std::fs::File;
use std::io;
use std::path::Path;

/// Adapter adding `copy`, `readdir` and `stats` to a read-only [`FileSource`].
///
/// # Thread Safety
///
/// All operations take `&self`; `FileSystem<S>` is `Send + Sync` whenever
/// `S` is.
#[derive(Debug, Clone, Default)]
pub struct FileSystem<S> {
    source: S,
}

impl<S: FileSource> FileSystem<S> {
    /// Wraps `source`.
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// Returns the wrapped source.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Opens `path` in the wrapped source.
    ///
    /// # Errors
    ///
    /// Returns whatever the source's `open` returns.
    pub fn open(&self, path: &str) -> io::Result<S::File> {
        self.source.open(path)
    }

    /// Copies the source file `src` to `dst` on the local file system.
    ///
    /// `dst` is created, or truncated if it exists. `src` is opened first, so
    /// a missing source never leaves an empty destination behind.
    ///
    /// # Errors
    ///
    /// - `FilesError::OpenSourceFailed` if `src` cannot be opened
    /// - `FilesError::CreateDestinationFailed` if `dst` cannot be created
    /// - `FilesError::CopyFailed` if reading or writing fails part way; `dst`
    ///   then holds an unspecified prefix of the source
    pub fn copy(&self, dst: impl AsRef<Path>, src: &str) -> Result<()> {
        let dst = dst.as_ref();

        let mut reader = self
            .source
            .open(src)
            .map_err(|source| FilesError::OpenSourceFailed {
                path: src.to_string(),
                source,
            })?;

        let mut writer = File::create(dst).map_err(|source| FilesError::CreateDestinationFailed {
            path: dst.to_path_buf(),
            source,
        })?;

        let bytes = io::copy(&mut reader, &mut writer).map_err(|source| FilesError::CopyFailed {
            src: src.to_string(),
            dst: dst.to_path_buf(),
            source,
        })?;

        tracing::debug!(src, dst = %dst.display(), bytes, "copied file");
        Ok(())
    }

    /// Lists up to `count` entries of the directory at `path`.
    ///
    /// `count <= 0` lists every entry. Entries come back in the order the
    /// source supplies them.
    ///
    /// # Errors
    ///
    /// - `FilesError::OpenFailed` if `path` cannot be opened
    /// - `FilesError::ListingFailed` if `path` is not a directory, cannot be
    ///   enumerated, or has no entries for a `count > 0` read
    pub fn readdir(&self, path: &str, count: isize) -> Result<Vec<FileInfo>> {
        let mut handle = self.open_path(path)?;

        let entries = handle
            .readdir(count)
            .map_err(|source| FilesError::ListingFailed {
                path: path.to_string(),
                source,
            })?;

        tracing::debug!(path, count, entries = entries.len(), "listed directory");
        Ok(entries)
    }

    /// Returns metadata for the entry at `path`.
    ///
    /// # Errors
    ///
    /// - `FilesError::OpenFailed` if `path` cannot be opened
    /// - `FilesError::StatFailed` if the metadata cannot be read
    pub fn stats(&self, path: &str) -> Result<FileInfo> {
        let handle = self.open_path(path)?;

        let info = handle.stat().map_err(|source| FilesError::StatFailed {
            path: path.to_string(),
            source,
        })?;

        tracing::debug!(path, name = info.name(), is_dir = info.is_dir(), "read file info");
        Ok(info)
    }

    fn open_path(&self, path: &str) -> Result<S::File> {
        self.source
            .open(path)
            .map_err(|source| FilesError::OpenFailed {
                path: path.to_string(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DirSource, MemorySourceBuilder};
    use std::fs;
    use std::io::Read;
    use tempfile::TempDir;

    fn testdata() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("test"), "test data\n").unwrap();
        temp
    }

    #[test]
    fn test_copy_matches_source() {
        let data = testdata();
        let out = TempDir::new().unwrap();
        let fs = FileSystem::new(DirSource::new(data.path()));

        let dst = out.path().join("test");
        fs.copy(&dst, "test").unwrap();

        assert_eq!(
            std::fs::read(&dst).unwrap(),
            std::fs::read(data.path().join("test")).unwrap()
        );
    }

    #[test]
    fn test_copy_truncates_existing_destination() {
        let data = testdata();
        let out = TempDir::new().unwrap();
        let dst = out.path().join("test");
        std::fs::write(&dst, "a much longer previous content").unwrap();

        let fs = FileSystem::new(DirSource::new(data.path()));
        fs.copy(&dst, "test").unwrap();
        assert_eq!(std::fs::read_to_string(&dst).unwrap(), "test data\n");
    }

    #[test]
    fn test_copy_missing_source() {
        let data = testdata();
        let out = TempDir::new().unwrap();
        let dst = out.path().join("never");
        let fs = FileSystem::new(DirSource::new(data.path()));

        let err = fs.copy(&dst, "notfound").unwrap_err();
        assert!(matches!(err, FilesError::OpenSourceFailed { .. }));
        assert!(err.is_not_found());
        assert!(!dst.exists());
    }

    #[test]
    fn test_copy_missing_destination_dir() {
        let data = testdata();
        let out = TempDir::new().unwrap();
        let fs = FileSystem::new(DirSource::new(data.path()));

        let err = fs.copy(out.path().join("no/such/dir/file"), "test").unwrap_err();
        assert!(err.is_create_error());
    }

    #[test]
    fn test_copy_directory_fails_mid_copy() {
        let source = MemorySourceBuilder::new()
            .add_file("/dir/file", "x")
            .build()
            .unwrap();
        let out = TempDir::new().unwrap();
        let fs = FileSystem::new(source);

        let err = fs.copy(out.path().join("dir"), "dir").unwrap_err();
        assert!(err.is_copy_error());
        assert_eq!(err.io_error().unwrap().kind(), io::ErrorKind::IsADirectory);
    }

    #[test]
    fn test_readdir_single_entry() {
        let data = testdata();
        let fs = FileSystem::new(DirSource::new(data.path()));

        let entries = fs.readdir(".", 0).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name(), "test");
    }

    #[test]
    fn test_readdir_missing() {
        let data = testdata();
        let fs = FileSystem::new(DirSource::new(data.path()));

        let err = fs.readdir("notfound", 0).unwrap_err();
        assert!(err.is_open_error());
    }

    #[test]
    fn test_readdir_not_directory() {
        let data = testdata();
        let fs = FileSystem::new(DirSource::new(data.path()));

        let err = fs.readdir("test", 0).unwrap_err();
        assert!(err.is_listing_error());
    }

    #[test]
    fn test_readdir_limited_empty_is_error() {
        let source = MemorySourceBuilder::new().add_dir("/empty").build().unwrap();
        let fs = FileSystem::new(source);

        assert!(fs.readdir("empty", 0).unwrap().is_empty());

        let err = fs.readdir("empty", 1).unwrap_err();
        assert!(err.is_listing_error());
        assert_eq!(err.io_error().unwrap().kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_readdir_count_caps_entries() {
        let source = MemorySourceBuilder::new()
            .add_files([("/a", "1"), ("/b", "2"), ("/c", "3")])
            .build()
            .unwrap();
        let fs = FileSystem::new(source);

        assert_eq!(fs.readdir("/", 2).unwrap().len(), 2);
        assert_eq!(fs.readdir("/", -1).unwrap().len(), 3);
    }

    #[test]
    fn test_stats_name() {
        let data = testdata();
        let fs = FileSystem::new(DirSource::new(data.path()));

        let info = fs.stats("test").unwrap();
        assert_eq!(info.name(), "test");
        assert_eq!(info.size(), 10);
    }

    #[test]
    fn test_stats_missing() {
        let data = testdata();
        let fs = FileSystem::new(DirSource::new(data.path()));

        let err = fs.stats("notfound").unwrap_err();
        assert!(err.is_open_error());
        assert!(err.to_string().starts_with("failed to open path"));
    }

    #[test]
    fn test_open_passes_through_to_source() {
        let data = testdata();
        let fs = FileSystem::new(DirSource::new(data.path()));

        let mut content = String::new();
        fs.open("/test")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "test data\n");

        assert_eq!(fs.open("notfound").unwrap_err().kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_borrowed_source() {
        let source = MemorySourceBuilder::new().add_file("/x", "y").build().unwrap();
        let fs = FileSystem::new(&source);
        assert_eq!(fs.stats("x").unwrap().size(), 1);
        assert_eq!(fs.source().file_count(), 1);
    }

    #[test]
    fn test_file_system_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FileSystem<DirSource>>();
        assert_send_sync::<FileSystem<crate::MemorySource>>();
    }
}
