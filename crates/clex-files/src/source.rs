//! The read-only file source capability.
//!
//! A [`FileSource`] turns a path into an open [`SourceFile`] handle. Handles
//! are released when dropped, so whoever owns a handle decides when the
//! underlying resource goes away.
//!
//! # Implementing a source
//!
//! ```
//! use clex_files::{FileInfo, FileSource, SourceFile};
//! use std::io::{self, Cursor, Read};
//!
//! struct Greeting;
//!
//! struct GreetingFile(Cursor<&'static [u8]>);
//!
//! impl Read for GreetingFile {
//!     fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
//!         self.0.read(buf)
//!     }
//! }
//!
//! impl SourceFile for GreetingFile {
//!     fn stat(&self) -> io::Result<FileInfo> {
//!         Ok(FileInfo::file("hello", 5))
//!     }
//!
//!     fn readdir(&mut self, _count: isize) -> io::Result<Vec<FileInfo>> {
//!         Err(io::Error::from(io::ErrorKind::NotADirectory))
//!     }
//! }
//!
//! impl FileSource for Greeting {
//!     type File = GreetingFile;
//!
//!     fn open(&self, path: &str) -> io::Result<GreetingFile> {
//!         match path {
//!             "hello" => Ok(GreetingFile(Cursor::new(b"hello"))),
//!             _ => Err(io::Error::from(io::ErrorKind::NotFound)),
//!         }
//!     }
//! }
//!
//! let mut file = Greeting.open("hello").unwrap();
//! let mut text = String::new();
//! file.read_to_string(&mut text).unwrap();
//! assert_eq!(text, "hello");
//! ```

use crate::types::FileInfo;
use std::io::{self, Read};
use std::sync::Arc;

/// A read-only, hierarchical, path-addressed provider of files.
pub trait FileSource {
    /// Handle type returned by [`FileSource::open`].
    type File: SourceFile;

    /// Opens the entry at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry does not exist or cannot be opened.
    /// Missing entries should use [`io::ErrorKind::NotFound`].
    fn open(&self, path: &str) -> io::Result<Self::File>;
}

/// An open entry of a [`FileSource`].
///
/// Reading yields the file bytes. Dropping the handle releases it.
pub trait SourceFile: Read {
    /// Returns metadata describing the opened entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the metadata cannot be retrieved.
    fn stat(&self) -> io::Result<FileInfo>;

    /// Reads up to `count` directory entries.
    ///
    /// With `count <= 0` all remaining entries are returned, and an exhausted
    /// directory yields an empty vector. With `count > 0` at most `count`
    /// entries are returned, and an exhausted directory yields
    /// [`end_of_entries`]. Successive calls on one handle continue where the
    /// previous one stopped.
    ///
    /// # Errors
    ///
    /// Returns [`io::ErrorKind::NotADirectory`] for non-directories, the
    /// [`end_of_entries`] error described above, or any I/O failure.
    fn readdir(&mut self, count: isize) -> io::Result<Vec<FileInfo>>;
}

impl<S: FileSource + ?Sized> FileSource for &S {
    type File = S::File;

    fn open(&self, path: &str) -> io::Result<Self::File> {
        (**self).open(path)
    }
}

impl<S: FileSource + ?Sized> FileSource for Arc<S> {
    type File = S::File;

    fn open(&self, path: &str) -> io::Result<Self::File> {
        (**self).open(path)
    }
}

/// Error a limited `readdir` returns once a directory has no entries left.
///
/// Its kind is [`io::ErrorKind::UnexpectedEof`].
#[must_use]
pub fn end_of_entries() -> io::Error {
    io::Error::new(io::ErrorKind::UnexpectedEof, "no more directory entries")
}

/// Converts a `readdir` count into an entry limit; `None` means unlimited.
pub(crate) fn entry_limit(count: isize) -> Option<usize> {
    usize::try_from(count).ok().filter(|&limit| limit > 0)
}

/// Pulls entries from `entries` according to the `readdir` conventions.
pub(crate) fn take_entries<I>(entries: I, count: isize) -> io::Result<Vec<FileInfo>>
where
    I: Iterator<Item = io::Result<FileInfo>>,
{
    let limit = entry_limit(count);
    let mut taken = Vec::new();

    for entry in entries {
        taken.push(entry?);
        if limit.is_some_and(|limit| taken.len() >= limit) {
            break;
        }
    }

    if limit.is_some() && taken.is_empty() {
        return Err(end_of_entries());
    }
    Ok(taken)
}
