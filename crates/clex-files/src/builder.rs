//! Builder pattern for constructing in-memory sources.
//!
//! # Examples
//!
//! ```
//! use clex_files::MemorySourceBuilder;
//!
//! let source = MemorySourceBuilder::new()
//!     .add_file("/test", "hello")
//!     .add_dir("/empty")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(source.file_count(), 1);
//! assert!(source.is_dir("/empty"));
//! ```

use crate::error::{FilesError, Result};
use crate::memory::MemorySource;
use chrono::{DateTime, Utc};

/// Builder for constructing a [`MemorySource`].
///
/// Invalid paths do not interrupt the chain; the first one is reported by
/// [`MemorySourceBuilder::build`].
#[derive(Debug, Default)]
pub struct MemorySourceBuilder {
    source: MemorySource,
    modified: Option<DateTime<Utc>>,
    errors: Vec<FilesError>,
}

impl MemorySourceBuilder {
    /// Creates a new empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamps every file added after this call with `modified`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{DateTime, Utc};
    /// use clex_files::{FileSource, MemorySourceBuilder, SourceFile};
    ///
    /// let stamp = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap();
    /// let source = MemorySourceBuilder::new()
    ///     .modified_at(stamp)
    ///     .add_file("/a", "x")
    ///     .build()
    ///     .unwrap();
    ///
    /// let info = source.open("/a").unwrap().stat().unwrap();
    /// assert_eq!(info.modified(), Some(stamp));
    /// ```
    #[must_use]
    pub const fn modified_at(mut self, modified: DateTime<Utc>) -> Self {
        self.modified = Some(modified);
        self
    }

    /// Adds a file to the source being built.
    #[must_use]
    pub fn add_file(mut self, path: impl AsRef<str>, content: impl Into<Vec<u8>>) -> Self {
        if let Err(e) = self.source.add_file_modified(path, content, self.modified) {
            self.errors.push(e);
        }
        self
    }

    /// Adds several files at once.
    ///
    /// # Examples
    ///
    /// ```
    /// use clex_files::MemorySourceBuilder;
    ///
    /// let source = MemorySourceBuilder::new()
    ///     .add_files([("/a.txt", "a"), ("/b.txt", "b")])
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(source.file_count(), 2);
    /// ```
    #[must_use]
    pub fn add_files<P, C>(mut self, files: impl IntoIterator<Item = (P, C)>) -> Self
    where
        P: AsRef<str>,
        C: Into<Vec<u8>>,
    {
        for (path, content) in files {
            self = self.add_file(path, content);
        }
        self
    }

    /// Adds an empty directory to the source being built.
    #[must_use]
    pub fn add_dir(mut self, path: impl AsRef<str>) -> Self {
        if let Err(e) = self.source.add_dir(path) {
            self.errors.push(e);
        }
        self
    }

    /// Consumes the builder and returns the constructed source.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered while adding entries, if any.
    pub fn build(self) -> Result<MemorySource> {
        match self.errors.into_iter().next() {
            Some(error) => Err(error),
            None => Ok(self.source),
        }
    }
}
