//! Error types for file source operations.
//!
//! Every variant names the step that failed and, where an I/O call was
//! involved, keeps the underlying [`std::io::Error`] as its `source()`.
//!
//! # Examples
//!
//! ```
//! use clex_files::FilesError;
//! use std::io;
//!
//! let err = FilesError::OpenFailed {
//!     path: "missing".to_string(),
//!     source: io::Error::from(io::ErrorKind::NotFound),
//! };
//!
//! assert!(err.is_open_error());
//! assert!(err.is_not_found());
//! assert_eq!(err.to_string(), "failed to open path: missing");
//! ```

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by [`FileSystem`](crate::FileSystem) and the bundled sources.
///
/// All error variants include contextual information and implement
/// `is_xxx()` methods for easy error classification.
#[derive(Error, Debug)]
pub enum FilesError {
    /// The source file of a copy could not be opened.
    #[error("failed to open source file: {path}")]
    OpenSourceFailed {
        /// Path within the file source
        path: String,
        /// Underlying error cause
        #[source]
        source: io::Error,
    },

    /// The destination file of a copy could not be created.
    #[error("failed to create destination file: {}", .path.display())]
    CreateDestinationFailed {
        /// Path in the local file system
        path: PathBuf,
        /// Underlying error cause
        #[source]
        source: io::Error,
    },

    /// The byte transfer of a copy was interrupted.
    ///
    /// The destination may hold a partial prefix of the source.
    #[error("failed to copy file contents: {src} -> {}", .dst.display())]
    CopyFailed {
        /// Path within the file source
        src: String,
        /// Path in the local file system
        dst: PathBuf,
        /// Underlying error cause
        #[source]
        source: io::Error,
    },

    /// A path could not be opened for listing or stat.
    #[error("failed to open path: {path}")]
    OpenFailed {
        /// Path within the file source
        path: String,
        /// Underlying error cause
        #[source]
        source: io::Error,
    },

    /// Directory entries could not be enumerated.
    ///
    /// Raised for non-directories, for I/O failures, and for the
    /// "no more entries" signal of a limited read.
    #[error("failed to list directory entries: {path}")]
    ListingFailed {
        /// Path within the file source
        path: String,
        /// Underlying error cause
        #[source]
        source: io::Error,
    },

    /// Metadata could not be retrieved from an opened path.
    #[error("failed to get file info: {path}")]
    StatFailed {
        /// Path within the file source
        path: String,
        /// Underlying error cause
        #[source]
        source: io::Error,
    },

    /// Path is malformed and cannot name an entry in a source.
    #[error("invalid path: {path}")]
    InvalidPath {
        /// The rejected path
        path: String,
    },
}

impl FilesError {
    /// Returns `true` if a path could not be opened in the file source.
    ///
    /// Covers both the copy source and the target of a listing or stat.
    #[must_use]
    pub const fn is_open_error(&self) -> bool {
        matches!(
            self,
            Self::OpenSourceFailed { .. } | Self::OpenFailed { .. }
        )
    }

    /// Returns `true` if a copy destination could not be created.
    #[must_use]
    pub const fn is_create_error(&self) -> bool {
        matches!(self, Self::CreateDestinationFailed { .. })
    }

    /// Returns `true` if a copy was interrupted mid-transfer.
    #[must_use]
    pub const fn is_copy_error(&self) -> bool {
        matches!(self, Self::CopyFailed { .. })
    }

    /// Returns `true` if a directory listing failed after a successful open.
    ///
    /// # Examples
    ///
    /// ```
    /// use clex_files::FilesError;
    /// use std::io;
    ///
    /// let err = FilesError::ListingFailed {
    ///     path: "file.txt".to_string(),
    ///     source: io::Error::from(io::ErrorKind::NotADirectory),
    /// };
    ///
    /// assert!(err.is_listing_error());
    /// assert!(!err.is_open_error());
    /// ```
    #[must_use]
    pub const fn is_listing_error(&self) -> bool {
        matches!(self, Self::ListingFailed { .. })
    }

    /// Returns `true` if metadata retrieval failed after a successful open.
    #[must_use]
    pub const fn is_stat_error(&self) -> bool {
        matches!(self, Self::StatFailed { .. })
    }

    /// Returns `true` if this is an invalid path error.
    #[must_use]
    pub const fn is_invalid_path(&self) -> bool {
        matches!(self, Self::InvalidPath { .. })
    }

    /// Returns the underlying I/O error, if the failure came from one.
    #[must_use]
    pub const fn io_error(&self) -> Option<&io::Error> {
        match self {
            Self::OpenSourceFailed { source, .. }
            | Self::CreateDestinationFailed { source, .. }
            | Self::CopyFailed { source, .. }
            | Self::OpenFailed { source, .. }
            | Self::ListingFailed { source, .. }
            | Self::StatFailed { source, .. } => Some(source),
            Self::InvalidPath { .. } => None,
        }
    }

    /// Returns `true` if the underlying cause is a missing entry.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.io_error()
            .is_some_and(|e| e.kind() == io::ErrorKind::NotFound)
    }
}

/// Type alias for file source operation results.
pub type Result<T> = std::result::Result<T, FilesError>;
