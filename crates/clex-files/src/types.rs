//! Core types shared by file sources.
//!
//! [`SourcePath`] is the cleaned, rooted form of a request path and
//! [`FileInfo`] is the metadata snapshot every source hands back.
//!
//! # Examples
//!
//! ```
//! use clex_files::{FileInfo, SourcePath};
//!
//! let path = SourcePath::new("docs/../test")?;
//! assert_eq!(path.as_str(), "/test");
//!
//! let info = FileInfo::file("test", 12);
//! assert_eq!(info.name(), "test");
//! assert!(!info.is_dir());
//! # Ok::<(), clex_files::FilesError>(())
//! ```

use crate::error::{FilesError, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::fs;

/// A cleaned, rooted path inside a file source.
///
/// Request paths are always interpreted relative to the source root:
/// - a leading `/` is implied
/// - empty and `.` segments are dropped
/// - `..` removes the previous segment and stops at the root
///
/// The resulting path can never name anything above the root, which is what
/// lets [`DirSource`](crate::DirSource) join it onto a host directory.
///
/// # Examples
///
/// ```
/// use clex_files::SourcePath;
///
/// assert_eq!(SourcePath::new(".")?.as_str(), "/");
/// assert_eq!(SourcePath::new("a//b/./c")?.as_str(), "/a/b/c");
/// assert_eq!(SourcePath::new("../../etc/passwd")?.as_str(), "/etc/passwd");
/// # Ok::<(), clex_files::FilesError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourcePath(String);

impl SourcePath {
    /// Cleans `path` into a rooted source path.
    ///
    /// Both `/` and relative spellings are accepted and resolve to the same
    /// entry.
    ///
    /// # Errors
    ///
    /// Returns `FilesError::InvalidPath` if the path contains a NUL byte, or a
    /// backslash on Windows where it would act as a host separator.
    pub fn new(path: impl AsRef<str>) -> Result<Self> {
        let path = path.as_ref();

        if path.contains('\0') || (cfg!(windows) && path.contains('\\')) {
            return Err(FilesError::InvalidPath {
                path: path.to_string(),
            });
        }

        let mut segments: Vec<&str> = Vec::new();
        for segment in path.split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    segments.pop();
                }
                name => segments.push(name),
            }
        }

        let mut cleaned = String::with_capacity(path.len() + 1);
        for segment in &segments {
            cleaned.push('/');
            cleaned.push_str(segment);
        }
        if cleaned.is_empty() {
            cleaned.push('/');
        }

        Ok(Self(cleaned))
    }

    /// Returns the root path `/`.
    #[must_use]
    pub fn root() -> Self {
        Self("/".to_string())
    }

    /// Returns the path as a string slice, always starting with `/`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the path without its leading `/`.
    ///
    /// The root yields an empty string.
    #[must_use]
    pub fn relative(&self) -> &str {
        &self.0[1..]
    }

    /// Returns `true` for the source root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    /// Returns the parent path, or `None` for the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use clex_files::SourcePath;
    ///
    /// let path = SourcePath::new("/a/b")?;
    /// assert_eq!(path.parent().unwrap().as_str(), "/a");
    /// assert!(SourcePath::root().parent().is_none());
    /// # Ok::<(), clex_files::FilesError>(())
    /// ```
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }
        self.0.rfind('/').map(|pos| {
            if pos == 0 {
                Self::root()
            } else {
                Self(self.0[..pos].to_string())
            }
        })
    }

    /// Returns the last segment, or `/` for the root.
    #[must_use]
    pub fn file_name(&self) -> &str {
        if self.is_root() {
            return "/";
        }
        self.0.rsplit('/').next().unwrap_or_default()
    }

    /// Returns `true` if `self` is a strict descendant of `dir`.
    #[must_use]
    pub fn is_within(&self, dir: &Self) -> bool {
        if dir.is_root() {
            return !self.is_root();
        }
        self.0
            .strip_prefix(dir.as_str())
            .is_some_and(|rest| rest.starts_with('/'))
    }
}

impl fmt::Display for SourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SourcePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Metadata snapshot for one entry of a file source.
///
/// Returned by value from `stat` and `readdir`; it never tracks the entry
/// after it was taken.
///
/// # Examples
///
/// ```
/// use clex_files::FileInfo;
///
/// let dir = FileInfo::dir("servers");
/// assert!(dir.is_dir());
/// assert_eq!(dir.size(), 0);
///
/// let file = FileInfo::file("manifest.json", 2).with_readonly(true);
/// assert!(file.is_file());
/// assert!(file.readonly());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileInfo {
    name: String,
    size: u64,
    modified: Option<DateTime<Utc>>,
    is_dir: bool,
    readonly: bool,
}

impl FileInfo {
    /// Creates metadata for a regular file of `size` bytes.
    #[must_use]
    pub fn file(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            modified: None,
            is_dir: false,
            readonly: false,
        }
    }

    /// Creates metadata for a directory.
    #[must_use]
    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: 0,
            modified: None,
            is_dir: true,
            readonly: false,
        }
    }

    /// Builds metadata from host file system metadata.
    ///
    /// The size is the host's length as-is, including for directories.
    #[must_use]
    pub fn from_metadata(name: impl Into<String>, metadata: &fs::Metadata) -> Self {
        Self {
            name: name.into(),
            size: metadata.len(),
            modified: metadata.modified().ok().map(DateTime::<Utc>::from),
            is_dir: metadata.is_dir(),
            readonly: metadata.permissions().readonly(),
        }
    }

    /// Sets the modification time.
    #[must_use]
    pub const fn with_modified(mut self, modified: Option<DateTime<Utc>>) -> Self {
        self.modified = modified;
        self
    }

    /// Sets the read-only flag.
    #[must_use]
    pub const fn with_readonly(mut self, readonly: bool) -> Self {
        self.readonly = readonly;
        self
    }

    /// Base name of the entry.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Length in bytes.
    ///
    /// For directories this is whatever the source reports; in-memory
    /// directories report zero.
    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }

    /// Last modification time, if the source tracks one.
    #[must_use]
    pub const fn modified(&self) -> Option<DateTime<Utc>> {
        self.modified
    }

    /// Returns `true` for directories.
    #[must_use]
    pub const fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// Returns `true` for anything that is not a directory.
    #[must_use]
    pub const fn is_file(&self) -> bool {
        !self.is_dir
    }

    /// Returns `true` if the entry is write-protected.
    #[must_use]
    pub const fn readonly(&self) -> bool {
        self.readonly
    }
}
