//! In-memory file source.
//!
//! Files are stored in a `HashMap` keyed by [`SourcePath`], and their bytes
//! are shared with open handles, so opening a file never copies it.
//! Directories exist either explicitly through [`MemorySource::add_dir`] or
//! implicitly as ancestors of a file. The root always exists.
//!
//! # Examples
//!
//! ```
//! use clex_files::{FileSource, MemorySource, SourceFile};
//!
//! let mut source = MemorySource::new();
//! source.add_file("/servers/github/manifest.json", "{}").unwrap();
//!
//! let mut dir = source.open("/servers").unwrap();
//! let entries = dir.readdir(0).unwrap();
//! assert_eq!(entries.len(), 1);
//! assert!(entries[0].is_dir());
//! ```

use crate::error::{FilesError, Result};
use crate::source::{FileSource, SourceFile, take_entries};
use crate::types::{FileInfo, SourcePath};
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::io::{self, Cursor, Read};
use std::sync::Arc;

#[derive(Debug, Clone)]
struct StoredFile {
    content: Arc<[u8]>,
    modified: Option<DateTime<Utc>>,
}

/// A read-only [`FileSource`] held entirely in memory.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`; handles own their data and can outlive
/// the source.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: HashMap<SourcePath, StoredFile>,
    dirs: HashSet<SourcePath>,
}

impl MemorySource {
    /// Creates an empty source holding only the root directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file, replacing any file already stored at `path`.
    ///
    /// # Errors
    ///
    /// Returns `FilesError::InvalidPath` if the path is malformed, names the
    /// root or an existing directory, or lies below an existing file.
    pub fn add_file(&mut self, path: impl AsRef<str>, content: impl Into<Vec<u8>>) -> Result<()> {
        self.add_file_modified(path, content, None)
    }

    /// Adds a file with a modification time.
    ///
    /// # Errors
    ///
    /// Same as [`MemorySource::add_file`].
    pub fn add_file_modified(
        &mut self,
        path: impl AsRef<str>,
        content: impl Into<Vec<u8>>,
        modified: Option<DateTime<Utc>>,
    ) -> Result<()> {
        let path = SourcePath::new(path)?;
        if self.is_dir_path(&path) || self.has_file_ancestor(&path) {
            return Err(FilesError::InvalidPath {
                path: path.to_string(),
            });
        }

        let content: Vec<u8> = content.into();
        self.files.insert(
            path,
            StoredFile {
                content: content.into(),
                modified,
            },
        );
        Ok(())
    }

    /// Adds an empty directory.
    ///
    /// Adding a directory that already exists is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `FilesError::InvalidPath` if the path is malformed, names an
    /// existing file, or lies below one.
    pub fn add_dir(&mut self, path: impl AsRef<str>) -> Result<()> {
        let path = SourcePath::new(path)?;
        if self.files.contains_key(&path) || self.has_file_ancestor(&path) {
            return Err(FilesError::InvalidPath {
                path: path.to_string(),
            });
        }
        if !path.is_root() {
            self.dirs.insert(path);
        }
        Ok(())
    }

    /// Returns the number of stored files.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Returns `true` if a file or directory exists at `path`.
    ///
    /// Malformed paths never exist.
    #[must_use]
    pub fn exists(&self, path: impl AsRef<str>) -> bool {
        SourcePath::new(path).is_ok_and(|p| self.files.contains_key(&p) || self.is_dir_path(&p))
    }

    /// Returns `true` if `path` names a directory.
    #[must_use]
    pub fn is_dir(&self, path: impl AsRef<str>) -> bool {
        SourcePath::new(path).is_ok_and(|p| self.is_dir_path(&p))
    }

    fn is_dir_path(&self, path: &SourcePath) -> bool {
        path.is_root()
            || self.dirs.contains(path)
            || self.dirs.iter().any(|dir| dir.is_within(path))
            || self.files.keys().any(|file| file.is_within(path))
    }

    fn has_file_ancestor(&self, path: &SourcePath) -> bool {
        let mut current = path.parent();
        while let Some(dir) = current {
            if self.files.contains_key(&dir) {
                return true;
            }
            current = dir.parent();
        }
        false
    }

    /// Direct children of `dir`, sorted by name.
    fn children(&self, dir: &SourcePath) -> Vec<FileInfo> {
        let mut children: BTreeMap<&str, FileInfo> = BTreeMap::new();
        let prefix_len = if dir.is_root() { 1 } else { dir.as_str().len() + 1 };

        let nested = self
            .files
            .keys()
            .chain(self.dirs.iter())
            .filter(|path| path.is_within(dir));

        for path in nested {
            let relative = &path.as_str()[prefix_len..];
            match relative.split_once('/') {
                Some((subdir, _)) => {
                    children
                        .entry(subdir)
                        .or_insert_with(|| FileInfo::dir(subdir));
                }
                None => {
                    let info = self.files.get(path).map_or_else(
                        || FileInfo::dir(relative),
                        |file| stored_info(relative, file),
                    );
                    children.insert(relative, info);
                }
            }
        }

        children.into_values().collect()
    }
}

impl FileSource for MemorySource {
    type File = MemoryFile;

    fn open(&self, path: &str) -> io::Result<MemoryFile> {
        let clean = SourcePath::new(path)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        if let Some(file) = self.files.get(&clean) {
            return Ok(MemoryFile {
                info: stored_info(clean.file_name(), file),
                kind: Kind::File(Cursor::new(Arc::clone(&file.content))),
            });
        }

        if self.is_dir_path(&clean) {
            return Ok(MemoryFile {
                info: FileInfo::dir(clean.file_name()),
                kind: Kind::Dir(self.children(&clean).into_iter()),
            });
        }

        Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{clean}: no such file or directory"),
        ))
    }
}

fn stored_info(name: &str, file: &StoredFile) -> FileInfo {
    FileInfo::file(name, file.content.len() as u64)
        .with_modified(file.modified)
        .with_readonly(true)
}

/// An open entry of a [`MemorySource`].
#[derive(Debug)]
pub struct MemoryFile {
    info: FileInfo,
    kind: Kind,
}

#[derive(Debug)]
enum Kind {
    File(Cursor<Arc<[u8]>>),
    Dir(std::vec::IntoIter<FileInfo>),
}

impl Read for MemoryFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match &mut self.kind {
            Kind::File(cursor) => cursor.read(buf),
            Kind::Dir(_) => Err(io::Error::new(
                io::ErrorKind::IsADirectory,
                format!("{} is a directory", self.info.name()),
            )),
        }
    }
}

impl SourceFile for MemoryFile {
    fn stat(&self) -> io::Result<FileInfo> {
        Ok(self.info.clone())
    }

    fn readdir(&mut self, count: isize) -> io::Result<Vec<FileInfo>> {
        match &mut self.kind {
            Kind::Dir(entries) => take_entries(entries.by_ref().map(Ok), count),
            Kind::File(_) => Err(io::Error::new(
                io::ErrorKind::NotADirectory,
                format!("{} is not a directory", self.info.name()),
            )),
        }
    }
}
