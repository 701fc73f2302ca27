//! File source backed by a directory of the host file system.
//!
//! Every request path is cleaned with [`SourcePath`] before it is joined onto
//! the root, so `..` segments cannot reach outside the directory.
//!
//! # Examples
//!
//! ```
//! use clex_files::{DirSource, FileSource, SourceFile};
//! # use tempfile::TempDir;
//!
//! # let temp = TempDir::new().unwrap();
//! # std::fs::write(temp.path().join("test"), "content").unwrap();
//! let source = DirSource::new(temp.path());
//!
//! let file = source.open("test").unwrap();
//! assert_eq!(file.stat().unwrap().name(), "test");
//! ```

use crate::source::{FileSource, SourceFile, take_entries};
use crate::types::{FileInfo, SourcePath};
use std::fs::{self, File, ReadDir};
use std::io::{self, Read};
use std::path::{Component, Path, PathBuf};

/// A [`FileSource`] rooted at a host directory.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    /// Creates a source serving the contents of `root`.
    ///
    /// The directory is not checked until something is opened.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the host directory this source serves.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &SourcePath) -> PathBuf {
        if path.is_root() {
            self.root.clone()
        } else {
            self.root.join(path.relative())
        }
    }
}

impl FileSource for DirSource {
    type File = DirFile;

    fn open(&self, path: &str) -> io::Result<DirFile> {
        let clean = SourcePath::new(path)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        let host_path = self.resolve(&clean);

        let metadata = fs::metadata(&host_path)?;
        let kind = if metadata.is_dir() {
            Kind::Dir(fs::read_dir(&host_path)?)
        } else {
            Kind::File(File::open(&host_path)?)
        };

        Ok(DirFile { host_path, kind })
    }
}

/// An open entry of a [`DirSource`].
#[derive(Debug)]
pub struct DirFile {
    host_path: PathBuf,
    kind: Kind,
}

#[derive(Debug)]
enum Kind {
    File(File),
    Dir(ReadDir),
}

impl Read for DirFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match &mut self.kind {
            Kind::File(file) => file.read(buf),
            Kind::Dir(_) => Err(io::Error::new(
                io::ErrorKind::IsADirectory,
                format!("{} is a directory", self.host_path.display()),
            )),
        }
    }
}

impl SourceFile for DirFile {
    fn stat(&self) -> io::Result<FileInfo> {
        let metadata = match &self.kind {
            Kind::File(file) => file.metadata()?,
            Kind::Dir(_) => fs::metadata(&self.host_path)?,
        };
        Ok(FileInfo::from_metadata(
            entry_name(&self.host_path),
            &metadata,
        ))
    }

    fn readdir(&mut self, count: isize) -> io::Result<Vec<FileInfo>> {
        let Kind::Dir(entries) = &mut self.kind else {
            return Err(io::Error::new(
                io::ErrorKind::NotADirectory,
                format!("{} is not a directory", self.host_path.display()),
            ));
        };

        // Entries removed after the directory was read are skipped.
        let infos = entries.by_ref().filter_map(|entry| {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => return Some(Err(e)),
            };
            match entry.metadata() {
                Ok(metadata) => Some(Ok(FileInfo::from_metadata(
                    entry.file_name().to_string_lossy(),
                    &metadata,
                ))),
                Err(e) if e.kind() == io::ErrorKind::NotFound => None,
                Err(e) => Some(Err(e)),
            }
        });

        take_entries(infos, count)
    }
}

/// Base name of a host path, falling back to its last component for paths
/// like `.` or `/` that have no file name.
fn entry_name(path: &Path) -> String {
    if let Some(name) = path.file_name() {
        return name.to_string_lossy().into_owned();
    }
    match path.components().next_back() {
        Some(Component::RootDir) => "/".to_string(),
        Some(component) => component.as_os_str().to_string_lossy().into_owned(),
        None => ".".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn fixture() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("test"), "hello from testdata").unwrap();
        fs::create_dir(temp.path().join("nested")).unwrap();
        fs::write(temp.path().join("nested/a.txt"), "a").unwrap();
        fs::write(temp.path().join("nested/b.txt"), "bb").unwrap();
        temp
    }

    #[test]
    fn test_open_and_read_file() {
        let temp = fixture();
        let source = DirSource::new(temp.path());

        let mut file = source.open("test").unwrap();
        let mut content = String::new();
        file.read_to_string(&mut content).unwrap();
        assert_eq!(content, "hello from testdata");
    }

    #[test]
    fn test_root_is_kept() {
        let temp = fixture();
        assert_eq!(DirSource::new(temp.path()).root(), temp.path());
    }

    #[test]
    fn test_open_missing_is_not_found() {
        let temp = fixture();
        let source = DirSource::new(temp.path());

        let err = source.open("notfound").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_open_invalid_path() {
        let temp = fixture();
        let source = DirSource::new(temp.path());

        let err = source.open("bad\0path").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_parent_dir_stays_inside_root() {
        let outer = TempDir::new().unwrap();
        fs::write(outer.path().join("secret"), "outside").unwrap();
        fs::create_dir(outer.path().join("root")).unwrap();
        fs::write(outer.path().join("root/secret"), "inside").unwrap();

        let source = DirSource::new(outer.path().join("root"));
        let mut file = source.open("../secret").unwrap();
        let mut content = String::new();
        file.read_to_string(&mut content).unwrap();
        assert_eq!(content, "inside");
    }

    #[test]
    fn test_stat_file_and_dir() {
        let temp = fixture();
        let source = DirSource::new(temp.path());

        let info = source.open("/test").unwrap().stat().unwrap();
        assert_eq!(info.name(), "test");
        assert_eq!(info.size(), 19);
        assert!(info.is_file());

        let info = source.open("nested").unwrap().stat().unwrap();
        assert_eq!(info.name(), "nested");
        assert!(info.is_dir());
    }

    #[test]
    fn test_stat_root_uses_root_name() {
        let temp = fixture();
        let source = DirSource::new(temp.path());

        let info = source.open(".").unwrap().stat().unwrap();
        let expected = temp.path().file_name().unwrap().to_string_lossy();
        assert_eq!(info.name(), expected);
        assert!(info.is_dir());
    }

    #[test]
    fn test_read_directory_fails() {
        let temp = fixture();
        let source = DirSource::new(temp.path());

        let mut dir = source.open("nested").unwrap();
        let err = dir.read(&mut [0; 8]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::IsADirectory);
    }

    #[test]
    fn test_readdir_all() {
        let temp = fixture();
        let source = DirSource::new(temp.path());

        let mut dir = source.open("nested").unwrap();
        let mut names: Vec<_> = dir
            .readdir(0)
            .unwrap()
            .into_iter()
            .map(|info| info.name().to_string())
            .collect();
        names.sort();
        assert_eq!(names, ["a.txt", "b.txt"]);

        // Exhausted, unlimited read is an empty success.
        assert!(dir.readdir(0).unwrap().is_empty());
    }

    #[test]
    fn test_readdir_limited_then_exhausted() {
        let temp = fixture();
        let source = DirSource::new(temp.path());

        let mut dir = source.open("nested").unwrap();
        assert_eq!(dir.readdir(1).unwrap().len(), 1);
        assert_eq!(dir.readdir(5).unwrap().len(), 1);

        let err = dir.readdir(1).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_readdir_on_file_fails() {
        let temp = fixture();
        let source = DirSource::new(temp.path());

        let mut file = source.open("test").unwrap();
        let err = file.readdir(0).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotADirectory);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_readdir_skips_removed_entries() {
        let temp = TempDir::new().unwrap();
        for name in ["a", "b", "c"] {
            fs::write(temp.path().join(name), name).unwrap();
        }
        let source = DirSource::new(temp.path());

        let mut dir = source.open(".").unwrap();
        let first = dir.readdir(1).unwrap();
        assert_eq!(first.len(), 1);

        for name in ["a", "b", "c"] {
            fs::remove_file(temp.path().join(name)).unwrap();
        }
        assert!(dir.readdir(0).unwrap().is_empty());
    }

    #[test]
    fn test_entry_name_fallbacks() {
        assert_eq!(entry_name(Path::new("a/b")), "b");
        assert_eq!(entry_name(Path::new(".")), ".");
        assert_eq!(entry_name(Path::new("/")), "/");
    }
}
