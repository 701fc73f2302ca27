//! Copy, list and stat over read-only file sources.
//!
//! A [`FileSource`] is any provider that opens paths into readable
//! [`SourceFile`] handles. [`FileSystem`] wraps one and adds three
//! operations:
//!
//! - [`FileSystem::copy`] copies a source file onto the local file system
//! - [`FileSystem::readdir`] lists directory entries
//! - [`FileSystem::stats`] returns metadata for a path
//!
//! Two sources are bundled: [`DirSource`] serves a host directory and
//! [`MemorySource`] serves files held in memory.
//!
//! # Examples
//!
//! ```
//! use clex_files::{DirSource, FileSystem};
//! # use tempfile::TempDir;
//!
//! # let testdata = TempDir::new().unwrap();
//! # std::fs::write(testdata.path().join("test"), "content").unwrap();
//! # let out = TempDir::new().unwrap();
//! let fs = FileSystem::new(DirSource::new(testdata.path()));
//!
//! fs.copy(out.path().join("test"), "test")?;
//!
//! let entries = fs.readdir(".", 0)?;
//! assert_eq!(entries.len(), 1);
//!
//! let info = fs.stats("test")?;
//! assert_eq!(info.name(), "test");
//! # Ok::<(), clex_files::FilesError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod builder;
pub mod dir;
pub mod error;
pub mod filesystem;
pub mod memory;
pub mod source;
pub mod types;

pub use builder::MemorySourceBuilder;
pub use dir::{DirFile, DirSource};
pub use error::{FilesError, Result};
pub use filesystem::FileSystem;
pub use memory::{MemoryFile, MemorySource};
pub use source::{FileSource, SourceFile, end_of_entries};
pub use types::{FileInfo, SourcePath};
