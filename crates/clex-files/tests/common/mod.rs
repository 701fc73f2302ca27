//! Instrumented file sources shared by the integration tests.

#![allow(dead_code)]

use clex_files::{FileInfo, FileSource, SourceFile};
use std::io::{self, Read};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counts handles opened and released through a wrapped source.
#[derive(Debug, Default)]
pub struct HandleCounter {
    opened: AtomicUsize,
    released: AtomicUsize,
}

impl HandleCounter {
    pub fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    pub fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }

    /// Asserts that every opened handle was released exactly once.
    pub fn assert_balanced(&self, expected_opens: usize) {
        assert_eq!(self.opened(), expected_opens, "unexpected number of opens");
        assert_eq!(
            self.released(),
            self.opened(),
            "handles leaked or released twice"
        );
    }
}

/// Wraps a source and records every handle it hands out.
#[derive(Debug)]
pub struct TrackingSource<S> {
    inner: S,
    counter: Arc<HandleCounter>,
}

impl<S> TrackingSource<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            counter: Arc::new(HandleCounter::default()),
        }
    }

    pub fn counter(&self) -> Arc<HandleCounter> {
        Arc::clone(&self.counter)
    }
}

impl<S: FileSource> FileSource for TrackingSource<S> {
    type File = TrackedFile<S::File>;

    fn open(&self, path: &str) -> io::Result<Self::File> {
        let inner = self.inner.open(path)?;
        self.counter.opened.fetch_add(1, Ordering::SeqCst);
        Ok(TrackedFile {
            inner,
            counter: Arc::clone(&self.counter),
        })
    }
}

/// Handle that reports its release to a [`HandleCounter`].
#[derive(Debug)]
pub struct TrackedFile<F> {
    inner: F,
    counter: Arc<HandleCounter>,
}

impl<F: Read> Read for TrackedFile<F> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl<F: SourceFile> SourceFile for TrackedFile<F> {
    fn stat(&self) -> io::Result<FileInfo> {
        self.inner.stat()
    }

    fn readdir(&mut self, count: isize) -> io::Result<Vec<FileInfo>> {
        self.inner.readdir(count)
    }
}

impl<F> Drop for TrackedFile<F> {
    fn drop(&mut self) {
        self.counter.released.fetch_add(1, Ordering::SeqCst);
    }
}

/// Source whose every entry opens fine and then misbehaves.
///
/// Reads yield `fail_after` bytes of `payload` and then an error; `stat`
/// and `readdir` always fail.
#[derive(Debug, Clone)]
pub struct FaultySource {
    payload: Arc<[u8]>,
    fail_after: usize,
}

impl FaultySource {
    pub fn new(payload: &[u8], fail_after: usize) -> Self {
        Self {
            payload: payload.into(),
            fail_after,
        }
    }
}

impl FileSource for FaultySource {
    type File = FaultyFile;

    fn open(&self, _path: &str) -> io::Result<FaultyFile> {
        Ok(FaultyFile {
            payload: Arc::clone(&self.payload),
            fail_after: self.fail_after.min(self.payload.len()),
            pos: 0,
        })
    }
}

#[derive(Debug)]
pub struct FaultyFile {
    payload: Arc<[u8]>,
    fail_after: usize,
    pos: usize,
}

impl Read for FaultyFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.pos >= self.fail_after {
            return Err(io::Error::new(
                io::ErrorKind::ConnectionReset,
                "source went away",
            ));
        }
        let n = buf.len().min(self.fail_after - self.pos);
        buf[..n].copy_from_slice(&self.payload[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

impl SourceFile for FaultyFile {
    fn stat(&self) -> io::Result<FileInfo> {
        Err(io::Error::other("metadata unavailable"))
    }

    fn readdir(&mut self, _count: isize) -> io::Result<Vec<FileInfo>> {
        Err(io::Error::other("enumeration unavailable"))
    }
}
