//! Byte-oriented file access.

use std::io;
use std::path::Path;

/// Reads whole files. The store only ever needs "give me the bytes at this
/// path", so that is the entire seam.
pub trait FileSource: Send + Sync + std::fmt::Debug {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// Reads from the local filesystem. Blocking.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

impl FileSource for FsSource {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}
