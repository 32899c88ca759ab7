//! File store abstraction used by the build pipeline.
//!
//! Implementations:
//! - [`LocalFs`] - standard file I/O
//! - [`MemoryFs`] - in-memory tree for isolated tests

mod local;
mod memory;

pub use local::LocalFs;
pub use memory::MemoryFs;

use std::io;
use std::path::{Path, PathBuf};

/// Abstract file store.
///
/// Every fallible operation reports the underlying `io::Error` unchanged;
/// callers attach the path and action.
pub trait FileStore {
    /// Whether a file or directory exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Whether `path` is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Read a file's bytes.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Write bytes, replacing any existing file. The parent directory must exist.
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Copy a file byte-for-byte. Returns the number of bytes copied.
    fn copy(&self, from: &Path, to: &Path) -> io::Result<u64>;

    /// Remove a directory and everything below it.
    fn remove_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Create a directory and any missing parents.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Regular files directly inside `dir`, sorted by path. Subdirectories are not listed.
    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>>;
}

impl<T: FileStore + ?Sized> FileStore for &T {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        (**self).read(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        (**self).write(path, contents)
    }

    fn copy(&self, from: &Path, to: &Path) -> io::Result<u64> {
        (**self).copy(from, to)
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        (**self).remove_dir_all(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        (**self).create_dir_all(path)
    }

    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        (**self).list_files(dir)
    }
}
