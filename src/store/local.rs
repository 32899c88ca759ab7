//! Local file system store.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::FileStore;

/// [`FileStore`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    pub const fn new() -> Self {
        Self
    }
}

impl FileStore for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        fs::write(path, contents)
    }

    fn copy(&self, from: &Path, to: &Path) -> io::Result<u64> {
        fs::copy(from, to)
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::remove_dir_all(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                files.push(entry.path());
            }
        }
        files.sort();
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_read_copy() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFs::new();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");

        fs.write(&a, b"hello").unwrap();
        assert_eq!(fs.read(&a).unwrap(), b"hello");
        assert_eq!(fs.copy(&a, &b).unwrap(), 5);
        assert_eq!(fs.read(&b).unwrap(), b"hello");
    }

    #[test]
    fn test_list_files_is_shallow_and_sorted() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFs::new();
        fs.write(&dir.path().join("b.png"), b"b").unwrap();
        fs.write(&dir.path().join("a.svg"), b"a").unwrap();
        fs.create_dir_all(&dir.path().join("nested")).unwrap();
        fs.write(&dir.path().join("nested/c.txt"), b"c").unwrap();

        let files = fs.list_files(dir.path()).unwrap();
        assert_eq!(
            files,
            vec![dir.path().join("a.svg"), dir.path().join("b.png")]
        );
    }

    #[test]
    fn test_remove_and_create() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFs::new();
        let nested = dir.path().join("out/css");

        fs.create_dir_all(&nested).unwrap();
        assert!(fs.is_dir(&nested));
        fs.remove_dir_all(&dir.path().join("out")).unwrap();
        assert!(!fs.exists(&nested));
    }

    #[test]
    fn test_read_missing() {
        let dir = TempDir::new().unwrap();
        let err = LocalFs.read(&dir.path().join("missing")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
