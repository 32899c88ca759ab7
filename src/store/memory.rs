//! In-memory file store.

use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;

use super::FileStore;

#[derive(Debug, Default)]
struct Tree {
    files: BTreeMap<PathBuf, Vec<u8>>,
    dirs: BTreeSet<PathBuf>,
    /// Prefixes under which every mutation fails with `PermissionDenied`.
    denied: BTreeSet<PathBuf>,
}

impl Tree {
    fn check_writable(&self, path: &Path) -> io::Result<()> {
        if self.denied.iter().any(|p| path.starts_with(p)) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("write denied: {}", path.display()),
            ));
        }
        Ok(())
    }

    fn parent_exists(&self, path: &Path) -> bool {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => self.dirs.contains(parent),
            _ => true,
        }
    }
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("no such file or directory: {}", path.display()),
    )
}

/// [`FileStore`] holding the whole tree in memory.
///
/// Mirrors the local file system closely enough for pipeline tests: writes
/// need an existing parent directory and reading a directory fails.
#[derive(Debug, Default)]
pub struct MemoryFs {
    tree: RwLock<Tree>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a file, creating its parent directories.
    pub fn with_file(self, path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> Self {
        self.insert(path, contents);
        self
    }

    /// Insert or replace a file, creating its parent directories.
    pub fn insert(&self, path: impl AsRef<Path>, contents: impl AsRef<[u8]>) {
        let path = path.as_ref();
        let mut tree = self.tree.write();
        if let Some(parent) = path.parent() {
            add_dirs(&mut tree.dirs, parent);
        }
        tree.files
            .insert(path.to_path_buf(), contents.as_ref().to_vec());
    }

    /// Make every mutation at or below `prefix` fail.
    pub fn deny_writes(&self, prefix: impl Into<PathBuf>) {
        self.tree.write().denied.insert(prefix.into());
    }

    /// Contents of a file as UTF-8 text, if present.
    pub fn text(&self, path: impl AsRef<Path>) -> Option<String> {
        let tree = self.tree.read();
        let bytes = tree.files.get(path.as_ref())?;
        String::from_utf8(bytes.clone()).ok()
    }

    /// All file paths at or below `prefix`, sorted.
    pub fn files_under(&self, prefix: impl AsRef<Path>) -> Vec<PathBuf> {
        let prefix = prefix.as_ref();
        self.tree
            .read()
            .files
            .keys()
            .filter(|p| p.starts_with(prefix))
            .cloned()
            .collect()
    }
}

fn add_dirs(dirs: &mut BTreeSet<PathBuf>, path: &Path) {
    for ancestor in path.ancestors() {
        if ancestor.as_os_str().is_empty() {
            break;
        }
        dirs.insert(ancestor.to_path_buf());
    }
}

impl FileStore for MemoryFs {
    fn exists(&self, path: &Path) -> bool {
        let tree = self.tree.read();
        tree.files.contains_key(path) || tree.dirs.contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.tree.read().dirs.contains(path)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.tree
            .read()
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| not_found(path))
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let mut tree = self.tree.write();
        tree.check_writable(path)?;
        if !tree.parent_exists(path) || tree.dirs.contains(path) {
            return Err(not_found(path));
        }
        tree.files.insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }

    fn copy(&self, from: &Path, to: &Path) -> io::Result<u64> {
        let contents = self.read(from)?;
        self.write(to, &contents)?;
        Ok(contents.len() as u64)
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut tree = self.tree.write();
        tree.check_writable(path)?;
        if !tree.dirs.contains(path) {
            return Err(not_found(path));
        }
        tree.files.retain(|p, _| !p.starts_with(path));
        tree.dirs.retain(|p| !p.starts_with(path));
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut tree = self.tree.write();
        tree.check_writable(path)?;
        if tree.files.contains_key(path) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("file exists: {}", path.display()),
            ));
        }
        add_dirs(&mut tree.dirs, path);
        Ok(())
    }

    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let tree = self.tree.read();
        if !tree.dirs.contains(dir) {
            return Err(not_found(dir));
        }
        Ok(tree
            .files
            .keys()
            .filter(|p| p.parent() == Some(dir))
            .cloned()
            .collect())
    }
}
