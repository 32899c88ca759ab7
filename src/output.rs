//! Output directory lifecycle.

use std::path::{Path, PathBuf};

use crate::pipeline::{BuildError, Result};
use crate::store::FileStore;

/// Subdirectories every build starts with.
pub const SUBDIRS: [&str; 3] = ["css", "js", "assets"];

/// The destination tree `{root, css/, js/, assets/}`.
#[derive(Debug, Clone)]
pub struct OutputTree {
    root: PathBuf,
}

impl OutputTree {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of `name` relative to the output root.
    pub fn join(&self, name: impl AsRef<Path>) -> PathBuf {
        self.root.join(name)
    }

    pub fn css_dir(&self) -> PathBuf {
        self.root.join("css")
    }

    pub fn js_dir(&self) -> PathBuf {
        self.root.join("js")
    }

    pub fn assets_dir(&self) -> PathBuf {
        self.root.join("assets")
    }

    /// Remove the tree if present, then recreate it empty.
    pub fn reset(&self, store: &impl FileStore) -> Result<()> {
        if store.exists(&self.root) {
            store
                .remove_dir_all(&self.root)
                .map_err(|err| BuildError::io("remove", &self.root, err))?;
        }
        store
            .create_dir_all(&self.root)
            .map_err(|err| BuildError::io("create", &self.root, err))?;
        for sub in SUBDIRS {
            let dir = self.root.join(sub);
            store
                .create_dir_all(&dir)
                .map_err(|err| BuildError::io("create", &dir, err))?;
        }
        Ok(())
    }
}
