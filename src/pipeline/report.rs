//! Per-artifact size report.

use std::fmt;
use std::path::PathBuf;

use crate::utils::{file_count, format_kb};

/// What produced an artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// Minified and renamed with a content hash.
    Hashed,
    /// HTML with rewritten references, minified.
    Page,
    /// Copied verbatim.
    Copied,
    /// The assets directory (`count` files copied).
    Assets { count: usize },
}

/// One produced output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Path relative to the output root, forward slashes.
    pub path: String,
    pub kind: ArtifactKind,
    /// Bytes written.
    pub size: usize,
    /// Bytes read, when the report shows the reduction.
    pub source_size: Option<usize>,
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind, self.source_size) {
            (ArtifactKind::Copied, _) => write!(f, "{} (copied)", self.path),
            (ArtifactKind::Assets { count }, _) => {
                write!(f, "{}/ ({} copied)", self.path, file_count(count))
            }
            (_, Some(source)) => write!(
                f,
                "{} ({}, was {})",
                self.path,
                format_kb(self.size),
                format_kb(source)
            ),
            (_, None) => write!(f, "{} ({})", self.path, format_kb(self.size)),
        }
    }
}

/// Outcome of a completed build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Output root the artifacts were written under.
    pub output: PathBuf,
    /// Artifacts in the order they were produced.
    pub artifacts: Vec<Artifact>,
}

impl BuildReport {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            artifacts: Vec::new(),
        }
    }

    pub(super) fn push(&mut self, artifact: Artifact) -> &Artifact {
        self.artifacts.push(artifact);
        &self.artifacts[self.artifacts.len() - 1]
    }

    /// Find an artifact by its output-relative path.
    pub fn get(&self, path: &str) -> Option<&Artifact> {
        self.artifacts.iter().find(|a| a.path == path)
    }

    /// Output-relative paths of all artifacts.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.artifacts.iter().map(|a| a.path.as_str())
    }
}
