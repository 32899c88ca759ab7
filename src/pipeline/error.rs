//! Build error types.

use std::io;
use std::path::{Path, PathBuf};
use std::string::FromUtf8Error;

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that abort a build.
#[derive(Debug, Error)]
pub enum BuildError {
    /// A mandatory source (stylesheet, script, entry page) could not be read.
    #[error("required source `{path}` could not be read")]
    MissingSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("source `{path}` is not valid UTF-8")]
    InvalidUtf8 {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },

    #[error("failed to {action} `{path}`")]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl BuildError {
    pub fn io(action: &'static str, path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            action,
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn missing(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::MissingSource {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

/// Result type for build operations.
pub type Result<T> = std::result::Result<T, BuildError>;
