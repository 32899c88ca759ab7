//! Build configuration.
//!
//! The defaults describe the fixed project layout. An optional `dist.toml` at
//! the project root may override individual paths; every path is relative to
//! the root.
//!
//! ```toml
//! output = "dist"                          # Rebuilt from scratch on every run
//! styles = "css/styles.css"                # Minified + hashed into dist/css/
//! script = "js/main.js"                    # Minified + hashed into dist/js/
//! entry = "index.html"                     # References rewritten, minified
//! pages = ["privacy.html", "terms.html"]   # Optional, stylesheet reference only
//! passthrough = ["robots.txt", "CNAME"]    # Optional, copied verbatim
//! assets = "assets"                        # Optional, files copied verbatim
//! ```

mod error;

pub use error::ConfigError;

use crate::{log, utils::path::normalize};
use serde::Deserialize;
use std::{
    fs,
    path::{Component, Path, PathBuf},
};

/// Name of the optional config file at the project root.
pub const CONFIG_FILE: &str = "dist.toml";

type Result<T> = std::result::Result<T, ConfigError>;

/// Source and destination paths for one build.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Project root all other paths are joined onto (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Output directory, removed and recreated on every build.
    pub output: PathBuf,

    /// Stylesheet source.
    pub styles: PathBuf,

    /// Script source.
    pub script: PathBuf,

    /// Primary HTML page.
    pub entry: PathBuf,

    /// Optional legal pages.
    pub pages: Vec<PathBuf>,

    /// Optional files copied verbatim to the output root.
    pub passthrough: Vec<PathBuf>,

    /// Optional directory whose files are copied to `output/assets/`.
    pub assets: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::new(),
            output: "dist".into(),
            styles: "css/styles.css".into(),
            script: "js/main.js".into(),
            entry: "index.html".into(),
            pages: vec!["privacy.html".into(), "terms.html".into()],
            passthrough: ["robots.txt", "sitemap.xml", "404.html", "_headers", "CNAME"]
                .into_iter()
                .map(PathBuf::from)
                .collect(),
            assets: "assets".into(),
        }
    }
}

impl BuildConfig {
    /// Default layout rooted at `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Load the configuration for the project at `root`.
    ///
    /// Reads `dist.toml` when present, otherwise uses the default layout.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        let mut config = if path.is_file() {
            Self::from_path(&path)?
        } else {
            Self::default()
        };
        config.root = root.to_path_buf();
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from file path, warning about unknown fields.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            log!("warning"; "unknown fields in {} ignored: {}", CONFIG_FILE, ignored.join(", "));
        }
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Check that every path stays inside the project and that cleaning the
    /// output directory cannot delete sources.
    pub fn validate(&self) -> Result<()> {
        let output = normalize(&self.output);
        if output.as_os_str().is_empty() {
            return Err(ConfigError::validation(
                "output",
                "must name a directory below the project root",
            ));
        }

        let singles = [
            ("output", &self.output),
            ("styles", &self.styles),
            ("script", &self.script),
            ("entry", &self.entry),
            ("assets", &self.assets),
        ];
        let lists = [("pages", &self.pages), ("passthrough", &self.passthrough)];
        let all = singles
            .into_iter()
            .chain(lists.into_iter().flat_map(|(f, v)| v.iter().map(move |p| (f, p))));

        for (field, path) in all {
            if !is_contained(path) {
                return Err(ConfigError::validation(
                    field,
                    format!("`{}` must be a relative path inside the project", path.display()),
                ));
            }
            if field != "output" && normalize(path).starts_with(&output) {
                return Err(ConfigError::validation(
                    field,
                    format!(
                        "`{}` lies inside the output directory `{}`",
                        path.display(),
                        self.output.display()
                    ),
                ));
            }
        }

        for (field, path) in [("styles", &self.styles), ("script", &self.script)] {
            if path.file_stem().is_none() || path.extension().is_none() {
                return Err(ConfigError::validation(
                    field,
                    format!("`{}` needs a file name with an extension", path.display()),
                ));
            }
        }
        Ok(())
    }

    /// Join a path with the root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// Absolute output directory.
    pub fn output_dir(&self) -> PathBuf {
        self.root_join(&self.output)
    }
}

/// Relative, without `..`, and not empty.
fn is_contained(path: &Path) -> bool {
    !path.as_os_str().is_empty()
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}
