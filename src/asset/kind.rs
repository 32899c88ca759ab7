//! Source asset kinds.

use std::path::{Path, PathBuf};

use crate::utils::path::to_slash;

/// Kind of text asset the pipeline minifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Css,
    Js,
    Html,
}

impl AssetKind {
    /// Detect the kind from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "css" => Some(Self::Css),
            "js" | "mjs" => Some(Self::Js),
            "html" | "htm" => Some(Self::Html),
            _ => None,
        }
    }

    /// Output subdirectory for hashed assets (`None` for HTML, which lands at the root).
    pub const fn output_dir(self) -> Option<&'static str> {
        match self {
            Self::Css => Some("css"),
            Self::Js => Some("js"),
            Self::Html => None,
        }
    }

    /// Module prefix used in log lines.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Js => "js",
            Self::Html => "html",
        }
    }
}

/// A source file read into memory. Immutable once read.
#[derive(Debug, Clone)]
pub struct SourceAsset {
    /// Path relative to the project root, e.g. `css/styles.css`.
    pub name: PathBuf,
    pub content: String,
    pub kind: AssetKind,
}

impl SourceAsset {
    pub fn new(name: impl Into<PathBuf>, content: String, kind: AssetKind) -> Self {
        Self {
            name: name.into(),
            content,
            kind,
        }
    }

    /// Minify according to kind.
    pub fn minify(&self) -> String {
        super::minify::minify(self.kind, &self.content)
    }

    /// File stem used as the hashed filename base (`styles` for `css/styles.css`).
    pub fn stem(&self) -> &str {
        self.name
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
    }

    /// Extension used for the hashed filename (`css` for `css/styles.css`).
    pub fn extension(&self) -> &str {
        self.name
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
    }

    /// Forward-slash form of the source path, as referenced from HTML.
    pub fn href(&self) -> String {
        to_slash(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(AssetKind::from_path(Path::new("css/styles.css")), Some(AssetKind::Css));
        assert_eq!(AssetKind::from_path(Path::new("js/main.JS")), Some(AssetKind::Js));
        assert_eq!(AssetKind::from_path(Path::new("index.html")), Some(AssetKind::Html));
        assert_eq!(AssetKind::from_path(Path::new("robots.txt")), None);
        assert_eq!(AssetKind::from_path(Path::new("CNAME")), None);
    }

    #[test]
    fn test_source_asset_names() {
        let asset = SourceAsset::new("css/styles.css", String::new(), AssetKind::Css);
        assert_eq!(asset.stem(), "styles");
        assert_eq!(asset.extension(), "css");
        assert_eq!(asset.href(), "css/styles.css");
    }

    #[test]
    fn test_output_dir() {
        assert_eq!(AssetKind::Css.output_dir(), Some("css"));
        assert_eq!(AssetKind::Js.output_dir(), Some("js"));
        assert_eq!(AssetKind::Html.output_dir(), None);
    }
}
