//! Path display and normalization helpers.

use std::path::{Component, Path, PathBuf};

/// Render a relative path with forward slashes, as used in HTML and reports.
///
/// # Example
/// ```ignore
/// assert_eq!(to_slash(Path::new("css/styles.css")), "css/styles.css");
/// ```
pub fn to_slash(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Keep only the named components of a relative path.
///
/// `./css/styles.css` becomes `css/styles.css` and `.` becomes empty. Root and
/// `..` components are dropped too, so callers validate containment first.
pub fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_to_slash() {
        assert_eq!(to_slash(Path::new("index.html")), "index.html");
        assert_eq!(to_slash(Path::new("css/styles.css")), "css/styles.css");
        let joined: PathBuf = ["js", "main.js"].iter().collect();
        assert_eq!(to_slash(&joined), "js/main.js");
    }

    #[test]
    fn test_to_slash_skips_cur_dir_noise() {
        // `Path::components` normalizes interior `.` away
        assert_eq!(to_slash(Path::new("css/./styles.css")), "css/styles.css");
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(Path::new("./css")), PathBuf::from("css"));
        assert_eq!(normalize(Path::new("./css/./styles.css")), PathBuf::from("css/styles.css"));
        assert_eq!(normalize(Path::new(".")), PathBuf::new());
        assert_eq!(normalize(Path::new("./")), PathBuf::new());
    }
}
