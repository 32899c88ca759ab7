//! Text formatting for the build report.

/// Format a byte count as kilobytes with one decimal place.
///
/// # Examples
///
/// - `format_kb(0)` -> `"0.0KB"`
/// - `format_kb(1536)` -> `"1.5KB"`
#[inline]
pub fn format_kb(bytes: usize) -> String {
    #[allow(clippy::cast_precision_loss)] // Asset sizes are far below 2^52
    let kb = bytes as f64 / 1024.0;
    format!("{kb:.1}KB")
}

/// `1 file`, `3 files`.
pub fn file_count(count: usize) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} file{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_kb() {
        assert_eq!(format_kb(0), "0.0KB");
        assert_eq!(format_kb(100), "0.1KB");
        assert_eq!(format_kb(1024), "1.0KB");
        assert_eq!(format_kb(1536), "1.5KB");
        assert_eq!(format_kb(10 * 1024 * 1024), "10240.0KB");
    }

    #[test]
    fn test_file_count() {
        assert_eq!(file_count(0), "0 files");
        assert_eq!(file_count(1), "1 file");
        assert_eq!(file_count(4), "4 files");
    }
}
