//! Content hashing for cache-busting filenames.
//!
//! A 32-bit rolling hash over UTF-16 code units (`acc = acc * 31 + unit`,
//! wrapping), rendered as lowercase base-36 and cut to 8 characters.
//! Deterministic but not collision resistant.
//!
//! # Usage
//!
//! ```ignore
//! use distbuild::utils::hash;
//!
//! let token = hash::content_hash("body{color:red}"); // -> "27p9pg"
//! let name = hash::HashedFilename::new("styles", &token, "css"); // styles.27p9pg.css
//! ```

use std::fmt;

/// Maximum length of a hash token.
pub const TOKEN_LEN: usize = 8;

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Compute the raw 32-bit accumulator for `content`.
#[inline]
pub fn compute(content: &str) -> i32 {
    content
        .encode_utf16()
        .fold(0i32, |acc, unit| acc.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// Compute the short cache-busting token for `content`.
///
/// Empty content hashes to `"0"`.
pub fn content_hash(content: &str) -> String {
    let mut token = to_base36(compute(content).unsigned_abs());
    token.truncate(TOKEN_LEN);
    token
}

fn to_base36(mut value: u32) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::with_capacity(TOKEN_LEN);
    while value > 0 {
        digits.push(BASE36_DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    // Only ASCII digits were pushed
    String::from_utf8(digits).unwrap_or_default()
}

/// A filename carrying a content hash: `{base}.{hash}.{extension}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashedFilename {
    pub base: String,
    pub hash: String,
    pub extension: String,
}

impl HashedFilename {
    pub fn new(
        base: impl Into<String>,
        hash: impl Into<String>,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            base: base.into(),
            hash: hash.into(),
            extension: extension.into(),
        }
    }

    /// Hash `content` and name it after `base` / `extension`.
    pub fn for_content(base: &str, extension: &str, content: &str) -> Self {
        Self::new(base, content_hash(content), extension)
    }
}

impl fmt::Display for HashedFilename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.base, self.hash, self.extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_content() {
        assert_eq!(compute(""), 0);
        assert_eq!(content_hash(""), "0");
    }

    #[test]
    fn test_known_values() {
        // "a" = 97 -> "2p"
        assert_eq!(content_hash("a"), "2p");
        // "ab" = 97 * 31 + 98 = 3105 -> "2e9"
        assert_eq!(compute("ab"), 3105);
        assert_eq!(content_hash("ab"), "2e9");
        assert_eq!(content_hash("body{color:red}"), "27p9pg");
    }

    #[test]
    fn test_deterministic() {
        let content = "body{color:red}.a{margin:0}";
        assert_eq!(content_hash(content), content_hash(content));
        assert_eq!(content_hash(content), content_hash(&content.to_string()));
        assert_ne!(content_hash(content), content_hash("body{color:blue}"));
    }

    #[test]
    fn test_wrapping_and_sign() {
        // Long input overflows i32 many times over
        let content = "x".repeat(10_000);
        let token = content_hash(&content);
        assert!(!token.starts_with('-'));
        assert!(token.len() <= TOKEN_LEN);
        assert!(token.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_min_value_abs() {
        assert_eq!(to_base36(i32::MIN.unsigned_abs()), "zik0zk");
        assert_eq!(to_base36(u32::MAX), "1z141z3");
    }

    #[test]
    fn test_utf16_code_units() {
        // Astral characters count as two surrogate units
        let emoji = "\u{1F600}";
        let expected = 0xD83D_i32.wrapping_mul(31).wrapping_add(0xDE00);
        assert_eq!(compute(emoji), expected);
    }

    #[test]
    fn test_hashed_filename_display() {
        let name = HashedFilename::new("styles", "abc123", "css");
        assert_eq!(name.to_string(), "styles.abc123.css");

        let name = HashedFilename::for_content("main", "js", "a");
        assert_eq!(name.to_string(), "main.2p.js");
    }
}
