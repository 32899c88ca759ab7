//! Heuristic text minification for CSS, JS and HTML.
//!
//! Each minifier is a fixed sequence of regex passes, every pass operating on
//! the previous pass's output. The passes are lexical only: symbols inside
//! string literals, URLs or quoted content are rewritten like code.
//!
//! Whitespace follows the ECMAScript `\s` class rather than Unicode
//! `White_Space`: U+FEFF counts as whitespace and U+0085 does not. Line starts
//! follow ECMAScript multiline `^`, which also matches after a lone `\r`.
//! Output, and the hashed names derived from it, agree with the same passes
//! run under a JavaScript engine.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use super::AssetKind;

/// Body of a character class for ECMAScript whitespace.
macro_rules! ws {
    () => {
        r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}"
    };
}

/// `/* ... */`, non-greedy, spanning lines. Shared by CSS and JS.
static BLOCK_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/\*[\s\S]*?\*/").unwrap());

static CSS_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(concat!("[", ws!(), "]+")).unwrap());
static CSS_SYMBOL_SPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!("[", ws!(), "]*([{}:;,>~+])[", ws!(), "]*")).unwrap()
});

static JS_LINE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"//[^\n\r\x{2028}\x{2029}]*").unwrap());
static JS_BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(concat!(r"\n[", ws!(), r"]*\n")).unwrap());
/// Whitespace at a line start. Group 1 holds the terminator and is kept.
static JS_LEADING_SPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(r"(\A|[\n\r\x{2028}\x{2029}])[", ws!(), "]+")).unwrap()
});

static HTML_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<!--[\s\S]*?-->").unwrap());
static HTML_INDENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(concat!(r"\n[", ws!(), "]+")).unwrap());
static HTML_BLANK_LINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{2,}").unwrap());

/// Minify `source` with the rule set for `kind`.
pub fn minify(kind: AssetKind, source: &str) -> String {
    match kind {
        AssetKind::Css => minify_css(source),
        AssetKind::Js => minify_js(source),
        AssetKind::Html => minify_html(source),
    }
}

/// Minify a stylesheet.
///
/// 1. strip block comments
/// 2. collapse whitespace runs to one space
/// 3. drop whitespace around `{ } : ; , > ~ +`
/// 4. `;}` -> `}`
/// 5. trim
pub fn minify_css(source: &str) -> String {
    let css = BLOCK_COMMENT.replace_all(source, "");
    let css = CSS_WHITESPACE.replace_all(&css, " ");
    let css = CSS_SYMBOL_SPACE.replace_all(&css, "${1}");
    css.replace(";}", "}").trim_matches(is_space).to_string()
}

/// Minify a script.
///
/// Strips `//` and `/* */` comments, blank lines and indentation. A `//`
/// inside a string literal still starts a comment.
pub fn minify_js(source: &str) -> String {
    let js = JS_LINE_COMMENT.replace_all(source, "");
    let js = BLOCK_COMMENT.replace_all(&js, "");
    let js = JS_BLANK_LINES.replace_all(&js, "\n");
    let js = JS_LEADING_SPACE.replace_all(&js, "${1}");
    trimmed(js)
}

/// Minify an HTML document.
///
/// Every `<!-- -->` comment is removed, conditional comments included.
pub fn minify_html(source: &str) -> String {
    let html = HTML_COMMENT.replace_all(source, "");
    let html = HTML_INDENT.replace_all(&html, "\n");
    let html = HTML_BLANK_LINES.replace_all(&html, "\n");
    trimmed(html)
}

#[inline]
fn trimmed(text: Cow<'_, str>) -> String {
    text.trim_matches(is_space).to_string()
}

/// Same set as the `ws!` class.
const fn is_space(c: char) -> bool {
    matches!(
        c,
        '\t'
            | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}
