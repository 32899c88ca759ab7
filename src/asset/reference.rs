//! Rewriting HTML references to hashed asset filenames.
//!
//! Replacement is an exact literal substitution of the attribute text
//! (`href="css/styles.css"`, `src="js/main.js"`), first occurrence only.
//! No HTML parsing is performed.

/// A single `from -> to` literal substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub from: String,
    pub to: String,
}

impl Reference {
    /// Reference for an attribute value: `{attr}="{original}"` -> `{attr}="{hashed}"`.
    pub fn attribute(attr: &str, original: &str, hashed: &str) -> Self {
        Self {
            from: format!(r#"{attr}="{original}""#),
            to: format!(r#"{attr}="{hashed}""#),
        }
    }

    /// Replace the first occurrence. Missing references leave the text unchanged.
    pub fn apply(&self, html: &str) -> String {
        html.replacen(&self.from, &self.to, 1)
    }
}

/// Which references a page gets rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// Primary entry page: stylesheet and script.
    Entry,
    /// Legal pages only reference the stylesheet.
    Legal,
}

/// Unhashed -> hashed mapping for the stylesheet and script of one build run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceMap {
    pub styles: Reference,
    pub script: Reference,
}

impl ReferenceMap {
    pub fn new(styles: Reference, script: Reference) -> Self {
        Self { styles, script }
    }

    /// Rewrite the references relevant to `kind`.
    pub fn rewrite(&self, html: &str, kind: PageKind) -> String {
        let html = self.styles.apply(html);
        match kind {
            PageKind::Entry => self.script.apply(&html),
            PageKind::Legal => html,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map() -> ReferenceMap {
        ReferenceMap::new(
            Reference::attribute("href", "css/styles.css", "css/styles.abc123.css"),
            Reference::attribute("src", "js/main.js", "js/main.def456.js"),
        )
    }

    #[test]
    fn test_attribute_reference() {
        let r = Reference::attribute("href", "css/styles.css", "css/styles.x.css");
        assert_eq!(r.from, r#"href="css/styles.css""#);
        assert_eq!(r.to, r#"href="css/styles.x.css""#);
    }

    #[test]
    fn test_rewrite_entry_only_touches_references() {
        let html = r#"<head><link rel="stylesheet" href="css/styles.css"></head><body><script src="js/main.js"></script></body>"#;
        let expected = r#"<head><link rel="stylesheet" href="css/styles.abc123.css"></head><body><script src="js/main.def456.js"></script></body>"#;
        assert_eq!(map().rewrite(html, PageKind::Entry), expected);
    }

    #[test]
    fn test_rewrite_first_occurrence_only() {
        let html = r#"<link href="css/styles.css"><link href="css/styles.css">"#;
        assert_eq!(
            map().rewrite(html, PageKind::Entry),
            r#"<link href="css/styles.abc123.css"><link href="css/styles.css">"#
        );
    }

    #[test]
    fn test_rewrite_legal_skips_script() {
        let html = r#"<link href="css/styles.css"><script src="js/main.js"></script>"#;
        assert_eq!(
            map().rewrite(html, PageKind::Legal),
            r#"<link href="css/styles.abc123.css"><script src="js/main.js"></script>"#
        );
    }

    #[test]
    fn test_rewrite_without_references() {
        let html = "<p>css/styles.css</p>";
        assert_eq!(map().rewrite(html, PageKind::Entry), html);
    }

    #[test]
    fn test_rewrite_requires_exact_attribute() {
        // Single quotes and absolute paths are not matched
        let html = "<link href='css/styles.css'><link href=\"/css/styles.css\">";
        assert_eq!(map().rewrite(html, PageKind::Entry), html);
    }
}
