//! Text asset handling: kinds, minification, and reference rewriting.

mod kind;
pub mod minify;
pub mod reference;

pub use kind::{AssetKind, SourceAsset};
pub use minify::{minify, minify_css, minify_html, minify_js};
pub use reference::{PageKind, Reference, ReferenceMap};
