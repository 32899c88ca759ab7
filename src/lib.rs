//! distbuild - production build step for a small static site.
//!
//! Minifies the stylesheet and script, renames them with a content hash,
//! rewrites the HTML pages that reference them, and copies static files into
//! a freshly cleaned output directory.

pub mod asset;
pub mod cli;
pub mod config;
pub mod logger;
pub mod output;
pub mod pipeline;
pub mod store;
pub mod utils;

pub use config::BuildConfig;
pub use pipeline::{BuildError, BuildPipeline, BuildReport, build};
