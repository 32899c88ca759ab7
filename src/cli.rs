//! Command-line interface definition.
//!
//! The build takes no options; only `--help` and `--version` are accepted.

use clap::Parser;

/// Production build: minify, fingerprint and copy the site into `dist/`
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {}
