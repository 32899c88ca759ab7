//! distbuild - production build for a static site.

use anyhow::{Context, Result};
use clap::Parser;
use distbuild::{BuildConfig, build, cli::Cli, log};

fn main() -> Result<()> {
    Cli::parse();

    let root = std::env::current_dir().context("Failed to get current working directory")?;
    let config = BuildConfig::load(&root)?;

    log!("build"; "building for production...");
    build(config)?;
    Ok(())
}
