//! Production build orchestration.
//!
//! Pipeline steps, in fixed order:
//! - **Reset** - remove and recreate the output tree
//! - **Styles** - read, minify, hash, write `css/<stem>.<hash>.css`
//! - **Script** - read, minify, hash, write `js/<stem>.<hash>.js`
//! - **Entry** - rewrite stylesheet + script references, minify, write
//! - **Pages** - optional legal pages, stylesheet reference only
//! - **Passthrough** - optional files copied verbatim
//! - **Assets** - files directly inside the assets directory copied verbatim
//!
//! Any error aborts the remaining steps. Optional inputs that do not exist
//! are skipped without a log line.

mod error;
mod report;

pub use error::{BuildError, Result};
pub use report::{Artifact, ArtifactKind, BuildReport};

use std::path::Path;

use crate::{
    asset::{AssetKind, PageKind, Reference, ReferenceMap, SourceAsset, minify_html},
    config::BuildConfig,
    log,
    output::OutputTree,
    store::{FileStore, LocalFs},
    utils::{
        hash::HashedFilename,
        path::{normalize, to_slash},
    },
};

/// Run the full build against the local file system.
pub fn build(config: BuildConfig) -> Result<BuildReport> {
    BuildPipeline::new(config, LocalFs).run()
}

/// A single build run over a [`FileStore`].
#[derive(Debug)]
pub struct BuildPipeline<S> {
    config: BuildConfig,
    store: S,
    quiet: bool,
}

impl<S: FileStore> BuildPipeline<S> {
    pub fn new(config: BuildConfig, store: S) -> Self {
        Self {
            config,
            store,
            quiet: false,
        }
    }

    /// Suppress console output. The returned report is unaffected.
    #[must_use]
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Execute every step in order.
    pub fn run(&self) -> Result<BuildReport> {
        let tree = OutputTree::new(self.config.output_dir());
        tree.reset(&self.store)?;

        let mut report = BuildReport::new(tree.root());

        let styles = self.read_source(&self.config.styles, AssetKind::Css)?;
        let styles_href = self.emit_hashed(&tree, &styles, &mut report)?;

        let script = self.read_source(&self.config.script, AssetKind::Js)?;
        let script_href = self.emit_hashed(&tree, &script, &mut report)?;

        let references = ReferenceMap::new(
            Reference::attribute("href", &styles.href(), &styles_href),
            Reference::attribute("src", &script.href(), &script_href),
        );

        self.emit_entry(&tree, &references, &mut report)?;
        self.emit_pages(&tree, &references, &mut report)?;
        self.copy_passthrough(&tree, &mut report)?;
        self.copy_assets(&tree, &mut report)?;

        if !self.quiet {
            log!("build"; "build complete! output in {}/", to_slash(&self.config.output));
        }
        Ok(report)
    }

    /// Read a mandatory text source. Any read failure is fatal.
    fn read_source(&self, rel: &Path, kind: AssetKind) -> Result<SourceAsset> {
        let path = self.config.root_join(rel);
        let bytes = self
            .store
            .read(&path)
            .map_err(|err| BuildError::missing(&path, err))?;
        let content = decode(&path, bytes)?;
        Ok(SourceAsset::new(rel, content, kind))
    }

    /// Read an optional text source, `None` when it does not exist.
    fn read_optional(&self, rel: &Path) -> Result<Option<String>> {
        let path = self.config.root_join(rel);
        if !self.store.exists(&path) {
            return Ok(None);
        }
        let bytes = self
            .store
            .read(&path)
            .map_err(|err| BuildError::io("read", &path, err))?;
        decode(&path, bytes).map(Some)
    }

    /// Minify, hash and write a stylesheet or script.
    ///
    /// Returns the output-relative href of the hashed file (`css/styles.<hash>.css`).
    fn emit_hashed(
        &self,
        tree: &OutputTree,
        asset: &SourceAsset,
        report: &mut BuildReport,
    ) -> Result<String> {
        let minified = asset.minify();
        let name = HashedFilename::for_content(asset.stem(), asset.extension(), &minified);
        let dir = asset.kind.output_dir().unwrap_or_default();
        let href = format!("{dir}/{name}");

        self.write(tree, Path::new(&href), minified.as_bytes())?;
        self.record(
            report,
            asset.kind.label(),
            Artifact {
                path: href.clone(),
                kind: ArtifactKind::Hashed,
                size: minified.len(),
                source_size: Some(asset.content.len()),
            },
        );
        Ok(href)
    }

    /// Rewrite, minify and write the primary page.
    fn emit_entry(
        &self,
        tree: &OutputTree,
        references: &ReferenceMap,
        report: &mut BuildReport,
    ) -> Result<()> {
        let entry = self.read_source(&self.config.entry, AssetKind::Html)?;
        let rewritten = references.rewrite(&entry.content, PageKind::Entry);
        let minified = minify_html(&rewritten);
        let rel = normalize(&self.config.entry);

        self.write(tree, &rel, minified.as_bytes())?;
        self.record(
            report,
            "html",
            Artifact {
                path: to_slash(&rel),
                kind: ArtifactKind::Page,
                size: minified.len(),
                source_size: Some(rewritten.len()),
            },
        );
        Ok(())
    }

    /// Rewrite, minify and write each legal page that exists.
    fn emit_pages(
        &self,
        tree: &OutputTree,
        references: &ReferenceMap,
        report: &mut BuildReport,
    ) -> Result<()> {
        for page in &self.config.pages {
            let Some(html) = self.read_optional(page)? else {
                continue;
            };
            let minified = minify_html(&references.rewrite(&html, PageKind::Legal));
            let rel = normalize(page);

            self.write(tree, &rel, minified.as_bytes())?;
            self.record(
                report,
                "html",
                Artifact {
                    path: to_slash(&rel),
                    kind: ArtifactKind::Page,
                    size: minified.len(),
                    source_size: None,
                },
            );
        }
        Ok(())
    }

    /// Copy each passthrough file that exists, unmodified.
    fn copy_passthrough(&self, tree: &OutputTree, report: &mut BuildReport) -> Result<()> {
        for file in &self.config.passthrough {
            let source = self.config.root_join(file);
            if !self.store.exists(&source) {
                continue;
            }
            let rel = normalize(file);
            let size = self.copy(tree, &source, &rel)?;
            self.record(
                report,
                "copy",
                Artifact {
                    path: to_slash(&rel),
                    kind: ArtifactKind::Copied,
                    size,
                    source_size: None,
                },
            );
        }
        Ok(())
    }

    /// Copy files directly inside the assets directory. Subdirectories are skipped.
    fn copy_assets(&self, tree: &OutputTree, report: &mut BuildReport) -> Result<()> {
        let source_dir = self.config.root_join(&self.config.assets);
        if !self.store.is_dir(&source_dir) {
            return Ok(());
        }

        let files = self
            .store
            .list_files(&source_dir)
            .map_err(|err| BuildError::io("list", &source_dir, err))?;

        let mut total = 0;
        for file in &files {
            let Some(name) = file.file_name() else {
                continue;
            };
            total += self.copy(tree, file, &Path::new("assets").join(name))?;
        }

        self.record(
            report,
            "assets",
            Artifact {
                path: "assets".into(),
                kind: ArtifactKind::Assets { count: files.len() },
                size: total,
                source_size: None,
            },
        );
        Ok(())
    }

    /// Write `contents` to `rel` inside the output tree, creating nested parents.
    fn write(&self, tree: &OutputTree, rel: &Path, contents: &[u8]) -> Result<()> {
        let path = tree.join(rel);
        self.ensure_parent(&path)?;
        self.store
            .write(&path, contents)
            .map_err(|err| BuildError::io("write", &path, err))
    }

    /// Copy `source` to `rel` inside the output tree. Returns bytes copied.
    fn copy(&self, tree: &OutputTree, source: &Path, rel: &Path) -> Result<usize> {
        let dest = tree.join(rel);
        self.ensure_parent(&dest)?;
        let size = self
            .store
            .copy(source, &dest)
            .map_err(|err| BuildError::io("copy", source, err))?;
        Ok(usize::try_from(size).unwrap_or(usize::MAX))
    }

    fn ensure_parent(&self, path: &Path) -> Result<()> {
        match path.parent() {
            Some(parent) if !self.store.is_dir(parent) => self
                .store
                .create_dir_all(parent)
                .map_err(|err| BuildError::io("create", parent, err)),
            _ => Ok(()),
        }
    }

    fn record(&self, report: &mut BuildReport, module: &str, artifact: Artifact) {
        let artifact = report.push(artifact);
        if !self.quiet {
            log!(module; "{}", artifact);
        }
    }
}

fn decode(path: &Path, bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|source| BuildError::InvalidUtf8 {
        path: path.to_path_buf(),
        source,
    })
}
