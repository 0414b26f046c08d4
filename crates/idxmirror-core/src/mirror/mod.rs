//! Traversal engine: depth-first descent over directory-index pages.
//!
//! For each directory the engine prints its progress line, lists it, creates
//! the local directory, then walks the entries in listing order. Directory
//! entries recurse immediately; file entries go to the download executor.
//! Exactly one request is in flight at a time and the first error aborts the
//! whole run, leaving already-completed work on disk.

mod context;
mod filter;
mod stats;

pub use context::TraversalContext;
pub use filter::{exclusion, Exclusion};
pub use stats::MirrorStats;

use crate::downloader::{download_file, FileOutcome};
use crate::error::MirrorError;
use crate::listing::{resolve_listing, NodeKind, RemoteNode};
use crate::progress::TreePrinter;
use crate::sources::Source;
use crate::storage;
use crate::transport::Fetcher;
use crate::url_model::{join_url, local_child_path};
use std::collections::HashSet;
use std::io::Write;
use std::path::Path;

pub struct Mirror<F: Fetcher, W: Write> {
    fetcher: F,
    progress: TreePrinter<W>,
    /// Directory and file URLs already handled in this run.
    visited: HashSet<String>,
    stats: MirrorStats,
}

impl<F: Fetcher, W: Write> Mirror<F, W> {
    pub fn new(fetcher: F, progress: W) -> Self {
        Self {
            fetcher,
            progress: TreePrinter::new(progress),
            visited: HashSet::new(),
            stats: MirrorStats::default(),
        }
    }

    /// Mirrors `source` into `<base_dir>/<source.name>`.
    pub fn run(&mut self, source: &Source, base_dir: &Path) -> Result<MirrorStats, MirrorError> {
        let ctx = TraversalContext::root(
            source.url.clone(),
            base_dir.join(&source.name),
            source.prefix.clone(),
        );
        self.run_from(&ctx)
    }

    /// Mirrors starting at an explicit root context. Counters start from zero.
    pub fn run_from(&mut self, root: &TraversalContext) -> Result<MirrorStats, MirrorError> {
        self.visited.clear();
        self.stats = MirrorStats::default();
        tracing::info!(url = %root.remote_url, dest = %root.local_path.display(), prefix = %root.prefix, "mirror started");
        self.traverse(root)?;
        tracing::info!(
            directories = self.stats.directories,
            downloaded = self.stats.files_downloaded,
            skipped = self.stats.files_skipped,
            bytes = self.stats.bytes_downloaded,
            "mirror finished"
        );
        Ok(self.stats)
    }

    pub fn stats(&self) -> MirrorStats {
        self.stats
    }

    pub fn progress(&self) -> &W {
        self.progress.get_ref()
    }

    pub fn into_parts(self) -> (F, W) {
        (self.fetcher, self.progress.into_inner())
    }

    fn traverse(&mut self, ctx: &TraversalContext) -> Result<(), MirrorError> {
        self.progress.directory(&ctx.local_path, ctx.depth);
        self.visited.insert(ctx.remote_url.clone());

        // Listing comes first: a failed root fetch leaves nothing on disk.
        let entries = resolve_listing(&self.fetcher, &ctx.remote_url)?;
        storage::ensure_dir(&ctx.local_path)?;
        self.stats.directories += 1;

        for entry in entries {
            if let Some(reason) = exclusion(ctx, &entry) {
                tracing::debug!(href = %entry.href, %reason, "entry excluded");
                self.stats.entries_excluded += 1;
                continue;
            }

            let url = join_url(&ctx.remote_url, &entry.href)?;
            let node = RemoteNode::classify(url, entry.href);
            let Some(local_path) = local_child_path(&ctx.local_path, &node.relative_name) else {
                tracing::warn!(href = %node.relative_name, dir = %ctx.local_path.display(), "href escapes the mirror directory, skipping");
                self.stats.entries_excluded += 1;
                continue;
            };
            if self.visited.contains(&node.url) {
                tracing::debug!(href = %node.relative_name, url = %node.url, "already visited in this run, skipping");
                self.stats.entries_excluded += 1;
                continue;
            }

            match node.kind {
                NodeKind::Directory => {
                    let child = ctx.child(node.url, local_path);
                    self.traverse(&child)?;
                }
                NodeKind::File => {
                    self.visited.insert(node.url.clone());
                    let outcome = download_file(
                        &self.fetcher,
                        &node.url,
                        &local_path,
                        ctx.depth,
                        &mut self.progress,
                    )?;
                    match outcome {
                        FileOutcome::Downloaded(bytes) => {
                            self.stats.files_downloaded += 1;
                            self.stats.bytes_downloaded += bytes;
                        }
                        FileOutcome::Skipped => self.stats.files_skipped += 1,
                    }
                }
            }
        }

        Ok(())
    }
}
