//! `idxmirror mirror <source>` – mirror a configured source.

use anyhow::{Context, Result};
use idxmirror_core::config::MirrorConfig;
use idxmirror_core::mirror::Mirror;
use idxmirror_core::sources::SourceCatalog;
use idxmirror_core::transport::CurlFetcher;
use std::io::Write;
use std::path::Path;

use super::print_summary;

pub fn run_mirror(
    cfg: &MirrorConfig,
    source: &str,
    save_path: &Path,
    progress: Box<dyn Write>,
) -> Result<()> {
    let catalog = SourceCatalog::from_config(cfg)?;
    let source = catalog.resolve(source)?;
    tracing::info!(source = %source.name, url = %source.url, "mirroring source");

    let mut mirror = Mirror::new(CurlFetcher::new(cfg.http()), progress);
    let stats = mirror
        .run(source, save_path)
        .with_context(|| format!("mirroring `{}` aborted", source.name))?;
    print_summary(&stats);
    Ok(())
}
