//! `idxmirror url <URL>` – mirror an index URL that is not in the config.

use anyhow::{Context, Result};
use idxmirror_core::config::MirrorConfig;
use idxmirror_core::mirror::Mirror;
use idxmirror_core::sources::Source;
use idxmirror_core::transport::CurlFetcher;
use std::io::Write;
use std::path::Path;

use super::print_summary;

pub fn run_url(
    cfg: &MirrorConfig,
    url: &str,
    prefix: Option<&str>,
    name: Option<&str>,
    save_path: &Path,
    progress: Box<dyn Write>,
) -> Result<()> {
    let source = Source::ad_hoc(url, prefix, name)?;
    let mut mirror = Mirror::new(CurlFetcher::new(cfg.http()), progress);
    let stats = mirror
        .run(&source, save_path)
        .with_context(|| format!("mirroring {} aborted", source.url))?;
    print_summary(&stats);
    Ok(())
}
