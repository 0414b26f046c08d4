//! `idxmirror sources` – list configured sources.

use anyhow::Result;
use idxmirror_core::config::MirrorConfig;
use idxmirror_core::sources::SourceCatalog;

pub fn run_sources(cfg: &MirrorConfig) -> Result<()> {
    let catalog = SourceCatalog::from_config(cfg)?;
    if catalog.is_empty() {
        println!("No sources configured.");
        return Ok(());
    }
    println!("{:<10} {:<28} {}", "NAME", "PREFIX", "URL");
    for s in catalog.iter() {
        let prefix = if s.prefix.is_empty() { "-" } else { s.prefix.as_str() };
        println!("{:<10} {:<28} {}", s.name, prefix, s.url);
    }
    Ok(())
}
