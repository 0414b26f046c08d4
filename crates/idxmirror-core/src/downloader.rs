//! Download executor: materializes one remote file at a local path, idempotently.

use crate::error::MirrorError;
use crate::progress::TreePrinter;
use crate::storage::PartFile;
use crate::transport::Fetcher;
use std::io::Write;
use std::path::Path;

/// What happened to one file node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Fetched and written; carries the body size in bytes.
    Downloaded(u64),
    /// Target already existed; no request was made.
    Skipped,
}

/// Prints the file's progress line, then downloads `url` to `local_path` unless
/// that path already exists.
///
/// The body goes to a hidden temp file beside `local_path` and is moved onto it
/// on success; on any failure the temp file is removed and the error is returned.
pub fn download_file<F, W>(
    fetcher: &F,
    url: &str,
    local_path: &Path,
    depth: usize,
    progress: &mut TreePrinter<W>,
) -> Result<FileOutcome, MirrorError>
where
    F: Fetcher + ?Sized,
    W: Write,
{
    progress.file(local_path, depth);

    if local_path.exists() {
        tracing::debug!(path = %local_path.display(), "already present, skipping");
        return Ok(FileOutcome::Skipped);
    }

    let mut part = PartFile::create(local_path)?;
    let temp = part.temp_path().to_path_buf();
    match fetcher.fetch(url, &mut part) {
        Ok(bytes) => {
            let path = part.finalize()?;
            tracing::info!(url, path = %path.display(), bytes, "downloaded");
            Ok(FileOutcome::Downloaded(bytes))
        }
        Err(e) => {
            part.discard();
            Err(e.attribute(url, Some(temp.as_path())))
        }
    }
}
