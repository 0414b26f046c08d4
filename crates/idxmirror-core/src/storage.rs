//! Local file lifecycle for downloads.
//!
//! Bytes go to a hidden temp file next to the target (`.<name>.XXXXXX.part`) and
//! are persisted onto the target only after the transfer finished, so an existing
//! target is always a complete file. The temp file is created exclusively and
//! never truncates an entry mirrored from the same listing.

use crate::error::MirrorError;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};

/// Suffix of in-progress download files.
pub const TEMP_SUFFIX: &str = ".part";

/// Creates `dir` if it does not exist yet. An existing directory is not an error.
pub fn ensure_dir(dir: &Path) -> Result<(), MirrorError> {
    if dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|e| MirrorError::local_io(dir, e))
}

/// An in-progress download written sequentially to its temp file.
///
/// Dropping it without [`PartFile::finalize`] removes the temp file.
pub struct PartFile {
    writer: BufWriter<NamedTempFile>,
    final_path: PathBuf,
}

impl PartFile {
    /// Creates a fresh temp file in the directory of `final_path`.
    pub fn create(final_path: &Path) -> Result<Self, MirrorError> {
        let name = final_path.file_name().ok_or_else(|| {
            MirrorError::local_io(
                final_path,
                io::Error::new(io::ErrorKind::InvalidInput, "target has no file name"),
            )
        })?;
        let dir = match final_path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut prefix = std::ffi::OsString::from(".");
        prefix.push(name);
        prefix.push(".");

        let file = Builder::new()
            .prefix(&prefix)
            .suffix(TEMP_SUFFIX)
            .tempfile_in(dir)
            .map_err(|e| MirrorError::local_io(final_path, e))?;
        Ok(PartFile {
            writer: BufWriter::new(file),
            final_path: final_path.to_path_buf(),
        })
    }

    pub fn temp_path(&self) -> &Path {
        self.writer.get_ref().path()
    }

    /// Flush, sync, and move onto the final path. Consumes the part file.
    /// On any failure the temp file is removed.
    pub fn finalize(self) -> Result<PathBuf, MirrorError> {
        let PartFile { writer, final_path } = self;
        let temp = writer.into_inner().map_err(|e| {
            let (err, w) = e.into_parts();
            let path = w.get_ref().path().to_path_buf();
            MirrorError::local_io(path, err)
        })?;
        temp.as_file()
            .sync_all()
            .map_err(|e| MirrorError::local_io(temp.path(), e))?;

        temp.persist(&final_path)
            .map_err(|e| MirrorError::local_io(&final_path, e.error))?;
        Ok(final_path)
    }

    /// Remove the temp file after a failed transfer (best-effort).
    pub fn discard(self) {
        let (temp, _unflushed) = self.writer.into_parts();
        let path = temp.path().to_path_buf();
        if let Err(e) = temp.close() {
            tracing::warn!(path = %path.display(), "could not remove partial file: {}", e);
        }
    }
}

impl Write for PartFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
