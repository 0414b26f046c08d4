//! Error taxonomy for a mirroring run.
//!
//! Every failure is fatal for the whole run; the three kinds exist so the
//! caller can report what went wrong (remote side, listing content, or local disk).

use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification of a [`MirrorError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    Parse,
    LocalIo,
}

#[derive(Debug, Error)]
pub enum MirrorError {
    /// Remote endpoint unreachable or answered with a non-2xx status.
    #[error("cannot fetch {url}: {reason}")]
    Transport { url: String, reason: String },

    /// A fetched listing page could not be read as an HTML document.
    #[error("cannot read listing at {url}: {reason}")]
    Parse { url: String, reason: String },

    /// Local directory or file could not be created or written.
    #[error("local I/O failed for {}: {source}", path.display())]
    LocalIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MirrorError {
    pub fn transport(url: impl Into<String>, reason: impl ToString) -> Self {
        MirrorError::Transport {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    pub fn parse(url: impl Into<String>, reason: impl ToString) -> Self {
        MirrorError::Parse {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    pub fn local_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MirrorError::LocalIo {
            path: path.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            MirrorError::Transport { .. } => ErrorKind::Transport,
            MirrorError::Parse { .. } => ErrorKind::Parse,
            MirrorError::LocalIo { .. } => ErrorKind::LocalIo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_message_names_url() {
        let e = MirrorError::transport("http://host/data/", "HTTP 404");
        assert_eq!(e.kind(), ErrorKind::Transport);
        let msg = e.to_string();
        assert!(msg.contains("http://host/data/"), "{msg}");
        assert!(msg.contains("HTTP 404"), "{msg}");
    }

    #[test]
    fn local_io_message_names_path() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let e = MirrorError::local_io("/tmp/mirror/file.pcap", io);
        assert_eq!(e.kind(), ErrorKind::LocalIo);
        assert!(e.to_string().contains("/tmp/mirror/file.pcap"));
        assert!(std::error::Error::source(&e).is_some());
    }

    #[test]
    fn parse_kind() {
        let e = MirrorError::parse("http://host/", "not UTF-8");
        assert_eq!(e.kind(), ErrorKind::Parse);
    }
}
