//! Blocking HTTP transport.
//!
//! The engine only depends on the [`Fetcher`] trait; [`CurlFetcher`] is the
//! libcurl-backed implementation used by the CLI. One transfer runs at a time
//! and the calling thread blocks until the body has been fully streamed.

mod easy;

use crate::error::MirrorError;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

pub use easy::CurlFetcher;

/// Failure of a single GET, before it is attributed to a URL or local path.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error (DNS, connection refused, TLS, reset).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// Response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
    /// Writing the body into the sink failed.
    #[error("write failed: {0}")]
    Sink(#[source] std::io::Error),
}

impl FetchError {
    /// Attributes the failure: remote failures name `url`, sink failures name
    /// `path` (or `url` when the sink is not a file).
    pub fn attribute(self, url: &str, path: Option<&Path>) -> MirrorError {
        match (self, path) {
            (FetchError::Sink(e), Some(p)) => MirrorError::local_io(p, e),
            (other, _) => MirrorError::transport(url, other),
        }
    }
}

/// Source of remote bytes.
pub trait Fetcher {
    /// GETs `url` and streams the body into `sink`. Returns the number of body bytes written.
    fn fetch(&self, url: &str, sink: &mut dyn Write) -> Result<u64, FetchError>;

    /// GETs `url` into memory.
    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let mut buf = Vec::new();
        self.fetch(url, &mut buf)?;
        Ok(buf)
    }
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn fetch(&self, url: &str, sink: &mut dyn Write) -> Result<u64, FetchError> {
        (**self).fetch(url, sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn sink_failure_attributed_to_path() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let e = FetchError::Sink(io).attribute("http://h/f.bin", Some(Path::new("/m/f.bin")));
        assert_eq!(e.kind(), ErrorKind::LocalIo);
        assert!(e.to_string().contains("/m/f.bin"));
    }

    #[test]
    fn http_failure_attributed_to_url() {
        let e = FetchError::Http(404).attribute("http://h/f.bin", Some(Path::new("/m/f.bin")));
        assert_eq!(e.kind(), ErrorKind::Transport);
        let msg = e.to_string();
        assert!(msg.contains("http://h/f.bin"), "{msg}");
        assert!(msg.contains("HTTP 404"), "{msg}");
    }

    #[test]
    fn sink_failure_without_path_is_transport() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let e = FetchError::Sink(io).attribute("http://h/", None);
        assert_eq!(e.kind(), ErrorKind::Transport);
    }
}
