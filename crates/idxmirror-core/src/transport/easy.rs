//! libcurl Easy-handle fetcher.

use super::{FetchError, Fetcher};
use crate::config::HttpConfig;
use std::io::Write;
use std::time::Duration;

/// Redirect hops allowed when `follow_redirects` is on.
const MAX_REDIRECTS: u32 = 10;

/// Blocking GET via a fresh `curl::easy::Easy` per request.
///
/// No overall transfer timeout is set; a connect timeout applies only when configured.
#[derive(Debug, Clone, Default)]
pub struct CurlFetcher {
    http: HttpConfig,
}

impl CurlFetcher {
    pub fn new(http: HttpConfig) -> Self {
        Self { http }
    }

    fn configure(&self, easy: &mut curl::easy::Easy, url: &str) -> Result<(), curl::Error> {
        easy.url(url)?;
        let follow = self.http.follow_redirects.unwrap_or(true);
        easy.follow_location(follow)?;
        if follow {
            easy.max_redirections(MAX_REDIRECTS)?;
        }
        // Error statuses abort before any body bytes reach the sink.
        easy.fail_on_error(true)?;
        if let Some(secs) = self.http.connect_timeout_secs {
            easy.connect_timeout(Duration::from_secs(secs))?;
        }
        if let Some(ua) = &self.http.user_agent {
            easy.useragent(ua)?;
        }
        Ok(())
    }
}

impl Fetcher for CurlFetcher {
    fn fetch(&self, url: &str, sink: &mut dyn Write) -> Result<u64, FetchError> {
        let mut easy = curl::easy::Easy::new();
        self.configure(&mut easy, url)?;

        let mut written: u64 = 0;
        let mut sink_err: Option<std::io::Error> = None;
        let performed = {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| match sink.write_all(data) {
                Ok(()) => {
                    written += data.len() as u64;
                    Ok(data.len())
                }
                Err(e) => {
                    sink_err = Some(e);
                    Ok(0) // abort transfer
                }
            })?;
            transfer.perform()
        };

        if let Some(e) = sink_err {
            return Err(FetchError::Sink(e));
        }
        if let Err(e) = performed {
            if e.is_http_returned_error() {
                return Err(FetchError::Http(easy.response_code()?));
            }
            return Err(FetchError::Curl(e));
        }

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(FetchError::Http(code));
        }
        tracing::trace!(url, bytes = written, "GET complete");
        Ok(written)
    }
}
