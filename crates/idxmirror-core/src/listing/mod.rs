//! Listing resolver: turns an HTML directory-index page into ordered entries.
//!
//! Entries come from anchors nested in table cells (`table td a`), which is
//! how Apache-style fancy indexes lay out their rows. Column-sort links live
//! in `th` cells and are therefore never returned.

mod parse;

use crate::error::MirrorError;
use crate::transport::Fetcher;

pub use parse::parse_listing;

/// Visible label servers give the link back to the enclosing directory.
pub const PARENT_DIRECTORY_LABEL: &str = "Parent Directory";

/// One anchor from a listing page, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    /// Raw `href` attribute, unmodified.
    pub href: String,
    /// Visible text of the anchor, surrounding whitespace trimmed.
    pub text: String,
}

impl ListingEntry {
    pub fn new(href: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            text: text.into(),
        }
    }

    pub fn is_parent_link(&self) -> bool {
        self.text == PARENT_DIRECTORY_LABEL
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Directory,
    File,
}

/// A remote entry after its URL has been resolved against the listing URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteNode {
    pub url: String,
    /// The href as listed; the local path is derived from it.
    pub relative_name: String,
    pub kind: NodeKind,
}

impl RemoteNode {
    /// A URL ending in `/` denotes a directory; anything else is a file.
    pub fn classify(url: String, relative_name: impl Into<String>) -> Self {
        let kind = if url.ends_with('/') {
            NodeKind::Directory
        } else {
            NodeKind::File
        };
        Self {
            url,
            relative_name: relative_name.into(),
            kind,
        }
    }
}

/// Fetches `url` and extracts its listing entries.
///
/// Performs exactly one GET and touches no local state.
pub fn resolve_listing<F: Fetcher + ?Sized>(
    fetcher: &F,
    url: &str,
) -> Result<Vec<ListingEntry>, MirrorError> {
    let body = fetcher
        .fetch_bytes(url)
        .map_err(|e| e.attribute(url, None))?;
    let html = String::from_utf8(body)
        .map_err(|e| MirrorError::parse(url, format!("body is not UTF-8 text ({e})")))?;
    let entries = parse_listing(&html).map_err(|reason| MirrorError::parse(url, reason))?;
    tracing::debug!(url, entries = entries.len(), "listing resolved");
    Ok(entries)
}
