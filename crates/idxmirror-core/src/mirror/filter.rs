//! Entry filtering policy, applied in a fixed order.

use super::context::TraversalContext;
use crate::listing::ListingEntry;
use std::fmt;

/// Why a listing entry was not followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    /// The current listing URL ends with the href (the page linking to itself).
    SelfLink,
    /// The href does not start with the context's prefix filter.
    PrefixMismatch,
    /// Navigation link back to the enclosing directory.
    ParentDirectory,
}

impl fmt::Display for Exclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Exclusion::SelfLink => "self link",
            Exclusion::PrefixMismatch => "prefix mismatch",
            Exclusion::ParentDirectory => "parent directory",
        };
        f.write_str(s)
    }
}

/// First exclusion that applies to `entry`, checking self link, then prefix,
/// then the parent-directory label.
pub fn exclusion(ctx: &TraversalContext, entry: &ListingEntry) -> Option<Exclusion> {
    if ctx.remote_url.ends_with(&entry.href) {
        return Some(Exclusion::SelfLink);
    }
    if !entry.href.starts_with(&ctx.prefix) {
        return Some(Exclusion::PrefixMismatch);
    }
    if entry.is_parent_link() {
        return Some(Exclusion::ParentDirectory);
    }
    None
}
