//! "Join path" URL composition.

use crate::error::MirrorError;
use url::Url;

/// Appends `href` to the path of `base`, resolving `.` and `..` segments.
///
/// A trailing `/` on `href` is preserved so directory links stay recognizable.
/// An empty `href` returns `base` with its own trailing slash kept.
/// The href's `?` and `#` are not interpreted; they end up escaped in the path.
pub fn join_url(base: &str, href: &str) -> Result<String, MirrorError> {
    let mut url = Url::parse(base)
        .map_err(|e| MirrorError::transport(base, format!("invalid URL: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(MirrorError::transport(base, "URL cannot carry a path"));
    }
    let joined = join_paths(url.path(), href);
    url.set_path(&joined);
    Ok(url.to_string())
}

fn join_paths(base_path: &str, href: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for seg in base_path.split('/').chain(href.split('/')) {
        match seg {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }

    let mut out = String::with_capacity(base_path.len() + href.len() + 1);
    out.push('/');
    out.push_str(&segments.join("/"));

    let keep_slash = if href.is_empty() {
        base_path.ends_with('/')
    } else {
        href.ends_with('/')
    };
    if keep_slash && !out.ends_with('/') {
        out.push('/');
    }
    out
}
