use std::path::PathBuf;

/// Per-call traversal state, created for each directory and dropped on return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalContext {
    pub remote_url: String,
    pub local_path: PathBuf,
    /// Top-level entries must start with this. Empty below the root.
    pub prefix: String,
    pub depth: usize,
}

impl TraversalContext {
    pub fn root(
        remote_url: impl Into<String>,
        local_path: impl Into<PathBuf>,
        prefix: impl Into<String>,
    ) -> Self {
        Self {
            remote_url: remote_url.into(),
            local_path: local_path.into(),
            prefix: prefix.into(),
            depth: 0,
        }
    }

    /// Context for a subdirectory. The prefix filter is cleared: it selects
    /// top-level categories only, never the contents beneath them.
    pub fn child(&self, remote_url: String, local_path: PathBuf) -> Self {
        Self {
            remote_url,
            local_path,
            prefix: String::new(),
            depth: self.depth + 1,
        }
    }
}
