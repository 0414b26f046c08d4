/// Counters for one mirroring run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MirrorStats {
    /// Directories listed (root included).
    pub directories: usize,
    pub files_downloaded: usize,
    /// Files already present locally.
    pub files_skipped: usize,
    pub bytes_downloaded: u64,
    /// Listing entries dropped by the filter or as unsafe/repeated.
    pub entries_excluded: usize,
}

impl MirrorStats {
    pub fn files_seen(&self) -> usize {
        self.files_downloaded + self.files_skipped
    }
}
