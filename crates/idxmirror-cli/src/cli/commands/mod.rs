//! CLI command handlers, one per file.

mod mirror;
mod sources;
mod url;

pub use mirror::run_mirror;
pub use sources::run_sources;
pub use url::run_url;

use idxmirror_core::mirror::MirrorStats;

pub(crate) fn print_summary(stats: &MirrorStats) {
    println!(
        "{} directories, {} files downloaded ({} bytes), {} already present",
        stats.directories, stats.files_downloaded, stats.bytes_downloaded, stats.files_skipped
    );
}
