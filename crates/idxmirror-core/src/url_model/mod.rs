//! URL joining and local path derivation.
//!
//! Remote hrefs are treated as already-escaped relative paths: they are appended
//! to the listing URL's path, and the same segments name the local mirror entry.

mod join;
mod local;
mod path;

pub use join::join_url;
pub use local::local_child_path;
pub use path::last_path_segment;
