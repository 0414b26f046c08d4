pub mod config;
pub mod error;
pub mod logging;

pub mod downloader;
pub mod listing;
pub mod mirror;
pub mod progress;
pub mod sources;
pub mod storage;
pub mod transport;
pub mod url_model;

pub use error::{ErrorKind, MirrorError};
