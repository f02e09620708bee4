//! Content loaders for reading configuration from files.
//!
//! Every loader has a `load(path)` entry point for files on disk and a
//! `parse(text)` entry point used for the data embedded in this crate.

pub mod config;
pub mod factory;
pub mod search;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use search::{SearchProfileLoader, SearchProfiles};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
