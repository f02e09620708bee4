//! Content factory for loading every configuration file from one directory.

use std::path::{Path, PathBuf};

use quoridor_core::GameConfig;

use crate::loaders::{ConfigLoader, LoadResult, SearchProfileLoader, SearchProfiles};

/// Content factory that loads all configuration from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── search.toml
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load search profiles from `search.toml`.
    pub fn load_search_profiles(&self) -> LoadResult<SearchProfiles> {
        SearchProfileLoader::load(&self.data_dir.join("search.toml"))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
