//! Search profile loader.

use std::path::Path;

use quoridor_ai::{Difficulty, DifficultyTable, SearchConfig};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::loaders::{LoadResult, read_file};

/// Difficulty depths plus the pruning parameters shared by every tier.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchProfiles {
    pub difficulty: DifficultyTable,
    pub search: SearchConfig,
}

impl SearchProfiles {
    /// Search configuration for one difficulty: the shared parameters with
    /// the tier's depth.
    pub fn config_for(&self, difficulty: Difficulty) -> SearchConfig {
        self.search
            .clone()
            .with_depth(self.difficulty.depth(difficulty))
    }
}

/// Loader for search profiles from TOML files.
pub struct SearchProfileLoader;

impl SearchProfileLoader {
    pub fn load(path: &Path) -> LoadResult<SearchProfiles> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid search profiles {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<SearchProfiles> {
        let profiles: SearchProfiles = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse search TOML: {}", e))?;

        for difficulty in Difficulty::iter() {
            anyhow::ensure!(
                profiles.difficulty.depth(difficulty) > 0,
                "depth for {} must be at least 1",
                difficulty
            );
        }
        anyhow::ensure!(
            profiles.search.wall_radius >= 0,
            "wall_radius must not be negative"
        );

        Ok(profiles)
    }

    /// The profiles shipped with this crate.
    pub fn defaults() -> LoadResult<SearchProfiles> {
        Self::parse(crate::DEFAULT_SEARCH_PROFILES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn shipped_profiles_match_built_in_defaults() {
        let profiles = SearchProfileLoader::defaults().expect("embedded profiles parse");
        assert_eq!(profiles.difficulty, DifficultyTable::default());
        assert_eq!(profiles.search.wall_radius, SearchConfig::DEFAULT_WALL_RADIUS);
        assert_eq!(
            profiles.search.max_wall_candidates,
            SearchConfig::DEFAULT_MAX_WALL_CANDIDATES
        );
        assert_eq!(profiles.config_for(Difficulty::Hard).depth, 5);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "[difficulty]\nhard = 7\n\n[search]\nseed = 99").expect("write");

        let profiles = SearchProfileLoader::load(file.path()).expect("load");
        assert_eq!(profiles.difficulty.easy, 2);
        assert_eq!(profiles.difficulty.hard, 7);

        let config = profiles.config_for(Difficulty::Hard);
        assert_eq!(config.depth, 7);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.max_wall_candidates, 20);
    }

    #[test]
    fn rejects_zero_depth() {
        let err = SearchProfileLoader::parse("[difficulty]\neasy = 0").unwrap_err();
        assert!(err.to_string().contains("easy"));
    }

    #[test]
    fn loaded_profile_drives_an_engine() {
        let profiles = SearchProfileLoader::defaults().expect("defaults");
        let config = profiles.config_for(Difficulty::Easy).with_seed(1);
        let mut engine = quoridor_ai::SearchEngine::with_config(quoridor_core::PlayerId::One, config);
        let state = quoridor_core::new_game();
        let mv = engine.find_best_move(&state).expect("a move");
        assert!(quoridor_core::apply_move(&state, quoridor_core::PlayerId::One, &mv).is_ok());
    }
}
