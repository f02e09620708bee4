//! Game configuration loader.

use std::path::Path;

use quoridor_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`GameConfig::default`]. A wall budget above
    /// [`GameConfig::MAX_WALLS`] is rejected rather than silently clamped.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        anyhow::ensure!(
            config.walls_per_player <= GameConfig::MAX_WALLS,
            "walls_per_player {} exceeds maximum {}",
            config.walls_per_player,
            GameConfig::MAX_WALLS
        );

        Ok(config)
    }

    /// The configuration shipped with this crate.
    pub fn defaults() -> LoadResult<GameConfig> {
        Self::parse(crate::DEFAULT_GAME_CONFIG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn shipped_config_matches_defaults() {
        let config = ConfigLoader::defaults().expect("embedded config parses");
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn loads_budget_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "walls_per_player = 6").expect("write");

        let config = ConfigLoader::load(file.path()).expect("load");
        assert_eq!(config.walls_per_player, 6);
        assert_eq!(quoridor_core::new_game_with(&config).wall_budget(quoridor_core::PlayerId::One), 6);
    }

    #[test]
    fn empty_file_uses_defaults() {
        let file = tempfile::NamedTempFile::new().expect("temp file");
        let config = ConfigLoader::load(file.path()).expect("load");
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn rejects_oversized_budget_and_bad_files() {
        assert!(ConfigLoader::parse("walls_per_player = 11").is_err());
        assert!(ConfigLoader::parse("walls_per_player = \"ten\"").is_err());

        let dir = tempfile::tempdir().expect("temp dir");
        let err = ConfigLoader::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }
}
