//! Data-driven configuration for the rules engine and the search.
//!
//! This crate ships the default data files and provides TOML loaders:
//! - Game configuration (wall budget)
//! - Search profiles (difficulty depths and candidate pruning)
//!
//! All loaders deserialize quoridor-core / quoridor-ai types directly via serde.

/// Shipped difficulty tiers and pruning parameters.
pub const DEFAULT_SEARCH_PROFILES: &str = include_str!("../data/search.toml");

/// Shipped rules configuration.
pub const DEFAULT_GAME_CONFIG: &str = include_str!("../data/config.toml");

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LoadResult, SearchProfileLoader, SearchProfiles};
