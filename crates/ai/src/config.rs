//! Difficulty presets and search tuning.

/// Named strength levels exposed to players.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::EnumIter,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

/// Search depth (in plies) for each difficulty.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DifficultyTable {
    pub easy: u8,
    pub normal: u8,
    pub hard: u8,
}

impl DifficultyTable {
    pub const DEFAULT_EASY: u8 = 2;
    pub const DEFAULT_NORMAL: u8 = 4;
    pub const DEFAULT_HARD: u8 = 5;

    pub fn depth(&self, difficulty: Difficulty) -> u8 {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Normal => self.normal,
            Difficulty::Hard => self.hard,
        }
    }
}

impl Default for DifficultyTable {
    fn default() -> Self {
        Self {
            easy: Self::DEFAULT_EASY,
            normal: Self::DEFAULT_NORMAL,
            hard: Self::DEFAULT_HARD,
        }
    }
}

/// Parameters of one [`SearchEngine`](crate::SearchEngine).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Plies searched from the root. Zero is treated as one.
    pub depth: u8,
    /// Chebyshev radius around each pawn in which wall anchors are proposed.
    pub wall_radius: i32,
    /// Walls kept after shuffling, before the path check.
    pub max_wall_candidates: usize,
    /// Fixed seed for reproducible play; drawn from the OS when absent.
    pub seed: Option<u64>,
}

impl SearchConfig {
    pub const DEFAULT_WALL_RADIUS: i32 = 2;
    pub const DEFAULT_MAX_WALL_CANDIDATES: usize = 20;

    pub fn for_difficulty(difficulty: Difficulty, table: &DifficultyTable) -> Self {
        Self {
            depth: table.depth(difficulty),
            ..Self::default()
        }
    }

    pub fn with_depth(mut self, depth: u8) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub(crate) fn effective_depth(&self) -> u8 {
        self.depth.max(1)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DifficultyTable::DEFAULT_NORMAL,
            wall_radius: Self::DEFAULT_WALL_RADIUS,
            max_wall_candidates: Self::DEFAULT_MAX_WALL_CANDIDATES,
            seed: None,
        }
    }
}
