/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Walls handed to each player at the start of a game.
    /// Values above [`GameConfig::MAX_WALLS`] are clamped.
    pub walls_per_player: u8,
}

impl GameConfig {
    // ===== compile-time constants =====
    /// Side length of the square board.
    pub const BOARD_SIZE: i32 = 9;
    /// Column both pawns start on.
    pub const CENTER_COL: i32 = Self::BOARD_SIZE / 2;
    /// Largest legal wall anchor coordinate (anchors live on the inner grid).
    pub const MAX_WALL_ANCHOR: i32 = Self::BOARD_SIZE - 2;
    /// Number of cell boundaries covered by one wall.
    pub const WALL_SPAN: u8 = 2;
    /// Upper bound on a player's wall budget.
    pub const MAX_WALLS: u8 = 10;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_WALLS_PER_PLAYER: u8 = Self::MAX_WALLS;

    pub fn new() -> Self {
        Self {
            walls_per_player: Self::DEFAULT_WALLS_PER_PLAYER,
        }
    }

    pub fn with_walls_per_player(walls_per_player: u8) -> Self {
        Self {
            walls_per_player: walls_per_player.min(Self::MAX_WALLS),
        }
    }

    /// Budget actually granted, after clamping deserialized values.
    pub fn wall_budget(&self) -> u8 {
        self.walls_per_player.min(Self::MAX_WALLS)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
