use std::fmt;

use crate::config::GameConfig;

/// Identifies one of the two players.
///
/// Player One starts on the top edge (row 0) and races to the bottom edge;
/// Player Two starts on the bottom edge and races to row 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerId {
    #[strum(serialize = "player one")]
    One,
    #[strum(serialize = "player two")]
    Two,
}

impl PlayerId {
    pub const ALL: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    /// Returns the other player.
    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Dense index for per-player arrays.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    /// Row this player must reach to win.
    #[inline]
    pub const fn goal_row(self) -> i32 {
        match self {
            PlayerId::One => GameConfig::BOARD_SIZE - 1,
            PlayerId::Two => 0,
        }
    }

    /// Canonical starting cell.
    pub const fn start(self) -> Position {
        match self {
            PlayerId::One => Position::new(0, GameConfig::CENTER_COL),
            PlayerId::Two => Position::new(GameConfig::BOARD_SIZE - 1, GameConfig::CENTER_COL),
        }
    }

    /// Returns true if `position` lies on this player's goal row.
    #[inline]
    pub const fn is_goal(self, position: Position) -> bool {
        position.row == self.goal_row()
    }
}

/// Discrete grid position expressed as `(row, col)`.
///
/// Coordinates are signed so that neighbour arithmetic can step off the board
/// and be rejected by [`Position::is_on_board`] instead of wrapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns true if the cell lies on the 9×9 board.
    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.row >= 0
            && self.row < GameConfig::BOARD_SIZE
            && self.col >= 0
            && self.col < GameConfig::BOARD_SIZE
    }

    /// Cell one step away in `direction` (may be off the board).
    #[inline]
    pub const fn step(self, direction: CardinalDirection) -> Self {
        let (dr, dc) = direction.delta();
        Self::new(self.row + dr, self.col + dc)
    }

    /// Returns the four orthogonal neighbours, including off-board ones.
    pub fn neighbors(self) -> [Position; 4] {
        CardinalDirection::ALL.map(|direction| self.step(direction))
    }

    /// Dense index into a row-major board array. Caller must ensure the cell is on the board.
    #[inline]
    pub(crate) const fn index(self) -> usize {
        (self.row * GameConfig::BOARD_SIZE + self.col) as usize
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Orthogonal step directions on the board.
///
/// North points towards row 0 (Player One's starting edge).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardinalDirection {
    North,
    South,
    East,
    West,
}

impl CardinalDirection {
    pub const ALL: [CardinalDirection; 4] = [
        CardinalDirection::North,
        CardinalDirection::South,
        CardinalDirection::West,
        CardinalDirection::East,
    ];

    /// `(row, col)` offset of one step.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            CardinalDirection::North => (-1, 0),
            CardinalDirection::South => (1, 0),
            CardinalDirection::East => (0, 1),
            CardinalDirection::West => (0, -1),
        }
    }

    /// True for steps that change the row.
    pub const fn is_vertical(self) -> bool {
        matches!(self, CardinalDirection::North | CardinalDirection::South)
    }

    /// The two directions perpendicular to this one.
    pub const fn perpendicular(self) -> [CardinalDirection; 2] {
        if self.is_vertical() {
            [CardinalDirection::West, CardinalDirection::East]
        } else {
            [CardinalDirection::North, CardinalDirection::South]
        }
    }
}
