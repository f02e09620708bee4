//! State construction errors.
//!
//! Errors raised when assembling a [`GameState`](super::GameState) from raw
//! parts. Every invariant that the transition pipeline maintains is checked
//! here as well so that hand-built states are as trustworthy as played ones.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{PlayerId, Position, Wall};

/// Errors that occur while building a game state from raw components.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InitializationError {
    /// A pawn was placed outside the board.
    #[error("{player} pawn at {position} is off the board")]
    PawnOffBoard { player: PlayerId, position: Position },

    /// Both pawns were placed on the same cell.
    #[error("both pawns occupy {position}")]
    PawnsCoincide { position: Position },

    /// A wall budget exceeds the per-player maximum.
    #[error("{player} wall budget {budget} exceeds maximum {max}")]
    BudgetTooLarge { player: PlayerId, budget: u8, max: u8 },

    /// A wall anchor lies outside the inner grid.
    #[error("wall {wall} is out of bounds")]
    WallOutOfBounds { wall: Wall },

    /// The same wall was listed twice.
    #[error("wall {wall} listed more than once")]
    DuplicateWall { wall: Wall },

    /// Two listed walls overlap or cross.
    #[error("wall {wall} conflicts with wall {existing}")]
    ConflictingWalls { wall: Wall, existing: Wall },

    /// The wall set leaves a player without any route to their goal row.
    #[error("{player} has no path to the goal row")]
    NoPathToGoal { player: PlayerId },
}

impl GameError for InitializationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use InitializationError::*;
        match self {
            PawnOffBoard { .. } => "STATE_PAWN_OFF_BOARD",
            PawnsCoincide { .. } => "STATE_PAWNS_COINCIDE",
            BudgetTooLarge { .. } => "STATE_BUDGET_TOO_LARGE",
            WallOutOfBounds { .. } => "STATE_WALL_OUT_OF_BOUNDS",
            DuplicateWall { .. } => "STATE_DUPLICATE_WALL",
            ConflictingWalls { .. } => "STATE_CONFLICTING_WALLS",
            NoPathToGoal { .. } => "STATE_NO_PATH_TO_GOAL",
        }
    }
}
