//! Move definitions and their transitions.
//!
//! A [`Move`] is what a player asks for; [`PawnMove`] and [`WallPlacement`]
//! are the transitions the engine drives through pre-validation, application
//! and post-validation.
mod movement;
mod transition;
mod wall;

use std::fmt;

pub use movement::{MoveError, PawnMove, PawnMoves, possible_pawn_moves};
pub use transition::ActionTransition;
pub use wall::{WallError, WallPlacement, check_wall_placement, validate_wall_geometry};

use crate::state::{PlayerId, Position, Wall};

/// A single ply: either move the pawn or place a wall.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Move {
    Pawn(Position),
    Wall(Wall),
}

impl Move {
    pub const fn is_pawn(&self) -> bool {
        matches!(self, Move::Pawn(_))
    }

    pub const fn is_wall(&self) -> bool {
        matches!(self, Move::Wall(_))
    }
}

impl From<Wall> for Move {
    fn from(wall: Wall) -> Self {
        Move::Wall(wall)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Pawn(target) => write!(f, "pawn to {target}"),
            Move::Wall(wall) => write!(f, "wall {wall}"),
        }
    }
}

/// Move intent bound to the player who performs it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveKind {
    Pawn(PawnMove),
    Wall(WallPlacement),
}

impl MoveKind {
    pub fn new(player: PlayerId, mv: &Move) -> Self {
        match *mv {
            Move::Pawn(target) => MoveKind::Pawn(PawnMove::new(player, target)),
            Move::Wall(wall) => MoveKind::Wall(WallPlacement::new(player, wall)),
        }
    }
}
