use arrayvec::ArrayVec;

use crate::action::ActionTransition;
use crate::error::{ErrorSeverity, GameError};
use crate::path::wall_between;
use crate::state::{CardinalDirection, GameState, PlayerId, Position};

/// Pawn destinations; four neighbours at most, one of which may split into two diagonals.
pub type PawnMoves = ArrayVec<Position, 5>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveError {
    #[error("{player} cannot reach {target} this turn")]
    UnreachableTarget { player: PlayerId, target: Position },

    #[error("both pawns ended on {position}")]
    PawnCollision { position: Position },
}

impl GameError for MoveError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            MoveError::UnreachableTarget { .. } => ErrorSeverity::Recoverable,
            MoveError::PawnCollision { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            MoveError::UnreachableTarget { .. } => "MOVE_UNREACHABLE_TARGET",
            MoveError::PawnCollision { .. } => "MOVE_PAWN_COLLISION",
        }
    }
}

/// Destinations available to `player`'s pawn, including jumps.
///
/// For each direction: a wall or the board edge rules it out; an empty cell is
/// a destination; the opponent's cell is jumped straight over when the far
/// side is open, otherwise each of the two side-steps around the opponent is
/// offered when it is itself open.
pub fn possible_pawn_moves(state: &GameState, player: PlayerId) -> PawnMoves {
    let origin = state.position(player);
    let opponent = state.position(player.opponent());
    let mut moves = PawnMoves::new();

    for direction in CardinalDirection::ALL {
        let next = origin.step(direction);
        if !next.is_on_board() || wall_between(state, origin, next) {
            continue;
        }
        if next != opponent {
            moves.push(next);
            continue;
        }

        let jump = next.step(direction);
        if jump.is_on_board() && !wall_between(state, next, jump) {
            moves.push(jump);
            continue;
        }

        for side in direction.perpendicular() {
            let diagonal = next.step(side);
            if diagonal.is_on_board() && !wall_between(state, next, diagonal) {
                moves.push(diagonal);
            }
        }
    }

    moves
}

/// Moves `player`'s pawn to `target`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PawnMove {
    pub player: PlayerId,
    pub target: Position,
}

impl PawnMove {
    pub fn new(player: PlayerId, target: Position) -> Self {
        Self { player, target }
    }
}

impl ActionTransition for PawnMove {
    type Error = MoveError;

    fn player(&self) -> PlayerId {
        self.player
    }

    fn pre_validate(&self, state: &GameState) -> Result<(), Self::Error> {
        if possible_pawn_moves(state, self.player).contains(&self.target) {
            Ok(())
        } else {
            Err(MoveError::UnreachableTarget {
                player: self.player,
                target: self.target,
            })
        }
    }

    fn apply(&self, state: &mut GameState) -> Result<(), Self::Error> {
        state.set_position(self.player, self.target);
        state.advance_turn();
        Ok(())
    }

    fn post_validate(&self, state: &GameState) -> Result<(), Self::Error> {
        let [one, two] = state.positions();
        if one == two {
            return Err(MoveError::PawnCollision { position: one });
        }
        Ok(())
    }
}
