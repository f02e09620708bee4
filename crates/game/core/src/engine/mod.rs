//! Move execution pipeline.
//!
//! The [`GameEngine`] is the only path from one [`GameState`] to the next. It
//! checks whose turn it is, clones the state, and drives the move's transition
//! through its phases on the clone. The borrowed input is never touched, so a
//! rejected move leaves the caller exactly where it was.

mod errors;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use crate::action::{Move, MoveKind};
use crate::state::{GameState, PlayerId};

/// Reducer over an immutable game state.
pub struct GameEngine<'a> {
    state: &'a GameState,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a GameState) -> Self {
        Self { state }
    }

    /// Applies `mv` on behalf of `player` and returns the successor state.
    ///
    /// Enforces turn order and rejects moves once the game has a winner.
    pub fn execute(&self, player: PlayerId, mv: &Move) -> Result<GameState, ExecuteError> {
        self.validate_player(player)?;

        let mut next = self.state.clone();
        transition::execute_transition(&MoveKind::new(player, mv), &mut next)?;
        Ok(next)
    }

    fn validate_player(&self, player: PlayerId) -> Result<(), ExecuteError> {
        let current = self.state.turn();
        if player != current {
            return Err(ExecuteError::NotCurrentPlayer { player, current });
        }
        if let Some(winner) = self.state.winner() {
            return Err(ExecuteError::GameOver { winner });
        }
        Ok(())
    }
}

/// Convenience wrapper around [`GameEngine::execute`].
pub fn apply_move(state: &GameState, player: PlayerId, mv: &Move) -> Result<GameState, ExecuteError> {
    GameEngine::new(state).execute(player, mv)
}
