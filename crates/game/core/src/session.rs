//! Stateful wrapper with undo history.

use crate::action::{Move, PawnMoves, possible_pawn_moves};
use crate::config::GameConfig;
use crate::engine::{ExecuteError, apply_move};
use crate::state::{GameState, Outcome, PlayerId};

/// Current game plus every prior state, for callers that drive a game turn by turn.
#[derive(Clone, Debug, Default)]
pub struct GameSession {
    state: GameState,
    history: Vec<GameState>,
}

impl GameSession {
    pub fn new() -> Self {
        Self::from_state(GameState::new_game())
    }

    pub fn with_config(config: &GameConfig) -> Self {
        Self::from_state(GameState::with_config(config))
    }

    /// Starts a session from an arbitrary (already validated) state.
    pub fn from_state(state: GameState) -> Self {
        Self {
            state,
            history: Vec::new(),
        }
    }

    /// Plays `mv` for the side to move. A rejected move leaves the session unchanged.
    pub fn play(&mut self, mv: &Move) -> Result<&GameState, ExecuteError> {
        let player = self.state.turn();
        let next = apply_move(&self.state, player, mv).inspect_err(|error| {
            tracing::debug!(%player, %mv, %error, "rejected move");
        })?;
        self.history.push(std::mem::replace(&mut self.state, next));
        Ok(&self.state)
    }

    /// Restores the previous state; returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.state = previous;
                true
            }
            None => false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn current_player(&self) -> PlayerId {
        self.state.turn()
    }

    pub fn outcome(&self) -> Outcome {
        self.state.outcome()
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.state.winner()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn legal_pawn_moves(&self) -> PawnMoves {
        possible_pawn_moves(&self.state, self.state.turn())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Position, Wall};
    use proptest::prelude::*;

    #[test]
    fn play_and_undo_restore_exactly() {
        let mut session = GameSession::new();
        let opening = session.state().clone();

        session.play(&Move::Pawn(Position::new(1, 4))).expect("pawn");
        session.play(&Move::Wall(Wall::horizontal(1, 3))).expect("wall");
        assert_eq!(session.history_len(), 2);
        assert_eq!(session.current_player(), PlayerId::One);

        assert!(session.undo());
        assert!(session.undo());
        assert_eq!(session.state(), &opening);
        assert!(!session.undo());
    }

    #[test]
    fn rejected_move_records_nothing() {
        let mut session = GameSession::new();
        assert!(session.play(&Move::Pawn(Position::new(5, 5))).is_err());
        assert_eq!(session.history_len(), 0);
        assert_eq!(session.state(), &GameState::new_game());
    }

    #[test]
    fn reports_winner_after_last_step() {
        let state = GameState::new([Position::new(7, 0), Position::new(2, 5)], [], [0, 0], PlayerId::One)
            .expect("valid state");
        let mut session = GameSession::from_state(state);
        assert_eq!(session.outcome(), Outcome::InProgress);
        session.play(&Move::Pawn(Position::new(8, 0))).expect("winning step");
        assert_eq!(session.winner(), Some(PlayerId::One));
        assert!(session.outcome().is_terminal());
    }

    #[test]
    fn legal_pawn_moves_follow_turn() {
        let mut session = GameSession::with_config(&GameConfig::with_walls_per_player(5));
        assert_eq!(session.legal_pawn_moves().len(), 3);
        session.play(&Move::Pawn(Position::new(0, 3))).expect("pawn");
        assert!(session.legal_pawn_moves().contains(&Position::new(7, 4)));
        assert_eq!(session.state().wall_budget(PlayerId::Two), 5);
    }

    proptest! {
        #[test]
        fn undo_unwinds_any_pawn_walk(choices in prop::collection::vec(0usize..5, 1..30)) {
            let mut session = GameSession::new();
            let mut snapshots = vec![session.state().clone()];
            for choice in choices {
                if session.outcome().is_terminal() {
                    break;
                }
                let moves = session.legal_pawn_moves();
                let target = moves[choice % moves.len()];
                session.play(&Move::Pawn(target)).expect("legal pawn move");
                snapshots.push(session.state().clone());
            }
            snapshots.pop();
            while let Some(expected) = snapshots.pop() {
                prop_assert!(session.undo());
                prop_assert_eq!(session.state(), &expected);
            }
            prop_assert!(!session.undo());
        }
    }
}
