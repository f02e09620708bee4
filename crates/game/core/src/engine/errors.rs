//! Error types for the move execution pipeline.

use crate::action::{ActionTransition, PawnMove, WallPlacement};
use crate::error::{ErrorSeverity, GameError};
use crate::state::PlayerId;

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while applying a move through the engine.
///
/// Every variant means the move was illegal in the given state; no state is
/// produced.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    #[error("{player} moved out of turn ({current} to move)")]
    NotCurrentPlayer { player: PlayerId, current: PlayerId },

    #[error("game already won by {winner}")]
    GameOver { winner: PlayerId },

    #[error("pawn move failed: {0}")]
    Pawn(TransitionPhaseError<<PawnMove as ActionTransition>::Error>),

    #[error("wall placement failed: {0}")]
    Wall(TransitionPhaseError<<WallPlacement as ActionTransition>::Error>),
}

impl ExecuteError {
    /// Pipeline phase that rejected the move, if the move reached the pipeline.
    pub fn phase(&self) -> Option<TransitionPhase> {
        match self {
            ExecuteError::Pawn(err) => Some(err.phase),
            ExecuteError::Wall(err) => Some(err.phase),
            ExecuteError::NotCurrentPlayer { .. } | ExecuteError::GameOver { .. } => None,
        }
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            ExecuteError::NotCurrentPlayer { .. } | ExecuteError::GameOver { .. } => {
                ErrorSeverity::Validation
            }
            ExecuteError::Pawn(err) => err.error.severity(),
            ExecuteError::Wall(err) => err.error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ExecuteError::NotCurrentPlayer { .. } => "EXECUTE_NOT_CURRENT_PLAYER",
            ExecuteError::GameOver { .. } => "EXECUTE_GAME_OVER",
            ExecuteError::Pawn(err) => err.error.error_code(),
            ExecuteError::Wall(err) => err.error.error_code(),
        }
    }
}
