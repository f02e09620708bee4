use quoridor_core::{ErrorSeverity, GameError, PlayerId};

/// Errors returned by [`SearchEngine::find_best_move`](crate::SearchEngine::find_best_move).
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("{player} has no legal move")]
    NoLegalMove { player: PlayerId },

    #[error("search for {player} requested while {current} is to move")]
    OutOfTurn { player: PlayerId, current: PlayerId },

    #[error("game is already won by {winner}")]
    GameOver { winner: PlayerId },
}

impl GameError for SearchError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            SearchError::NoLegalMove { .. } => ErrorSeverity::Internal,
            SearchError::OutOfTurn { .. } | SearchError::GameOver { .. } => {
                ErrorSeverity::Validation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            SearchError::NoLegalMove { .. } => "SEARCH_NO_LEGAL_MOVE",
            SearchError::OutOfTurn { .. } => "SEARCH_OUT_OF_TURN",
            SearchError::GameOver { .. } => "SEARCH_GAME_OVER",
        }
    }
}
