//! Rules engine for a two-player wall-and-pawn race on a 9×9 board.
//!
//! `quoridor-core` defines the canonical rules (moves, legality, path
//! queries, immutable state) and exposes pure APIs reused by the search crate
//! and by any front end. Every state change flows through
//! [`engine::GameEngine`]; the free functions below are thin shortcuts.
pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod path;
pub mod session;
pub mod state;

pub use action::{
    ActionTransition, Move, MoveError, PawnMove, PawnMoves, WallError, WallPlacement,
    check_wall_placement, possible_pawn_moves, validate_wall_geometry,
};
pub use config::GameConfig;
pub use engine::{ExecuteError, GameEngine, TransitionPhase, TransitionPhaseError, apply_move};
pub use error::{ErrorSeverity, GameError};
pub use path::{DistanceField, distance_field, exists_path, player_distance, shortest_distance};
pub use session::GameSession;
pub use state::{
    CardinalDirection, GameState, InitializationError, Orientation, Outcome, PlayerId, Position,
    StateDigest, Wall,
};

/// Opening position with default configuration.
pub fn new_game() -> GameState {
    GameState::new_game()
}

/// Opening position with a custom wall budget.
pub fn new_game_with(config: &GameConfig) -> GameState {
    GameState::with_config(config)
}

/// Pawn destinations for `player`, regardless of whose turn it is.
pub fn legal_pawn_moves(state: &GameState, player: PlayerId) -> PawnMoves {
    possible_pawn_moves(state, player)
}

pub fn outcome(state: &GameState) -> Outcome {
    state.outcome()
}
