//! Adversarial search for quoridor-core.
//!
//! The [`SearchEngine`] runs a depth-limited minimax with alpha-beta pruning
//! over a pruned candidate set ([`MoveGenerator`]) and scores leaves with a
//! distance-based heuristic ([`Evaluator`]). Every hypothetical successor is
//! produced by `quoridor_core::apply_move`, so the search can never step
//! outside the rules.
pub mod config;
pub mod error;
pub mod evaluation;
pub mod generator;
pub mod search;

pub use config::{Difficulty, DifficultyTable, SearchConfig};
pub use error::SearchError;
pub use evaluation::{EvaluationWeights, Evaluator};
pub use generator::MoveGenerator;
pub use search::{Bound, INFINITY, SearchEngine, SearchStats, TranspositionEntry, TranspositionTable};
