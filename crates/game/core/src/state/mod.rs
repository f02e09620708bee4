//! Authoritative game state representation.
//!
//! [`GameState`] is a small value type: two pawn cells, an ordered wall set,
//! per-player wall budgets and the side to move. Callers only ever observe
//! complete states; the engine clones a state and mutates the clone through the
//! crate-private setters below, so an input state is never altered.
mod digest;
mod error;
pub mod types;

use std::collections::BTreeSet;

pub use digest::StateDigest;
pub use error::InitializationError;
pub use types::{CardinalDirection, Orientation, PlayerId, Position, Wall};

use crate::config::GameConfig;
use crate::path;

/// Result of inspecting a state for a winner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    InProgress,
    Won(PlayerId),
}

impl Outcome {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Outcome::Won(_))
    }

    pub const fn winner(self) -> Option<PlayerId> {
        match self {
            Outcome::Won(player) => Some(player),
            Outcome::InProgress => None,
        }
    }
}

/// Canonical snapshot of a game in progress.
///
/// Deserialized states go through [`GameState::new`] and are rejected if they
/// break any rule invariant.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GameStateParts"))]
pub struct GameState {
    positions: [Position; 2],
    walls: BTreeSet<Wall>,
    wall_budget: [u8; 2],
    turn: PlayerId,
}

/// Unchecked serialized form of a [`GameState`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GameStateParts {
    positions: [Position; 2],
    walls: Vec<Wall>,
    wall_budget: [u8; 2],
    turn: PlayerId,
}

#[cfg(feature = "serde")]
impl TryFrom<GameStateParts> for GameState {
    type Error = InitializationError;

    fn try_from(parts: GameStateParts) -> Result<Self, Self::Error> {
        Self::new(parts.positions, parts.walls, parts.wall_budget, parts.turn)
    }
}

impl GameState {
    /// Builds a state from raw parts, enforcing every rule invariant.
    ///
    /// Walls are validated in iteration order, so a conflict is reported
    /// against the earlier of the two walls.
    pub fn new(
        positions: [Position; 2],
        walls: impl IntoIterator<Item = Wall>,
        wall_budget: [u8; 2],
        turn: PlayerId,
    ) -> Result<Self, InitializationError> {
        for player in PlayerId::ALL {
            let position = positions[player.index()];
            if !position.is_on_board() {
                return Err(InitializationError::PawnOffBoard { player, position });
            }

            let budget = wall_budget[player.index()];
            if budget > GameConfig::MAX_WALLS {
                return Err(InitializationError::BudgetTooLarge {
                    player,
                    budget,
                    max: GameConfig::MAX_WALLS,
                });
            }
        }
        if positions[0] == positions[1] {
            return Err(InitializationError::PawnsCoincide {
                position: positions[0],
            });
        }

        let mut placed = BTreeSet::new();
        for wall in walls {
            if !wall.is_in_bounds() {
                return Err(InitializationError::WallOutOfBounds { wall });
            }
            if placed.contains(&wall) {
                return Err(InitializationError::DuplicateWall { wall });
            }
            let conflict = wall
                .overlapping()
                .into_iter()
                .chain([wall.crossing()])
                .find(|other| placed.contains(other));
            if let Some(existing) = conflict {
                return Err(InitializationError::ConflictingWalls { wall, existing });
            }
            placed.insert(wall);
        }

        let state = Self {
            positions,
            walls: placed,
            wall_budget,
            turn,
        };

        for player in PlayerId::ALL {
            if !path::exists_path(&state, state.position(player), |cell| player.is_goal(cell)) {
                return Err(InitializationError::NoPathToGoal { player });
            }
        }

        Ok(state)
    }

    /// Opening position with the default configuration.
    pub fn new_game() -> Self {
        Self::with_config(&GameConfig::default())
    }

    /// Opening position: pawns on their start cells, full budgets, Player One to move.
    pub fn with_config(config: &GameConfig) -> Self {
        let budget = config.wall_budget();
        Self {
            positions: [PlayerId::One.start(), PlayerId::Two.start()],
            walls: BTreeSet::new(),
            wall_budget: [budget, budget],
            turn: PlayerId::One,
        }
    }

    // ===== queries =====

    #[inline]
    pub fn position(&self, player: PlayerId) -> Position {
        self.positions[player.index()]
    }

    pub fn positions(&self) -> [Position; 2] {
        self.positions
    }

    /// Placed walls in canonical order.
    pub fn walls(&self) -> &BTreeSet<Wall> {
        &self.walls
    }

    #[inline]
    pub fn has_wall(&self, wall: &Wall) -> bool {
        self.walls.contains(wall)
    }

    #[inline]
    pub fn wall_budget(&self, player: PlayerId) -> u8 {
        self.wall_budget[player.index()]
    }

    #[inline]
    pub fn turn(&self) -> PlayerId {
        self.turn
    }

    /// Player One is checked first; a legal game can never reach a state
    /// where both pawns stand on their goal rows.
    pub fn outcome(&self) -> Outcome {
        PlayerId::ALL
            .into_iter()
            .find(|player| player.is_goal(self.position(*player)))
            .map_or(Outcome::InProgress, Outcome::Won)
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.outcome().winner()
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome().is_terminal()
    }

    /// SHA-256 fingerprint over positions, budgets, turn and walls.
    pub fn digest(&self) -> StateDigest {
        digest::compute(self)
    }

    // ===== transition helpers =====

    pub(crate) fn set_position(&mut self, player: PlayerId, position: Position) {
        self.positions[player.index()] = position;
    }

    /// Returns false if the wall was already present.
    pub(crate) fn insert_wall(&mut self, wall: Wall) -> bool {
        self.walls.insert(wall)
    }

    /// Decrements the budget; returns false if it was already empty.
    pub(crate) fn spend_wall(&mut self, player: PlayerId) -> bool {
        match self.wall_budget[player.index()].checked_sub(1) {
            Some(remaining) => {
                self.wall_budget[player.index()] = remaining;
                true
            }
            None => false,
        }
    }

    pub(crate) fn advance_turn(&mut self) {
        self.turn = self.turn.opponent();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}
