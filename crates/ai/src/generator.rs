//! Candidate moves for the search.
//!
//! Pawn moves are always complete. Walls are limited to a neighbourhood of
//! the two pawns, shuffled and capped, so the branching factor stays near 25
//! instead of well over a hundred.

use std::collections::BTreeSet;

use quoridor_core::{
    GameState, Move, Orientation, Wall, check_wall_placement, possible_pawn_moves,
    validate_wall_geometry,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::trace;

use crate::config::SearchConfig;

/// Produces the moves the search will try from a state.
///
/// Output depends only on `(seed, state)`: the shuffle RNG is seeded from the
/// caller's seed mixed with the state digest.
#[derive(Clone, Debug)]
pub struct MoveGenerator {
    wall_radius: i32,
    max_wall_candidates: usize,
}

impl MoveGenerator {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            wall_radius: config.wall_radius.max(0),
            max_wall_candidates: config.max_wall_candidates,
        }
    }

    /// Pawn moves for the side to move, then strategic walls if it has any left.
    pub fn generate(&self, state: &GameState, seed: u64) -> Vec<Move> {
        let player = state.turn();
        let mut moves: Vec<Move> = possible_pawn_moves(state, player)
            .into_iter()
            .map(Move::Pawn)
            .collect();

        if state.wall_budget(player) > 0 {
            moves.extend(self.strategic_walls(state, seed).into_iter().map(Move::Wall));
        }

        moves
    }

    /// Walls near either pawn that are placeable without severing a path.
    pub fn strategic_walls(&self, state: &GameState, seed: u64) -> Vec<Wall> {
        let radius = self.wall_radius;
        let mut nearby = BTreeSet::new();
        for pawn in state.positions() {
            for dr in -radius..=radius {
                for dc in -radius..=radius {
                    for orientation in Orientation::ALL {
                        let wall = Wall::new(orientation, pawn.row + dr, pawn.col + dc);
                        if validate_wall_geometry(state, wall).is_ok() {
                            nearby.insert(wall);
                        }
                    }
                }
            }
        }

        let mut walls: Vec<Wall> = nearby.into_iter().collect();
        let mut rng = StdRng::seed_from_u64(seed ^ state.digest().fold_u64());
        walls.shuffle(&mut rng);
        walls.truncate(self.max_wall_candidates);
        walls.retain(|wall| check_wall_placement(state, *wall).is_ok());

        trace!(walls = walls.len(), turn = %state.turn(), "generated wall candidates");
        walls
    }
}

impl Default for MoveGenerator {
    fn default() -> Self {
        Self::new(&SearchConfig::default())
    }
}
