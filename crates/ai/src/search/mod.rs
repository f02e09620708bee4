//! Depth-limited minimax with alpha-beta pruning.
//!
//! A [`SearchEngine`] owns everything mutable about a search: the
//! transposition table, the RNG and the counters. Engines are independent;
//! two engines never share a cache.

mod transposition;

pub use transposition::{Bound, TranspositionEntry, TranspositionKey, TranspositionTable};

use quoridor_core::{GameState, Move, PlayerId, apply_move, possible_pawn_moves};
use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use tracing::{debug, trace, warn};

use crate::config::{Difficulty, DifficultyTable, SearchConfig};
use crate::error::SearchError;
use crate::evaluation::Evaluator;
use crate::generator::MoveGenerator;

/// Window bound used for an unbounded search.
pub const INFINITY: i32 = i32::MAX;

/// Counters for the most recent [`SearchEngine::find_best_move`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub cache_hits: u64,
    pub skipped_candidates: u64,
}

pub struct SearchEngine {
    player: PlayerId,
    config: SearchConfig,
    seed: u64,
    rng: StdRng,
    generator: MoveGenerator,
    evaluator: Evaluator,
    table: TranspositionTable,
    stats: SearchStats,
}

impl SearchEngine {
    /// Engine for `player` using the default depth for `difficulty`.
    pub fn new(player: PlayerId, difficulty: Difficulty) -> Self {
        Self::with_config(
            player,
            SearchConfig::for_difficulty(difficulty, &DifficultyTable::default()),
        )
    }

    pub fn with_config(player: PlayerId, config: SearchConfig) -> Self {
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        Self {
            player,
            seed,
            rng: StdRng::seed_from_u64(seed),
            generator: MoveGenerator::new(&config),
            evaluator: Evaluator::new(player),
            table: TranspositionTable::new(),
            stats: SearchStats::default(),
            config,
        }
    }

    pub fn player(&self) -> PlayerId {
        self.player
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Seed driving both the root shuffle and candidate generation.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn generator(&self) -> &MoveGenerator {
        &self.generator
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn cache_len(&self) -> usize {
        self.table.len()
    }

    /// Drops every cached position. Call between games.
    pub fn clear_cache(&mut self) {
        self.table.clear();
    }

    /// Chooses a move for the engine's player.
    ///
    /// Root candidates are shuffled and each is searched with a full window,
    /// so ties are broken by the shuffle and the first strictly better score
    /// wins.
    pub fn find_best_move(&mut self, state: &GameState) -> Result<Move, SearchError> {
        let current = state.turn();
        if current != self.player {
            return Err(SearchError::OutOfTurn {
                player: self.player,
                current,
            });
        }
        if let Some(winner) = state.winner() {
            return Err(SearchError::GameOver { winner });
        }

        self.stats = SearchStats::default();
        let depth = self.config.effective_depth();
        let mut candidates = self.generator.generate(state, self.seed);
        candidates.shuffle(&mut self.rng);

        let mut best: Option<(Move, i32)> = None;
        for mv in &candidates {
            let next = match apply_move(state, self.player, mv) {
                Ok(next) => next,
                Err(error) => {
                    self.stats.skipped_candidates += 1;
                    warn!(%mv, %error, "skipping illegal root candidate");
                    continue;
                }
            };
            let score = self.minimax(&next, depth - 1, -INFINITY, INFINITY, false);
            trace!(%mv, score, "root candidate");
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((*mv, score));
            }
        }

        if let Some((mv, score)) = best {
            debug!(
                player = %self.player,
                depth,
                candidates = candidates.len(),
                nodes = self.stats.nodes,
                cache_hits = self.stats.cache_hits,
                score,
                %mv,
                "search complete"
            );
            return Ok(mv);
        }

        let fallback = possible_pawn_moves(state, self.player);
        match fallback.choose(&mut self.rng) {
            Some(target) => {
                warn!(player = %self.player, %target, "no searchable candidate, falling back to a random pawn move");
                Ok(Move::Pawn(*target))
            }
            None => Err(SearchError::NoLegalMove {
                player: self.player,
            }),
        }
    }

    /// Minimax value of `state` from the engine player's perspective.
    ///
    /// `maximizing` must be true exactly when the engine's player is to move.
    /// Candidates rejected by the rules are skipped; a node with no playable
    /// candidate is scored as a leaf.
    pub fn minimax(
        &mut self,
        state: &GameState,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.stats.nodes += 1;

        if depth == 0 || state.is_terminal() {
            return self.evaluator.score_at_depth(state, depth);
        }

        let key = (state.digest(), maximizing);
        if let Some(score) = self.table.probe(&key, depth, alpha, beta) {
            self.stats.cache_hits += 1;
            return score;
        }

        let (alpha_in, beta_in) = (alpha, beta);
        let mover = state.turn();
        let mut best: Option<i32> = None;

        for mv in self.generator.generate(state, self.seed) {
            let next = match apply_move(state, mover, &mv) {
                Ok(next) => next,
                Err(error) => {
                    self.stats.skipped_candidates += 1;
                    warn!(%mv, %error, "skipping illegal candidate");
                    continue;
                }
            };

            let score = self.minimax(&next, depth - 1, alpha, beta, !maximizing);
            if maximizing {
                best = Some(best.map_or(score, |b| b.max(score)));
                alpha = alpha.max(score);
            } else {
                best = Some(best.map_or(score, |b| b.min(score)));
                beta = beta.min(score);
            }
            if alpha >= beta {
                break;
            }
        }

        let Some(best) = best else {
            return self.evaluator.score_at_depth(state, depth);
        };

        self.table.store(
            key,
            TranspositionEntry {
                depth,
                score: best,
                bound: Bound::classify(best, alpha_in, beta_in),
            },
        );
        best
    }
}
