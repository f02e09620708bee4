//! Static position evaluation.
//!
//! Scores are always from the perspective of the player the evaluator was
//! built for: positive favours that player. Decided games score
//! [`EvaluationWeights::win`]; everything else is a weighted sum of race
//! terms that stays far below it.

use arrayvec::ArrayVec;
use quoridor_core::path::{DistanceField, distance_field, open_neighbors};
use quoridor_core::{GameConfig, GameState, Outcome, PlayerId, possible_pawn_moves};

/// Coefficients of the heuristic terms.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EvaluationWeights {
    pub win: i32,
    pub path: i32,
    pub fragility: i32,
    /// Added to the fragility of a pawn with a single open neighbour.
    pub single_exit_penalty: i32,
    pub near_goal: i32,
    pub approaching_goal: i32,
    pub wall: i32,
    pub wall_defending: i32,
    pub wall_threat: i32,
    pub mobility: i32,
    pub centrality: i32,
}

impl Default for EvaluationWeights {
    fn default() -> Self {
        Self {
            win: 20_000,
            path: 100,
            fragility: 12,
            single_exit_penalty: 4,
            near_goal: 250,
            approaching_goal: 120,
            wall: 10,
            wall_defending: 25,
            wall_threat: 15,
            mobility: 5,
            centrality: 2,
        }
    }
}

/// Heuristic scorer bound to one player.
#[derive(Clone, Debug)]
pub struct Evaluator {
    player: PlayerId,
    weights: EvaluationWeights,
}

impl Evaluator {
    pub fn new(player: PlayerId) -> Self {
        Self::with_weights(player, EvaluationWeights::default())
    }

    pub fn with_weights(player: PlayerId, weights: EvaluationWeights) -> Self {
        Self { player, weights }
    }

    pub fn player(&self) -> PlayerId {
        self.player
    }

    pub fn weights(&self) -> &EvaluationWeights {
        &self.weights
    }

    pub fn evaluate(&self, state: &GameState) -> i32 {
        let w = &self.weights;
        let me = self.player;
        let opp = me.opponent();

        if let Outcome::Won(winner) = state.outcome() {
            return if winner == me { w.win } else { -w.win };
        }

        let my_field = distance_field(state, me);
        let opp_field = distance_field(state, opp);
        let Some(my_dist) = my_field.get(state.position(me)) else {
            return -w.win;
        };
        let Some(opp_dist) = opp_field.get(state.position(opp)) else {
            return w.win;
        };
        let (my_dist, opp_dist) = (my_dist as i32, opp_dist as i32);

        let mut score = w.path * (opp_dist - my_dist);

        score += w.fragility
            * (self.fragility(state, &opp_field, opp) - self.fragility(state, &my_field, me));

        score += self.endgame_bonus(my_dist) - self.endgame_bonus(opp_dist);

        let my_walls = i32::from(state.wall_budget(me));
        let opp_walls = i32::from(state.wall_budget(opp));
        let per_wall = if opp_dist <= 3 { w.wall_defending } else { w.wall };
        score += per_wall * (my_walls - opp_walls);
        if my_dist <= 3 {
            score -= w.wall_threat * opp_walls;
        }

        let my_moves = possible_pawn_moves(state, me).len() as i32;
        let opp_moves = possible_pawn_moves(state, opp).len() as i32;
        score += w.mobility * (my_moves - opp_moves);

        let center = GameConfig::CENTER_COL;
        score += w.centrality
            * ((state.position(opp).col - center).abs() - (state.position(me).col - center).abs());

        score
    }

    /// Evaluation at a search leaf with `remaining` plies left unsearched.
    ///
    /// Decided games move away from zero by `remaining`, so a win found
    /// closer to the root outranks a later one and a loss is postponed.
    pub fn score_at_depth(&self, state: &GameState, remaining: u8) -> i32 {
        let score = self.evaluate(state);
        match state.outcome() {
            Outcome::Won(winner) if winner == self.player => score + i32::from(remaining),
            Outcome::Won(_) => score - i32::from(remaining),
            Outcome::InProgress => score,
        }
    }

    /// Gap between the best and second-best exits from `player`'s cell.
    ///
    /// A large gap means one wall could cost the pawn several steps.
    fn fragility(&self, state: &GameState, field: &DistanceField, player: PlayerId) -> i32 {
        let mut exits: ArrayVec<u32, 4> = open_neighbors(state, state.position(player))
            .filter_map(|cell| field.get(cell))
            .collect();
        exits.sort_unstable();

        match exits.as_slice() {
            [] => 0,
            [only] => *only as i32 + self.weights.single_exit_penalty,
            [best, second, ..] => (*second - *best) as i32,
        }
    }

    fn endgame_bonus(&self, distance: i32) -> i32 {
        match distance {
            ..=2 => self.weights.near_goal,
            3 => self.weights.approaching_goal,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quoridor_core::{Position, Wall};

    fn pos(row: i32, col: i32) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn opening_is_balanced() {
        let state = GameState::new_game();
        assert_eq!(Evaluator::new(PlayerId::One).evaluate(&state), 0);
        assert_eq!(Evaluator::new(PlayerId::Two).evaluate(&state), 0);
    }

    #[test]
    fn decided_games_score_the_win_constant() {
        let state = GameState::new([pos(8, 2), pos(3, 3)], [], [0, 0], PlayerId::Two)
            .expect("valid state");
        assert_eq!(Evaluator::new(PlayerId::One).evaluate(&state), 20_000);
        assert_eq!(Evaluator::new(PlayerId::Two).evaluate(&state), -20_000);
    }

    #[test]
    fn remaining_depth_rewards_faster_wins() {
        let state = GameState::new([pos(8, 2), pos(3, 3)], [], [0, 0], PlayerId::Two)
            .expect("valid state");
        let winner = Evaluator::new(PlayerId::One);
        let loser = Evaluator::new(PlayerId::Two);
        assert_eq!(winner.score_at_depth(&state, 3), 20_003);
        assert_eq!(loser.score_at_depth(&state, 3), -20_003);
        assert!(winner.score_at_depth(&state, 2) < winner.score_at_depth(&state, 3));

        let open = GameState::new_game();
        assert_eq!(winner.score_at_depth(&open, 4), winner.evaluate(&open));
    }

    #[test]
    fn shorter_path_is_better() {
        let state = GameState::new([pos(4, 4), pos(8, 4)], [], [10, 10], PlayerId::Two)
            .expect("valid state");
        let score = Evaluator::new(PlayerId::One).evaluate(&state);
        assert!(score > 0, "score {score}");
        assert_eq!(Evaluator::new(PlayerId::Two).evaluate(&state), -score);
    }

    #[test]
    fn wall_budget_counts() {
        let rich = GameState::new([pos(0, 4), pos(8, 4)], [], [10, 5], PlayerId::One)
            .expect("valid state");
        assert_eq!(Evaluator::new(PlayerId::One).evaluate(&rich), 50);
    }

    #[test]
    fn single_exit_is_fragile() {
        // Player One in the corner pocket with one way out.
        let state = GameState::new(
            [pos(0, 0), pos(8, 4)],
            [Wall::horizontal(0, 0)],
            [10, 10],
            PlayerId::One,
        )
        .expect("valid state");
        let evaluator = Evaluator::new(PlayerId::One);
        let field = distance_field(&state, PlayerId::One);
        // Only (0, 1) is open; from there the detour runs through column 2.
        assert_eq!(field.get(pos(0, 1)), Some(9));
        assert_eq!(evaluator.fragility(&state, &field, PlayerId::One), 13);
    }
}
