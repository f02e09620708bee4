//! Breadth-first path queries over the wall graph.
//!
//! Cells are nodes, orthogonal adjacencies are edges, and a wall removes the
//! two edges it covers. Pawns never block these searches.

use std::collections::VecDeque;

use crate::config::GameConfig;
use crate::state::{GameState, PlayerId, Position, Wall};

const CELL_COUNT: usize = (GameConfig::BOARD_SIZE * GameConfig::BOARD_SIZE) as usize;

/// Returns true if a wall blocks the step between two orthogonally adjacent cells.
///
/// Non-adjacent pairs are never considered blocked.
pub fn wall_between(state: &GameState, a: Position, b: Position) -> bool {
    if a.col == b.col && a.row.abs_diff(b.row) == 1 {
        let row = a.row.min(b.row);
        state.has_wall(&Wall::horizontal(row, a.col))
            || state.has_wall(&Wall::horizontal(row, a.col - 1))
    } else if a.row == b.row && a.col.abs_diff(b.col) == 1 {
        let col = a.col.min(b.col);
        state.has_wall(&Wall::vertical(a.row, col))
            || state.has_wall(&Wall::vertical(a.row - 1, col))
    } else {
        false
    }
}

/// On-board neighbours of `cell` reachable without crossing a wall.
pub fn open_neighbors(state: &GameState, cell: Position) -> impl Iterator<Item = Position> + '_ {
    cell.neighbors()
        .into_iter()
        .filter(move |next| next.is_on_board() && !wall_between(state, cell, *next))
}

/// Returns true if any cell satisfying `is_goal` is reachable from `start`.
pub fn exists_path(state: &GameState, start: Position, is_goal: impl Fn(Position) -> bool) -> bool {
    shortest_distance(state, start, is_goal).is_some()
}

/// Hop count from `start` to the nearest cell satisfying `is_goal`.
pub fn shortest_distance(
    state: &GameState,
    start: Position,
    is_goal: impl Fn(Position) -> bool,
) -> Option<u32> {
    if !start.is_on_board() {
        return None;
    }

    let mut seen = [false; CELL_COUNT];
    let mut queue = VecDeque::new();
    seen[start.index()] = true;
    queue.push_back((start, 0u32));

    while let Some((cell, distance)) = queue.pop_front() {
        if is_goal(cell) {
            return Some(distance);
        }
        for next in open_neighbors(state, cell) {
            if !seen[next.index()] {
                seen[next.index()] = true;
                queue.push_back((next, distance + 1));
            }
        }
    }

    None
}

/// Shortest distance from `player`'s pawn to their goal row.
pub fn player_distance(state: &GameState, player: PlayerId) -> Option<u32> {
    shortest_distance(state, state.position(player), |cell| player.is_goal(cell))
}

/// Distance-to-goal for every cell, computed for one player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceField {
    player: PlayerId,
    distances: [Option<u32>; CELL_COUNT],
}

impl DistanceField {
    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// Distance from `cell` to the goal row; `None` if unreachable or off the board.
    pub fn get(&self, cell: Position) -> Option<u32> {
        if cell.is_on_board() {
            self.distances[cell.index()]
        } else {
            None
        }
    }

    pub fn reachable_cells(&self) -> usize {
        self.distances.iter().flatten().count()
    }
}

/// Multi-source BFS seeded from every cell of `player`'s goal row.
///
/// Walls block symmetrically, so walking backwards from the goal row yields
/// the same distances as a forward search from each cell.
pub fn distance_field(state: &GameState, player: PlayerId) -> DistanceField {
    let mut distances = [None; CELL_COUNT];
    let mut queue = VecDeque::new();

    let goal_row = player.goal_row();
    for col in 0..GameConfig::BOARD_SIZE {
        let cell = Position::new(goal_row, col);
        distances[cell.index()] = Some(0);
        queue.push_back(cell);
    }

    while let Some(cell) = queue.pop_front() {
        let Some(distance) = distances[cell.index()] else {
            continue;
        };
        for next in open_neighbors(state, cell) {
            if distances[next.index()].is_none() {
                distances[next.index()] = Some(distance + 1);
                queue.push_back(next);
            }
        }
    }

    DistanceField { player, distances }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pos(row: i32, col: i32) -> Position {
        Position::new(row, col)
    }

    fn state_with(walls: &[Wall]) -> GameState {
        GameState::new(
            [pos(0, 4), pos(8, 4)],
            walls.iter().copied(),
            [10, 10],
            PlayerId::One,
        )
        .expect("valid state")
    }

    #[test]
    fn horizontal_wall_blocks_vertical_steps_under_both_columns() {
        let state = state_with(&[Wall::horizontal(3, 3)]);
        assert!(wall_between(&state, pos(3, 3), pos(4, 3)));
        assert!(wall_between(&state, pos(4, 4), pos(3, 4)));
        assert!(!wall_between(&state, pos(3, 5), pos(4, 5)));
        assert!(!wall_between(&state, pos(3, 2), pos(4, 2)));
        assert!(!wall_between(&state, pos(3, 3), pos(3, 4)));
    }

    #[test]
    fn vertical_wall_blocks_horizontal_steps_on_both_rows() {
        let state = state_with(&[Wall::vertical(3, 3)]);
        assert!(wall_between(&state, pos(3, 3), pos(3, 4)));
        assert!(wall_between(&state, pos(4, 4), pos(4, 3)));
        assert!(!wall_between(&state, pos(5, 3), pos(5, 4)));
        assert!(!wall_between(&state, pos(2, 3), pos(2, 4)));
        assert!(!wall_between(&state, pos(3, 3), pos(4, 3)));
    }

    #[test]
    fn non_adjacent_cells_are_never_blocked() {
        let state = state_with(&[Wall::horizontal(3, 3)]);
        assert!(!wall_between(&state, pos(3, 3), pos(5, 3)));
        assert!(!wall_between(&state, pos(3, 3), pos(4, 4)));
    }

    #[test]
    fn open_board_distances_are_straight_lines() {
        let state = GameState::new_game();
        assert_eq!(player_distance(&state, PlayerId::One), Some(8));
        assert_eq!(player_distance(&state, PlayerId::Two), Some(8));
    }

    #[test]
    fn walls_force_detours() {
        // Barrier under row 0 across columns 2..=7 forces a sideways walk.
        let state = state_with(&[
            Wall::horizontal(0, 2),
            Wall::horizontal(0, 4),
            Wall::horizontal(0, 6),
        ]);
        assert_eq!(player_distance(&state, PlayerId::One), Some(11));
        // Player Two meets the same barrier from below.
        assert_eq!(player_distance(&state, PlayerId::Two), Some(11));
    }

    #[test]
    fn bfs_respects_goal_predicate_and_bounds() {
        let state = state_with(&[]);
        assert!(exists_path(&state, pos(4, 4), |cell| cell == pos(4, 5)));
        assert_eq!(shortest_distance(&state, pos(4, 4), |_| false), None);
        assert_eq!(shortest_distance(&state, pos(-1, 0), |_| true), None);
    }

    #[test]
    fn distance_field_matches_open_board() {
        let state = GameState::new_game();
        let field = distance_field(&state, PlayerId::Two);
        assert_eq!(field.player(), PlayerId::Two);
        assert_eq!(field.get(pos(0, 0)), Some(0));
        assert_eq!(field.get(pos(8, 4)), Some(8));
        assert_eq!(field.get(pos(9, 4)), None);
        assert_eq!(field.reachable_cells(), CELL_COUNT);
    }

    fn arbitrary_walls() -> impl Strategy<Value = Vec<Wall>> {
        prop::collection::vec((any::<bool>(), 0..8i32, 0..8i32), 0..16).prop_map(|raw| {
            raw.into_iter()
                .map(|(horizontal, row, col)| {
                    if horizontal {
                        Wall::horizontal(row, col)
                    } else {
                        Wall::vertical(row, col)
                    }
                })
                .collect()
        })
    }

    /// Keeps only walls that fit geometrically and leave both goals reachable.
    fn legal_state(walls: Vec<Wall>) -> GameState {
        let mut accepted: Vec<Wall> = Vec::new();
        let mut state = state_with(&[]);
        for wall in walls {
            let mut candidate = accepted.clone();
            candidate.push(wall);
            if let Ok(next) = GameState::new(
                [pos(0, 4), pos(8, 4)],
                candidate.iter().copied(),
                [10, 10],
                PlayerId::One,
            ) {
                accepted = candidate;
                state = next;
            }
        }
        state
    }

    proptest! {
        #[test]
        fn distance_field_agrees_with_bfs(walls in arbitrary_walls(), row in 0..9i32, col in 0..9i32) {
            let state = legal_state(walls);
            let cell = pos(row, col);
            for player in PlayerId::ALL {
                let field = distance_field(&state, player);
                let direct = shortest_distance(&state, cell, |c| player.is_goal(c));
                prop_assert_eq!(field.get(cell), direct);
            }
        }
    }
}
