use crate::action::ActionTransition;
use crate::error::{ErrorSeverity, GameError};
use crate::path::exists_path;
use crate::state::{GameState, PlayerId, Wall};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WallError {
    #[error("{player} has no walls remaining")]
    NoWallsRemaining { player: PlayerId },

    #[error("wall {wall} is out of bounds")]
    OutOfBounds { wall: Wall },

    #[error("wall {wall} is already placed")]
    Duplicate { wall: Wall },

    #[error("wall {wall} overlaps wall {existing}")]
    Overlapping { wall: Wall, existing: Wall },

    #[error("wall {wall} crosses wall {existing}")]
    Crossing { wall: Wall, existing: Wall },

    #[error("wall would cut {player} off from the goal row")]
    PathSevered { player: PlayerId },
}

impl GameError for WallError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            WallError::OutOfBounds { .. } => ErrorSeverity::Validation,
            _ => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            WallError::NoWallsRemaining { .. } => "WALL_NO_WALLS_REMAINING",
            WallError::OutOfBounds { .. } => "WALL_OUT_OF_BOUNDS",
            WallError::Duplicate { .. } => "WALL_DUPLICATE",
            WallError::Overlapping { .. } => "WALL_OVERLAPPING",
            WallError::Crossing { .. } => "WALL_CROSSING",
            WallError::PathSevered { .. } => "WALL_PATH_SEVERED",
        }
    }
}

/// Checks bounds and conflicts with walls already on the board.
///
/// Does not look at budgets or paths.
pub fn validate_wall_geometry(state: &GameState, wall: Wall) -> Result<(), WallError> {
    if !wall.is_in_bounds() {
        return Err(WallError::OutOfBounds { wall });
    }
    if state.has_wall(&wall) {
        return Err(WallError::Duplicate { wall });
    }
    if let Some(existing) = wall
        .overlapping()
        .into_iter()
        .find(|other| state.has_wall(other))
    {
        return Err(WallError::Overlapping { wall, existing });
    }
    let crossing = wall.crossing();
    if state.has_wall(&crossing) {
        return Err(WallError::Crossing {
            wall,
            existing: crossing,
        });
    }
    Ok(())
}

/// Geometry plus the dual path check, without consuming a budget or a turn.
pub fn check_wall_placement(state: &GameState, wall: Wall) -> Result<(), WallError> {
    validate_wall_geometry(state, wall)?;
    let mut hypothetical = state.clone();
    hypothetical.insert_wall(wall);
    ensure_paths(&hypothetical)
}

fn ensure_paths(state: &GameState) -> Result<(), WallError> {
    for player in PlayerId::ALL {
        if !exists_path(state, state.position(player), |cell| player.is_goal(cell)) {
            return Err(WallError::PathSevered { player });
        }
    }
    Ok(())
}

/// Places `wall` on behalf of `player`, spending one wall from their budget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WallPlacement {
    pub player: PlayerId,
    pub wall: Wall,
}

impl WallPlacement {
    pub fn new(player: PlayerId, wall: Wall) -> Self {
        Self { player, wall }
    }
}

impl ActionTransition for WallPlacement {
    type Error = WallError;

    fn player(&self) -> PlayerId {
        self.player
    }

    fn pre_validate(&self, state: &GameState) -> Result<(), Self::Error> {
        if state.wall_budget(self.player) == 0 {
            return Err(WallError::NoWallsRemaining {
                player: self.player,
            });
        }
        validate_wall_geometry(state, self.wall)
    }

    fn apply(&self, state: &mut GameState) -> Result<(), Self::Error> {
        if !state.insert_wall(self.wall) {
            return Err(WallError::Duplicate { wall: self.wall });
        }
        if !state.spend_wall(self.player) {
            return Err(WallError::NoWallsRemaining {
                player: self.player,
            });
        }
        state.advance_turn();
        Ok(())
    }

    fn post_validate(&self, state: &GameState) -> Result<(), Self::Error> {
        ensure_paths(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Position;

    fn pos(row: i32, col: i32) -> Position {
        Position::new(row, col)
    }

    fn with_walls(walls: &[Wall]) -> GameState {
        GameState::new(
            [pos(0, 4), pos(8, 4)],
            walls.iter().copied(),
            [10, 10],
            PlayerId::One,
        )
        .expect("valid state")
    }

    #[test]
    fn geometry_names_each_violation() {
        let state = with_walls(&[Wall::horizontal(3, 3)]);

        assert_eq!(
            validate_wall_geometry(&state, Wall::vertical(8, 0)),
            Err(WallError::OutOfBounds {
                wall: Wall::vertical(8, 0)
            })
        );
        assert_eq!(
            validate_wall_geometry(&state, Wall::horizontal(3, 3)),
            Err(WallError::Duplicate {
                wall: Wall::horizontal(3, 3)
            })
        );
        assert_eq!(
            validate_wall_geometry(&state, Wall::horizontal(3, 2)),
            Err(WallError::Overlapping {
                wall: Wall::horizontal(3, 2),
                existing: Wall::horizontal(3, 3),
            })
        );
        assert_eq!(
            validate_wall_geometry(&state, Wall::horizontal(3, 4)),
            Err(WallError::Overlapping {
                wall: Wall::horizontal(3, 4),
                existing: Wall::horizontal(3, 3),
            })
        );
        assert_eq!(
            validate_wall_geometry(&state, Wall::vertical(3, 3)),
            Err(WallError::Crossing {
                wall: Wall::vertical(3, 3),
                existing: Wall::horizontal(3, 3),
            })
        );
    }

    #[test]
    fn adjacent_and_offset_walls_fit() {
        let state = with_walls(&[Wall::horizontal(3, 3)]);
        assert_eq!(validate_wall_geometry(&state, Wall::horizontal(3, 5)), Ok(()));
        assert_eq!(validate_wall_geometry(&state, Wall::horizontal(4, 3)), Ok(()));
        assert_eq!(validate_wall_geometry(&state, Wall::vertical(3, 4)), Ok(()));
        assert_eq!(validate_wall_geometry(&state, Wall::vertical(2, 3)), Ok(()));
    }

    #[test]
    fn placement_check_refuses_to_seal_a_player() {
        let state = with_walls(&[
            Wall::horizontal(0, 0),
            Wall::horizontal(0, 2),
            Wall::horizontal(0, 4),
            Wall::horizontal(0, 6),
        ]);
        assert_eq!(
            check_wall_placement(&state, Wall::vertical(0, 7)),
            Err(WallError::PathSevered {
                player: PlayerId::One
            })
        );
        assert_eq!(check_wall_placement(&state, Wall::vertical(1, 7)), Ok(()));
    }

    #[test]
    fn empty_budget_is_checked_first() {
        let state = GameState::new([pos(0, 4), pos(8, 4)], [], [0, 10], PlayerId::One)
            .expect("valid state");
        let err = WallPlacement::new(PlayerId::One, Wall::vertical(9, 9))
            .pre_validate(&state)
            .unwrap_err();
        assert_eq!(
            err,
            WallError::NoWallsRemaining {
                player: PlayerId::One
            }
        );
        assert_eq!(err.error_code(), "WALL_NO_WALLS_REMAINING");
    }

    #[test]
    fn placement_spends_budget_and_passes_turn() {
        let mut state = GameState::new_game();
        let placement = WallPlacement::new(PlayerId::One, Wall::horizontal(6, 3));
        placement.pre_validate(&state).expect("geometry");
        placement.apply(&mut state).expect("apply");
        placement.post_validate(&state).expect("paths");
        assert!(state.has_wall(&Wall::horizontal(6, 3)));
        assert_eq!(state.wall_budget(PlayerId::One), 9);
        assert_eq!(state.wall_budget(PlayerId::Two), 10);
        assert_eq!(state.turn(), PlayerId::Two);
    }
}
