//! Transition dispatch and execution logic.

use crate::action::{ActionTransition, MoveKind};
use crate::state::GameState;

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Executes a transition through the three-phase pipeline.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the working copy
/// 3. `post_validate` - Verify postconditions after mutation
#[inline]
fn drive_transition<T>(transition: &T, state: &mut GameState) -> Result<(), TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(state)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    transition
        .apply(state)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))
}

/// Routes a move to its transition. `state` is the engine's working copy.
pub(super) fn execute_transition(kind: &MoveKind, state: &mut GameState) -> Result<(), ExecuteError> {
    match kind {
        MoveKind::Pawn(transition) => {
            drive_transition(transition, state).map_err(ExecuteError::Pawn)
        }
        MoveKind::Wall(transition) => {
            drive_transition(transition, state).map_err(ExecuteError::Wall)
        }
    }
}
