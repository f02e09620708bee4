use crate::state::{GameState, PlayerId};

/// Defines how a concrete move variant changes the game state.
///
/// The engine always hands `apply` a private clone of the caller's state, so
/// implementors mutate freely; a failure in any phase discards the clone.
/// Validation hooks must stay side-effect free.
pub trait ActionTransition {
    type Error;

    /// Player performing the move.
    fn player(&self) -> PlayerId;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &GameState) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the move. Implementations may assume `pre_validate` succeeded.
    fn apply(&self, state: &mut GameState) -> Result<(), Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &GameState) -> Result<(), Self::Error> {
        Ok(())
    }
}
