use crate::deck::ClueDeck;
use crate::state::SessionState;

/// Defines how a concrete command variant mutates session state.
///
/// Implementors can override the validation hooks to surface pre- and
/// post-conditions that must hold around the state mutation. All hooks
/// receive read-only access to the immutable daily deck and must stay
/// side-effect free outside the state they are handed.
pub trait CommandTransition {
    type Error;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &SessionState, _deck: &ClueDeck) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the command by mutating the session state directly.
    /// Implementations should assume that `pre_validate` has already run
    /// successfully.
    fn apply(&self, state: &mut SessionState, deck: &ClueDeck) -> Result<(), Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &SessionState, _deck: &ClueDeck) -> Result<(), Self::Error> {
        Ok(())
    }
}
