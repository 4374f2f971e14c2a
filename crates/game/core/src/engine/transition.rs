//! Command transition dispatch and execution logic.

use crate::command::{Command, CommandTransition};
use crate::deck::ClueDeck;
use crate::state::SessionState;

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Executes a transition through the three-phase pipeline.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the session state
/// 3. `post_validate` - Verify postconditions after mutation
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut SessionState,
    deck: &ClueDeck,
) -> Result<(), TransitionPhaseError<T::Error>>
where
    T: CommandTransition,
{
    transition
        .pre_validate(state, deck)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    transition
        .apply(state, deck)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, deck)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(())
}

/// Executes a command through the transition pipeline.
///
/// This is the internal implementation used by `SessionEngine::execute()`.
/// Routes each command variant to its transition and wraps any failure in
/// the matching [`ExecuteError`] variant.
pub(super) fn execute_transition(
    command: &Command,
    state: &mut SessionState,
    deck: &ClueDeck,
) -> Result<(), ExecuteError> {
    match command {
        Command::Start(transition) => {
            drive_transition(transition, state, deck).map_err(ExecuteError::Start)
        }
        Command::EditGuess(transition) => {
            drive_transition(transition, state, deck).map_err(ExecuteError::EditGuess)
        }
        Command::Guess(transition) => {
            drive_transition(transition, state, deck).map_err(ExecuteError::Guess)
        }
        Command::Skip(transition) => {
            drive_transition(transition, state, deck).map_err(ExecuteError::Skip)
        }
        Command::ToggleReveal(transition) => {
            drive_transition(transition, state, deck).map_err(ExecuteError::ToggleReveal)
        }
        Command::MarkCorrect(transition) => {
            drive_transition(transition, state, deck).map_err(ExecuteError::MarkCorrect)
        }
        Command::Advance(transition) => {
            drive_transition(transition, state, deck).map_err(ExecuteError::Advance)
        }
    }
}
