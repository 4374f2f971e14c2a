//! Command execution pipeline.
//!
//! The [`SessionEngine`] is the authoritative reducer for [`SessionState`].
//! Every session mutation, from the first `start` to the last `advance`,
//! flows through the same execute() pipeline, so a render pass never
//! observes a half-applied transition.

mod errors;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use crate::command::Command;
use crate::deck::ClueDeck;
use crate::state::SessionState;

/// Session engine that executes commands against the owned state.
///
/// Commands are validated before they mutate anything; a rejected command
/// returns an error and leaves the state exactly as it was. The deck is the
/// immutable environment every execution reads from.
pub struct SessionEngine<'a> {
    state: &'a mut SessionState,
}

impl<'a> SessionEngine<'a> {
    /// Creates a new engine borrowing the given state.
    pub fn new(state: &'a mut SessionState) -> Self {
        Self { state }
    }

    /// Executes a command by routing it through its transition pipeline.
    pub fn execute(&mut self, deck: &ClueDeck, command: &Command) -> Result<(), ExecuteError> {
        transition::execute_transition(command, self.state, deck)
    }
}
