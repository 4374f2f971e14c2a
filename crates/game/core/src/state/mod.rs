//! Authoritative session state representation.
//!
//! This module owns the data structures that describe the active clue, the
//! guess buffer, and the answered-clue history. Runtime layers clone or
//! query this state but mutate it exclusively through the engine.
pub mod types;

pub use bounded_vector::BoundedVec;
pub use types::{AnsweredClue, Clue, Outcome, Phase};

use crate::config::GameConfig;

/// Canonical snapshot of one play session.
///
/// Created once per session in [`Phase::Start`] with an empty history and a
/// zero cursor; discarded or reset when the player chooses to play again.
/// Exactly one clue is active while the phase is `Question` or `Guessed`,
/// none in `Start` or `Summary`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Current position in the session lifecycle.
    pub phase: Phase,

    /// Cursor into the daily deck, pointing at the next clue to load.
    /// Monotonically increasing, never reset within a session.
    pub clue_index: usize,

    /// The clue on the table, or `None` in `Start`/`Summary`.
    pub active_clue: Option<Clue>,

    /// The player's current guess text.
    ///
    /// Cleared exactly when a new clue loads; kept across resolution so a
    /// `Guessed` re-render can still display what was typed.
    pub guess: String,

    /// Last user-facing status line. Empty when there is nothing to report.
    pub message: String,

    /// Resolved rounds, oldest first. Append-only except for the single
    /// correct-override mutation on the most recent entry.
    pub history: BoundedVec<AnsweredClue, 0, { GameConfig::ROUND_LIMIT }>,

    /// Set when the latest resolution earned credit; cleared on advance.
    /// Presentation layers use this to trigger their celebration effect.
    pub celebrate: bool,
}

impl SessionState {
    /// Creates a fresh session in `Start` with an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rounds resolved so far.
    pub fn answered(&self) -> usize {
        self.history.len()
    }

    /// The most recently resolved round, if any.
    pub fn last_answered(&self) -> Option<&AnsweredClue> {
        self.history.iter().last()
    }
}
