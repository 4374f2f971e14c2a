//! Error types for the command execution pipeline.

use crate::command::{
    AdvanceCommand, CommandTransition, EditGuessCommand, GuessCommand, MarkCorrectCommand,
    SkipCommand, StartCommand, ToggleRevealCommand,
};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing a command through the session engine.
///
/// A rejected command leaves the session state untouched; none of these are
/// fatal to the session.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecuteError {
    #[error("start command failed: {0}")]
    Start(TransitionPhaseError<<StartCommand as CommandTransition>::Error>),

    #[error("edit-guess command failed: {0}")]
    EditGuess(TransitionPhaseError<<EditGuessCommand as CommandTransition>::Error>),

    #[error("guess command failed: {0}")]
    Guess(TransitionPhaseError<<GuessCommand as CommandTransition>::Error>),

    #[error("skip command failed: {0}")]
    Skip(TransitionPhaseError<<SkipCommand as CommandTransition>::Error>),

    #[error("toggle-reveal command failed: {0}")]
    ToggleReveal(TransitionPhaseError<<ToggleRevealCommand as CommandTransition>::Error>),

    #[error("mark-correct command failed: {0}")]
    MarkCorrect(TransitionPhaseError<<MarkCorrectCommand as CommandTransition>::Error>),

    #[error("advance command failed: {0}")]
    Advance(TransitionPhaseError<<AdvanceCommand as CommandTransition>::Error>),
}
