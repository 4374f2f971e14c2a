//! Player-driven commands and their state transitions.
//!
//! A [`Command`] is the wire between a user gesture in the presentation
//! layer and one atomic state transition; the engine routes each variant
//! through its [`CommandTransition`] pipeline.
mod kinds;
mod transition;

pub use kinds::{
    AdvanceCommand, AdvanceError, EditGuessCommand, EditGuessError, GuessCommand, GuessError,
    MarkCorrectCommand, RevealError, SkipCommand, SkipError, StartCommand, StartError,
    ToggleRevealCommand,
};
pub use transition::CommandTransition;

/// A single operation on the session, one per user gesture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Begin play, loading the first clue.
    Start(StartCommand),
    /// Replace the guess buffer while typing.
    EditGuess(EditGuessCommand),
    /// Submit the guess text for evaluation.
    Guess(GuessCommand),
    /// Pass on the current clue.
    Skip(SkipCommand),
    /// Flip the resolved clue between question and answer.
    ToggleReveal(ToggleRevealCommand),
    /// Retroactively credit the last round ("I was right!").
    MarkCorrect(MarkCorrectCommand),
    /// Move on to the next clue or the summary.
    Advance(AdvanceCommand),
}

impl Command {
    pub fn start() -> Self {
        Self::Start(StartCommand)
    }

    pub fn edit_guess(text: impl Into<String>) -> Self {
        Self::EditGuess(EditGuessCommand { text: text.into() })
    }

    pub fn guess(text: impl Into<String>) -> Self {
        Self::Guess(GuessCommand { text: text.into() })
    }

    pub fn skip() -> Self {
        Self::Skip(SkipCommand)
    }

    pub fn toggle_reveal() -> Self {
        Self::ToggleReveal(ToggleRevealCommand)
    }

    pub fn mark_correct() -> Self {
        Self::MarkCorrect(MarkCorrectCommand)
    }

    pub fn advance() -> Self {
        Self::Advance(AdvanceCommand)
    }
}
