//! The concrete session commands and their transitions.
//!
//! Each command validates the phase guard from the session's transition
//! table, applies its effect, and leaves the state untouched when rejected.

use crate::command::CommandTransition;
use crate::deck::ClueDeck;
use crate::error::NeverError;
use crate::evaluate::is_correct;
use crate::state::{AnsweredClue, Outcome, Phase, SessionState};

/// Loads the clue at the cursor, advances it, and resets per-round state.
///
/// Returns false (leaving the state untouched) when the cursor has run past
/// the end of the deck.
fn load_next_clue(state: &mut SessionState, deck: &ClueDeck) -> bool {
    let Some(clue) = deck.get(state.clue_index) else {
        return false;
    };

    state.active_clue = Some(clue.clone());
    state.clue_index += 1;
    state.phase = Phase::Question;
    state.guess.clear();
    state.message.clear();
    state.celebrate = false;
    true
}

/// Begins the session by loading the first clue of the deck.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StartCommand;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StartError {
    #[error("session already started (phase {actual})")]
    AlreadyStarted { actual: Phase },

    #[error("no clue batch available")]
    EmptyDeck,
}

impl CommandTransition for StartCommand {
    type Error = StartError;

    fn pre_validate(&self, state: &SessionState, deck: &ClueDeck) -> Result<(), Self::Error> {
        if state.phase != Phase::Start {
            return Err(StartError::AlreadyStarted {
                actual: state.phase,
            });
        }
        if deck.is_empty() {
            return Err(StartError::EmptyDeck);
        }
        Ok(())
    }

    fn apply(&self, state: &mut SessionState, deck: &ClueDeck) -> Result<(), Self::Error> {
        if !load_next_clue(state, deck) {
            return Err(StartError::EmptyDeck);
        }
        Ok(())
    }
}

/// Replaces the guess buffer while the player is typing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditGuessCommand {
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EditGuessError {
    #[error("guess editing requires phase QUESTION, session is in {actual}")]
    WrongPhase { actual: Phase },
}

impl CommandTransition for EditGuessCommand {
    type Error = EditGuessError;

    fn pre_validate(&self, state: &SessionState, _deck: &ClueDeck) -> Result<(), Self::Error> {
        if state.phase != Phase::Question {
            return Err(EditGuessError::WrongPhase {
                actual: state.phase,
            });
        }
        Ok(())
    }

    fn apply(&self, state: &mut SessionState, _deck: &ClueDeck) -> Result<(), Self::Error> {
        state.guess = self.text.clone();
        Ok(())
    }
}

/// Submits a guess for evaluation, resolving the round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuessCommand {
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GuessError {
    #[error("guessing requires phase QUESTION, session is in {actual}")]
    WrongPhase { actual: Phase },

    #[error("no clue is on the table")]
    NoActiveClue,

    #[error("answered-clue history is full")]
    HistoryFull,
}

impl CommandTransition for GuessCommand {
    type Error = GuessError;

    fn pre_validate(&self, state: &SessionState, _deck: &ClueDeck) -> Result<(), Self::Error> {
        if state.phase != Phase::Question {
            return Err(GuessError::WrongPhase {
                actual: state.phase,
            });
        }
        Ok(())
    }

    fn apply(&self, state: &mut SessionState, _deck: &ClueDeck) -> Result<(), Self::Error> {
        let Some(clue) = state.active_clue.as_ref() else {
            return Err(GuessError::NoActiveClue);
        };

        let correct = is_correct(&self.text, &clue.answer);
        let outcome = if correct {
            Outcome::Correct
        } else {
            Outcome::Incorrect
        };
        let round = AnsweredClue::resolved(clue, self.text.clone(), outcome);
        state
            .history
            .push(round)
            .map_err(|_| GuessError::HistoryFull)?;

        // The buffer keeps the submitted text so a GUESSED re-render can
        // still display it; it is only cleared when the next clue loads.
        state.guess = self.text.clone();
        if let Some(clue) = state.active_clue.as_mut() {
            clue.revealed = true;
        }
        state.message = if correct { "Right!" } else { "Wrong!" }.to_owned();
        state.celebrate = correct;
        state.phase = Phase::Guessed;
        Ok(())
    }
}

/// Passes on the clue, resolving the round without a score effect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SkipCommand;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SkipError {
    #[error("skipping requires phase QUESTION, session is in {actual}")]
    WrongPhase { actual: Phase },

    #[error("no clue is on the table")]
    NoActiveClue,

    #[error("answered-clue history is full")]
    HistoryFull,
}

impl CommandTransition for SkipCommand {
    type Error = SkipError;

    fn pre_validate(&self, state: &SessionState, _deck: &ClueDeck) -> Result<(), Self::Error> {
        if state.phase != Phase::Question {
            return Err(SkipError::WrongPhase {
                actual: state.phase,
            });
        }
        Ok(())
    }

    fn apply(&self, state: &mut SessionState, _deck: &ClueDeck) -> Result<(), Self::Error> {
        let Some(clue) = state.active_clue.as_ref() else {
            return Err(SkipError::NoActiveClue);
        };

        let round = AnsweredClue::skipped(clue);
        state
            .history
            .push(round)
            .map_err(|_| SkipError::HistoryFull)?;

        if let Some(clue) = state.active_clue.as_mut() {
            clue.revealed = true;
        }
        state.message = "Skipped!".to_owned();
        state.phase = Phase::Guessed;
        Ok(())
    }
}

/// Flips the active clue between showing its question and its answer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ToggleRevealCommand;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RevealError {
    #[error("reveal toggling requires phase GUESSED, session is in {actual}")]
    WrongPhase { actual: Phase },

    #[error("no clue is on the table")]
    NoActiveClue,
}

impl CommandTransition for ToggleRevealCommand {
    type Error = RevealError;

    fn pre_validate(&self, state: &SessionState, _deck: &ClueDeck) -> Result<(), Self::Error> {
        if state.phase != Phase::Guessed {
            return Err(RevealError::WrongPhase {
                actual: state.phase,
            });
        }
        Ok(())
    }

    fn apply(&self, state: &mut SessionState, _deck: &ClueDeck) -> Result<(), Self::Error> {
        let clue = state
            .active_clue
            .as_mut()
            .ok_or(RevealError::NoActiveClue)?;
        clue.revealed = !clue.revealed;
        Ok(())
    }
}

/// Retroactively credits the most recent round ("I was right!").
///
/// Fires only when the last resolved round is `Incorrect`; anything else
/// (already correct, skipped, empty history, wrong phase) is a silent no-op.
/// This guards against double-crediting and against crediting a skip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MarkCorrectCommand;

impl CommandTransition for MarkCorrectCommand {
    type Error = NeverError;

    fn apply(&self, state: &mut SessionState, _deck: &ClueDeck) -> Result<(), Self::Error> {
        if state.phase != Phase::Guessed {
            return Ok(());
        }
        let Some(last) = state.history.iter_mut().last() else {
            return Ok(());
        };
        if last.outcome != Outcome::Incorrect {
            return Ok(());
        }

        last.outcome = Outcome::Correct;
        state.message = format!(
            "My bad, you were right... ${} added to your score!",
            last.value
        );
        state.celebrate = true;
        Ok(())
    }
}

/// Moves on from a resolved round: next clue, or the summary once the deck
/// or the round limit is exhausted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AdvanceCommand;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AdvanceError {
    #[error("advancing requires phase GUESSED, session is in {actual}")]
    WrongPhase { actual: Phase },

    #[error("active clue does not match phase after advance")]
    CluePhaseMismatch,
}

impl CommandTransition for AdvanceCommand {
    type Error = AdvanceError;

    fn pre_validate(&self, state: &SessionState, _deck: &ClueDeck) -> Result<(), Self::Error> {
        if state.phase != Phase::Guessed {
            return Err(AdvanceError::WrongPhase {
                actual: state.phase,
            });
        }
        Ok(())
    }

    fn apply(&self, state: &mut SessionState, deck: &ClueDeck) -> Result<(), Self::Error> {
        state.guess.clear();
        state.celebrate = false;

        // Reaching the round limit ends the session; so does running out of
        // clues in a short deck.
        if state.history.len() >= deck.rounds() || !load_next_clue(state, deck) {
            state.phase = Phase::Summary;
            state.active_clue = None;
        }
        Ok(())
    }

    fn post_validate(&self, state: &SessionState, _deck: &ClueDeck) -> Result<(), Self::Error> {
        if state.phase.has_active_clue() != state.active_clue.is_some() {
            return Err(AdvanceError::CluePhaseMismatch);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::scoring::current_score;
    use crate::state::Clue;

    fn deck_of(values: &[i64]) -> ClueDeck {
        ClueDeck::new(
            values
                .iter()
                .enumerate()
                .map(|(n, value)| {
                    Clue::new("HISTORY", format!("q{n}"), format!("a{n}"), *value, 1997)
                })
                .collect(),
        )
    }

    fn started(deck: &ClueDeck) -> SessionState {
        let mut state = SessionState::new();
        StartCommand.apply(&mut state, deck).unwrap();
        state
    }

    /// Resolves the current round with the given guess and advances past it.
    fn play_round(state: &mut SessionState, deck: &ClueDeck, guess: &str) {
        GuessCommand {
            text: guess.to_owned(),
        }
        .apply(state, deck)
        .unwrap();
        AdvanceCommand.apply(state, deck).unwrap();
    }

    #[test]
    fn start_loads_the_first_clue() {
        let deck = deck_of(&[200, 400]);
        let mut state = SessionState::new();

        StartCommand.pre_validate(&state, &deck).unwrap();
        StartCommand.apply(&mut state, &deck).unwrap();

        assert_eq!(state.phase, Phase::Question);
        assert_eq!(state.clue_index, 1);
        let clue = state.active_clue.as_ref().unwrap();
        assert_eq!(clue.question, "q0");
        assert_eq!(clue.value, 200);
        assert!(!clue.revealed);
        assert!(state.guess.is_empty());
        assert!(state.message.is_empty());
    }

    #[test]
    fn start_is_rejected_on_an_empty_deck() {
        let state = SessionState::new();
        let result = StartCommand.pre_validate(&state, &ClueDeck::empty());
        assert_eq!(result, Err(StartError::EmptyDeck));
    }

    #[test]
    fn start_is_rejected_once_underway() {
        let deck = deck_of(&[200]);
        let state = started(&deck);
        let result = StartCommand.pre_validate(&state, &deck);
        assert_eq!(
            result,
            Err(StartError::AlreadyStarted {
                actual: Phase::Question
            })
        );
    }

    #[test]
    fn correct_guess_resolves_the_round() {
        let deck = deck_of(&[600]);
        let mut state = started(&deck);

        GuessCommand {
            text: "A0".to_owned(),
        }
        .apply(&mut state, &deck)
        .unwrap();

        assert_eq!(state.phase, Phase::Guessed);
        assert_eq!(state.message, "Right!");
        assert!(state.celebrate);
        assert!(state.active_clue.as_ref().unwrap().revealed);
        // The submitted text stays visible in the buffer.
        assert_eq!(state.guess, "A0");

        let round = state.last_answered().unwrap();
        assert_eq!(round.outcome, Outcome::Correct);
        assert_eq!(round.user_answer.as_deref(), Some("A0"));
        assert_eq!(round.value, 600);
        assert_eq!(current_score(state.history.iter()), 600);
    }

    #[test]
    fn wrong_guess_subtracts_the_value() {
        let deck = deck_of(&[600]);
        let mut state = started(&deck);

        GuessCommand {
            text: "not it".to_owned(),
        }
        .apply(&mut state, &deck)
        .unwrap();

        assert_eq!(state.message, "Wrong!");
        assert!(!state.celebrate);
        assert_eq!(state.last_answered().unwrap().outcome, Outcome::Incorrect);
        assert_eq!(current_score(state.history.iter()), -600);
    }

    #[test]
    fn guessing_outside_question_is_rejected() {
        let deck = deck_of(&[200]);
        let command = GuessCommand {
            text: "a0".to_owned(),
        };

        let state = SessionState::new();
        assert_eq!(
            command.pre_validate(&state, &deck),
            Err(GuessError::WrongPhase {
                actual: Phase::Start
            })
        );

        let mut state = started(&deck);
        command.apply(&mut state, &deck).unwrap();
        assert_eq!(
            command.pre_validate(&state, &deck),
            Err(GuessError::WrongPhase {
                actual: Phase::Guessed
            })
        );
    }

    #[test]
    fn skip_records_a_marker_and_no_score_effect() {
        let deck = deck_of(&[1200]);
        let mut state = started(&deck);
        EditGuessCommand {
            text: "half-typed".to_owned(),
        }
        .apply(&mut state, &deck)
        .unwrap();

        SkipCommand.apply(&mut state, &deck).unwrap();

        assert_eq!(state.phase, Phase::Guessed);
        assert_eq!(state.message, "Skipped!");
        assert!(state.active_clue.as_ref().unwrap().revealed);
        // Skipping does not clear the buffer.
        assert_eq!(state.guess, "half-typed");

        let round = state.last_answered().unwrap();
        assert_eq!(round.outcome, Outcome::Skipped);
        assert_eq!(round.user_answer, None);
        assert_eq!(current_score(state.history.iter()), 0);
    }

    #[test]
    fn toggle_reveal_flips_only_the_active_clue() {
        let deck = deck_of(&[200]);
        let mut state = started(&deck);
        GuessCommand {
            text: "a0".to_owned(),
        }
        .apply(&mut state, &deck)
        .unwrap();

        let history_before = state.history.clone();
        ToggleRevealCommand.apply(&mut state, &deck).unwrap();
        assert!(!state.active_clue.as_ref().unwrap().revealed);
        ToggleRevealCommand.apply(&mut state, &deck).unwrap();
        assert!(state.active_clue.as_ref().unwrap().revealed);
        assert_eq!(state.history, history_before);
        assert_eq!(state.phase, Phase::Guessed);
    }

    #[test]
    fn toggle_reveal_is_rejected_while_answering() {
        let deck = deck_of(&[200]);
        let state = started(&deck);
        assert_eq!(
            ToggleRevealCommand.pre_validate(&state, &deck),
            Err(RevealError::WrongPhase {
                actual: Phase::Question
            })
        );
    }

    #[test]
    fn mark_correct_flips_the_last_incorrect_round() {
        let deck = deck_of(&[600]);
        let mut state = started(&deck);
        GuessCommand {
            text: "wrong".to_owned(),
        }
        .apply(&mut state, &deck)
        .unwrap();
        let before = current_score(state.history.iter());

        MarkCorrectCommand.apply(&mut state, &deck).unwrap();

        let after = current_score(state.history.iter());
        assert_eq!(state.last_answered().unwrap().outcome, Outcome::Correct);
        // Removes the -600 and adds +600.
        assert_eq!(after - before, 2 * 600);
        assert!(state.celebrate);
        assert_eq!(
            state.message,
            "My bad, you were right... $600 added to your score!"
        );
    }

    #[test]
    fn mark_correct_is_idempotent_after_the_first_success() {
        let deck = deck_of(&[600]);
        let mut state = started(&deck);
        GuessCommand {
            text: "wrong".to_owned(),
        }
        .apply(&mut state, &deck)
        .unwrap();

        MarkCorrectCommand.apply(&mut state, &deck).unwrap();
        let snapshot = state.clone();
        MarkCorrectCommand.apply(&mut state, &deck).unwrap();
        assert_eq!(state, snapshot);
    }

    #[test]
    fn mark_correct_never_credits_a_skip() {
        let deck = deck_of(&[600]);
        let mut state = started(&deck);
        SkipCommand.apply(&mut state, &deck).unwrap();

        let snapshot = state.clone();
        MarkCorrectCommand.apply(&mut state, &deck).unwrap();
        assert_eq!(state, snapshot);
        assert_eq!(current_score(state.history.iter()), 0);
    }

    #[test]
    fn mark_correct_is_a_noop_outside_guessed() {
        let deck = deck_of(&[600]);

        let mut state = SessionState::new();
        MarkCorrectCommand.apply(&mut state, &deck).unwrap();
        assert_eq!(state, SessionState::new());

        let mut state = started(&deck);
        let snapshot = state.clone();
        MarkCorrectCommand.apply(&mut state, &deck).unwrap();
        assert_eq!(state, snapshot);
    }

    #[test]
    fn advance_loads_the_next_clue_and_resets_round_state() {
        let deck = deck_of(&[200, 400]);
        let mut state = started(&deck);
        GuessCommand {
            text: "a0".to_owned(),
        }
        .apply(&mut state, &deck)
        .unwrap();

        AdvanceCommand.apply(&mut state, &deck).unwrap();

        assert_eq!(state.phase, Phase::Question);
        assert_eq!(state.clue_index, 2);
        let clue = state.active_clue.as_ref().unwrap();
        assert_eq!(clue.question, "q1");
        assert!(!clue.revealed);
        assert!(state.guess.is_empty());
        assert!(state.message.is_empty());
        assert!(!state.celebrate);
        assert_eq!(state.history.len(), 1);
    }

    #[test]
    fn advance_is_rejected_while_answering() {
        let deck = deck_of(&[200]);
        let state = started(&deck);
        assert_eq!(
            AdvanceCommand.pre_validate(&state, &deck),
            Err(AdvanceError::WrongPhase {
                actual: Phase::Question
            })
        );
    }

    #[test]
    fn session_reaches_summary_at_the_round_limit() {
        let deck = deck_of(&[200, 400, 600, 800, 1000, 1200]);
        let mut state = started(&deck);

        for n in 0..GameConfig::ROUND_LIMIT {
            play_round(&mut state, &deck, &format!("a{n}"));
        }

        assert_eq!(state.phase, Phase::Summary);
        assert_eq!(state.active_clue, None);
        assert_eq!(state.history.len(), GameConfig::ROUND_LIMIT);
        assert!(state.guess.is_empty());
    }

    #[test]
    fn short_deck_reaches_summary_early() {
        let deck = deck_of(&[200, 400, 600]);
        let mut state = started(&deck);

        for n in 0..3 {
            play_round(&mut state, &deck, &format!("a{n}"));
        }

        assert_eq!(state.phase, Phase::Summary);
        assert_eq!(state.history.len(), 3);
        assert_eq!(state.active_clue, None);
    }

    #[test]
    fn advance_post_validate_checks_the_clue_phase_pairing() {
        let deck = deck_of(&[200, 400]);
        let mut state = started(&deck);
        GuessCommand {
            text: "a0".to_owned(),
        }
        .apply(&mut state, &deck)
        .unwrap();
        AdvanceCommand.apply(&mut state, &deck).unwrap();

        assert_eq!(AdvanceCommand.post_validate(&state, &deck), Ok(()));

        // A question phase without a clue on the table must be flagged.
        state.active_clue = None;
        assert_eq!(
            AdvanceCommand.post_validate(&state, &deck),
            Err(AdvanceError::CluePhaseMismatch)
        );
    }

    #[test]
    fn edit_guess_updates_the_buffer_in_question_only() {
        let deck = deck_of(&[200]);
        let mut state = started(&deck);

        EditGuessCommand {
            text: "napo".to_owned(),
        }
        .apply(&mut state, &deck)
        .unwrap();
        assert_eq!(state.guess, "napo");

        GuessCommand {
            text: "napo".to_owned(),
        }
        .apply(&mut state, &deck)
        .unwrap();
        assert_eq!(
            EditGuessCommand {
                text: "late".to_owned()
            }
            .pre_validate(&state, &deck),
            Err(EditGuessError::WrongPhase {
                actual: Phase::Guessed
            })
        );
    }
}
