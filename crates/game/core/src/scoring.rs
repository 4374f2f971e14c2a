//! Pure scoring folds over the answered-clue history.
use crate::config::GameConfig;
use crate::state::{AnsweredClue, Outcome};

/// Running score over the resolved rounds.
///
/// Correct answers add their value, incorrect answers subtract it, skipped
/// rounds contribute nothing in either direction. There is no flooring at
/// zero; the running score may go negative.
pub fn current_score<'a, I>(history: I) -> i64
where
    I: IntoIterator<Item = &'a AnsweredClue>,
{
    history
        .into_iter()
        .fold(0, |total, round| match round.outcome {
            Outcome::Correct => total + i64::from(round.value),
            Outcome::Incorrect => total - i64::from(round.value),
            Outcome::Skipped => total,
        })
}

/// Final score reported once every round is resolved.
///
/// Identical to the running score unless [`GameConfig::floor_final_score`]
/// is set, in which case it is clamped at zero.
pub fn final_score<'a, I>(history: I, config: &GameConfig) -> i64
where
    I: IntoIterator<Item = &'a AnsweredClue>,
{
    let score = current_score(history);
    if config.floor_final_score {
        score.max(0)
    } else {
        score
    }
}

/// Number of rounds resolved as correct, shown both in progress and in the
/// summary.
pub fn correct_count<'a, I>(history: I) -> usize
where
    I: IntoIterator<Item = &'a AnsweredClue>,
{
    history
        .into_iter()
        .filter(|round| round.outcome.is_correct())
        .count()
}
