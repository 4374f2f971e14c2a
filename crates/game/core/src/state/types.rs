use crate::config::GameConfig;

/// Where the session currently sits in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Batch fetched (or still outstanding); no clue on the table yet.
    Start,
    /// A clue is shown and the guess buffer is open.
    Question,
    /// The round is resolved; the player reviews before advancing.
    Guessed,
    /// Terminal. Every round is resolved and the summary is displayed.
    Summary,
}

impl Phase {
    /// True for the phases in which exactly one clue is on the table.
    pub const fn has_active_clue(&self) -> bool {
        matches!(self, Phase::Question | Phase::Guessed)
    }

    pub const fn is_terminal(&self) -> bool {
        matches!(self, Phase::Summary)
    }
}

impl Default for Phase {
    fn default() -> Self {
        Phase::Start
    }
}

/// How a single round was resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Correct,
    Incorrect,
    Skipped,
}

impl Outcome {
    pub const fn is_correct(&self) -> bool {
        matches!(self, Outcome::Correct)
    }
}

/// One trivia question/answer/value unit presented to the player.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Clue {
    /// Display label of the category.
    pub category: String,
    pub question: String,
    pub answer: String,
    /// Monetary value, already clamped to `[0, GameConfig::MAX_CLUE_VALUE]`.
    /// Zero means the source carried no value; scoring treats it as 0.
    pub value: u32,
    /// Calendar year the clue first aired.
    pub air_year: i32,
    /// Whether the answer (instead of the question) is currently shown.
    pub revealed: bool,
}

impl Clue {
    /// Creates a clue, clamping the raw source value into the legal range.
    /// Absent source values should be passed as 0.
    pub fn new(
        category: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
        raw_value: i64,
        air_year: i32,
    ) -> Self {
        Self {
            category: category.into(),
            question: question.into(),
            answer: answer.into(),
            value: Self::clamp_value(raw_value),
            air_year,
            revealed: false,
        }
    }

    /// Clamps a raw source value into `[0, GameConfig::MAX_CLUE_VALUE]`.
    pub fn clamp_value(raw: i64) -> u32 {
        raw.clamp(0, i64::from(GameConfig::MAX_CLUE_VALUE)) as u32
    }
}

/// Immutable record of one resolved round, appended to the session history.
///
/// The only permitted mutation afterwards is the correct-override flipping
/// `outcome` from `Incorrect` to `Correct`. Skipped rounds never contribute
/// to the score and are immune to the override.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnsweredClue {
    pub question: String,
    pub answer: String,
    pub category: String,
    pub value: u32,
    /// The submitted guess text, or `None` when the round was skipped.
    pub user_answer: Option<String>,
    pub outcome: Outcome,
}

impl AnsweredClue {
    /// Records a guessed round, copying the clue fields at resolution time.
    pub fn resolved(clue: &Clue, user_answer: String, outcome: Outcome) -> Self {
        Self {
            question: clue.question.clone(),
            answer: clue.answer.clone(),
            category: clue.category.clone(),
            value: clue.value,
            user_answer: Some(user_answer),
            outcome,
        }
    }

    /// Records a skipped round.
    pub fn skipped(clue: &Clue) -> Self {
        Self {
            question: clue.question.clone(),
            answer: clue.answer.clone(),
            category: clue.category.clone(),
            value: clue.value,
            user_answer: None,
            outcome: Outcome::Skipped,
        }
    }
}
