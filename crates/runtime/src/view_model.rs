//! Read-only snapshots derived from [`SessionState`].

use trivia_core::{
    AnsweredClue, Clue, ClueDeck, GameConfig, Outcome, Phase, SessionState, scoring,
};

/// High-level snapshot of the session used by presentation layers.
///
/// Rebuilt after every operation; rendering never reads the mutable state
/// directly.
#[derive(Clone, Debug)]
pub struct SessionFrame {
    pub phase: Phase,
    /// The clue card on the table; `None` in START and SUMMARY.
    pub clue: Option<ClueCard>,
    pub guess: String,
    pub message: String,
    /// Running score; may be negative.
    pub score: i64,
    pub correct: usize,
    pub answered: usize,
    /// Rounds this session can cover (shrinks with a short deck).
    pub rounds: usize,
    /// Populated once the session reaches its summary.
    pub final_score: Option<i64>,
    /// Every answer of a full session was correct.
    pub perfect: bool,
    /// The latest resolution earned credit; trigger for celebration effects.
    pub celebrate: bool,
    pub history: Vec<HistoryRow>,
}

impl SessionFrame {
    pub fn from_state(state: &SessionState, deck: &ClueDeck, config: &GameConfig) -> Self {
        let answered = state.history.len();
        let correct = scoring::correct_count(state.history.iter());
        let final_score = state
            .phase
            .is_terminal()
            .then(|| scoring::final_score(state.history.iter(), config));

        Self {
            phase: state.phase,
            clue: state.active_clue.as_ref().map(ClueCard::from_clue),
            guess: state.guess.clone(),
            message: state.message.clone(),
            score: scoring::current_score(state.history.iter()),
            correct,
            answered,
            rounds: deck.rounds(),
            final_score,
            perfect: state.phase.is_terminal() && correct == GameConfig::ROUND_LIMIT,
            celebrate: state.celebrate,
            history: state
                .history
                .iter()
                .enumerate()
                .map(|(index, round)| HistoryRow::from_round(index, round))
                .collect(),
        }
    }
}

/// Display data for the clue on the table.
#[derive(Clone, Debug)]
pub struct ClueCard {
    pub category: String,
    pub value: u32,
    pub air_year: i32,
    /// The question, or the answer once revealed.
    pub text: String,
    pub revealed: bool,
    /// True when the source carried no value; rendered as a value-less
    /// placeholder card.
    pub placeholder: bool,
}

impl ClueCard {
    fn from_clue(clue: &Clue) -> Self {
        Self {
            category: clue.category.clone(),
            value: clue.value,
            air_year: clue.air_year,
            text: if clue.revealed {
                clue.answer.clone()
            } else {
                clue.question.clone()
            },
            revealed: clue.revealed,
            placeholder: clue.value == 0,
        }
    }
}

/// One row of the summary table.
#[derive(Clone, Debug)]
pub struct HistoryRow {
    /// 1-based ordinal of the round.
    pub round: usize,
    pub question: String,
    pub answer: String,
    /// The submitted text, or `None` for a skipped round.
    pub user_answer: Option<String>,
    pub outcome: Outcome,
    pub value: u32,
}

impl HistoryRow {
    fn from_round(index: usize, round: &AnsweredClue) -> Self {
        Self {
            round: index + 1,
            question: round.question.clone(),
            answer: round.answer.clone(),
            user_answer: round.user_answer.clone(),
            outcome: round.outcome,
            value: round.value,
        }
    }
}
