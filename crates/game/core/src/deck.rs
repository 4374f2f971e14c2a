//! The immutable daily clue batch.
use crate::config::GameConfig;
use crate::state::Clue;

/// Ordered, fixed batch of clues for one day's session.
///
/// Built once at bootstrap from the provider's raw records and never mutated
/// afterwards; the engine reads it through a shared reference on every
/// command execution. The deck may be shorter than a full session, in which
/// case the session reaches its summary as soon as the deck is exhausted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClueDeck {
    clues: Vec<Clue>,
}

impl ClueDeck {
    pub fn new(clues: Vec<Clue>) -> Self {
        Self { clues }
    }

    /// A deck with no clues; sessions built on it cannot leave `Start`.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, index: usize) -> Option<&Clue> {
        self.clues.get(index)
    }

    pub fn len(&self) -> usize {
        self.clues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clues.is_empty()
    }

    /// Number of rounds this deck can actually cover.
    pub fn rounds(&self) -> usize {
        self.clues.len().min(GameConfig::ROUND_LIMIT)
    }

    /// True when the deck cannot cover a full session.
    pub fn is_short(&self) -> bool {
        self.clues.len() < GameConfig::ROUND_LIMIT
    }
}
