/// Session configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Whether the final score reported in the summary is floored at zero.
    /// The running score is never floored either way.
    pub floor_final_score: bool,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Number of rounds in a full session.
    pub const ROUND_LIMIT: usize = 6;
    /// Upper bound for a single clue's monetary value.
    pub const MAX_CLUE_VALUE: u32 = 2000;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_FLOOR_FINAL_SCORE: bool = false;

    pub fn new() -> Self {
        Self {
            floor_final_score: Self::DEFAULT_FLOOR_FINAL_SCORE,
        }
    }

    pub fn with_floored_final_score() -> Self {
        Self {
            floor_final_score: true,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
