//! Deterministic trivia session logic shared across clients.
//!
//! `trivia-core` defines the canonical rules (commands, engine, session
//! state, scoring) and exposes pure APIs that can be reused by the runtime
//! and offline tools. All state mutation flows through
//! [`engine::SessionEngine`], and supporting crates depend on the types
//! re-exported here.
pub mod command;
pub mod config;
pub mod deck;
pub mod engine;
pub mod error;
pub mod evaluate;
pub mod scoring;
pub mod state;

pub use command::{
    AdvanceCommand, Command, CommandTransition, EditGuessCommand, GuessCommand, MarkCorrectCommand,
    SkipCommand, StartCommand, ToggleRevealCommand,
};
pub use config::GameConfig;
pub use deck::ClueDeck;
pub use engine::{ExecuteError, SessionEngine, TransitionPhase, TransitionPhaseError};
pub use error::NeverError;
pub use evaluate::is_correct;
pub use scoring::{correct_count, current_score, final_score};
pub use state::{AnsweredClue, Clue, Outcome, Phase, SessionState};
