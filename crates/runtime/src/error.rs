//! Runtime errors.

use trivia_core::ExecuteError;

/// Errors surfaced by the session service.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// The daily batch could not be fetched; the session stays in START.
    #[error("daily clue fetch failed: {0}")]
    Transport(anyhow::Error),

    /// A command was rejected by the engine; state is unchanged.
    #[error(transparent)]
    Execute(#[from] ExecuteError),
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
