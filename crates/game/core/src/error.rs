//! Common error infrastructure for trivia-core.
//!
//! Domain-specific errors (e.g. `StartError`, `GuessError`) are defined in
//! [`crate::command`] alongside the commands they validate.

/// Error type for commands that never fail.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("this error should never be constructed")]
pub enum NeverError {}
