//! Session service driven synchronously by a presentation layer.

use tracing::{debug, info, warn};

use trivia_core::{ClueDeck, Command, GameConfig, SessionEngine, SessionState};
use trivia_content::deck_from_raw;

use crate::error::{Result, RuntimeError};
use crate::provider::ClueSource;
use crate::view_model::SessionFrame;

/// Owns one play session: the immutable daily deck plus the mutable state.
///
/// Bootstrap performs the single asynchronous fetch; everything afterwards
/// is a synchronous, atomic state transition with exactly one writer. A
/// failed fetch still yields a service: the deck stays empty, the failure is
/// on record, and the session cannot leave START until a fresh bootstrap
/// succeeds.
pub struct SessionService {
    config: GameConfig,
    deck: ClueDeck,
    state: SessionState,
    fetch_error: Option<RuntimeError>,
}

impl SessionService {
    /// Fetches and normalizes the daily batch, then builds the service.
    pub async fn bootstrap(config: GameConfig, source: &dyn ClueSource) -> Self {
        match source.fetch_daily().await {
            Ok(batch) => {
                let deck = deck_from_raw(&batch);
                info!(clues = deck.len(), "daily clue batch loaded");
                if deck.is_short() {
                    warn!(
                        clues = deck.len(),
                        rounds = deck.rounds(),
                        "short clue batch; the session will reach its summary early"
                    );
                }
                Self::with_deck(config, deck)
            }
            Err(error) => {
                warn!(%error, "daily clue fetch failed; play stays disabled");
                Self {
                    config,
                    deck: ClueDeck::empty(),
                    state: SessionState::new(),
                    fetch_error: Some(RuntimeError::Transport(error)),
                }
            }
        }
    }

    /// Builds a service around an already-normalized deck.
    pub fn with_deck(config: GameConfig, deck: ClueDeck) -> Self {
        Self {
            config,
            deck,
            state: SessionState::new(),
            fetch_error: None,
        }
    }

    /// True when a batch is loaded and the play action should be enabled.
    pub fn is_ready(&self) -> bool {
        !self.deck.is_empty()
    }

    /// The bootstrap failure, if the daily fetch did not succeed.
    pub fn fetch_error(&self) -> Option<&RuntimeError> {
        self.fetch_error.as_ref()
    }

    /// Executes one command as an atomic transition.
    ///
    /// A rejected command leaves the state untouched; the rejection is
    /// logged and returned for the caller to ignore or surface.
    pub fn execute(&mut self, command: Command) -> Result<()> {
        let result = SessionEngine::new(&mut self.state).execute(&self.deck, &command);
        if let Err(error) = &result {
            debug!(%error, phase = %self.state.phase, "command rejected");
        }
        result.map_err(RuntimeError::from)
    }

    /// Begins play by loading the first clue.
    pub fn start(&mut self) -> Result<()> {
        self.execute(Command::start())
    }

    /// Replaces the guess buffer while the player is typing.
    pub fn edit_guess(&mut self, text: impl Into<String>) -> Result<()> {
        self.execute(Command::edit_guess(text))
    }

    /// Submits a guess, resolving the current round.
    pub fn submit_guess(&mut self, text: impl Into<String>) -> Result<()> {
        self.execute(Command::guess(text))
    }

    /// Passes on the current clue.
    pub fn skip(&mut self) -> Result<()> {
        self.execute(Command::skip())
    }

    /// Flips the resolved clue between question and answer.
    pub fn toggle_reveal(&mut self) -> Result<()> {
        self.execute(Command::toggle_reveal())
    }

    /// Retroactively credits the last round.
    pub fn mark_correct(&mut self) -> Result<()> {
        self.execute(Command::mark_correct())
    }

    /// Moves on to the next clue or the summary.
    pub fn advance(&mut self) -> Result<()> {
        self.execute(Command::advance())
    }

    /// Discards the session and returns to START, keeping the same deck.
    pub fn reset(&mut self) {
        self.state = SessionState::new();
    }

    /// Read-only snapshot for rendering. Re-query after every operation.
    pub fn frame(&self) -> SessionFrame {
        SessionFrame::from_state(&self.state, &self.deck, &self.config)
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
