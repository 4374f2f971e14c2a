//! Provider-facing clue data and loaders.
//!
//! This crate owns the dynamic, nullable shape the daily-clue endpoint
//! serves and converts it once into the typed entities of `trivia-core`:
//! - Raw clue records (`RawClue`, nested category, optional value/airdate)
//! - Normalization into `Clue`/`ClueDeck` (value defaulting + clamping,
//!   air-year derivation)
//! - File loaders for JSON clue batches and TOML game configuration
//!
//! Raw records never appear in session state; the runtime normalizes at
//! bootstrap and hands the core only typed clues.

pub mod normalize;
pub mod raw;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use normalize::{air_year, clue_from_raw, deck_from_raw};
pub use raw::{RawCategory, RawClue};

#[cfg(feature = "loaders")]
pub use loaders::{ClueBatchLoader, ConfigLoader};
