//! Daily clue batch loader.

use std::path::Path;

use trivia_core::ClueDeck;

use crate::loaders::{LoadResult, read_file};
use crate::normalize::deck_from_raw;
use crate::raw::RawClue;

/// Loader for clue batches stored as JSON arrays, the same shape the remote
/// daily-clue endpoint serves.
pub struct ClueBatchLoader;

impl ClueBatchLoader {
    /// Load raw records from a JSON file.
    pub fn load_raw(path: &Path) -> LoadResult<Vec<RawClue>> {
        let content = read_file(path)?;
        let raws: Vec<RawClue> = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse clue batch JSON at {:?}: {}", path, e))?;
        Ok(raws)
    }

    /// Load a batch and normalize it into a deck.
    pub fn load(path: &Path) -> LoadResult<ClueDeck> {
        Ok(deck_from_raw(&Self::load_raw(path)?))
    }
}
