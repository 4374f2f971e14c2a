use std::path::PathBuf;

use async_trait::async_trait;
use trivia_content::RawClue;
use trivia_content::loaders::ClueBatchLoader;

use super::ClueSource;

/// File-backed source reading a JSON clue batch from disk.
#[derive(Clone, Debug)]
pub struct FixtureSource {
    path: PathBuf,
}

impl FixtureSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ClueSource for FixtureSource {
    async fn fetch_daily(&self) -> anyhow::Result<Vec<RawClue>> {
        ClueBatchLoader::load_raw(&self.path)
    }
}
