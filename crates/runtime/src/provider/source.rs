use async_trait::async_trait;
use trivia_content::RawClue;

/// Supplies the ordered clue batch for "today".
///
/// The runtime pulls from a source exactly once per session, before the
/// session can leave START. Implementations own transport concerns
/// entirely; failures surface as errors, never as partial batches.
#[async_trait]
pub trait ClueSource: Send + Sync {
    async fn fetch_daily(&self) -> anyhow::Result<Vec<RawClue>>;
}

/// In-memory source with a fixed batch.
///
/// The workhorse for tests and offline play; the batch is handed back
/// verbatim on every fetch.
#[derive(Clone, Debug, Default)]
pub struct StaticSource {
    batch: Vec<RawClue>,
}

impl StaticSource {
    pub fn new(batch: Vec<RawClue>) -> Self {
        Self { batch }
    }
}

#[async_trait]
impl ClueSource for StaticSource {
    async fn fetch_daily(&self) -> anyhow::Result<Vec<RawClue>> {
        Ok(self.batch.clone())
    }
}
