//! Clue source implementations for the one-time daily fetch.

mod fixture;
mod source;

pub use fixture::FixtureSource;
pub use source::{ClueSource, StaticSource};
