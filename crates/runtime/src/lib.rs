//! Runtime orchestration for the daily trivia session.
//!
//! This crate wires the clue-source abstraction and the core session engine
//! into a cohesive API. Consumers embed [`SessionService`] to bootstrap the
//! daily batch, drive commands, and read [`SessionFrame`] snapshots after
//! every operation.
//!
//! Modules are organized by responsibility:
//! - [`provider`] defines the asynchronous clue-source boundary
//! - [`service`] hosts the session service driven by the presentation layer
//! - [`view_model`] derives read-only snapshots for rendering

pub mod error;
pub mod provider;
pub mod service;
pub mod view_model;

pub use error::{Result, RuntimeError};
pub use provider::{ClueSource, FixtureSource, StaticSource};
pub use service::SessionService;
pub use view_model::{ClueCard, HistoryRow, SessionFrame};
