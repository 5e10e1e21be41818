//! Persistence collaborators.

pub mod score_store;

pub use score_store::{FileScoreStore, LoadOutcome, MemoryScoreStore, ScoreStore, ScoreStoreError};
