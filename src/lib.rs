//! Skyward - a single-screen flap-through-the-gates arcade game.
//!
//! The library holds the whole game core (physics, gates, scoring, the
//! session state machine), the best-score store, the ratatui renderer and
//! the headless simulator. `main.rs` is only the terminal driver.

pub mod config;
pub mod core;
pub mod game;
pub mod simulator;
pub mod storage;
pub mod ui;
pub mod utils;

pub use crate::core::constants::*;
pub use game::{GameInput, GameState, Phase, Snapshot, TickEvents};
pub use storage::{FileScoreStore, LoadOutcome, MemoryScoreStore, ScoreStore};
