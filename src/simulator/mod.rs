//! Headless batch play for tuning and regression checks.
//!
//! Games run on synthetic time with a scripted player, through the same
//! `GameState` the terminal front end drives.

mod autopilot;
mod config;
mod report;
mod runner;

pub use autopilot::{decide, target_line};
pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::{run_simulation, tick_to_ms};
