//! Headless bot-vs-bot games through the same turn controller the UI drives.

pub mod episode;
pub mod stats;

pub use episode::{play_game, GameRecord};
pub use stats::SimulationStats;
