//! Terminal UI: welcome and mode screens, the game board, and the key bindings
//! that feed the turn controller.

mod app;
mod game_view;
pub mod input;
mod menu_view;

pub use app::{App, Screen, Settings};
