//! Core Connect Four game logic: board, win detection, players, and the turn
//! state machine with pure transitions.

mod board;
pub mod controller;
pub mod detector;
mod player;
mod state;

pub use board::{Board, Cell, MoveError, COLS, ROWS};
pub use controller::{step, Input};
pub use player::Player;
pub use state::{Direction, Event, GameOutcome, GameState, Mode, MoveCounts, Transition, TurnState};
