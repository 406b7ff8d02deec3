//! # Connect Four
//!
//! Two-player Connect Four for the terminal, with an optional random-move bot.
//! The game core is a pure state machine; the Ratatui front-end drives it from
//! its own event loop.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, win detection, player, turn state machine
//! - [`ai`] — Agent trait and the uniform-random bot
//! - [`simulation`] — Headless bot-vs-bot games and aggregate statistics
//! - [`ui`] — Terminal UI: menus, game view, key bindings
//! - [`config`] — TOML configuration loading and validation
//! - [`logging`] — Tracing subscriber setup
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod simulation;
pub mod ui;
