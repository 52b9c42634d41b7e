//! Single-board Snake: one snake, one fixed 20x20 grid, a fixed tick rate.
//!
//! The simulation core (`grid`, `snake`, `food`, `game`, `session`) is
//! independent of the terminal; `renderer`, `ui` and `terminal_runtime`
//! project session snapshots onto a ratatui frame.

pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod session;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
