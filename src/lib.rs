//! Terminal snake.
//!
//! The game state (`snake`, `food`, `arena`) is plain data with no terminal
//! access, so it can be driven tick by tick from tests. `term`, `input` and
//! `render` are the thin layers that touch the real terminal.

pub mod arena;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod logging;
pub mod render;
pub mod scheduler;
pub mod snake;
pub mod term;

pub type TermInt = i32;

/// `(column, row)` in terminal cell space, zero based.
pub type Coords = (TermInt, TermInt);

pub use error::{Result, SnakeError};
