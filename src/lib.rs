//! Single-player Snake on a fixed 20x20 grid.
//!
//! [`game::GameState`] is the whole rule set; [`scheduler::TickScheduler`]
//! decides when it ticks, and the remaining modules draw it in a terminal.

pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod scheduler;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
