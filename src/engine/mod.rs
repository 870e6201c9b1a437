//! Core Connect Four engine (no_std compatible)
//!
//! This module contains the pure game logic: the drop-based grid, the
//! win/draw detector and the turn engine tying them together. It depends on
//! nothing beyond `core` and the `log` facade, so it builds without `std`.

pub mod common;
pub mod config;
pub mod detector;
pub mod game;
pub mod grid;

// Re-export commonly used types
pub use common::{Cell, Direction, GameResult, MoveError, Player};
pub use config::*;
pub use detector::{DiagonalMode, WinDetector};
pub use game::{GameEngine, Turn};
pub use grid::{DropOutcome, Grid};
