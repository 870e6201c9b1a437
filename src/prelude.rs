//! Commonly used types for ease of import.

pub use crate::{DiagonalMode, GameEngine, GameResult, Grid, Player, RandomPlayer, Seat};

#[cfg(feature = "std")]
pub use crate::{render_grid, CliPlayer, Outcome, Session};
