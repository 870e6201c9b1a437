//! Seat trait and implementations
//!
//! Each player is bound to a seat, the strategy that supplies its columns:
//! - RandomPlayer: uniform random column choice
//! - CliPlayer: interactive player reading from a text stream

use core::fmt;

use crate::engine::Grid;
use rand::rngs::SmallRng;

/// Interface implemented by the different move sources.
pub trait Seat {
    /// Short label used when announcing moves.
    fn name(&self) -> &str;

    /// Choose the 0-based column to drop into next.
    ///
    /// The returned column is always within `[0, COLS)`; it may name a full
    /// column, in which case the turn is forfeited.
    fn choose_column(&mut self, rng: &mut SmallRng, grid: &Grid) -> Result<usize, SeatError>;
}

/// Reasons a seat could not supply a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatError {
    /// The input stream reached end of file.
    InputClosed,
    /// The player asked to stop playing.
    Resigned,
    /// Reading input or writing a prompt failed.
    #[cfg(feature = "std")]
    Io(std::io::ErrorKind),
}

impl fmt::Display for SeatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeatError::InputClosed => write!(f, "input closed before a column was chosen"),
            SeatError::Resigned => write!(f, "player resigned"),
            #[cfg(feature = "std")]
            SeatError::Io(kind) => write!(f, "I/O error: {}", kind),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SeatError {}

#[cfg(feature = "std")]
impl From<std::io::Error> for SeatError {
    fn from(err: std::io::Error) -> Self {
        SeatError::Io(err.kind())
    }
}

// Re-export implementations
pub mod ai;
pub use ai::RandomPlayer;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::{parse_column, CliPlayer, InputError, LineInput, StdinInput};
