//! # Connect Four
//!
//! A terminal Connect Four game on a 6x7 grid. Each player's seat is bound to
//! a move source (interactive or random) chosen when the game is set up.
//!
//! ## Modules
//!
//! - [`engine`]: grid, win/draw detection and the turn engine (`no_std`)
//! - [`player`]: the `Seat` trait with random and command-line players
//! - `render`, `session`: text rendering and the game loop (`std` only)

#![cfg_attr(not(feature = "std"), no_std)]

pub mod engine;
pub mod player;
pub mod prelude;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod render;
#[cfg(feature = "std")]
pub mod session;

pub use engine::*;
pub use player::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
#[cfg(feature = "std")]
pub use render::{render_grid, render_round};
#[cfg(feature = "std")]
pub use session::{Outcome, Session, SessionError};
