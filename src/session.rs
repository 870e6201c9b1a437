#![cfg(feature = "std")]

//! The turn loop: alternates seats, drives the engine and reports progress.

use std::fmt;
use std::io::{self, Write};

use rand::rngs::SmallRng;

use crate::engine::{column_label, DiagonalMode, GameEngine, GameResult, MoveError, Player, Turn};
use crate::player::{Seat, SeatError};
use crate::render::render_round;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The game reached a win or a draw.
    Finished(GameResult),
    /// The given player resigned before the game ended.
    Resigned(Player),
}

/// Errors that stop a session before the game ends.
#[derive(Debug)]
pub enum SessionError {
    Seat(SeatError),
    Move(MoveError),
    Io(io::Error),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Seat(e) => write!(f, "seat error: {}", e),
            SessionError::Move(e) => write!(f, "move error: {}", e),
            SessionError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Seat(e) => Some(e),
            SessionError::Move(e) => Some(e),
            SessionError::Io(e) => Some(e),
        }
    }
}

impl From<SeatError> for SessionError {
    fn from(err: SeatError) -> Self {
        SessionError::Seat(err)
    }
}

impl From<MoveError> for SessionError {
    fn from(err: MoveError) -> Self {
        SessionError::Move(err)
    }
}

impl From<io::Error> for SessionError {
    fn from(err: io::Error) -> Self {
        SessionError::Io(err)
    }
}

/// A game between two seats, writing its commentary to `output`.
pub struct Session<W> {
    engine: GameEngine,
    red: Box<dyn Seat>,
    black: Box<dyn Seat>,
    rng: SmallRng,
    output: W,
}

impl<W: Write> Session<W> {
    pub fn new(
        red: Box<dyn Seat>,
        black: Box<dyn Seat>,
        rng: SmallRng,
        mode: DiagonalMode,
        output: W,
    ) -> Self {
        Self {
            engine: GameEngine::new(mode),
            red,
            black,
            rng,
            output,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Play until the game ends or a player resigns.
    pub fn run(&mut self) -> Result<Outcome, SessionError> {
        log::info!(
            "starting game: {} ({}) vs {} ({}), diagonals {:?}",
            Player::Red,
            self.red.name(),
            Player::Black,
            self.black.name(),
            self.engine.mode()
        );
        writeln!(
            self.output,
            "Welcome to Connect Four: {} ({}) vs {} ({})",
            Player::Red,
            self.red.name(),
            Player::Black,
            self.black.name()
        )?;

        loop {
            if let Some(outcome) = self.play_turn()? {
                return Ok(outcome);
            }
        }
    }

    /// Play a single turn. Returns the outcome once the session is over.
    pub fn play_turn(&mut self) -> Result<Option<Outcome>, SessionError> {
        let round = self.engine.round();
        write!(self.output, "{}", render_round(self.engine.grid(), round))?;

        let player = self.engine.current_player();
        let seat = match player {
            Player::Red => &mut self.red,
            Player::Black => &mut self.black,
        };
        let column = match seat.choose_column(&mut self.rng, self.engine.grid()) {
            Ok(column) => column,
            Err(SeatError::Resigned) => {
                log::info!("{} resigned in round {}", player, round);
                writeln!(self.output, "Player [{}] resigns", player)?;
                return Ok(Some(Outcome::Resigned(player)));
            }
            Err(e) => return Err(e.into()),
        };
        writeln!(
            self.output,
            "Player [{}] ({}) chooses column [{}] in round {}",
            player,
            seat.name(),
            column_label(column),
            round
        )?;

        match self.engine.play(column)? {
            Turn::Forfeited { player, column } => {
                writeln!(
                    self.output,
                    "Player [{}] chose a full column [{}] and the coin rolled off",
                    player,
                    column_label(column)
                )?;
                Ok(None)
            }
            Turn::Placed { result, .. } if result.is_terminal() => {
                match result {
                    GameResult::Win { player, direction } => {
                        writeln!(self.output, "**** Player [{}] WON via {}!", player, direction)?;
                    }
                    _ => {
                        writeln!(self.output, "Game is a draw")?;
                    }
                }
                write!(self.output, "{}", render_round(self.engine.grid(), round))?;
                Ok(Some(Outcome::Finished(result)))
            }
            Turn::Placed { .. } => Ok(None),
        }
    }
}
