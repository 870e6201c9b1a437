//! Common types for Connect Four: players, cells, results and move errors.

use core::fmt;

/// One of the two players. `Red` always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Player {
    Red,
    Black,
}

impl Player {
    /// The player who moves after this one.
    pub fn other(self) -> Player {
        match self {
            Player::Red => Player::Black,
            Player::Black => Player::Red,
        }
    }

    /// Single character used on the rendered grid.
    pub fn symbol(self) -> char {
        match self {
            Player::Red => 'R',
            Player::Black => 'B',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Player::Red => "Red",
            Player::Black => "Black",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Occupancy of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The player holding this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(p) => Some(p),
        }
    }

    /// Returns `true` if the cell is held by `player`.
    pub fn is(self, player: Player) -> bool {
        self == Cell::Occupied(player)
    }
}

/// Line along which four-in-a-row was completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum Direction {
    Vertical,
    Horizontal,
    /// The `/` line: from the landing cell down and to the left.
    DiagonalLeft,
    /// The `\` line: from the landing cell down and to the right.
    DiagonalRight,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Vertical => write!(f, "vertical"),
            Direction::Horizontal => write!(f, "horizontal"),
            Direction::DiagonalLeft => write!(f, "left diagonal"),
            Direction::DiagonalRight => write!(f, "right diagonal"),
        }
    }
}

/// Outcome of evaluating the grid after a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(tag = "status", rename_all = "snake_case"))]
pub enum GameResult {
    InProgress,
    Win { player: Player, direction: Direction },
    Draw,
}

impl GameResult {
    /// Returns `true` for a win or a draw.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameResult::InProgress)
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameResult::Win { player, .. } => Some(player),
            _ => None,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::InProgress => write!(f, "in progress"),
            GameResult::Win { player, direction } => {
                write!(f, "{} wins via {}", player, direction)
            }
            GameResult::Draw => write!(f, "draw"),
        }
    }
}

/// Errors returned by grid and engine moves.
///
/// A full column is not an error: it is reported as a rolled-off drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Column index outside `[0, COLS)`.
    InvalidColumn(usize),
    /// The game already ended in a win or draw.
    GameOver,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::InvalidColumn(col) => write!(f, "column index {} is out of range", col),
            MoveError::GameOver => write!(f, "the game is already over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MoveError {}
