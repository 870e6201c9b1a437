//! Win and draw detection for the piece that was just placed.
//!
//! Only lines through the landing cell are examined. Directions are tried in a
//! fixed order (vertical, horizontal, left diagonal, right diagonal) and the
//! first match is reported; the draw check runs only when no line matched.

use super::common::{Direction, GameResult, Player};
use super::config::{CELLS, COLS, CONNECT};
use super::grid::Grid;

/// How diagonals through the landing cell are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiagonalMode {
    /// Only the three cells stepping downward from the landing cell are
    /// checked. A diagonal whose lower end is the landing piece, with the
    /// matching pieces above it, goes unnoticed.
    #[default]
    Anchored,
    /// The contiguous run through the landing cell is counted in both
    /// directions, so the landing piece may sit anywhere on the line.
    Centered,
}

/// Stateless evaluator for the last placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WinDetector {
    mode: DiagonalMode,
}

impl WinDetector {
    pub fn new(mode: DiagonalMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> DiagonalMode {
        self.mode
    }

    /// Evaluate the grid after `player` landed a piece at (`row`, `col`).
    ///
    /// `filled` is the number of pieces on the grid including the new one.
    pub fn evaluate(
        &self,
        grid: &Grid,
        row: usize,
        col: usize,
        player: Player,
        filled: usize,
    ) -> GameResult {
        if let Some(direction) = self.winning_direction(grid, row, col, player) {
            log::debug!("{} completes a {} line at ({}, {})", player, direction, row, col);
            return GameResult::Win { player, direction };
        }
        if filled == CELLS {
            log::debug!("{} cells filled with no line, draw", filled);
            return GameResult::Draw;
        }
        GameResult::InProgress
    }

    /// First direction, in evaluation order, in which the placement wins.
    pub fn winning_direction(
        &self,
        grid: &Grid,
        row: usize,
        col: usize,
        player: Player,
    ) -> Option<Direction> {
        if check_vertical(grid, row, col, player) {
            return Some(Direction::Vertical);
        }
        if check_horizontal(grid, row, col, player) {
            return Some(Direction::Horizontal);
        }
        if self.check_diagonal(grid, row, col, player, -1) {
            return Some(Direction::DiagonalLeft);
        }
        if self.check_diagonal(grid, row, col, player, 1) {
            return Some(Direction::DiagonalRight);
        }
        None
    }

    /// `col_step` is -1 for the left (`/`) diagonal, +1 for the right (`\`).
    fn check_diagonal(
        &self,
        grid: &Grid,
        row: usize,
        col: usize,
        player: Player,
        col_step: isize,
    ) -> bool {
        log::trace!("checking diagonal (col step {}) from ({}, {})", col_step, row, col);
        match self.mode {
            DiagonalMode::Anchored => steps_match(grid, row, col, player, 1, col_step),
            DiagonalMode::Centered => {
                let run = 1
                    + run_length(grid, row, col, player, 1, col_step)
                    + run_length(grid, row, col, player, -1, -col_step);
                run >= CONNECT
            }
        }
    }
}

/// The three cells directly below the landing cell must all belong to `player`.
/// Pieces stack contiguously, so no other vertical window can be completed.
fn check_vertical(grid: &Grid, row: usize, col: usize, player: Player) -> bool {
    log::trace!("checking vertical below ({}, {})", row, col);
    steps_match(grid, row, col, player, 1, 0)
}

/// Slide a run counter across the row, limited to three cells either side of
/// the landing column.
fn check_horizontal(grid: &Grid, row: usize, col: usize, player: Player) -> bool {
    let reach = CONNECT - 1;
    let start = col.saturating_sub(reach);
    let end = (col + reach).min(COLS - 1);
    log::trace!("checking horizontal in row {} over columns {}..={}", row, start, end);

    let mut run = 0;
    for cell in &grid.row(row)[start..=end] {
        if cell.is(player) {
            run += 1;
            if run >= CONNECT {
                return true;
            }
        } else {
            run = 0;
        }
    }
    false
}

/// Every one of the `CONNECT - 1` cells stepping away from (`row`, `col`) is
/// on the grid and held by `player`.
fn steps_match(
    grid: &Grid,
    row: usize,
    col: usize,
    player: Player,
    row_step: isize,
    col_step: isize,
) -> bool {
    (1..CONNECT as isize).all(|i| {
        grid.cell_at(row as isize + i * row_step, col as isize + i * col_step)
            .is_some_and(|cell| cell.is(player))
    })
}

/// Count contiguous `player` cells stepping away from (`row`, `col`),
/// excluding the starting cell.
fn run_length(
    grid: &Grid,
    row: usize,
    col: usize,
    player: Player,
    row_step: isize,
    col_step: isize,
) -> usize {
    (1..CONNECT as isize)
        .take_while(|&i| {
            grid.cell_at(row as isize + i * row_step, col as isize + i * col_step)
                .is_some_and(|cell| cell.is(player))
        })
        .count()
}
