//! Drop-based grid: cell occupancy and gravity placement.

use core::fmt;

use super::common::{Cell, MoveError, Player};
use super::config::{CELLS, COLS, ROWS};

/// Where a dropped piece ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The piece came to rest at (`row`, `column`).
    Landed { row: usize, column: usize },
    /// The column was full; nothing was placed and the turn is forfeited.
    RolledOff { column: usize },
}

impl DropOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self, DropOutcome::Landed { .. })
    }

    /// Landing row, if the drop succeeded.
    pub fn row(&self) -> Option<usize> {
        match self {
            DropOutcome::Landed { row, .. } => Some(*row),
            DropOutcome::RolledOff { .. } => None,
        }
    }

    pub fn column(&self) -> usize {
        match self {
            DropOutcome::Landed { column, .. } | DropOutcome::RolledOff { column } => *column,
        }
    }
}

/// The 6x7 playing grid.
///
/// Cells are only ever written by [`Grid::drop_piece`], and an occupied cell is
/// never cleared, so `filled` always equals the number of occupied cells.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [[Cell; COLS]; ROWS],
    filled: usize,
}

impl Grid {
    /// Create an empty grid.
    pub fn new() -> Self {
        Grid {
            cells: [[Cell::Empty; COLS]; ROWS],
            filled: 0,
        }
    }

    /// Cell at (`row`, `col`). Row 0 is the top, row `ROWS - 1` the bottom.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Bounds-checked lookup using signed coordinates; `None` when off the grid.
    pub fn cell_at(&self, row: isize, col: isize) -> Option<Cell> {
        if row < 0 || col < 0 || row >= ROWS as isize || col >= COLS as isize {
            return None;
        }
        Some(self.cells[row as usize][col as usize])
    }

    /// One full row of cells, left to right.
    pub fn row(&self, row: usize) -> &[Cell; COLS] {
        &self.cells[row]
    }

    /// Number of successfully placed pieces.
    pub fn filled(&self) -> usize {
        self.filled
    }

    /// Returns `true` once every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.filled == CELLS
    }

    /// Number of pieces stacked in `col`.
    pub fn column_height(&self, col: usize) -> usize {
        (0..ROWS)
            .rev()
            .take_while(|&row| !self.cells[row][col].is_empty())
            .count()
    }

    /// A column is full when its top cell is occupied.
    pub fn is_column_full(&self, col: usize) -> bool {
        !self.cells[0][col].is_empty()
    }

    /// Columns that still accept a piece, in ascending order.
    pub fn legal_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..COLS).filter(move |&col| !self.is_column_full(col))
    }

    /// Recount occupied cells by scanning the grid.
    pub fn count_occupied(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| !cell.is_empty())
            .count()
    }

    /// Drop a piece for `player` into `column`.
    ///
    /// The piece falls to the lowest empty row. A full column leaves the grid
    /// untouched and reports [`DropOutcome::RolledOff`].
    pub fn drop_piece(&mut self, column: usize, player: Player) -> Result<DropOutcome, MoveError> {
        if column >= COLS {
            return Err(MoveError::InvalidColumn(column));
        }

        for row in (0..ROWS).rev() {
            if self.cells[row][column].is_empty() {
                self.cells[row][column] = Cell::Occupied(player);
                self.filled += 1;
                log::debug!("{} piece lands at ({}, {})", player, row, column);
                return Ok(DropOutcome::Landed { row, column });
            }
        }

        log::debug!("column {} is full, {} piece rolls off", column, player);
        Ok(DropOutcome::RolledOff { column })
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {{ filled: {}", self.filled)?;
        for row in self.cells.iter() {
            f.write_str("  ")?;
            for cell in row.iter() {
                let ch = cell.player().map_or('.', Player::symbol);
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(grid.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(grid.filled(), 0);
        assert_eq!(grid.legal_columns().count(), COLS);
    }

    #[test]
    fn test_pieces_stack_from_the_bottom() {
        let mut grid = Grid::new();

        let first = grid.drop_piece(3, Player::Red).unwrap();
        assert_eq!(first, DropOutcome::Landed { row: 5, column: 3 });
        assert_eq!(grid.get(5, 3), Cell::Occupied(Player::Red));

        let second = grid.drop_piece(3, Player::Black).unwrap();
        assert_eq!(second.row(), Some(4));
        assert_eq!(grid.get(4, 3), Cell::Occupied(Player::Black));
        assert_eq!(grid.column_height(3), 2);
        assert_eq!(grid.filled(), 2);
    }

    #[test]
    fn test_full_column_rolls_off_without_mutation() {
        let mut grid = Grid::new();
        for _ in 0..ROWS {
            assert!(grid.drop_piece(0, Player::Red).unwrap().succeeded());
        }
        assert!(grid.is_column_full(0));

        let before = grid;
        let outcome = grid.drop_piece(0, Player::Black).unwrap();
        assert_eq!(outcome, DropOutcome::RolledOff { column: 0 });
        assert!(!outcome.succeeded());
        assert_eq!(outcome.row(), None);
        assert_eq!(grid, before);
        assert_eq!(grid.filled(), ROWS);
        assert!(!grid.legal_columns().any(|c| c == 0));
    }

    #[test]
    fn test_invalid_column() {
        let mut grid = Grid::new();
        assert_eq!(
            grid.drop_piece(COLS, Player::Red),
            Err(MoveError::InvalidColumn(COLS))
        );
        assert_eq!(grid.filled(), 0);
    }

    #[test]
    fn test_full_grid() {
        let mut grid = Grid::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                grid.drop_piece(col, Player::Red).unwrap();
            }
        }
        assert!(grid.is_full());
        assert_eq!(grid.count_occupied(), CELLS);
        assert_eq!(grid.legal_columns().count(), 0);
    }

    #[test]
    fn test_cell_at_bounds() {
        let grid = Grid::new();
        assert_eq!(grid.cell_at(0, 0), Some(Cell::Empty));
        assert_eq!(grid.cell_at(-1, 0), None);
        assert_eq!(grid.cell_at(0, -1), None);
        assert_eq!(grid.cell_at(ROWS as isize, 0), None);
        assert_eq!(grid.cell_at(0, COLS as isize), None);
    }
}
