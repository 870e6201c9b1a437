/// Number of rows on the grid. Row 0 is the top, pieces settle toward `ROWS - 1`.
pub const ROWS: usize = 6;
/// Number of columns on the grid.
pub const COLS: usize = 7;
/// Total number of cells; the grid is full once this many pieces are placed.
pub const CELLS: usize = ROWS * COLS;
/// Length of a winning line.
pub const CONNECT: usize = 4;

/// Convert a 1-based column label, as shown to players, into a grid column.
/// Returns `None` if the label does not name a column.
pub fn column_from_label(label: i64) -> Option<usize> {
    if (1..=COLS as i64).contains(&label) {
        Some(label as usize - 1)
    } else {
        None
    }
}

/// Column label shown to players for a grid column.
pub fn column_label(column: usize) -> usize {
    column + 1
}
