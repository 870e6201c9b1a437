use connect_four::{
    DiagonalMode, DropOutcome, GameEngine, GameResult, Grid, Player, Turn, WinDetector, COLS,
    CONNECT, ROWS,
};
use proptest::prelude::*;

/// Apply drops alternating Red and Black, skipping turns that roll off.
fn build_grid(columns: &[usize]) -> (Grid, Option<(usize, usize, Player)>) {
    let mut grid = Grid::new();
    let mut player = Player::Red;
    let mut last = None;
    for &col in columns {
        if let DropOutcome::Landed { row, column } = grid.drop_piece(col, player).unwrap() {
            last = Some((row, column, player));
        }
        player = player.other();
    }
    (grid, last)
}

/// Exhaustive scan for any four-in-a-row on the grid.
fn has_line(grid: &Grid, player: Player) -> bool {
    let directions = [(0isize, 1isize), (1, 0), (1, 1), (1, -1)];
    for row in 0..ROWS as isize {
        for col in 0..COLS as isize {
            for (dr, dc) in directions {
                let full = (0..CONNECT as isize).all(|i| {
                    grid.cell_at(row + i * dr, col + i * dc)
                        .is_some_and(|cell| cell.is(player))
                });
                if full {
                    return true;
                }
            }
        }
    }
    false
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn column_height_bounded(columns in prop::collection::vec(0..COLS, 0..120)) {
        let (grid, _) = build_grid(&columns);
        for col in 0..COLS {
            prop_assert!(grid.column_height(col) <= ROWS);
        }
        prop_assert_eq!(grid.filled(), grid.count_occupied());
    }

    #[test]
    fn pieces_are_stacked_without_gaps(columns in prop::collection::vec(0..COLS, 0..120)) {
        let (grid, _) = build_grid(&columns);
        for col in 0..COLS {
            let height = grid.column_height(col);
            for row in 0..ROWS - height {
                prop_assert!(grid.get(row, col).is_empty());
            }
        }
    }

    #[test]
    fn full_column_drop_is_noop(columns in prop::collection::vec(0..COLS, 0..120), col in 0..COLS) {
        let (mut grid, _) = build_grid(&columns);
        while !grid.is_column_full(col) {
            grid.drop_piece(col, Player::Black).unwrap();
        }
        let before = grid;
        let outcome = grid.drop_piece(col, Player::Red).unwrap();
        prop_assert_eq!(outcome, DropOutcome::RolledOff { column: col });
        prop_assert_eq!(grid, before);
    }

    #[test]
    fn evaluate_is_pure(columns in prop::collection::vec(0..COLS, 1..60)) {
        let (grid, last) = build_grid(&columns);
        if let Some((row, col, player)) = last {
            let snapshot = grid;
            for mode in [DiagonalMode::Anchored, DiagonalMode::Centered] {
                let detector = WinDetector::new(mode);
                let a = detector.evaluate(&grid, row, col, player, grid.filled());
                let b = detector.evaluate(&grid, row, col, player, grid.filled());
                prop_assert_eq!(a, b);
            }
            prop_assert_eq!(grid, snapshot);
        }
    }

    #[test]
    fn centered_finds_every_anchored_win(columns in prop::collection::vec(0..COLS, 1..60)) {
        let (grid, last) = build_grid(&columns);
        if let Some((row, col, player)) = last {
            let anchored = WinDetector::new(DiagonalMode::Anchored)
                .winning_direction(&grid, row, col, player);
            let centered = WinDetector::new(DiagonalMode::Centered)
                .winning_direction(&grid, row, col, player);
            if anchored.is_some() {
                prop_assert!(centered.is_some());
            }
        }
    }

    /// With centered diagonals, an unfinished game never contains a line and a
    /// won game always does.
    #[test]
    fn centered_engine_matches_exhaustive_scan(columns in prop::collection::vec(0..COLS, 0..200)) {
        let mut engine = GameEngine::new(DiagonalMode::Centered);
        for col in columns {
            if engine.is_finished() {
                break;
            }
            let turn = engine.play(col).unwrap();
            if let Turn::Placed { player, result, .. } = turn {
                match result {
                    GameResult::Win { .. } => prop_assert!(has_line(engine.grid(), player)),
                    _ => {
                        prop_assert!(!has_line(engine.grid(), Player::Red));
                        prop_assert!(!has_line(engine.grid(), Player::Black));
                    }
                }
            }
        }
    }
}
