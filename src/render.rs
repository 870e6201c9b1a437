#![cfg(feature = "std")]

//! Text rendering of the grid. Read-only: nothing here mutates game state.

use std::fmt::Write as _;

use crate::engine::{column_label, Grid, COLS, ROWS};

/// Render the grid as a framed block of text with 1-based column labels.
///
/// Empty cells are shown as `.`, occupied cells by the player's symbol.
pub fn render_grid(grid: &Grid) -> String {
    let rule = "═".repeat(COLS * 2 + 1);
    let mut out = String::new();

    let _ = writeln!(out, "    ╔{}╗", rule);
    out.push_str("    ║");
    for col in 0..COLS {
        let _ = write!(out, " {}", column_label(col));
    }
    out.push_str(" ║\n");
    let _ = writeln!(out, "    ╠{}╣", rule);
    for row in 0..ROWS {
        out.push_str("    ║");
        for cell in grid.row(row) {
            let ch = cell.player().map_or('.', |p| p.symbol());
            let _ = write!(out, " {}", ch);
        }
        out.push_str(" ║\n");
    }
    let _ = writeln!(out, "    ╚{}╝", rule);
    out
}

/// Grid rendering preceded by the round header.
pub fn render_round(grid: &Grid, round: usize) -> String {
    format!("Current board for round {}\n{}", round, render_grid(grid))
}
