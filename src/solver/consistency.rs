#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Validates a (possibly partial) grid against its clues.

use crate::solver::cell::Cell;
use crate::solver::clue::Clues;
use crate::solver::grid::Grid;

/// Whether every line of `grid` is still compatible with its clue.
///
/// For a fully determined line the run-length sequence must equal the clue
/// exactly. A line containing an `Unknown` cell is checked only up to that
/// cell: every run already terminated by an `Empty` cell must match the
/// clue prefix in order. `false` means the grid as it stands can never
/// satisfy its clues.
#[must_use]
pub fn is_consistent(grid: &Grid, clues: &Clues) -> bool {
    (0..grid.line_count()).all(|line| line_consistent(grid.line_cells(line), clues.line(line).runs()))
}

fn line_consistent<I: Iterator<Item = Cell>>(cells: I, runs: &[u16]) -> bool {
    let mut expected = runs.iter();
    let mut run = 0u16;
    for cell in cells {
        match cell {
            Cell::Unknown => return true,
            Cell::Filled => run += 1,
            Cell::Empty => {
                if run > 0 {
                    if expected.next() != Some(&run) {
                        return false;
                    }
                    run = 0;
                }
            }
        }
    }
    if run > 0 && expected.next() != Some(&run) {
        return false;
    }
    expected.next().is_none()
}
