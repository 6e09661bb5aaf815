#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Backtracking search for puzzles propagation alone cannot finish.

use crate::solver::cell::Cell;
use crate::solver::clue::Clues;
use crate::solver::consistency::is_consistent;
use crate::solver::grid::Grid;
use crate::solver::propagate::{Engine, Propagation};
use log::trace;

/// Tries to complete `grid` into a fully determined, consistent picture.
///
/// Scans the remaining `Unknown` cells in row-major order. For each, the
/// whole grid is cloned and the cell tentatively set `Empty` on the clone;
/// after re-propagating, the search recurses on the clone. On success the
/// clone replaces `grid` and the first solution found wins. On failure the
/// clone is dropped, the cell is committed `Filled` on `grid` itself, and
/// propagation resumes there before the scan continues.
///
/// Returns `true` iff `grid` holds a consistent completion on return.
pub fn search(engine: &mut Engine, grid: &mut Grid, clues: &Clues) -> bool {
    let cols = grid.cols();
    let mut index = 0;
    while index < grid.rows() * cols {
        let (row, col) = (index / cols, index % cols);
        if !grid.cell(row, col).is_unknown() {
            index += 1;
            continue;
        }

        let mut probe = grid.clone();
        probe.set_cell(row, col, Cell::Empty);
        if engine.propagate(&mut probe, clues) == Propagation::Converged
            && search(engine, &mut probe, clues)
        {
            *grid = probe;
            return true;
        }

        trace!("cell ({row}, {col}) cannot be empty, committing filled");
        grid.set_cell(row, col, Cell::Filled);
        if engine.propagate(grid, clues) != Propagation::Converged {
            return false;
        }
        index += 1;
    }

    is_consistent(grid, clues)
}
