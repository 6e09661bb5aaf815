#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The picture grid: a dense tri-state cell array plus the per-line
//! bookkeeping (unresolved counts, static scheduling weights) that drives
//! the propagation loop.

use crate::solver::SolverError;
use crate::solver::cell::Cell;
use crate::solver::clue::Clues;
use crate::solver::queue::URGENCY_SCALE;
use itertools::Either;
use std::fmt::Display;

/// Identifies one row or column. Ids `0..rows` are rows top to bottom,
/// `rows..rows + cols` are columns left to right.
pub type LineId = usize;

/// Largest supported grid side.
pub const MAX_DIM: usize = 999;

/// Which way a line runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Row,
    Column,
}

impl Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Row => write!(f, "row"),
            Self::Column => write!(f, "column"),
        }
    }
}

/// A rows×cols picture being solved.
///
/// Cells are stored densely in row-major order and are only ever mutated
/// from `Unknown` to a determined value; the grid is never resized. Cloning
/// produces the independent deep copy the backtracking search works on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    unresolved: usize,
    line_unresolved: Vec<usize>,
    line_weight: Vec<i32>,
}

impl Grid {
    /// Builds an all-`Unknown` grid for the given clues.
    ///
    /// # Errors
    ///
    /// `InvalidDimensions` if either side is outside `1..=MAX_DIM` or the
    /// clue store does not carry one clue per line; `InvalidClue` if a clue
    /// cannot fit its line (`sum(blocks) + gaps > line length`).
    pub fn build(rows: usize, cols: usize, clues: &Clues) -> Result<Self, SolverError> {
        if !(1..=MAX_DIM).contains(&rows)
            || !(1..=MAX_DIM).contains(&cols)
            || clues.rows().len() != rows
            || clues.cols().len() != cols
        {
            return Err(SolverError::InvalidDimensions { rows, cols });
        }
        for (index, clue) in clues.rows().iter().enumerate() {
            if !clue.fits(cols) {
                return Err(SolverError::InvalidClue {
                    axis: Axis::Row,
                    index,
                    len: cols,
                });
            }
        }
        for (index, clue) in clues.cols().iter().enumerate() {
            if !clue.fits(rows) {
                return Err(SolverError::InvalidClue {
                    axis: Axis::Column,
                    index,
                    len: rows,
                });
            }
        }

        let line_unresolved = (0..rows + cols)
            .map(|line| if line < rows { cols } else { rows })
            .collect();
        let line_weight = (0..rows + cols)
            .map(|line| {
                let len = if line < rows { cols } else { rows };
                clues.line(line).weight(len)
            })
            .collect();

        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Unknown; rows * cols],
            unresolved: rows * cols,
            line_unresolved,
            line_weight,
        })
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Number of lines: rows plus columns.
    #[must_use]
    pub const fn line_count(&self) -> usize {
        self.rows + self.cols
    }

    /// Total cells still `Unknown`; `0` means fully determined.
    #[must_use]
    pub const fn unresolved(&self) -> usize {
        self.unresolved
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.unresolved == 0
    }

    #[must_use]
    pub const fn axis_of(&self, line: LineId) -> Axis {
        if line < self.rows { Axis::Row } else { Axis::Column }
    }

    #[must_use]
    pub const fn line_len(&self, line: LineId) -> usize {
        if line < self.rows { self.cols } else { self.rows }
    }

    #[must_use]
    pub fn line_unresolved(&self, line: LineId) -> usize {
        self.line_unresolved[line]
    }

    #[must_use]
    pub fn line_weight(&self, line: LineId) -> i32 {
        self.line_weight[line]
    }

    /// Scheduling urgency for a line: the live solved-fraction scaled by
    /// [`URGENCY_SCALE`], tie-broken by the static clue weight.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn urgency(&self, line: LineId) -> i32 {
        let len = self.line_len(line);
        let solved = len - self.line_unresolved[line];
        let progress = (solved * URGENCY_SCALE as usize / len) as i32;
        progress * URGENCY_SCALE + self.line_weight[line]
    }

    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// The cell at `offset` along `line`.
    #[must_use]
    pub fn line_cell(&self, line: LineId, offset: usize) -> Cell {
        let (row, col) = self.coords(line, offset);
        self.cell(row, col)
    }

    /// The cells of one line in order, rows left to right, columns top to
    /// bottom.
    pub fn line_cells(&self, line: LineId) -> impl Iterator<Item = Cell> + '_ {
        if line < self.rows {
            let start = line * self.cols;
            Either::Left(self.cells[start..start + self.cols].iter().copied())
        } else {
            let col = line - self.rows;
            Either::Right(self.cells[col..].iter().step_by(self.cols).copied())
        }
    }

    /// Copies one line's cells into `buf`, replacing its contents.
    pub fn copy_line_into(&self, line: LineId, buf: &mut Vec<Cell>) {
        buf.clear();
        buf.extend(self.line_cells(line));
    }

    /// Determines an `Unknown` cell, updating the total and both affected
    /// lines' unresolved counts.
    ///
    /// # Panics
    ///
    /// If the cell is already determined or `value` is `Unknown`.
    pub fn set_cell(&mut self, row: usize, col: usize, value: Cell) {
        assert!(!value.is_unknown());
        let idx = self.index(row, col);
        assert!(self.cells[idx].is_unknown());
        self.cells[idx] = value;
        self.unresolved -= 1;
        self.line_unresolved[row] -= 1;
        self.line_unresolved[self.rows + col] -= 1;
    }

    /// Like [`Self::set_cell`], addressed by line and offset. Returns the id
    /// of the crossing line through the same cell, which the propagation
    /// loop re-enqueues.
    pub fn set_line_cell(&mut self, line: LineId, offset: usize, value: Cell) -> LineId {
        let (row, col) = self.coords(line, offset);
        self.set_cell(row, col, value);
        if line < self.rows { self.rows + col } else { row }
    }

    const fn coords(&self, line: LineId, offset: usize) -> (usize, usize) {
        if line < self.rows {
            (line, offset)
        } else {
            (offset, line - self.rows)
        }
    }

    const fn index(&self, row: usize, col: usize) -> usize {
        assert!(row < self.rows && col < self.cols);
        row * self.cols + col
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::clue::Clues;

    fn clues_2x3() -> Clues {
        Clues::from_runs(vec![vec![1], vec![2]], vec![vec![1], vec![1], vec![1]])
    }

    #[test]
    fn test_build() {
        let grid = Grid::build(2, 3, &clues_2x3()).unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.unresolved(), 6);
        assert_eq!(grid.line_count(), 5);
        assert_eq!(grid.line_unresolved(0), 3);
        assert_eq!(grid.line_unresolved(4), 2);
        assert!(!grid.is_complete());
    }

    #[test]
    fn test_build_rejects_bad_dimensions() {
        let clues = Clues::from_runs(vec![], vec![]);
        assert!(matches!(
            Grid::build(0, 3, &clues),
            Err(SolverError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            Grid::build(1, MAX_DIM + 1, &clues),
            Err(SolverError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_build_rejects_overfull_clue() {
        // Clue [2, 2] needs five cells, the row only has three.
        let clues = Clues::from_runs(vec![vec![2, 2], vec![1]], vec![vec![1], vec![1], vec![1]]);
        assert!(matches!(
            Grid::build(2, 3, &clues),
            Err(SolverError::InvalidClue {
                axis: Axis::Row,
                index: 0,
                len: 3,
            })
        ));
    }

    #[test]
    fn test_set_cell_updates_counts() {
        let mut grid = Grid::build(2, 3, &clues_2x3()).unwrap();
        grid.set_cell(0, 1, Cell::Filled);
        assert_eq!(grid.unresolved(), 5);
        assert_eq!(grid.line_unresolved(0), 2);
        assert_eq!(grid.line_unresolved(3), 1); // column 1
        assert_eq!(grid.cell(0, 1), Cell::Filled);
    }

    #[test]
    fn test_set_line_cell_reports_crossing_line() {
        let mut grid = Grid::build(2, 3, &clues_2x3()).unwrap();
        assert_eq!(grid.set_line_cell(0, 2, Cell::Empty), 4); // row 0 -> col 2
        assert_eq!(grid.set_line_cell(3, 1, Cell::Filled), 1); // col 1 -> row 1
        assert_eq!(grid.cell(1, 1), Cell::Filled);
    }

    #[test]
    fn test_line_cells_column_order() {
        let mut grid = Grid::build(2, 3, &clues_2x3()).unwrap();
        grid.set_cell(0, 1, Cell::Filled);
        grid.set_cell(1, 1, Cell::Empty);
        let col: Vec<Cell> = grid.line_cells(3).collect();
        assert_eq!(col, vec![Cell::Filled, Cell::Empty]);
    }

    #[test]
    fn test_urgency_increases_as_line_resolves() {
        let mut grid = Grid::build(2, 3, &clues_2x3()).unwrap();
        let before = grid.urgency(0);
        grid.set_cell(0, 0, Cell::Empty);
        assert!(grid.urgency(0) > before);
    }

    #[test]
    fn test_invariant_total_matches_row_sum() {
        let mut grid = Grid::build(2, 3, &clues_2x3()).unwrap();
        grid.set_cell(0, 0, Cell::Empty);
        grid.set_cell(1, 2, Cell::Filled);
        let row_sum: usize = (0..grid.rows()).map(|r| grid.line_unresolved(r)).sum();
        assert_eq!(grid.unresolved(), row_sum);
    }
}
