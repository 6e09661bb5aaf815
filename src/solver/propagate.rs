#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The propagation engine: the deterministic edge-overlap pass and the
//! priority-driven fixed-point loop that repeatedly re-examines lines as
//! information arrives.

use crate::solver::cell::Cell;
use crate::solver::clue::Clues;
use crate::solver::grid::Grid;
use crate::solver::line::count_placements;
use crate::solver::queue::LineQueue;
use log::trace;

/// Result of one propagation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    /// The queue drained with no line yielding new information.
    Converged,
    /// A line's clue admitted no legal placement: the grid as it stands is
    /// contradictory. Carries the offending line id.
    Contradiction(usize),
}

/// Owns the scratch buffers shared by every line-solver invocation and the
/// cumulative work counter.
///
/// The buffers are valid only within one invocation; the engine itself is
/// reused across propagation runs and backtracking frames.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    counts: Vec<u64>,
    line_buf: Vec<Cell>,
    work: u64,
}

impl Engine {
    #[must_use]
    pub fn new(max_line_len: usize) -> Self {
        Self {
            counts: vec![0; max_line_len],
            line_buf: Vec::with_capacity(max_line_len),
            work: 0,
        }
    }

    /// Cumulative number of line-solver invocations, for statistics.
    #[must_use]
    pub const fn work_count(&self) -> u64 {
        self.work
    }

    /// Runs the propagation loop to a fixed point.
    ///
    /// The queue is seeded with every line; each step pops the most urgent
    /// line, skips it if fully resolved, and otherwise counts placements.
    /// Newly provable cells are written back, and the crossing line through
    /// each written cell is re-enqueued with a fresh urgency (an id already
    /// queued just has its key updated).
    pub fn propagate(&mut self, grid: &mut Grid, clues: &Clues) -> Propagation {
        let mut queue = LineQueue::new(grid.line_count());
        for line in 0..grid.line_count() {
            queue.push(line, grid.urgency(line));
        }

        while let Some(line) = queue.pop() {
            if grid.line_unresolved(line) == 0 {
                continue;
            }

            self.work += 1;
            let len = grid.line_len(line);
            grid.copy_line_into(line, &mut self.line_buf);
            self.counts[..len].fill(0);

            let total = count_placements(
                &self.line_buf[..len],
                clues.line(line).runs(),
                &mut self.counts[..len],
            );
            if total == 0 {
                trace!("line {line} admits no placement");
                return Propagation::Contradiction(line);
            }

            for offset in 0..len {
                if !self.line_buf[offset].is_unknown() {
                    continue;
                }
                let value = match self.counts[offset] {
                    0 => Cell::Empty,
                    c if c == total => Cell::Filled,
                    _ => continue,
                };
                let crossing = grid.set_line_cell(line, offset, value);
                queue.push(crossing, grid.urgency(crossing));
            }
        }

        Propagation::Converged
    }
}

/// The preliminary edge-overlap pass, applied once before the main loop.
///
/// For each line, packs all blocks to the left and to the right; any cell
/// covered by the same block under both extremes is filled regardless of
/// the other axis. A line with an empty clue has all its cells marked
/// empty. Purely deterministic and non-recursive.
pub fn edge_overlap(grid: &mut Grid, clues: &Clues) {
    for line in 0..grid.line_count() {
        let n = grid.line_len(line);
        let clue = clues.line(line);

        if clue.is_empty() {
            for offset in 0..n {
                if grid.line_cell(line, offset).is_unknown() {
                    grid.set_line_cell(line, offset, Cell::Empty);
                }
            }
            continue;
        }

        // left_end: exclusive end of the block when everything is packed
        // left; right_start: its start when everything is packed right.
        let mut left_end = 0usize;
        let mut suffix_len = clue.min_len();
        for &block in clue.runs() {
            let block = block as usize;
            left_end += block;
            let right_start = n - suffix_len;
            for offset in right_start..left_end {
                if grid.line_cell(line, offset).is_unknown() {
                    grid.set_line_cell(line, offset, Cell::Filled);
                }
            }
            left_end += 1;
            suffix_len = suffix_len.saturating_sub(block + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::clue::Clues;

    fn build(rows: usize, cols: usize, clues: &Clues) -> Grid {
        Grid::build(rows, cols, clues).unwrap()
    }

    #[test]
    fn test_edge_overlap_single_block() {
        // Clue [3] on a 5-wide row: cells 2 is covered both ways.
        let clues = Clues::from_runs(
            vec![vec![3]],
            vec![vec![], vec![], vec![1], vec![], vec![]],
        );
        let mut grid = build(1, 5, &clues);
        edge_overlap(&mut grid, &clues);
        assert_eq!(grid.cell(0, 2), Cell::Filled);
        assert!(grid.cell(0, 1).is_unknown() || grid.cell(0, 1) == Cell::Empty);
    }

    #[test]
    fn test_edge_overlap_full_clue() {
        // [2, 2] on width 5 is fully forced.
        let clues = Clues::from_runs(
            vec![vec![2, 2]],
            vec![vec![1], vec![1], vec![], vec![1], vec![1]],
        );
        let mut grid = build(1, 5, &clues);
        edge_overlap(&mut grid, &clues);
        assert_eq!(grid.cell(0, 0), Cell::Filled);
        assert_eq!(grid.cell(0, 1), Cell::Filled);
        assert_eq!(grid.cell(0, 3), Cell::Filled);
        assert_eq!(grid.cell(0, 4), Cell::Filled);
        // The separating cell is emptied by the empty column clue.
        assert_eq!(grid.cell(0, 2), Cell::Empty);
    }

    #[test]
    fn test_edge_overlap_empty_clue_clears_line() {
        let clues = Clues::from_runs(vec![vec![]], vec![vec![]; 4]);
        let mut grid = build(1, 4, &clues);
        edge_overlap(&mut grid, &clues);
        assert!(grid.is_complete());
        assert!((0..4).all(|c| grid.cell(0, c) == Cell::Empty));
    }

    #[test]
    fn test_propagate_solves_forced_grid() {
        // Every row and column of a 3x3 grid clued [3]: all filled.
        let clues = Clues::from_runs(vec![vec![3]; 3], vec![vec![3]; 3]);
        let mut grid = build(3, 3, &clues);
        let mut engine = Engine::new(3);
        assert_eq!(engine.propagate(&mut grid, &clues), Propagation::Converged);
        assert!(grid.is_complete());
        assert!((0..3).all(|r| (0..3).all(|c| grid.cell(r, c).is_filled())));
        assert!(engine.work_count() > 0);
    }

    #[test]
    fn test_propagate_detects_contradiction() {
        // Row clue [3] on width 3 forces the row filled; the middle column's
        // empty clue forbids it.
        let clues = Clues::from_runs(
            vec![vec![3], vec![], vec![]],
            vec![vec![1], vec![], vec![1]],
        );
        let mut grid = build(3, 3, &clues);
        let mut engine = Engine::new(3);
        assert!(matches!(
            engine.propagate(&mut grid, &clues),
            Propagation::Contradiction(_)
        ));
    }

    #[test]
    fn test_propagate_idempotent() {
        let clues = Clues::from_runs(vec![vec![3]; 3], vec![vec![3]; 3]);
        let mut grid = build(3, 3, &clues);
        let mut engine = Engine::new(3);
        assert_eq!(engine.propagate(&mut grid, &clues), Propagation::Converged);
        let snapshot = grid.clone();
        let unresolved = grid.unresolved();
        assert_eq!(engine.propagate(&mut grid, &clues), Propagation::Converged);
        assert_eq!(grid, snapshot);
        assert_eq!(grid.unresolved(), unresolved);
    }
}
