#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The solving engine: grid model, clue store, priority work-queue, line
//! solver, propagation loop, consistency checker and backtracking search.

pub mod cell;
pub mod clue;
pub mod consistency;
pub mod grid;
pub mod line;
pub mod propagate;
pub mod queue;
pub mod search;

pub use cell::Cell;
pub use clue::{Clue, Clues};
pub use grid::{Axis, Grid, LineId, MAX_DIM};

use crate::solver::consistency::is_consistent;
use crate::solver::propagate::{Engine, Propagation, edge_overlap};
use crate::solver::search::search;
use log::{debug, info};
use thiserror::Error;

/// Construction-time failures: the caller-supplied puzzle is malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SolverError {
    #[error("invalid dimensions {rows}x{cols}: both sides must be within 1..={MAX_DIM}")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("clue for {axis} {index} cannot fit in {len} cells")]
    InvalidClue {
        axis: Axis,
        index: usize,
        len: usize,
    },
}

/// Final state of one solving run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    /// Every cell determined and every clue satisfied.
    Solved(Grid),
    /// The clues are jointly unsatisfiable.
    Inconsistent,
    /// Propagation converged with unresolved cells and the backtracking
    /// search found no consistent completion either; only reachable when
    /// the puzzle itself has no solution.
    AmbiguousUnsolved,
}

impl SolveOutcome {
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self, Self::Solved(_))
    }
}

/// A solver owning one grid, its clues and the shared scratch buffers.
#[derive(Debug, Clone)]
pub struct Solver {
    clues: Clues,
    grid: Grid,
    engine: Engine,
}

impl Solver {
    /// Builds a solver for a rows×cols puzzle from raw run-length clues.
    ///
    /// # Errors
    ///
    /// See [`Grid::build`].
    pub fn new(
        rows: usize,
        cols: usize,
        row_clues: Vec<Vec<u16>>,
        col_clues: Vec<Vec<u16>>,
    ) -> Result<Self, SolverError> {
        let clues = Clues::from_runs(row_clues, col_clues);
        let grid = Grid::build(rows, cols, &clues)?;
        let engine = Engine::new(rows.max(cols));
        Ok(Self {
            clues,
            grid,
            engine,
        })
    }

    /// Runs the full pipeline: edge-overlap pass, propagation to a fixed
    /// point, consistency check, and backtracking search if cells remain.
    pub fn solve(&mut self) -> SolveOutcome {
        edge_overlap(&mut self.grid, &self.clues);
        debug!(
            "edge overlap left {} of {} cells unresolved",
            self.grid.unresolved(),
            self.grid.rows() * self.grid.cols()
        );

        if let Propagation::Contradiction(line) = self.engine.propagate(&mut self.grid, &self.clues)
        {
            debug!(
                "propagation hit a contradiction on {} {}",
                self.grid.axis_of(line),
                line
            );
            return SolveOutcome::Inconsistent;
        }

        if !is_consistent(&self.grid, &self.clues) {
            return SolveOutcome::Inconsistent;
        }

        if self.grid.is_complete() {
            return SolveOutcome::Solved(self.grid.clone());
        }

        info!(
            "ambiguous after propagation, {} cells left; searching",
            self.grid.unresolved()
        );
        if search(&mut self.engine, &mut self.grid, &self.clues) {
            SolveOutcome::Solved(self.grid.clone())
        } else {
            SolveOutcome::AmbiguousUnsolved
        }
    }

    /// Cumulative count of line-solver invocations, for statistics.
    #[must_use]
    pub const fn work_count(&self) -> u64 {
        self.engine.work_count()
    }

    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub const fn clues(&self) -> &Clues {
        &self.clues
    }
}
