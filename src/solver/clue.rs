#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Run-length clue sequences and the static "evilness" difficulty estimate.
//!
//! A clue is the ordered list of block lengths that must appear in a line,
//! each block a maximal run of filled cells, blocks separated by at least one
//! empty cell. Clues are read-only after parsing.

use crate::solver::grid::LineId;
use crate::solver::queue::URGENCY_SCALE;
use smallvec::SmallVec;

/// Backing storage for one clue. Nearly all real puzzles have fewer than
/// eight blocks per line, so the runs live inline.
pub type Runs = SmallVec<[u16; 8]>;

/// Evilness values at or above this many nats saturate to the minimum weight.
const EVILNESS_CAP: f64 = 32.0;

/// One line's clue: an ordered sequence of positive run lengths.
///
/// An empty sequence is legal and forces every cell of the line `Empty`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Clue(Runs);

impl Clue {
    #[must_use]
    pub fn new<I: IntoIterator<Item = u16>>(runs: I) -> Self {
        Self(runs.into_iter().collect())
    }

    #[must_use]
    pub fn runs(&self) -> &[u16] {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Sum of all block lengths.
    #[must_use]
    pub fn block_sum(&self) -> usize {
        self.0.iter().map(|&b| b as usize).sum()
    }

    /// Minimal line length this clue can fit into: all blocks packed with
    /// single-cell gaps.
    #[must_use]
    pub fn min_len(&self) -> usize {
        if self.0.is_empty() {
            0
        } else {
            self.block_sum() + self.0.len() - 1
        }
    }

    /// Whether the clue fits a line of `line_len` cells at all.
    #[must_use]
    pub fn fits(&self, line_len: usize) -> bool {
        self.min_len() <= line_len
    }

    /// Combinatorial looseness of this clue on a line of `line_len` cells,
    /// as the log binomial coefficient `ln C(line_len - sum + 1, k + 1)`.
    ///
    /// The more arrangements the clue admits, the higher the value.
    #[must_use]
    pub fn evilness(&self, line_len: usize) -> f64 {
        binom_ln(
            line_len as f64 - self.block_sum() as f64 + 1.0,
            self.0.len() as f64 + 1.0,
        )
    }

    /// Static scheduling weight, a saturating monotone *decreasing* function
    /// of the evilness, scaled into `0..URGENCY_SCALE`. Tightly constrained
    /// lines score high and get visited first; combinatorially loose lines
    /// are deprioritised.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn weight(&self, line_len: usize) -> i32 {
        let evil = self.evilness(line_len).clamp(0.0, EVILNESS_CAP);
        let span = f64::from(URGENCY_SCALE - 1);
        (span - evil / EVILNESS_CAP * span) as i32
    }
}

impl From<Vec<u16>> for Clue {
    fn from(runs: Vec<u16>) -> Self {
        Self::new(runs)
    }
}

impl From<&[u16]> for Clue {
    fn from(runs: &[u16]) -> Self {
        Self::new(runs.iter().copied())
    }
}

/// `ln C(n, k)` via the Stirling approximation; `0.0` for degenerate inputs.
fn binom_ln(n: f64, k: f64) -> f64 {
    if n <= k || n <= 0.0 || k <= 0.0 {
        return 0.0;
    }
    let mut tmp = -0.5 * (8.0 * (1.0_f64).atan()).ln();
    tmp += (n + 0.5) * n.ln();
    tmp -= (k + 0.5) * k.ln();
    tmp -= (n - k + 0.5) * (n - k).ln();
    tmp
}

/// Clue store for a whole puzzle: one clue per row, then one per column.
///
/// Lines are addressed by [`LineId`]: ids `0..rows` are rows (top to
/// bottom), `rows..rows + cols` are columns (left to right).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Clues {
    rows: Vec<Clue>,
    cols: Vec<Clue>,
}

impl Clues {
    #[must_use]
    pub const fn new(rows: Vec<Clue>, cols: Vec<Clue>) -> Self {
        Self { rows, cols }
    }

    #[must_use]
    pub fn from_runs(rows: Vec<Vec<u16>>, cols: Vec<Vec<u16>>) -> Self {
        Self {
            rows: rows.into_iter().map(Clue::from).collect(),
            cols: cols.into_iter().map(Clue::from).collect(),
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[Clue] {
        &self.rows
    }

    #[must_use]
    pub fn cols(&self) -> &[Clue] {
        &self.cols
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.rows.len() + self.cols.len()
    }

    /// The clue for one line, row ids first.
    ///
    /// # Panics
    ///
    /// If `line` is out of range.
    #[must_use]
    pub fn line(&self, line: LineId) -> &Clue {
        if line < self.rows.len() {
            &self.rows[line]
        } else {
            &self.cols[line - self.rows.len()]
        }
    }
}
