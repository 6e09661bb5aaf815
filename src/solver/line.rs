#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The line solver: constraint counting over a single row or column.
//!
//! Given a line's current cell values and its clue, counts for every
//! position in how many of the clue-consistent completions of the line that
//! position is filled, together with the total number of completions `Z`.
//! A position whose count equals `Z` is provably filled, a position whose
//! count is zero is provably empty, and `Z == 0` means the clue is
//! unsatisfiable given the already-determined cells.

use crate::solver::cell::Cell;

/// Accumulates legal block placements for `runs` over `cells` into
/// `counts`, returning the total placement count.
///
/// `counts` must be at least as long as `cells` and zeroed by the caller;
/// each legal placement increments the count of every position it fills.
/// Placements must cover every already-`Filled` cell, avoid every `Empty`
/// cell, keep the clue's block order, and separate blocks by at least one
/// empty cell.
#[must_use]
pub fn count_placements(cells: &[Cell], runs: &[u16], counts: &mut [u64]) -> u64 {
    let n = cells.len();

    if runs.is_empty() {
        // The empty clue has exactly one completion, the all-empty line,
        // unless a filled cell already contradicts it.
        return u64::from(!cells.iter().any(|c| c.is_filled()));
    }

    let sum: usize = runs.iter().map(|&b| b as usize).sum();
    if sum + runs.len() - 1 > n {
        return 0;
    }

    let block = runs[0] as usize;
    let mut total = 0;

    if runs.len() == 1 {
        for start in 0..=n - block {
            // A filled cell left of the block can never be covered by a
            // later placement, so the scan stops for good.
            if start > 0 && cells[start - 1].is_filled() {
                break;
            }
            if cells[start..start + block].iter().any(|&c| c == Cell::Empty) {
                continue;
            }
            if cells[start + block..].iter().any(|c| c.is_filled()) {
                continue;
            }
            for count in &mut counts[start..start + block] {
                *count += 1;
            }
            total += 1;
        }
    } else {
        for start in 0..=n - (sum + runs.len() - 1) {
            if start > 0 && cells[start - 1].is_filled() {
                break;
            }
            if cells[start..start + block].iter().any(|&c| c == Cell::Empty) {
                continue;
            }
            // The separating gap after the block must stay empty.
            if cells[start + block].is_filled() {
                continue;
            }
            let rest = start + block + 1;
            let ink = count_placements(&cells[rest..], &runs[1..], &mut counts[rest..]);
            if ink > 0 {
                for count in &mut counts[start..start + block] {
                    *count += ink;
                }
                total += ink;
            }
        }
    }

    total
}
