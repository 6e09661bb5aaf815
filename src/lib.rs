#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! A nonogram (griddler) solver.
//!
//! Puzzles are solved by constraint propagation: a priority queue feeds a
//! counting line solver that proves cells filled or empty, and a
//! backtracking search finishes the rare grids propagation alone cannot.

/// Reading textual puzzle descriptions.
pub mod input;

/// Drawing solved (and partial) pictures as text or HTML.
pub mod render;

/// The solving engine itself.
pub mod solver;
