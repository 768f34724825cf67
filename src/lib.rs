//! Pips Puzzle Solver
//!
//! This library solves the daily Pips domino tiling puzzle: every domino in
//! the pool must cover two orthogonally-adjacent board cells so that each
//! assignable cell is covered exactly once and every region constraint holds.

pub mod board;
pub mod config;
pub mod puzzle;
pub mod solver;
pub mod utils;

pub use board::{DailyPuzzles, Difficulty, DominoPlacement, Game};
pub use config::Settings;
pub use puzzle::{PuzzleProblem, Solution};
pub use solver::Solver;

/// Solve a single game, returning the first tiling found
pub fn solve(game: &Game) -> Option<Vec<DominoPlacement>> {
    let mut solver = Solver::new(game);
    solver.solve()
}
