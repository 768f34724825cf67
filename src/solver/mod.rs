//! Backtracking search components for Pips tilings

pub mod constraints;
pub mod grid;
pub mod search;

pub use constraints::zone_still_satisfiable;
pub use search::{SearchOptions, SearchOutcome, SearchStatistics, Solver};
