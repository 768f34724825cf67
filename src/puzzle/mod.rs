//! Puzzle orchestration and solution handling

pub mod problem;
pub mod solution;
pub mod validator;

pub use problem::PuzzleProblem;
pub use solution::{Solution, SolutionMetadata};
pub use validator::{SolutionValidator, ValidationResult};
