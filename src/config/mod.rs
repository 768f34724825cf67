//! Configuration management for the Pips solver

pub mod settings;

pub use settings::{
    CliOverrides, OutputConfig, OutputFormat, PuzzleConfig, Settings, SolverConfig,
};
