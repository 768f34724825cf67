//! Display and output formatting utilities

pub mod display;

pub use display::{format_duration, BoardFormatter, ColorOutput};
