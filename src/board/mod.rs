//! Pips puzzle data model and I/O

pub mod fetch;
pub mod game;
pub mod io;

pub use fetch::{fetch_daily, DEFAULT_SOURCE_URL};
pub use game::{
    BoardDimensions, Domino, DominoPlacement, Game, GameError, GridCell, PlacedPip, Zone, ZoneKind,
};
pub use io::{DailyPuzzles, Difficulty};
