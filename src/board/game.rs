//! Core data model for Pips puzzles

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use thiserror::Error;

/// A single board coordinate.
///
/// The derived ordering is (row, then column); the solver's cell selection
/// depends on this being the row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GridCell {
    pub row: u8,
    pub col: u8,
}

impl GridCell {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Check whether another cell is orthogonally adjacent to this one
    pub fn is_adjacent(&self, other: &GridCell) -> bool {
        let row_dist = self.row.abs_diff(other.row);
        let col_dist = self.col.abs_diff(other.col);
        row_dist + col_dist == 1
    }

    /// The cell one column to the right, if representable
    pub fn east(self) -> Option<GridCell> {
        self.col.checked_add(1).map(|col| GridCell { row: self.row, col })
    }

    /// The cell one row down, if representable
    pub fn south(self) -> Option<GridCell> {
        self.row.checked_add(1).map(|row| GridCell { row, col: self.col })
    }
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A domino tile: an unordered pair of pip values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domino {
    pub first: u8,
    pub second: u8,
}

impl Domino {
    pub fn new(first: u8, second: u8) -> Self {
        Self { first, second }
    }

    /// Both halves carry the same pip value
    pub fn is_double(&self) -> bool {
        self.first == self.second
    }

    /// The pip pair in a fixed (low, high) order, for order-insensitive comparison
    pub fn canonical(&self) -> (u8, u8) {
        if self.first <= self.second {
            (self.first, self.second)
        } else {
            (self.second, self.first)
        }
    }
}

/// Board extent, derived from the maximum coordinates referenced by any zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardDimensions {
    pub rows: u8,
    pub cols: u8,
}

/// The constraint attached to a zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneKind {
    #[default]
    Empty,
    Equals,
    Sum,
    Less,
    Greater,
    Unequal,
}

impl ZoneKind {
    /// Map a region-type name from the puzzle document to a kind.
    /// Unrecognized names fall back to `Empty`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "equals" => ZoneKind::Equals,
            "sum" => ZoneKind::Sum,
            "less" => ZoneKind::Less,
            "greater" => ZoneKind::Greater,
            "unequal" => ZoneKind::Unequal,
            _ => ZoneKind::Empty,
        }
    }

    /// Whether this kind needs a numeric target to be evaluable
    pub fn requires_target(&self) -> bool {
        matches!(self, ZoneKind::Sum | ZoneKind::Less | ZoneKind::Greater)
    }
}

impl<'de> Deserialize<'de> for ZoneKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(ZoneKind::from_name(&name))
    }
}

impl fmt::Display for ZoneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ZoneKind::Empty => "Empty",
            ZoneKind::Equals => "Equals",
            ZoneKind::Sum => "Sum",
            ZoneKind::Less => "Less",
            ZoneKind::Greater => "Greater",
            ZoneKind::Unequal => "Unequal",
        };
        write!(f, "{}", name)
    }
}

/// A set of board cells governed by one constraint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pub kind: ZoneKind,
    pub target: Option<u8>,
    pub cells: Vec<GridCell>,
}

/// One half of a placed domino: which pip value landed on which cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedPip {
    pub cell: GridCell,
    pub pip: u8,
}

/// A domino assigned to two adjacent cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DominoPlacement {
    pub domino: Domino,
    pub first: PlacedPip,
    pub second: PlacedPip,
}

impl DominoPlacement {
    /// The occupied cell pair in a fixed order, for order-insensitive comparison
    pub fn canonical_cells(&self) -> (GridCell, GridCell) {
        if self.first.cell <= self.second.cell {
            (self.first.cell, self.second.cell)
        } else {
            (self.second.cell, self.first.cell)
        }
    }
}

/// Structural problems detected when constructing a [`Game`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("zone {index} ({kind}) requires a numeric target but has none")]
    MissingTarget { index: usize, kind: ZoneKind },
    #[error("zone {index} does not cover any cells")]
    EmptyZone { index: usize },
}

/// A complete, immutable puzzle instance.
///
/// `official_solution` is the publisher-supplied answer as unordered cell
/// pairs; it is only used for verification, never by the solver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub dominoes: Vec<Domino>,
    pub zones: Vec<Zone>,
    pub dims: BoardDimensions,
    pub official_solution: Vec<(GridCell, GridCell)>,
}

impl Game {
    /// Build a game from its parts, deriving board dimensions from the
    /// maximum cell coordinates referenced by any zone.
    ///
    /// Rejects zones whose constraint needs a target but carries none, and
    /// zones that cover no cells; every later component relies on these
    /// invariants instead of re-checking them.
    pub fn new(
        dominoes: Vec<Domino>,
        zones: Vec<Zone>,
        official_solution: Vec<(GridCell, GridCell)>,
    ) -> Result<Self, GameError> {
        let mut max_row = 0u8;
        let mut max_col = 0u8;

        for (index, zone) in zones.iter().enumerate() {
            if zone.kind.requires_target() && zone.target.is_none() {
                return Err(GameError::MissingTarget { index, kind: zone.kind });
            }
            if zone.cells.is_empty() {
                return Err(GameError::EmptyZone { index });
            }
            for cell in &zone.cells {
                max_row = max_row.max(cell.row);
                max_col = max_col.max(cell.col);
            }
        }

        let dims = BoardDimensions {
            rows: max_row.saturating_add(1),
            cols: max_col.saturating_add(1),
        };

        Ok(Self { dominoes, zones, dims, official_solution })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_ordering_is_row_major() {
        let mut cells = vec![
            GridCell::new(1, 0),
            GridCell::new(0, 2),
            GridCell::new(0, 1),
            GridCell::new(1, 1),
        ];
        cells.sort();
        assert_eq!(
            cells,
            vec![
                GridCell::new(0, 1),
                GridCell::new(0, 2),
                GridCell::new(1, 0),
                GridCell::new(1, 1),
            ]
        );
    }

    #[test]
    fn test_adjacency() {
        let cell = GridCell::new(2, 2);
        assert!(cell.is_adjacent(&GridCell::new(2, 3)));
        assert!(cell.is_adjacent(&GridCell::new(2, 1)));
        assert!(cell.is_adjacent(&GridCell::new(1, 2)));
        assert!(cell.is_adjacent(&GridCell::new(3, 2)));

        assert!(!cell.is_adjacent(&GridCell::new(2, 2)));
        assert!(!cell.is_adjacent(&GridCell::new(3, 3)));
        assert!(!cell.is_adjacent(&GridCell::new(0, 2)));
    }

    #[test]
    fn test_neighbor_helpers() {
        let cell = GridCell::new(0, 0);
        assert_eq!(cell.east(), Some(GridCell::new(0, 1)));
        assert_eq!(cell.south(), Some(GridCell::new(1, 0)));

        let edge = GridCell::new(255, 255);
        assert_eq!(edge.east(), None);
        assert_eq!(edge.south(), None);
    }

    #[test]
    fn test_domino_canonical() {
        assert_eq!(Domino::new(5, 2).canonical(), (2, 5));
        assert_eq!(Domino::new(2, 5).canonical(), (2, 5));
        assert!(Domino::new(3, 3).is_double());
        assert!(!Domino::new(3, 4).is_double());
    }

    #[test]
    fn test_zone_kind_from_name() {
        assert_eq!(ZoneKind::from_name("sum"), ZoneKind::Sum);
        assert_eq!(ZoneKind::from_name("unequal"), ZoneKind::Unequal);
        assert_eq!(ZoneKind::from_name("empty"), ZoneKind::Empty);
        assert_eq!(ZoneKind::from_name("no-such-kind"), ZoneKind::Empty);
    }

    #[test]
    fn test_dimensions_derived_from_zones() {
        let zones = vec![
            Zone {
                kind: ZoneKind::Empty,
                target: None,
                cells: vec![GridCell::new(0, 0), GridCell::new(2, 4)],
            },
            Zone {
                kind: ZoneKind::Empty,
                target: None,
                cells: vec![GridCell::new(3, 1)],
            },
        ];
        let game = Game::new(vec![], zones, vec![]).unwrap();
        assert_eq!(game.dims, BoardDimensions { rows: 4, cols: 5 });
    }

    #[test]
    fn test_missing_target_rejected() {
        for kind in [ZoneKind::Sum, ZoneKind::Less, ZoneKind::Greater] {
            let zones = vec![Zone { kind, target: None, cells: vec![GridCell::new(0, 0)] }];
            let err = Game::new(vec![], zones, vec![]).unwrap_err();
            assert_eq!(err, GameError::MissingTarget { index: 0, kind });
        }
    }

    #[test]
    fn test_targetless_kinds_accepted() {
        for kind in [ZoneKind::Empty, ZoneKind::Equals, ZoneKind::Unequal] {
            let zones = vec![Zone { kind, target: None, cells: vec![GridCell::new(0, 0)] }];
            assert!(Game::new(vec![], zones, vec![]).is_ok());
        }
    }

    #[test]
    fn test_empty_zone_rejected() {
        let zones = vec![Zone { kind: ZoneKind::Empty, target: None, cells: vec![] }];
        let err = Game::new(vec![], zones, vec![]).unwrap_err();
        assert_eq!(err, GameError::EmptyZone { index: 0 });
    }

    #[test]
    fn test_canonical_cells() {
        let placement = DominoPlacement {
            domino: Domino::new(1, 2),
            first: PlacedPip { cell: GridCell::new(1, 0), pip: 1 },
            second: PlacedPip { cell: GridCell::new(0, 0), pip: 2 },
        };
        assert_eq!(
            placement.canonical_cells(),
            (GridCell::new(0, 0), GridCell::new(1, 0))
        );
    }
}
