//! Board occupancy bookkeeping for the backtracking search

use crate::board::{BoardDimensions, GridCell, Zone};

/// State of one board cell during the search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// Not covered by any zone; never assignable
    Hole,
    /// Assignable and currently unfilled
    Empty,
    /// Assigned pip value
    Pip(u8),
}

/// Occupancy grid plus per-cell zone lookup.
///
/// Cells are stored row-major in a flat vector. The zone lookup holds a
/// stable index into the game's zone table rather than a reference, resolved
/// at the point of use. If zones overlap on a cell, the last-processed zone
/// owns it (last write wins).
#[derive(Debug, Clone)]
pub struct Grid {
    rows: u8,
    cols: u8,
    cells: Vec<CellState>,
    zone_of: Vec<Option<usize>>,
}

impl Grid {
    /// Build the grid: every cell starts as a hole, then every cell
    /// referenced by a zone becomes empty and is tagged with that zone's index.
    pub fn new(dims: BoardDimensions, zones: &[Zone]) -> Self {
        let cell_count = usize::from(dims.rows) * usize::from(dims.cols);
        let mut grid = Self {
            rows: dims.rows,
            cols: dims.cols,
            cells: vec![CellState::Hole; cell_count],
            zone_of: vec![None; cell_count],
        };

        for (zone_index, zone) in zones.iter().enumerate() {
            for cell in &zone.cells {
                if let Some(i) = grid.index(*cell) {
                    grid.cells[i] = CellState::Empty;
                    grid.zone_of[i] = Some(zone_index);
                }
            }
        }

        grid
    }

    #[inline]
    fn index(&self, cell: GridCell) -> Option<usize> {
        if cell.row < self.rows && cell.col < self.cols {
            Some(usize::from(cell.row) * usize::from(self.cols) + usize::from(cell.col))
        } else {
            None
        }
    }

    /// Current state of a cell; out-of-bounds coordinates read as holes
    pub fn state(&self, cell: GridCell) -> CellState {
        match self.index(cell) {
            Some(i) => self.cells[i],
            None => CellState::Hole,
        }
    }

    /// Whether a cell is in bounds, assignable, and currently unfilled
    pub fn is_empty_cell(&self, cell: GridCell) -> bool {
        self.state(cell) == CellState::Empty
    }

    /// Index of the zone owning a cell, if any
    pub fn zone_index(&self, cell: GridCell) -> Option<usize> {
        self.index(cell).and_then(|i| self.zone_of[i])
    }

    /// Assign a pip value to a cell. No validation; the search only calls
    /// this on cells it has just checked, in place/undo pairs.
    pub fn place(&mut self, cell: GridCell, pip: u8) {
        if let Some(i) = self.index(cell) {
            self.cells[i] = CellState::Pip(pip);
        }
    }

    /// Return a cell to the unfilled state
    pub fn clear(&mut self, cell: GridCell) {
        if let Some(i) = self.index(cell) {
            self.cells[i] = CellState::Empty;
        }
    }

    /// First unfilled assignable cell in row-major order.
    ///
    /// The scan order is a contract, not an implementation detail: every cell
    /// before the returned one is a hole or already assigned, so a placement
    /// anchored at the returned cell only needs to try its east and south
    /// neighbors.
    pub fn first_empty_cell(&self) -> Option<GridCell> {
        self.cells.iter().position(|&s| s == CellState::Empty).map(|i| GridCell {
            row: (i / usize::from(self.cols)) as u8,
            col: (i % usize::from(self.cols)) as u8,
        })
    }

    /// Number of assignable (non-hole) cells
    pub fn assignable_count(&self) -> usize {
        self.cells.iter().filter(|&&s| s != CellState::Hole).count()
    }
}
