//! Independent checking of solver output
//!
//! The validator is a downstream consumer: it never touches solver state and
//! re-derives every property from the `Game` alone — exact coverage, tile
//! usage, adjacency, and zone satisfaction — plus equivalence with the
//! publisher's official solution.

use crate::board::{DominoPlacement, Game, GridCell};
use crate::solver::constraints::zone_still_satisfiable;
use crate::solver::grid::{CellState, Grid};
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// Checks a placement list against the game it claims to solve
#[derive(Debug, Default)]
pub struct SolutionValidator;

/// Outcome of validating one placement list
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub violations: Vec<ConstraintViolation>,
}

/// One specific way the placement list fails
#[derive(Debug, Clone)]
pub struct ConstraintViolation {
    pub kind: ViolationKind,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    HoleCovered,
    CellCoveredTwice,
    CellUncovered,
    NotAdjacent,
    DominoNotInPool,
    ZoneUnsatisfied,
}

impl SolutionValidator {
    pub fn new() -> Self {
        Self
    }

    /// Check the testable properties of a finished tiling: every non-hole
    /// cell covered exactly once, no hole covered, every placement on
    /// adjacent cells, every placement drawn from the pool at most once, and
    /// every zone constraint satisfied by the final values.
    pub fn validate(&self, game: &Game, placements: &[DominoPlacement]) -> ValidationResult {
        let mut violations = Vec::new();
        let mut grid = Grid::new(game.dims, &game.zones);

        for placement in placements {
            if !placement.first.cell.is_adjacent(&placement.second.cell) {
                violations.push(ConstraintViolation {
                    kind: ViolationKind::NotAdjacent,
                    description: format!(
                        "Domino ({}, {}) placed on non-adjacent cells {} and {}",
                        placement.domino.first,
                        placement.domino.second,
                        placement.first.cell,
                        placement.second.cell
                    ),
                });
            }

            for half in [placement.first, placement.second] {
                match grid.state(half.cell) {
                    CellState::Hole => violations.push(ConstraintViolation {
                        kind: ViolationKind::HoleCovered,
                        description: format!("Cell {} is a hole but was assigned pip {}", half.cell, half.pip),
                    }),
                    CellState::Pip(_) => violations.push(ConstraintViolation {
                        kind: ViolationKind::CellCoveredTwice,
                        description: format!("Cell {} is covered by more than one placement", half.cell),
                    }),
                    CellState::Empty => grid.place(half.cell, half.pip),
                }
            }
        }

        let mut pool: HashMap<(u8, u8), usize> = HashMap::new();
        for domino in &game.dominoes {
            *pool.entry(domino.canonical()).or_insert(0) += 1;
        }
        for placement in placements {
            let key = placement.domino.canonical();
            match pool.get_mut(&key) {
                Some(count) if *count > 0 => *count -= 1,
                _ => violations.push(ConstraintViolation {
                    kind: ViolationKind::DominoNotInPool,
                    description: format!(
                        "Domino ({}, {}) is used more often than the pool allows",
                        key.0, key.1
                    ),
                }),
            }
        }

        for row in 0..game.dims.rows {
            for col in 0..game.dims.cols {
                let cell = GridCell::new(row, col);
                if grid.state(cell) == CellState::Empty {
                    violations.push(ConstraintViolation {
                        kind: ViolationKind::CellUncovered,
                        description: format!("Assignable cell {} is not covered by any placement", cell),
                    });
                }
            }
        }

        // On a fully assigned zone the satisfiability predicate degenerates
        // to the completion check (sum == target and so on).
        for (index, zone) in game.zones.iter().enumerate() {
            if !zone_still_satisfiable(zone, &grid) {
                violations.push(ConstraintViolation {
                    kind: ViolationKind::ZoneUnsatisfied,
                    description: match zone.target {
                        Some(target) => {
                            format!("Zone {} ({}, target {}) is not satisfied", index, zone.kind, target)
                        }
                        None => format!("Zone {} ({}) is not satisfied", index, zone.kind),
                    },
                });
            }
        }

        ValidationResult { is_valid: violations.is_empty(), violations }
    }

    /// Compare a placement list with the publisher's official solution:
    /// equal as sets of unordered cell pairs.
    pub fn matches_official(
        &self,
        placements: &[DominoPlacement],
        official: &[(GridCell, GridCell)],
    ) -> bool {
        let ours: BTreeSet<(GridCell, GridCell)> =
            placements.iter().map(DominoPlacement::canonical_cells).collect();
        let theirs: BTreeSet<(GridCell, GridCell)> = official
            .iter()
            .map(|&(a, b)| if a <= b { (a, b) } else { (b, a) })
            .collect();
        ours == theirs
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation: {}", if self.is_valid { "VALID" } else { "INVALID" })?;
        for violation in &self.violations {
            writeln!(f, "  - {}", violation.description)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Domino, PlacedPip, Zone, ZoneKind};

    fn cell(row: u8, col: u8) -> GridCell {
        GridCell::new(row, col)
    }

    fn placement(domino: (u8, u8), a: (GridCell, u8), b: (GridCell, u8)) -> DominoPlacement {
        DominoPlacement {
            domino: Domino::new(domino.0, domino.1),
            first: PlacedPip { cell: a.0, pip: a.1 },
            second: PlacedPip { cell: b.0, pip: b.1 },
        }
    }

    fn sum_game() -> Game {
        Game::new(
            vec![Domino::new(2, 3)],
            vec![Zone {
                kind: ZoneKind::Sum,
                target: Some(5),
                cells: vec![cell(0, 0), cell(0, 1)],
            }],
            vec![(cell(0, 0), cell(0, 1))],
        )
        .unwrap()
    }

    #[test]
    fn test_valid_solution_passes() {
        let game = sum_game();
        let placements = vec![placement((2, 3), (cell(0, 0), 2), (cell(0, 1), 3))];
        let result = SolutionValidator::new().validate(&game, &placements);
        assert!(result.is_valid, "{result}");
    }

    #[test]
    fn test_uncovered_cell_flagged() {
        let game = sum_game();
        let result = SolutionValidator::new().validate(&game, &[]);
        assert!(!result.is_valid);
        assert!(result.violations.iter().any(|v| v.kind == ViolationKind::CellUncovered));
    }

    #[test]
    fn test_hole_and_double_cover_flagged() {
        let game = sum_game();
        let placements = vec![
            placement((2, 3), (cell(0, 0), 2), (cell(0, 1), 3)),
            // (1,0) is a hole; (0,0) is already covered
            placement((2, 3), (cell(1, 0), 2), (cell(0, 0), 3)),
        ];
        let result = SolutionValidator::new().validate(&game, &placements);
        let kinds: Vec<ViolationKind> = result.violations.iter().map(|v| v.kind).collect();
        assert!(kinds.contains(&ViolationKind::HoleCovered));
        assert!(kinds.contains(&ViolationKind::CellCoveredTwice));
        assert!(kinds.contains(&ViolationKind::DominoNotInPool));
    }

    #[test]
    fn test_non_adjacent_placement_flagged() {
        let game = Game::new(
            vec![Domino::new(1, 1)],
            vec![Zone {
                kind: ZoneKind::Empty,
                target: None,
                cells: vec![cell(0, 0), cell(0, 2)],
            }],
            vec![],
        )
        .unwrap();
        let placements = vec![placement((1, 1), (cell(0, 0), 1), (cell(0, 2), 1))];
        let result = SolutionValidator::new().validate(&game, &placements);
        assert!(result.violations.iter().any(|v| v.kind == ViolationKind::NotAdjacent));
    }

    #[test]
    fn test_unsatisfied_zone_flagged() {
        let game = sum_game();
        // adjacent and from the pool, but 3 + 3 misses the target
        let placements = vec![placement((2, 3), (cell(0, 0), 3), (cell(0, 1), 3))];
        let result = SolutionValidator::new().validate(&game, &placements);
        assert!(result.violations.iter().any(|v| v.kind == ViolationKind::ZoneUnsatisfied));
    }

    #[test]
    fn test_matches_official_ignores_order() {
        let validator = SolutionValidator::new();
        let placements = vec![placement((2, 3), (cell(0, 1), 3), (cell(0, 0), 2))];

        assert!(validator.matches_official(&placements, &[(cell(0, 0), cell(0, 1))]));
        assert!(validator.matches_official(&placements, &[(cell(0, 1), cell(0, 0))]));
        assert!(!validator.matches_official(&placements, &[(cell(0, 0), cell(1, 0))]));
        assert!(!validator.matches_official(&placements, &[]));
    }
}
