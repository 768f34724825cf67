//! Incremental zone constraint evaluation
//!
//! The single predicate here answers "is this zone's constraint still
//! satisfiable given its currently-filled cells" — not "already satisfied".
//! That distinction is what lets the search prune invalid partial tilings
//! long before the board is full.

use crate::board::{Zone, ZoneKind};
use crate::solver::grid::{CellState, Grid};
use itertools::Itertools;

/// Decide whether a zone's constraint can still be met.
///
/// Rules per kind, given the pip values of currently-filled zone cells:
/// - `Empty`: always satisfiable.
/// - `Equals`: every filled value must match; one mismatch fails immediately.
/// - `Sum`: fails if the partial sum already exceeds the target, or if the
///   zone is full and the sum misses it. A partial zone under target always
///   passes.
/// - `Greater` / `Less`: only decidable once the zone is full; partial zones
///   always pass.
/// - `Unequal`: fails as soon as two filled values collide.
///
/// A zone with no filled cells is always satisfiable. Pure predicate, no
/// side effects.
pub fn zone_still_satisfiable(zone: &Zone, grid: &Grid) -> bool {
    let mut filled = Vec::with_capacity(zone.cells.len());
    let mut zone_full = true;

    for cell in &zone.cells {
        match grid.state(*cell) {
            CellState::Pip(pip) => filled.push(pip),
            _ => zone_full = false,
        }
    }

    if filled.is_empty() {
        return true;
    }

    match zone.kind {
        ZoneKind::Empty => true,
        ZoneKind::Equals => filled.iter().all_equal(),
        ZoneKind::Sum => match zone.target {
            Some(target) => {
                let sum: u32 = filled.iter().map(|&p| u32::from(p)).sum();
                sum <= u32::from(target) && (!zone_full || sum == u32::from(target))
            }
            // target presence is enforced by Game::new
            None => true,
        },
        ZoneKind::Greater => match zone.target {
            Some(target) => {
                let sum: u32 = filled.iter().map(|&p| u32::from(p)).sum();
                !zone_full || sum > u32::from(target)
            }
            None => true,
        },
        ZoneKind::Less => match zone.target {
            Some(target) => {
                let sum: u32 = filled.iter().map(|&p| u32::from(p)).sum();
                !zone_full || sum < u32::from(target)
            }
            None => true,
        },
        ZoneKind::Unequal => filled.iter().duplicates().next().is_none(),
    }
}
