//! Backtracking search for a complete, constraint-satisfying tiling

use crate::board::{DominoPlacement, Game, GridCell, PlacedPip};
use crate::solver::constraints::zone_still_satisfiable;
use crate::solver::grid::Grid;
use std::time::{Duration, Instant};

/// Tuning knobs for a search run
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Abort after this many recursive steps. `None` (the default) runs to
    /// first success or full exhaustion.
    pub max_steps: Option<u64>,
}

/// How a search run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A complete tiling was found
    Solved,
    /// The placement space was exhausted without a solution
    Exhausted,
    /// The step budget ran out before the search could finish
    BudgetExceeded,
}

/// Counters describing one search run
#[derive(Debug, Clone)]
pub struct SearchStatistics {
    pub steps: u64,
    pub placements_tried: u64,
    pub backtracks: u64,
    pub solve_time: Duration,
    pub outcome: SearchOutcome,
}

/// Depth-first backtracking solver over a single [`Game`].
///
/// The candidate order is fixed and total — anchor cell in row-major order,
/// dominoes in pool order, pip orientations before directions, east before
/// south — so solving the same game twice yields the identical first
/// solution.
pub struct Solver<'a> {
    game: &'a Game,
    options: SearchOptions,
    grid: Grid,
    used: Vec<bool>,
    placements: Vec<DominoPlacement>,
    steps: u64,
    placements_tried: u64,
    backtracks: u64,
    out_of_budget: bool,
    statistics: Option<SearchStatistics>,
}

impl<'a> Solver<'a> {
    /// Create a solver with default options
    pub fn new(game: &'a Game) -> Self {
        Self::with_options(game, SearchOptions::default())
    }

    pub fn with_options(game: &'a Game, options: SearchOptions) -> Self {
        Self {
            game,
            options,
            grid: Grid::new(game.dims, &game.zones),
            used: vec![false; game.dominoes.len()],
            placements: Vec::with_capacity(game.dominoes.len()),
            steps: 0,
            placements_tried: 0,
            backtracks: 0,
            out_of_budget: false,
            statistics: None,
        }
    }

    /// Run the search.
    ///
    /// Returns the ordered placement list of the first solution, or `None`
    /// when no tiling satisfies all constraints (or the step budget ran out).
    /// "No solution" is a valid terminal outcome, not an error.
    pub fn solve(&mut self) -> Option<Vec<DominoPlacement>> {
        self.reset();
        let start = Instant::now();
        let solved = self.search();
        let solve_time = start.elapsed();

        let outcome = if solved {
            SearchOutcome::Solved
        } else if self.out_of_budget {
            SearchOutcome::BudgetExceeded
        } else {
            SearchOutcome::Exhausted
        };
        self.statistics = Some(SearchStatistics {
            steps: self.steps,
            placements_tried: self.placements_tried,
            backtracks: self.backtracks,
            solve_time,
            outcome,
        });

        if solved {
            Some(self.placements.clone())
        } else {
            None
        }
    }

    /// Statistics from the most recent [`solve`](Self::solve) run
    pub fn statistics(&self) -> Option<&SearchStatistics> {
        self.statistics.as_ref()
    }

    fn reset(&mut self) {
        self.grid = Grid::new(self.game.dims, &self.game.zones);
        self.used.iter_mut().for_each(|u| *u = false);
        self.placements.clear();
        self.steps = 0;
        self.placements_tried = 0;
        self.backtracks = 0;
        self.out_of_budget = false;
        self.statistics = None;
    }

    fn search(&mut self) -> bool {
        if self.out_of_budget {
            return false;
        }
        self.steps += 1;
        if let Some(budget) = self.options.max_steps {
            if self.steps > budget {
                self.out_of_budget = true;
                return false;
            }
        }

        // The anchor is the first unfilled cell in scan order, so its west
        // and north neighbors are never unfilled; east and south suffice.
        let Some(anchor) = self.grid.first_empty_cell() else {
            return true;
        };

        for domino_index in 0..self.game.dominoes.len() {
            if self.used[domino_index] {
                continue;
            }
            let domino = self.game.dominoes[domino_index];

            let orientations = [(domino.first, domino.second), (domino.second, domino.first)];
            let orientation_count = if domino.is_double() { 1 } else { 2 };

            for &(anchor_pip, neighbor_pip) in &orientations[..orientation_count] {
                for neighbor in [anchor.east(), anchor.south()].into_iter().flatten() {
                    if !self.grid.is_empty_cell(neighbor) {
                        continue;
                    }
                    if self.try_placement(domino_index, anchor, anchor_pip, neighbor, neighbor_pip) {
                        return true;
                    }
                }
            }
        }

        false
    }

    /// Tentatively place one domino, prune through the affected zones,
    /// recurse, and undo completely on failure.
    fn try_placement(
        &mut self,
        domino_index: usize,
        anchor: GridCell,
        anchor_pip: u8,
        neighbor: GridCell,
        neighbor_pip: u8,
    ) -> bool {
        self.placements_tried += 1;
        self.grid.place(anchor, anchor_pip);
        self.grid.place(neighbor, neighbor_pip);
        self.used[domino_index] = true;

        let anchor_zone = self.grid.zone_index(anchor);
        let neighbor_zone = self.grid.zone_index(neighbor);

        let mut valid = match anchor_zone {
            Some(z) => zone_still_satisfiable(&self.game.zones[z], &self.grid),
            None => true,
        };
        if valid && neighbor_zone != anchor_zone {
            if let Some(z) = neighbor_zone {
                valid = zone_still_satisfiable(&self.game.zones[z], &self.grid);
            }
        }

        if valid {
            self.placements.push(DominoPlacement {
                domino: self.game.dominoes[domino_index],
                first: PlacedPip { cell: anchor, pip: anchor_pip },
                second: PlacedPip { cell: neighbor, pip: neighbor_pip },
            });
            if self.search() {
                return true;
            }
            self.placements.pop();
            self.backtracks += 1;
        }

        self.grid.clear(anchor);
        self.grid.clear(neighbor);
        self.used[domino_index] = false;
        false
    }
}
