//! Puzzle orchestration: settings, puzzle data, solver, and validation

use super::{Solution, SolutionValidator};
use crate::board::{DailyPuzzles, Difficulty, Game};
use crate::config::Settings;
use crate::solver::{SearchOptions, Solver};
use anyhow::{Context, Result};

/// One day's puzzles wired up to the configured solver and validator
pub struct PuzzleProblem {
    settings: Settings,
    puzzles: DailyPuzzles,
    validator: SolutionValidator,
}

impl PuzzleProblem {
    /// Load the puzzle document named by the settings
    pub fn new(settings: Settings) -> Result<Self> {
        let puzzles = DailyPuzzles::load_from_file(&settings.puzzle.data_file)
            .context("Failed to load puzzle data")?;
        Ok(Self::with_puzzles(settings, puzzles))
    }

    /// Use an already-parsed puzzle set (useful for testing)
    pub fn with_puzzles(settings: Settings, puzzles: DailyPuzzles) -> Self {
        Self { settings, puzzles, validator: SolutionValidator::new() }
    }

    pub fn game(&self, difficulty: Difficulty) -> &Game {
        self.puzzles.game(difficulty)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Solve one difficulty.
    ///
    /// Returns `Ok(None)` when the puzzle has no solution. A solution that
    /// fails validation indicates a solver defect and is reported as an
    /// error rather than returned.
    pub fn solve(&self, difficulty: Difficulty) -> Result<Option<Solution>> {
        let game = self.puzzles.game(difficulty);
        let options = SearchOptions { max_steps: self.settings.solver.max_steps };
        let mut solver = Solver::with_options(game, options);

        let Some(placements) = solver.solve() else {
            return Ok(None);
        };

        let check = self.validator.validate(game, &placements);
        if !check.is_valid {
            anyhow::bail!("Solver produced an invalid tiling for {}: {}", difficulty, check);
        }

        if self.settings.solver.verify_official
            && !game.official_solution.is_empty()
            && !self.validator.matches_official(&placements, &game.official_solution)
        {
            eprintln!(
                "Warning: {} solution differs from the official one (both are valid tilings)",
                difficulty
            );
        }

        Ok(Some(Solution::new(difficulty, placements, game, solver.statistics())))
    }

    /// Solve all three difficulties in publication order
    pub fn solve_all(&self) -> Result<Vec<(Difficulty, Option<Solution>)>> {
        Difficulty::ALL
            .into_iter()
            .map(|difficulty| Ok((difficulty, self.solve(difficulty)?)))
            .collect()
    }

    /// Whether the found solution equals the official one as a set of cell pairs
    pub fn matches_official(&self, difficulty: Difficulty, solution: &Solution) -> bool {
        let game = self.puzzles.game(difficulty);
        self.validator.matches_official(&solution.placements, &game.official_solution)
    }
}
