//! Solved-puzzle representation

use crate::board::{Difficulty, DominoPlacement, Game};
use crate::solver::SearchStatistics;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A complete tiling for one day's puzzle at one difficulty
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solution {
    pub difficulty: Difficulty,
    /// Placements in the order the search committed them
    pub placements: Vec<DominoPlacement>,
    /// Wall-clock time the search took
    #[serde(skip)]
    pub solve_time: Duration,
    pub metadata: SolutionMetadata,
}

/// Summary facts about a solution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolutionMetadata {
    pub domino_count: usize,
    pub cells_covered: usize,
    pub zone_count: usize,
    /// Recursive steps the search took to reach this solution
    pub search_steps: u64,
    pub backtracks: u64,
}

impl Solution {
    pub fn new(
        difficulty: Difficulty,
        placements: Vec<DominoPlacement>,
        game: &Game,
        statistics: Option<&SearchStatistics>,
    ) -> Self {
        let metadata = SolutionMetadata {
            domino_count: placements.len(),
            cells_covered: placements.len() * 2,
            zone_count: game.zones.len(),
            search_steps: statistics.map_or(0, |s| s.steps),
            backtracks: statistics.map_or(0, |s| s.backtracks),
        };
        let solve_time = statistics.map_or(Duration::ZERO, |s| s.solve_time);

        Self { difficulty, placements, solve_time, metadata }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Domino, GridCell, PlacedPip, Zone, ZoneKind};
    use tempfile::tempdir;

    fn sample_solution() -> (Game, Solution) {
        let game = Game::new(
            vec![Domino::new(2, 3)],
            vec![Zone {
                kind: ZoneKind::Sum,
                target: Some(5),
                cells: vec![GridCell::new(0, 0), GridCell::new(0, 1)],
            }],
            vec![],
        )
        .unwrap();
        let placements = vec![DominoPlacement {
            domino: Domino::new(2, 3),
            first: PlacedPip { cell: GridCell::new(0, 0), pip: 2 },
            second: PlacedPip { cell: GridCell::new(0, 1), pip: 3 },
        }];
        let solution = Solution::new(Difficulty::Easy, placements, &game, None);
        (game, solution)
    }

    #[test]
    fn test_metadata_counts() {
        let (_, solution) = sample_solution();
        assert_eq!(solution.metadata.domino_count, 1);
        assert_eq!(solution.metadata.cells_covered, 2);
        assert_eq!(solution.metadata.zone_count, 1);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("solution.json");

        let (_, solution) = sample_solution();
        solution.save_to_file(&path).unwrap();

        let loaded = Solution::load_from_file(&path).unwrap();
        assert_eq!(loaded.placements, solution.placements);
        assert_eq!(loaded.difficulty, Difficulty::Easy);
    }
}
