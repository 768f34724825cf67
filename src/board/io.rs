//! Loading Pips puzzle documents
//!
//! The daily document is one JSON object with an `easy`, `medium`, and `hard`
//! puzzle. Each puzzle lists its domino pool, its constraint regions, and the
//! official solution as unordered cell pairs. Board dimensions are not part
//! of the document; they are derived from the region coordinates.

use super::game::{Domino, Game, GridCell, Zone, ZoneKind};
use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// The three puzzles published per day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        write!(f, "{}", name)
    }
}

/// One day's worth of parsed puzzles
#[derive(Debug, Clone)]
pub struct DailyPuzzles {
    games: [Game; 3],
}

#[derive(Debug, Deserialize)]
struct PuzzleDoc {
    easy: GameDoc,
    medium: GameDoc,
    hard: GameDoc,
}

#[derive(Debug, Deserialize)]
struct GameDoc {
    dominoes: Vec<[u8; 2]>,
    regions: Vec<RegionDoc>,
    solution: Vec<[[u8; 2]; 2]>,
}

#[derive(Debug, Deserialize)]
struct RegionDoc {
    #[serde(rename = "type", default)]
    kind: ZoneKind,
    #[serde(default)]
    target: Option<u8>,
    indices: Vec<[u8; 2]>,
}

impl DailyPuzzles {
    /// Load and parse a daily puzzle document from disk
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read puzzle file: {}", path.as_ref().display()))?;

        Self::parse(&content)
            .with_context(|| format!("Failed to parse puzzle file: {}", path.as_ref().display()))
    }

    /// Parse a daily puzzle document from its JSON text
    pub fn parse(content: &str) -> Result<Self> {
        let doc: PuzzleDoc =
            serde_json::from_str(content).context("Puzzle document is not valid JSON")?;

        let easy = build_game(doc.easy).context("Invalid easy puzzle")?;
        let medium = build_game(doc.medium).context("Invalid medium puzzle")?;
        let hard = build_game(doc.hard).context("Invalid hard puzzle")?;

        Ok(Self { games: [easy, medium, hard] })
    }

    /// The parsed game for one difficulty
    pub fn game(&self, difficulty: Difficulty) -> &Game {
        &self.games[difficulty as usize]
    }
}

fn build_game(doc: GameDoc) -> Result<Game> {
    let dominoes = doc.dominoes.into_iter().map(|[a, b]| Domino::new(a, b)).collect();

    let zones = doc
        .regions
        .into_iter()
        .map(|region| Zone {
            kind: region.kind,
            target: region.target,
            cells: region.indices.into_iter().map(|[row, col]| GridCell::new(row, col)).collect(),
        })
        .collect();

    let official_solution = doc
        .solution
        .into_iter()
        .map(|[[r1, c1], [r2, c2]]| (GridCell::new(r1, c1), GridCell::new(r2, c2)))
        .collect();

    Game::new(dominoes, zones, official_solution).context("Malformed puzzle structure")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardDimensions;
    use tempfile::tempdir;

    const SAMPLE_DOC: &str = r#"{
        "easy": {
            "dominoes": [[2, 3]],
            "regions": [
                {"type": "sum", "target": 5, "indices": [[0, 0], [0, 1]]}
            ],
            "solution": [[[0, 0], [0, 1]]]
        },
        "medium": {
            "dominoes": [[1, 1], [4, 2]],
            "regions": [
                {"type": "equals", "indices": [[0, 0], [1, 0]]},
                {"type": "unequal", "indices": [[0, 1], [1, 1]]}
            ],
            "solution": [[[0, 0], [1, 0]], [[0, 1], [1, 1]]]
        },
        "hard": {
            "dominoes": [[0, 6]],
            "regions": [
                {"type": "greater", "target": 3, "indices": [[0, 0], [0, 1]]}
            ],
            "solution": [[[0, 0], [0, 1]]]
        }
    }"#;

    #[test]
    fn test_parse_sample_document() {
        let puzzles = DailyPuzzles::parse(SAMPLE_DOC).unwrap();

        let easy = puzzles.game(Difficulty::Easy);
        assert_eq!(easy.dominoes, vec![Domino::new(2, 3)]);
        assert_eq!(easy.zones.len(), 1);
        assert_eq!(easy.zones[0].kind, ZoneKind::Sum);
        assert_eq!(easy.zones[0].target, Some(5));
        assert_eq!(easy.dims, BoardDimensions { rows: 1, cols: 2 });
        assert_eq!(easy.official_solution, vec![(GridCell::new(0, 0), GridCell::new(0, 1))]);

        let medium = puzzles.game(Difficulty::Medium);
        assert_eq!(medium.dims, BoardDimensions { rows: 2, cols: 2 });
        assert_eq!(medium.zones[1].kind, ZoneKind::Unequal);
    }

    #[test]
    fn test_unknown_region_type_becomes_empty() {
        let doc = SAMPLE_DOC.replace("\"greater\"", "\"mystery\"");
        // a Greater target without its kind is just an ignored field
        let puzzles = DailyPuzzles::parse(&doc).unwrap();
        assert_eq!(puzzles.game(Difficulty::Hard).zones[0].kind, ZoneKind::Empty);
    }

    #[test]
    fn test_missing_region_type_defaults_to_empty() {
        let doc = SAMPLE_DOC.replace("\"type\": \"equals\", ", "");
        let puzzles = DailyPuzzles::parse(&doc).unwrap();
        assert_eq!(puzzles.game(Difficulty::Medium).zones[0].kind, ZoneKind::Empty);
    }

    #[test]
    fn test_sum_region_without_target_is_rejected() {
        let doc = SAMPLE_DOC.replace("\"target\": 5, ", "");
        let err = DailyPuzzles::parse(&doc).unwrap_err();
        assert!(err.to_string().contains("Invalid easy puzzle"));
    }

    #[test]
    fn test_missing_difficulty_is_rejected() {
        assert!(DailyPuzzles::parse(r#"{"easy": {"dominoes": [], "regions": [], "solution": []}}"#).is_err());
        assert!(DailyPuzzles::parse("not json at all").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pips.json");
        std::fs::write(&path, SAMPLE_DOC).unwrap();

        let puzzles = DailyPuzzles::load_from_file(&path).unwrap();
        assert_eq!(puzzles.game(Difficulty::Easy).dominoes.len(), 1);

        let missing = DailyPuzzles::load_from_file(dir.path().join("absent.json"));
        assert!(missing.is_err());
    }
}
