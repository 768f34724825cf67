//! Configuration settings for the Pips solver

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub puzzle: PuzzleConfig,
    pub solver: SolverConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleConfig {
    /// Puzzle document to solve
    pub data_file: PathBuf,
    /// Endpoint prefix used by the fetch command
    pub source_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Abort the search after this many steps; unset runs to completion
    pub max_steps: Option<u64>,
    /// Compare found solutions against the official ones
    pub verify_official: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub save_solutions: bool,
    pub output_directory: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            puzzle: PuzzleConfig {
                data_file: PathBuf::from("data/pips.json"),
                source_url: crate::board::DEFAULT_SOURCE_URL.to_string(),
            },
            solver: SolverConfig {
                max_steps: None,
                verify_official: true,
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                save_solutions: false,
                output_directory: PathBuf::from("output/solutions"),
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings before solving
    pub fn validate(&self) -> Result<()> {
        if !self.puzzle.data_file.exists() {
            anyhow::bail!(
                "Puzzle file does not exist: {} (run the fetch command first)",
                self.puzzle.data_file.display()
            );
        }

        if self.solver.max_steps == Some(0) {
            anyhow::bail!("max_steps must be positive when set");
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(ref puzzle_file) = cli_overrides.puzzle_file {
            self.puzzle.data_file = puzzle_file.clone();
        }
        if let Some(max_steps) = cli_overrides.max_steps {
            self.solver.max_steps = Some(max_steps);
        }
        if let Some(ref output_dir) = cli_overrides.output_dir {
            self.output.output_directory = output_dir.clone();
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub puzzle_file: Option<PathBuf>,
    pub max_steps: Option<u64>,
    pub output_dir: Option<PathBuf>,
}
