//! Main CLI application for the Pips puzzle solver

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pips_solver::{
    board::{fetch_daily, Difficulty},
    config::{CliOverrides, OutputFormat, Settings},
    puzzle::PuzzleProblem,
    utils::{BoardFormatter, ColorOutput},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pips_solver")]
#[command(about = "Daily Pips domino puzzle solver")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve the daily puzzles
    Solve {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Puzzle file (overrides config)
        #[arg(short, long)]
        puzzle: Option<PathBuf>,

        /// Solve only this difficulty instead of all three
        #[arg(short, long, value_enum)]
        difficulty: Option<Difficulty>,

        /// Search step budget (overrides config)
        #[arg(short, long)]
        max_steps: Option<u64>,

        /// Output directory (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip drawing the solved boards
        #[arg(long)]
        no_board: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Download a daily puzzle document
    Fetch {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Date to fetch (YYYY-MM-DD); today when omitted
        #[arg(short, long)]
        date: Option<String>,

        /// Destination file (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Solve and compare against the official solutions
    Verify {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Puzzle file (overrides config)
        #[arg(short, long)]
        puzzle: Option<PathBuf>,

        /// Verify only this difficulty
        #[arg(short, long, value_enum)]
        difficulty: Option<Difficulty>,
    },

    /// Create example configuration and data files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve { config, puzzle, difficulty, max_steps, output, no_board, verbose } => {
            solve_command(config, puzzle, difficulty, max_steps, output, no_board, verbose)
        }
        Commands::Fetch { config, date, output } => fetch_command(config, date, output),
        Commands::Verify { config, puzzle, difficulty } => {
            verify_command(config, puzzle, difficulty)
        }
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

fn load_settings(config_path: &PathBuf) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Ok(Settings::default())
    }
}

fn selected_difficulties(difficulty: Option<Difficulty>) -> Vec<Difficulty> {
    match difficulty {
        Some(d) => vec![d],
        None => Difficulty::ALL.to_vec(),
    }
}

fn solve_command(
    config_path: PathBuf,
    puzzle_file: Option<PathBuf>,
    difficulty: Option<Difficulty>,
    max_steps: Option<u64>,
    output_dir: Option<PathBuf>,
    no_board: bool,
    verbose: bool,
) -> Result<()> {
    println!("{}", ColorOutput::info("🁫 Pips Puzzle Solver"));

    let mut settings = load_settings(&config_path)?;
    let save_requested = output_dir.is_some();
    settings.merge_with_cli(&CliOverrides { puzzle_file, max_steps, output_dir });
    settings.validate().context("Configuration validation failed")?;

    if verbose {
        println!("Configuration:");
        println!("  Puzzle file: {}", settings.puzzle.data_file.display());
        match settings.solver.max_steps {
            Some(steps) => println!("  Step budget: {}", steps),
            None => println!("  Step budget: unlimited"),
        }
        println!("  Output dir: {}", settings.output.output_directory.display());
        println!();
    }

    let save_solutions = settings.output.save_solutions || save_requested;
    let problem = PuzzleProblem::new(settings.clone()).context("Failed to load puzzles")?;

    for difficulty in selected_difficulties(difficulty) {
        println!("\n=== {} ===", difficulty);

        let Some(solution) = problem.solve(difficulty)? else {
            println!("{}", ColorOutput::warning("No solution found"));
            continue;
        };

        println!("{}", ColorOutput::success(&BoardFormatter::format_summary(&solution)));

        match settings.output.format {
            OutputFormat::Text => {
                if !no_board {
                    let game = problem.game(difficulty);
                    println!("{}", BoardFormatter::format_board(game, &solution));
                    print!("{}", BoardFormatter::format_legend(game));
                }
            }
            OutputFormat::Json => {
                println!("{}", solution.to_json()?);
            }
        }

        if save_solutions {
            let dir = &settings.output.output_directory;
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create directory {}", dir.display()))?;
            let path = dir.join(format!("solution_{}.json", format!("{}", difficulty).to_lowercase()));
            solution.save_to_file(&path)?;
            println!("Saved: {}", path.display());
        }
    }

    Ok(())
}

fn fetch_command(config_path: PathBuf, date: Option<String>, output: Option<PathBuf>) -> Result<()> {
    println!("{}", ColorOutput::info("⇣ Fetching daily puzzle..."));

    let settings = load_settings(&config_path)?;
    let dest = output.unwrap_or(settings.puzzle.data_file);

    fetch_daily(&settings.puzzle.source_url, date.as_deref(), &dest)?;

    println!("{}", ColorOutput::success(&format!("Saved puzzle to {}", dest.display())));
    Ok(())
}

fn verify_command(
    config_path: PathBuf,
    puzzle_file: Option<PathBuf>,
    difficulty: Option<Difficulty>,
) -> Result<()> {
    println!("{}", ColorOutput::info("🔍 Verifying against official solutions..."));

    let mut settings = load_settings(&config_path)?;
    settings.merge_with_cli(&CliOverrides { puzzle_file, ..CliOverrides::default() });
    settings.validate().context("Configuration validation failed")?;

    let problem = PuzzleProblem::new(settings).context("Failed to load puzzles")?;

    let mut all_match = true;
    for difficulty in selected_difficulties(difficulty) {
        let Some(solution) = problem.solve(difficulty)? else {
            println!("{}", ColorOutput::error(&format!("{}: no solution found", difficulty)));
            all_match = false;
            continue;
        };

        if problem.game(difficulty).official_solution.is_empty() {
            println!(
                "{}",
                ColorOutput::warning(&format!("{}: no official solution in puzzle file", difficulty))
            );
        } else if problem.matches_official(difficulty, &solution) {
            println!("{}", ColorOutput::success(&format!("{}: matches official solution", difficulty)));
        } else {
            println!(
                "{}",
                ColorOutput::warning(&format!(
                    "{}: valid tiling, but differs from the official solution",
                    difficulty
                ))
            );
        }
    }

    if all_match {
        println!("\n{}", ColorOutput::success("✅ Verification complete"));
    }
    Ok(())
}

const SAMPLE_PUZZLE_DOC: &str = r#"{
    "easy": {
        "dominoes": [[2, 3]],
        "regions": [{"type": "sum", "target": 5, "indices": [[0, 0], [0, 1]]}],
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
        "dominoes": [[1, 2], [3, 4]],
        "regions": [
            {"type": "sum", "target": 4, "indices": [[0, 0], [0, 1]]},
            {"type": "sum", "target": 6, "indices": [[1, 0], [1, 1]]}
        ],
        "solution": [[[0, 0], [1, 0]], [[0, 1], [1, 1]]]
    }
}"#;

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("🛠  Setting up project structure..."));

    let config_dir = directory.join("config");
    let data_dir = directory.join("data");
    let output_dir = directory.join("output/solutions");

    for dir in [&config_dir, &data_dir, &output_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        let mut default_settings = Settings::default();
        default_settings.puzzle.data_file = data_dir.join("sample.json");
        default_settings.output.output_directory = output_dir.clone();
        default_settings.to_file(&config_path).context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    let sample_path = data_dir.join("sample.json");
    if !sample_path.exists() || force {
        std::fs::write(&sample_path, SAMPLE_PUZZLE_DOC)
            .with_context(|| format!("Failed to write {}", sample_path.display()))?;
        println!("Created: {}", sample_path.display());
    } else {
        println!("Skipped: {} (already exists)", sample_path.display());
    }

    println!("\n{}", ColorOutput::success("✅ Setup complete!"));
    println!("\nNext steps:");
    println!("1. Run: cargo run -- solve --config {}", config_path.display());
    println!("2. Fetch today's puzzle: cargo run -- fetch --config {}", config_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pips_solver::board::DailyPuzzles;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "pips_solver",
            "solve",
            "--config",
            "test.yaml",
            "--difficulty",
            "hard",
            "--max-steps",
            "1000",
        ]);
        assert!(cli.is_ok());

        let bad = Cli::try_parse_from(["pips_solver", "solve", "--difficulty", "impossible"]);
        assert!(bad.is_err());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        setup_command(temp_dir.path().to_path_buf(), false).unwrap();

        assert!(temp_dir.path().join("config/default.yaml").exists());
        assert!(temp_dir.path().join("data/sample.json").exists());
    }

    #[test]
    fn test_sample_document_solves_and_matches_official() {
        let puzzles = DailyPuzzles::parse(SAMPLE_PUZZLE_DOC).unwrap();
        let problem = PuzzleProblem::with_puzzles(Settings::default(), puzzles);

        for difficulty in Difficulty::ALL {
            let solution = problem
                .solve(difficulty)
                .unwrap()
                .unwrap_or_else(|| panic!("{difficulty} sample should solve"));
            assert!(problem.matches_official(difficulty, &solution));
        }
    }
}
