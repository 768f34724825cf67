//! Terminal rendering of boards and solutions

use crate::board::{Game, GridCell};
use crate::puzzle::Solution;
use crate::solver::grid::{CellState, Grid};
use std::collections::HashMap;
use std::time::Duration;

/// Background colors assigned to zones, cycled by zone index
const ZONE_COLORS: [(u8, u8, u8); 32] = [
    (255, 105, 180),
    (255, 215, 0),
    (138, 43, 226),
    (0, 255, 255),
    (255, 0, 255),
    (50, 205, 50),
    (255, 165, 0),
    (255, 69, 0),
    (75, 0, 130),
    (0, 250, 154),
    (255, 20, 147),
    (0, 191, 255),
    (218, 112, 214),
    (255, 127, 80),
    (127, 255, 0),
    (210, 105, 30),
    (173, 216, 230),
    (240, 230, 140),
    (147, 112, 219),
    (0, 255, 127),
    (255, 99, 71),
    (64, 224, 208),
    (255, 140, 0),
    (123, 104, 238),
    (255, 192, 203),
    (221, 160, 221),
    (135, 206, 250),
    (244, 164, 96),
    (152, 251, 152),
    (255, 250, 205),
    (255, 182, 193),
    (255, 228, 181),
];

const RESET: &str = "\x1b[0m";
const HOLE_BG: &str = "\x1b[48;2;40;40;40m";
const PIP_FG: &str = "\x1b[38;2;255;255;255m";
const BORDER_FG: &str = "\x1b[38;2;150;150;150m";

fn zone_bg(zone_index: usize) -> String {
    let (r, g, b) = ZONE_COLORS[zone_index % ZONE_COLORS.len()];
    format!("\x1b[48;2;{};{};{}m", r, g, b)
}

/// One character cell of the render canvas
#[derive(Debug, Clone, Default)]
struct CanvasCell {
    content: Option<String>,
    fg: Option<String>,
    bg: Option<String>,
}

/// Renders boards and solutions for the terminal
pub struct BoardFormatter;

impl BoardFormatter {
    /// Draw the board as a colored canvas: zone backgrounds, dark holes,
    /// pip values at cell centers, and borders erased between the two
    /// halves of each placed domino.
    pub fn format_board(game: &Game, solution: &Solution) -> String {
        let grid = Grid::new(game.dims, &game.zones);

        let mut pips: HashMap<GridCell, u8> = HashMap::new();
        let mut domino_ids: HashMap<GridCell, usize> = HashMap::new();
        for (id, placement) in solution.placements.iter().enumerate() {
            for half in [placement.first, placement.second] {
                pips.insert(half.cell, half.pip);
                domino_ids.insert(half.cell, id);
            }
        }

        let canvas_rows = usize::from(game.dims.rows) * 2 + 1;
        let canvas_cols = usize::from(game.dims.cols) * 4 + 1;
        let mut canvas = vec![vec![CanvasCell::default(); canvas_cols]; canvas_rows];

        // cell interiors
        for row in 0..game.dims.rows {
            for col in 0..game.dims.cols {
                let cell = GridCell::new(row, col);
                let canvas_r = usize::from(row) * 2 + 1;
                let canvas_c = usize::from(col) * 4 + 2;

                match grid.state(cell) {
                    CellState::Hole => {
                        for offset in 0..3 {
                            canvas[canvas_r][canvas_c - 1 + offset].bg = Some(HOLE_BG.to_string());
                        }
                    }
                    _ => {
                        let bg = grid.zone_index(cell).map(zone_bg);
                        for offset in 0..3 {
                            canvas[canvas_r][canvas_c - 1 + offset].bg = bg.clone();
                        }
                        if let Some(pip) = pips.get(&cell) {
                            let center = &mut canvas[canvas_r][canvas_c];
                            center.content = Some(pip.to_string());
                            center.fg = Some(PIP_FG.to_string());
                        }
                    }
                }
            }
        }

        // borders and junctions
        for (r, canvas_row) in canvas.iter_mut().enumerate() {
            for (c, canvas_cell) in canvas_row.iter_mut().enumerate() {
                let row_sep = r % 2 == 0;
                let col_sep = c % 4 == 0;
                if !row_sep && !col_sep {
                    continue;
                }
                canvas_cell.fg = Some(BORDER_FG.to_string());
                canvas_cell.content = Some(
                    if row_sep && col_sep {
                        "┼"
                    } else if row_sep {
                        "─"
                    } else {
                        "│"
                    }
                    .to_string(),
                );
            }
        }

        // erase the border between the two halves of each domino
        for (&cell, &id) in &domino_ids {
            if let Some(east) = cell.east() {
                if domino_ids.get(&east) == Some(&id) {
                    let border_c = usize::from(cell.col) * 4 + 4;
                    for offset in 0..3 {
                        canvas[usize::from(cell.row) * 2 + offset][border_c] = CanvasCell::default();
                    }
                }
            }
            if let Some(south) = cell.south() {
                if domino_ids.get(&south) == Some(&id) {
                    let border_r = usize::from(cell.row) * 2 + 2;
                    for offset in 0..5 {
                        canvas[border_r][usize::from(cell.col) * 4 + offset] = CanvasCell::default();
                    }
                }
            }
        }

        let mut output = String::new();
        for canvas_row in &canvas {
            for canvas_cell in canvas_row {
                let colored = canvas_cell.fg.is_some() || canvas_cell.bg.is_some();
                if let Some(bg) = &canvas_cell.bg {
                    output.push_str(bg);
                }
                if let Some(fg) = &canvas_cell.fg {
                    output.push_str(fg);
                }
                output.push_str(canvas_cell.content.as_deref().unwrap_or(" "));
                if colored {
                    output.push_str(RESET);
                }
            }
            output.push('\n');
        }
        output
    }

    /// Legend mapping zone colors to their constraints
    pub fn format_legend(game: &Game) -> String {
        let mut output = String::new();
        for (index, zone) in game.zones.iter().enumerate() {
            if zone.kind == crate::board::ZoneKind::Empty {
                continue;
            }
            let target = match zone.target {
                Some(target) => format!(" (target: {})", target),
                None => String::new(),
            };
            output.push_str(&format!("  {}   {} : {}{}\n", zone_bg(index), RESET, zone.kind, target));
        }
        output
    }

    /// One-line result summary
    pub fn format_summary(solution: &Solution) -> String {
        format!(
            "{}: {} dominoes placed in {} ({} steps, {} backtracks)",
            solution.difficulty,
            solution.metadata.domino_count,
            format_duration(solution.solve_time),
            solution.metadata.search_steps,
            solution.metadata.backtracks,
        )
    }
}

/// Human-readable duration, scaled to the dominant unit
pub fn format_duration(duration: Duration) -> String {
    if duration < Duration::from_micros(1) {
        format!("{}ns", duration.as_nanos())
    } else if duration < Duration::from_millis(1) {
        format!("{}µs", duration.as_micros())
    } else if duration < Duration::from_secs(1) {
        format!("{}ms", duration.as_millis())
    } else if duration < Duration::from_secs(60) {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        let minutes = duration.as_secs() / 60;
        let seconds = duration.as_secs() % 60;
        format!("{}m {}s", minutes, seconds)
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    fn colored(text: &str, code: u8) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", code, text)
        } else {
            text.to_string()
        }
    }

    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && std::env::var("TERM").unwrap_or_default() != "dumb"
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, 32)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, 31)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, 33)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, 34)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Difficulty, Domino, DominoPlacement, Game, PlacedPip, Zone, ZoneKind};

    fn sample() -> (Game, Solution) {
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
    fn test_board_contains_pips_and_borders() {
        let (game, solution) = sample();
        let board = BoardFormatter::format_board(&game, &solution);

        assert!(board.contains('2'));
        assert!(board.contains('3'));
        assert!(board.contains('┼'));
        // the border between the domino's two halves is erased
        let middle_row = board.lines().nth(1).unwrap();
        assert_eq!(middle_row.matches('│').count(), 2);
    }

    #[test]
    fn test_legend_names_constraint_and_target() {
        let (game, _) = sample();
        let legend = BoardFormatter::format_legend(&game);
        assert!(legend.contains("Sum"));
        assert!(legend.contains("target: 5"));
    }

    #[test]
    fn test_format_duration_units() {
        assert_eq!(format_duration(Duration::from_nanos(950)), "950ns");
        assert_eq!(format_duration(Duration::from_micros(21)), "21µs");
        assert_eq!(format_duration(Duration::from_millis(404)), "404ms");
        assert_eq!(format_duration(Duration::from_secs(3)), "3.00s");
        assert_eq!(format_duration(Duration::from_secs(200)), "3m 20s");
    }

    #[test]
    fn test_color_output_wraps_text() {
        assert!(ColorOutput::success("done").contains("done"));
        assert!(ColorOutput::error("bad").contains("bad"));
    }
}
