//! Display and output formatting utilities

use crate::board::{io, Board, Placement};
use crate::config::OutputFormat;
use crate::game::{GameSession, TransitionView};
use anyhow::{Context, Result};
use std::path::Path;
use std::time::Duration;

/// Format boards and arrangements for console output
pub struct BoardFormatter;

impl BoardFormatter {
    /// Format a board with row and column coordinates
    pub fn format_board_with_coords(board: &Board) -> String {
        let mut output = String::new();

        output.push_str("   ");
        for col in 0..board.size() {
            output.push_str(&format!("{:2}", col % 10));
        }
        output.push('\n');

        for row in 0..board.size() {
            output.push_str(&format!("{:2} ", row));
            for col in 0..board.size() {
                output.push_str(if board.occupied(row, col) { "♛ " } else { "· " });
            }
            output.push('\n');
        }

        output
    }

    /// Format the arrangement as a placement-order list
    pub fn format_placement_list(placements: &[Placement]) -> String {
        let mut output = String::new();
        for (i, p) in placements.iter().enumerate() {
            output.push_str(&format!("{:2}. row {}, column {}\n", i + 1, p.row, p.col));
        }
        output
    }

    /// One-line session status for the interactive prompt
    pub fn format_session_status(session: &GameSession, now: Duration) -> String {
        let mut status = format!(
            "Queens placed: {} | Tries: {}",
            session.placements().len(),
            session.attempts()
        );

        match session.high_score() {
            Some(best) => status.push_str(&format!(" | Best Score: {}", best)),
            None => status.push_str(" | Best Score: none yet"),
        }

        if let Some(view) = session.transition(now) {
            status.push_str(&Self::format_transition(&view));
        }

        status
    }

    fn format_transition(view: &TransitionView) -> String {
        format!(
            " | moving {} -> {} ({:.0}%)",
            view.from,
            view.to,
            view.progress * 100.0
        )
    }

    /// Save an arrangement in the requested output format
    pub fn save_arrangement<P: AsRef<Path>>(
        placements: &[Placement],
        path: P,
        format: OutputFormat,
    ) -> Result<()> {
        match format {
            OutputFormat::Text => io::save_arrangement_to_file(placements, path),
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(placements)
                    .context("Failed to serialize arrangement")?;

                if let Some(parent) = path.as_ref().parent() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
                }

                std::fs::write(&path, json).with_context(|| {
                    format!("Failed to write arrangement to file: {}", path.as_ref().display())
                })
            }
        }
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() &&
        (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format error message
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ScoreStore;
    use tempfile::tempdir;

    #[test]
    fn test_board_formatting() {
        let mut board = Board::new(4);
        board.try_push(1, 2);

        let with_coords = BoardFormatter::format_board_with_coords(&board);
        assert!(with_coords.contains('♛'));
        assert!(with_coords.contains(" 0 1 2 3"));
    }

    #[test]
    fn test_placement_list() {
        let placements = vec![Placement::new(0, 0), Placement::new(2, 1)];
        let listed = BoardFormatter::format_placement_list(&placements);

        assert!(listed.contains("1. row 0, column 0"));
        assert!(listed.contains("2. row 2, column 1"));
    }

    #[test]
    fn test_session_status() {
        let temp_dir = tempdir().unwrap();
        let store = ScoreStore::new(temp_dir.path().join("highscore.txt"));
        let session = GameSession::new(8, Duration::from_millis(500), Duration::from_secs(2), store);

        let status = BoardFormatter::format_session_status(&session, Duration::ZERO);
        assert!(status.contains("Queens placed: 0"));
        assert!(status.contains("Tries: 0"));
        assert!(status.contains("Best Score: none yet"));
    }

    #[test]
    fn test_save_arrangement_formats() {
        let temp_dir = tempdir().unwrap();
        let placements = vec![Placement::new(0, 0), Placement::new(2, 1)];

        let text_path = temp_dir.path().join("arrangement.txt");
        BoardFormatter::save_arrangement(&placements, &text_path, OutputFormat::Text).unwrap();
        let text = std::fs::read_to_string(&text_path).unwrap();
        assert_eq!(text, "0 0\n2 1\n");

        let json_path = temp_dir.path().join("arrangement.json");
        BoardFormatter::save_arrangement(&placements, &json_path, OutputFormat::Json).unwrap();
        let parsed: Vec<Placement> =
            serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(parsed, placements);
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Red);
        // Should either be colored or plain text
        assert!(colored.contains("test"));

        let success = ColorOutput::success("OK");
        assert!(success.contains("OK"));
    }
}
