//! File I/O for queen arrangements
//!
//! Format: one placement per line as `ROW COL` (decimal, 0-indexed).
//! Blank lines and lines starting with `#` are ignored.

use super::Placement;
use anyhow::{Context, Result};
use std::path::Path;

/// Load an arrangement from a text file
pub fn load_arrangement_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Placement>> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read arrangement file: {}", path.as_ref().display()))?;

    parse_arrangement(&content)
        .with_context(|| format!("Failed to parse arrangement from file: {}", path.as_ref().display()))
}

/// Parse an arrangement from its text representation
pub fn parse_arrangement(content: &str) -> Result<Vec<Placement>> {
    let mut placements = Vec::new();

    for (line_idx, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut fields = line.split_whitespace();
        let row_field = fields.next();
        let col_field = fields.next();

        let (row_field, col_field) = match (row_field, col_field) {
            (Some(r), Some(c)) => (r, c),
            _ => anyhow::bail!(
                "Line {}: expected 'ROW COL', found '{}'",
                line_idx + 1,
                line
            ),
        };

        if fields.next().is_some() {
            anyhow::bail!(
                "Line {}: trailing data after 'ROW COL' in '{}'",
                line_idx + 1,
                line
            );
        }

        let row: usize = row_field
            .parse()
            .with_context(|| format!("Line {}: invalid row '{}'", line_idx + 1, row_field))?;
        let col: usize = col_field
            .parse()
            .with_context(|| format!("Line {}: invalid column '{}'", line_idx + 1, col_field))?;

        placements.push(Placement::new(row, col));
    }

    Ok(placements)
}

/// Convert an arrangement to its text representation
pub fn arrangement_to_string(placements: &[Placement]) -> String {
    let mut result = String::with_capacity(placements.len() * 4);
    for p in placements {
        result.push_str(&format!("{} {}\n", p.row, p.col));
    }
    result
}

/// Save an arrangement to a text file, creating parent directories as needed
pub fn save_arrangement_to_file<P: AsRef<Path>>(placements: &[Placement], path: P) -> Result<()> {
    let content = arrangement_to_string(placements);

    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write arrangement to file: {}", path.as_ref().display()))?;

    Ok(())
}

/// Create example arrangement files for testing the `check` command
pub fn create_example_arrangements<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    // A complete 8x8 solution
    let solution_content = "\
# One of the 92 solutions for the standard board
0 0\n4 1\n7 2\n5 3\n2 4\n6 5\n1 6\n3 7\n";
    std::fs::write(dir.join("solution8.txt"), solution_content)
        .context("Failed to write solution8.txt")?;

    // Two queens sharing a diagonal
    let conflicted_content = "0 0\n1 1\n";
    std::fs::write(dir.join("conflicted.txt"), conflicted_content)
        .context("Failed to write conflicted.txt")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_arrangement() {
        let content = "# header comment\n0 0\n\n2 1\n  4 2  \n";
        let placements = parse_arrangement(content).unwrap();

        assert_eq!(
            placements,
            vec![
                Placement::new(0, 0),
                Placement::new(2, 1),
                Placement::new(4, 2),
            ]
        );
    }

    #[test]
    fn test_round_trip() {
        let original = vec![Placement::new(0, 0), Placement::new(2, 1)];
        let text = arrangement_to_string(&original);
        let reparsed = parse_arrangement(&text).unwrap();

        assert_eq!(original, reparsed);
    }

    #[test]
    fn test_invalid_input() {
        // Missing column
        assert!(parse_arrangement("3\n").is_err());

        // Non-numeric field
        assert!(parse_arrangement("0 x\n").is_err());

        // Trailing data
        assert!(parse_arrangement("0 1 2\n").is_err());

        // Errors carry the offending line number
        let err = parse_arrangement("0 0\nbad line\n").unwrap_err();
        assert!(format!("{:#}", err).contains("Line 2"));
    }

    #[test]
    fn test_file_operations() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("nested/dir/arrangement.txt");

        let original = vec![Placement::new(5, 3), Placement::new(0, 7)];
        save_arrangement_to_file(&original, &file_path).unwrap();

        let loaded = load_arrangement_from_file(&file_path).unwrap();
        assert_eq!(original, loaded);
    }

    #[test]
    fn test_create_example_arrangements() {
        let temp_dir = tempdir().unwrap();
        create_example_arrangements(temp_dir.path()).unwrap();

        let solution = load_arrangement_from_file(temp_dir.path().join("solution8.txt")).unwrap();
        assert_eq!(solution.len(), 8);

        let conflicted =
            load_arrangement_from_file(temp_dir.path().join("conflicted.txt")).unwrap();
        assert_eq!(conflicted.len(), 2);
        assert!(conflicted[0].conflicts_with(&conflicted[1]));
    }
}
