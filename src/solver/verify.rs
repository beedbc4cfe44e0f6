//! Arrangement auditing
//!
//! Checks a proposed arrangement square by square and pair by pair, and
//! reports every violation rather than stopping at the first one. Used by
//! the `check` command and by solver tests.

use crate::board::Placement;
use itertools::Itertools;
use std::fmt;

/// The rule a conflicting pair of queens violates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictKind {
    Row,
    Column,
    Diagonal,
}

impl fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConflictKind::Row => "row",
            ConflictKind::Column => "column",
            ConflictKind::Diagonal => "diagonal",
        };
        write!(f, "{}", name)
    }
}

/// A pair of mutually attacking queens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConflictPair {
    pub first: Placement,
    pub second: Placement,
    pub kind: ConflictKind,
}

/// Full audit of a proposed arrangement
#[derive(Debug, Clone)]
pub struct ArrangementReport {
    pub board_size: usize,
    pub placement_count: usize,
    pub out_of_bounds: Vec<Placement>,
    pub conflicts: Vec<ConflictPair>,
    pub is_complete: bool,
}

impl ArrangementReport {
    /// True when no square is out of bounds and no pair of queens attacks
    pub fn is_valid(&self) -> bool {
        self.out_of_bounds.is_empty() && self.conflicts.is_empty()
    }
}

/// Audit an arrangement against the three conflict rules and board bounds
pub fn audit_arrangement(board_size: usize, placements: &[Placement]) -> ArrangementReport {
    let out_of_bounds: Vec<Placement> = placements
        .iter()
        .copied()
        .filter(|p| p.row >= board_size || p.col >= board_size)
        .collect();

    let conflicts: Vec<ConflictPair> = placements
        .iter()
        .copied()
        .tuple_combinations()
        .filter_map(|(first, second)| {
            classify_conflict(&first, &second).map(|kind| ConflictPair {
                first,
                second,
                kind,
            })
        })
        .collect();

    let is_complete =
        placements.len() == board_size && out_of_bounds.is_empty() && conflicts.is_empty();

    ArrangementReport {
        board_size,
        placement_count: placements.len(),
        out_of_bounds,
        conflicts,
        is_complete,
    }
}

fn classify_conflict(a: &Placement, b: &Placement) -> Option<ConflictKind> {
    if a.row == b.row {
        Some(ConflictKind::Row)
    } else if a.col == b.col {
        Some(ConflictKind::Column)
    } else if a.row.abs_diff(b.row) == a.col.abs_diff(b.col) {
        Some(ConflictKind::Diagonal)
    } else {
        None
    }
}

impl fmt::Display for ArrangementReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Arrangement Audit: {}",
            if self.is_valid() { "VALID" } else { "ISSUES FOUND" }
        )?;
        writeln!(f, "  Board size: {}x{}", self.board_size, self.board_size)?;
        writeln!(f, "  Queens placed: {}", self.placement_count)?;
        writeln!(f, "  Complete solution: {}", self.is_complete)?;

        if !self.out_of_bounds.is_empty() {
            writeln!(f, "  Out of bounds:")?;
            for p in &self.out_of_bounds {
                writeln!(f, "    - {}", p)?;
            }
        }

        if !self.conflicts.is_empty() {
            writeln!(f, "  Conflicts:")?;
            for c in &self.conflicts {
                writeln!(f, "    - {} and {} share a {}", c.first, c.second, c.kind)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_complete_arrangement() {
        let rows = [0usize, 4, 7, 5, 2, 6, 1, 3];
        let placements: Vec<Placement> = rows
            .iter()
            .enumerate()
            .map(|(col, &row)| Placement::new(row, col))
            .collect();

        let report = audit_arrangement(8, &placements);
        assert!(report.is_valid());
        assert!(report.is_complete);
        assert_eq!(report.placement_count, 8);
    }

    #[test]
    fn test_conflict_classification() {
        let placements = vec![
            Placement::new(0, 0),
            Placement::new(0, 5),
            Placement::new(3, 0),
            Placement::new(2, 2),
        ];
        let report = audit_arrangement(8, &placements);

        assert!(!report.is_valid());
        let kinds: Vec<ConflictKind> = report.conflicts.iter().map(|c| c.kind).collect();
        assert!(kinds.contains(&ConflictKind::Row));
        assert!(kinds.contains(&ConflictKind::Column));
        assert!(kinds.contains(&ConflictKind::Diagonal));
    }

    #[test]
    fn test_out_of_bounds_detection() {
        let placements = vec![Placement::new(0, 0), Placement::new(8, 2)];
        let report = audit_arrangement(8, &placements);

        assert!(!report.is_valid());
        assert_eq!(report.out_of_bounds, vec![Placement::new(8, 2)]);
        assert!(!report.is_complete);
    }

    #[test]
    fn test_partial_arrangement_is_valid_but_incomplete() {
        let placements = vec![Placement::new(0, 0), Placement::new(2, 1)];
        let report = audit_arrangement(8, &placements);

        assert!(report.is_valid());
        assert!(!report.is_complete);
    }

    #[test]
    fn test_report_display() {
        let placements = vec![Placement::new(0, 0), Placement::new(1, 1)];
        let report = audit_arrangement(8, &placements);
        let rendered = report.to_string();

        assert!(rendered.contains("ISSUES FOUND"));
        assert!(rendered.contains("diagonal"));
    }
}
